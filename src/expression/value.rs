use num_rational::Rational64;

/// Exact rational number used throughout the search.
///
/// Division never rounds, so equality against an integer goal is exact.
pub type Value = Rational64;
