use thiserror::Error;

/// Failures local to a single candidate. The solver discards the candidate
/// and continues the search; these never surface to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Arithmetic overflow")]
    Overflow,
}
