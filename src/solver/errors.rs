use thiserror::Error;

/// Caller-level errors. The core search itself never fails for a non-empty
/// input; at worst it returns no solutions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("No numbers supplied")]
    EmptyInput,
}
