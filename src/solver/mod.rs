mod cancel;
mod core;
mod errors;

pub use cancel::CancelToken;
pub use core::Solver;
pub use errors::SolverError;
