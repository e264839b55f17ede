//! Enumeration of the candidate space: number permutations, operator
//! tuples, and tree shapes combined in a fixed order.

mod operators;
mod permutations;
mod space;

pub use operators::operator_tuples;
pub use permutations::distinct_permutations;
pub use space::{Candidate, CandidateSpace};
