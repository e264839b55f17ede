//! Kryptix - exhaustive arithmetic-expression search
//!
//! Given a goal value and a multiset of numbers, this library finds every
//! way to combine all numbers, each used exactly once, with the four basic
//! binary operators and arbitrary parenthesization, such that the
//! expression evaluates exactly to the goal. Arithmetic is exact rational,
//! so goals reached through fractional intermediates are never missed.

pub mod candidates;
pub mod expression;
pub mod solver;

// Re-export the main public API
pub use expression::{evaluate, render, shapes, EvalError, Operator, TreeShape, Value};
pub use solver::{CancelToken, Solver, SolverError};

/// Find every expression over `numbers` that evaluates exactly to `goal`.
///
/// This is a convenience function that runs a default solver over the full
/// `+ * - /` operator set. Results are fully parenthesized infix strings in
/// enumeration order; textually identical solutions are not deduplicated.
///
/// # Errors
///
/// Returns [`SolverError::EmptyInput`] when `numbers` is empty. A
/// non-empty input never fails; at worst the result is empty.
///
/// # Examples
///
/// ```
/// use kryptix::find_solutions;
///
/// let solutions = find_solutions(24, &[4, 6]).unwrap();
/// assert!(solutions.contains(&"(4 * 6)".to_string()));
/// ```
pub fn find_solutions(goal: i64, numbers: &[i64]) -> Result<Vec<String>, SolverError> {
    if numbers.is_empty() {
        return Err(SolverError::EmptyInput);
    }

    let goal = Value::from_integer(goal);
    let values: Vec<Value> = numbers.iter().map(|&n| Value::from_integer(n)).collect();
    Ok(Solver::new().solve(goal, &values))
}
