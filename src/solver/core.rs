use log::info;
use rayon::prelude::*;

use crate::candidates::CandidateSpace;
use crate::expression::{evaluate, render, Operator, Value};
use crate::solver::cancel::CancelToken;

/// Exhaustive search driver.
///
/// Holds the operator set as configuration, so restricted subsets can be
/// searched, and a cancellation handle for interactive callers.
pub struct Solver {
    operators: Vec<Operator>,
    cancel: CancelToken,
}

impl Solver {
    /// Solver over the full `+ * - /` operator set.
    pub fn new() -> Self {
        Self::with_operators(Operator::ALL.to_vec())
    }

    /// Solver restricted to the given operator set.
    pub fn with_operators(operators: Vec<Operator>) -> Self {
        Self {
            operators,
            cancel: CancelToken::new(),
        }
    }

    /// Handle that cancels this solver's in-flight search when triggered.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Find every expression over `numbers` that evaluates exactly to
    /// `goal`, each number used exactly once.
    ///
    /// Results are fully parenthesized, in enumeration order, with no
    /// deduplication of textually identical solutions and no early
    /// termination. An empty `numbers` slice yields an empty result; input
    /// validation belongs to the caller.
    pub fn solve(&self, goal: Value, numbers: &[Value]) -> Vec<String> {
        if numbers.is_empty() {
            return Vec::new();
        }

        let space = CandidateSpace::build(numbers, &self.operators);
        info!(
            "Searching {} candidates for goal {}",
            space.candidate_count(),
            goal
        );

        // Candidates are independent, so the outer permutation loop runs in
        // parallel with per-worker accumulation; the ordered collect merges
        // local results back into enumeration order.
        let solutions: Vec<String> = space
            .permutations()
            .par_iter()
            .flat_map_iter(|values| {
                let mut found = Vec::new();
                if self.cancel.is_cancelled() {
                    return found;
                }
                for operators in space.operator_tuples() {
                    for shape in space.shapes() {
                        // Division by zero or overflow disqualifies the
                        // candidate without stopping the search.
                        if let Ok(value) = evaluate(shape, operators, values) {
                            if value == goal {
                                found.push(render(shape, operators, values));
                            }
                        }
                    }
                }
                found
            })
            .collect();

        info!("Found {} solutions", solutions.len());
        solutions
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}
