use std::collections::HashSet;

use itertools::Itertools;
use log::debug;

use crate::expression::Value;

/// All distinct permutations of `numbers`, in generation order.
///
/// Repeated input values would otherwise yield value-identical sequences;
/// a seen-set keyed by the sequence suppresses those so each ordering is
/// evaluated once.
pub fn distinct_permutations(numbers: &[Value]) -> Vec<Vec<Value>> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for permutation in numbers.iter().copied().permutations(numbers.len()) {
        if seen.insert(permutation.clone()) {
            result.push(permutation);
        }
    }

    debug!(
        "{} distinct permutations of {} numbers",
        result.len(),
        numbers.len()
    );
    result
}
