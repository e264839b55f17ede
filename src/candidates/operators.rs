use itertools::Itertools;

use crate::expression::Operator;

/// All ordered tuples of `slots` operators drawn from `operators`, with
/// repetition allowed. For zero slots there is exactly one tuple, the empty
/// one, so a single-number input still produces its trivial candidate.
pub fn operator_tuples(operators: &[Operator], slots: usize) -> Vec<Vec<Operator>> {
    if slots == 0 {
        return vec![Vec::new()];
    }

    (0..slots)
        .map(|_| operators.iter().copied())
        .multi_cartesian_product()
        .collect()
}
