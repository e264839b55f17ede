use log::debug;

use crate::candidates::operators::operator_tuples;
use crate::candidates::permutations::distinct_permutations;
use crate::expression::{shapes, Operator, TreeShape, Value};

/// One fully specified candidate: a tree shape, an operator assignment, and
/// a number permutation. Ephemeral; evaluated and discarded unless it
/// matches the goal.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub shape: &'a TreeShape,
    pub operators: &'a [Operator],
    pub values: &'a [Value],
}

/// The full candidate space for one solve call.
///
/// The three axes are materialized once and shared read-only across
/// workers: re-iterating the space never regenerates them.
pub struct CandidateSpace {
    permutations: Vec<Vec<Value>>,
    operator_tuples: Vec<Vec<Operator>>,
    shapes: Vec<TreeShape>,
}

impl CandidateSpace {
    /// Build the space for `numbers` over the given operator set. With n
    /// numbers there are n - 1 operator slots and as many internal nodes
    /// per shape.
    pub fn build(numbers: &[Value], operators: &[Operator]) -> Self {
        let slots = numbers.len().saturating_sub(1);
        let space = Self {
            permutations: distinct_permutations(numbers),
            operator_tuples: operator_tuples(operators, slots),
            shapes: shapes(slots),
        };

        debug!(
            "Candidate space: {} permutations x {} operator tuples x {} shapes = {} candidates",
            space.permutations.len(),
            space.operator_tuples.len(),
            space.shapes.len(),
            space.candidate_count()
        );
        space
    }

    pub fn permutations(&self) -> &[Vec<Value>] {
        &self.permutations
    }

    pub fn operator_tuples(&self) -> &[Vec<Operator>] {
        &self.operator_tuples
    }

    pub fn shapes(&self) -> &[TreeShape] {
        &self.shapes
    }

    /// Total number of candidates the space contains.
    pub fn candidate_count(&self) -> usize {
        self.permutations.len() * self.operator_tuples.len() * self.shapes.len()
    }

    /// Iterate candidates in enumeration order: permutations outermost,
    /// operator tuples next, tree shapes innermost.
    pub fn iter(&self) -> impl Iterator<Item = Candidate<'_>> + '_ {
        self.permutations.iter().flat_map(move |values| {
            self.operator_tuples.iter().flat_map(move |operators| {
                self.shapes.iter().map(move |shape| Candidate {
                    shape,
                    operators,
                    values,
                })
            })
        })
    }
}
