use log::debug;

/// Unlabeled binary-tree structure of an expression: which operations nest
/// under which, independent of the numbers and operators that fill it.
///
/// A shape with k internal nodes has k + 1 leaves. Shapes carry no values,
/// so one pool is reused across every operator/permutation combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TreeShape {
    Leaf,
    Node(Box<TreeShape>, Box<TreeShape>),
}

impl TreeShape {
    /// Number of internal (operator) nodes.
    pub fn internal_count(&self) -> usize {
        match self {
            TreeShape::Leaf => 0,
            TreeShape::Node(left, right) => 1 + left.internal_count() + right.internal_count(),
        }
    }

    /// Number of leaves; always one more than [`internal_count`](Self::internal_count).
    pub fn leaf_count(&self) -> usize {
        self.internal_count() + 1
    }
}

/// Generate every binary-tree shape with exactly `internal_nodes` internal
/// nodes, built bottom-up by pairing each left-shape of size i with each
/// right-shape of size k - 1 - i. The result holds Catalan(`internal_nodes`)
/// entries, each distinct.
pub fn shapes(internal_nodes: usize) -> Vec<TreeShape> {
    let mut by_size: Vec<Vec<TreeShape>> = vec![vec![TreeShape::Leaf]];
    for size in 1..=internal_nodes {
        let mut level = Vec::new();
        for left_size in 0..size {
            let right_size = size - 1 - left_size;
            for left in &by_size[left_size] {
                for right in &by_size[right_size] {
                    level.push(TreeShape::Node(
                        Box::new(left.clone()),
                        Box::new(right.clone()),
                    ));
                }
            }
        }
        by_size.push(level);
    }

    let pool = by_size.swap_remove(internal_nodes);
    debug!(
        "Generated {} tree shapes with {} internal nodes",
        pool.len(),
        internal_nodes
    );
    pool
}
