/// Read positions into the operator tuple and the value permutation.
///
/// Evaluation and rendering both advance a cursor through the same pre-order
/// traversal, so a given sequence slot always binds to the same tree node in
/// both.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct SlotCursor {
    pub(crate) operator: usize,
    pub(crate) value: usize,
}
