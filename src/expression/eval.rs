use crate::expression::cursor::SlotCursor;
use crate::expression::errors::EvalError;
use crate::expression::operator::Operator;
use crate::expression::shape::TreeShape;
use crate::expression::value::Value;

/// Evaluate one candidate: bind `operators` and `values` to `shape` in
/// pre-order (the node's operator first, then the left subtree, then the
/// right) and compute the result. Each slot is consumed exactly once.
///
/// Callers must supply exactly `shape.internal_count()` operators and
/// `shape.leaf_count()` values.
///
/// # Errors
///
/// Returns an error when a division's divisor evaluates to zero or an
/// intermediate result overflows the rational representation. Both
/// disqualify the candidate only; the surrounding search continues.
pub fn evaluate(
    shape: &TreeShape,
    operators: &[Operator],
    values: &[Value],
) -> Result<Value, EvalError> {
    debug_assert_eq!(shape.internal_count(), operators.len());
    debug_assert_eq!(shape.leaf_count(), values.len());

    let mut cursor = SlotCursor::default();
    evaluate_at(shape, operators, values, &mut cursor)
}

fn evaluate_at(
    shape: &TreeShape,
    operators: &[Operator],
    values: &[Value],
    cursor: &mut SlotCursor,
) -> Result<Value, EvalError> {
    match shape {
        TreeShape::Leaf => {
            let value = values[cursor.value];
            cursor.value += 1;
            Ok(value)
        }
        TreeShape::Node(left, right) => {
            let op = operators[cursor.operator];
            cursor.operator += 1;
            let left_value = evaluate_at(left, operators, values, cursor)?;
            let right_value = evaluate_at(right, operators, values, cursor)?;
            op.apply(left_value, right_value)
        }
    }
}
