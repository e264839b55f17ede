use crate::expression::cursor::SlotCursor;
use crate::expression::operator::Operator;
use crate::expression::shape::TreeShape;
use crate::expression::value::Value;

/// Render one candidate as a fully parenthesized infix expression, using the
/// same pre-order slot binding as [`evaluate`](crate::expression::evaluate).
/// Leaves render their number; each internal node renders as
/// `(<left> <symbol> <right>)`. Only invoked for candidates that already
/// matched the goal.
pub fn render(shape: &TreeShape, operators: &[Operator], values: &[Value]) -> String {
    debug_assert_eq!(shape.internal_count(), operators.len());
    debug_assert_eq!(shape.leaf_count(), values.len());

    let mut cursor = SlotCursor::default();
    let mut out = String::new();
    render_at(shape, operators, values, &mut cursor, &mut out);
    out
}

fn render_at(
    shape: &TreeShape,
    operators: &[Operator],
    values: &[Value],
    cursor: &mut SlotCursor,
    out: &mut String,
) {
    match shape {
        TreeShape::Leaf => {
            out.push_str(&values[cursor.value].to_string());
            cursor.value += 1;
        }
        TreeShape::Node(left, right) => {
            let op = operators[cursor.operator];
            cursor.operator += 1;
            out.push('(');
            render_at(left, operators, values, cursor, out);
            out.push(' ');
            out.push(op.symbol());
            out.push(' ');
            render_at(right, operators, values, cursor, out);
            out.push(')');
        }
    }
}
