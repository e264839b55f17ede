use std::collections::HashSet;

use crate::expression::{evaluate, render, shapes, EvalError, Operator, TreeShape, Value};

fn int(n: i64) -> Value {
    Value::from_integer(n)
}

fn leaf() -> TreeShape {
    TreeShape::Leaf
}

fn node(left: TreeShape, right: TreeShape) -> TreeShape {
    TreeShape::Node(Box::new(left), Box::new(right))
}

#[test]
fn shape_counts_match_catalan_numbers() {
    let catalan = [1, 1, 2, 5, 14, 42];
    for (k, expected) in catalan.iter().enumerate() {
        assert_eq!(shapes(k).len(), *expected, "C({})", k);
    }
}

#[test]
fn shapes_are_distinct() {
    for k in 0..6 {
        let all = shapes(k);
        let unique: HashSet<_> = all.iter().cloned().collect();
        assert_eq!(unique.len(), all.len(), "duplicate shape at size {}", k);
    }
}

#[test]
fn shapes_have_consistent_node_counts() {
    for k in 0..6 {
        for shape in shapes(k) {
            assert_eq!(shape.internal_count(), k);
            assert_eq!(shape.leaf_count(), k + 1);
        }
    }
}

#[test]
fn single_leaf_evaluates_to_its_value() {
    assert_eq!(evaluate(&leaf(), &[], &[int(7)]), Ok(int(7)));
    assert_eq!(render(&leaf(), &[], &[int(7)]), "7");
}

#[test]
fn subtraction_takes_left_operand_first() {
    let shape = node(leaf(), leaf());
    assert_eq!(evaluate(&shape, &[Operator::Sub], &[int(5), int(3)]), Ok(int(2)));
    assert_eq!(render(&shape, &[Operator::Sub], &[int(5), int(3)]), "(5 - 3)");
}

#[test]
fn division_produces_exact_rationals() {
    let shape = node(leaf(), leaf());
    assert_eq!(
        evaluate(&shape, &[Operator::Div], &[int(1), int(3)]),
        Ok(Value::new(1, 3))
    );
}

#[test]
fn division_by_zero_fails_the_candidate() {
    let shape = node(leaf(), leaf());
    assert_eq!(
        evaluate(&shape, &[Operator::Div], &[int(5), int(0)]),
        Err(EvalError::DivisionByZero)
    );
}

#[test]
fn zero_divisor_in_a_subtree_fails_the_candidate() {
    // 4 / (3 - 3)
    let shape = node(leaf(), node(leaf(), leaf()));
    let ops = [Operator::Div, Operator::Sub];
    let values = [int(4), int(3), int(3)];
    assert_eq!(evaluate(&shape, &ops, &values), Err(EvalError::DivisionByZero));
}

#[test]
fn right_nested_shape_binds_slots_in_preorder() {
    // Root operator first, then the right subtree's: 8 / (5 - 3) = 4
    let shape = node(leaf(), node(leaf(), leaf()));
    let ops = [Operator::Div, Operator::Sub];
    let values = [int(8), int(5), int(3)];
    assert_eq!(evaluate(&shape, &ops, &values), Ok(int(4)));
    assert_eq!(render(&shape, &ops, &values), "(8 / (5 - 3))");
}

#[test]
fn left_nested_shape_binds_the_same_slots() {
    // (8 - 5) * 3 = 9
    let shape = node(node(leaf(), leaf()), leaf());
    let ops = [Operator::Mul, Operator::Sub];
    let values = [int(8), int(5), int(3)];
    assert_eq!(evaluate(&shape, &ops, &values), Ok(int(9)));
    assert_eq!(render(&shape, &ops, &values), "((8 - 5) * 3)");
}

#[test]
fn evaluation_is_deterministic() {
    let shape = node(node(leaf(), leaf()), leaf());
    let ops = [Operator::Div, Operator::Add];
    let values = [int(6), int(2), int(4)];
    let first = evaluate(&shape, &ops, &values);
    let second = evaluate(&shape, &ops, &values);
    assert_eq!(first, second);
    assert_eq!(first, Ok(int(2)));
}

#[test]
fn operator_apply_respects_argument_order() {
    assert_eq!(Operator::Sub.apply(int(2), int(5)), Ok(int(-3)));
    assert_eq!(Operator::Div.apply(int(2), int(4)), Ok(Value::new(1, 2)));
}

#[test]
fn operator_symbols_cover_the_full_set() {
    let symbols: String = Operator::ALL.iter().map(|op| op.symbol()).collect();
    assert_eq!(symbols, "+*-/");
}

#[test]
fn overflowing_arithmetic_fails_the_candidate() {
    let huge = Value::from_integer(i64::MAX);
    assert_eq!(Operator::Mul.apply(huge, int(2)), Err(EvalError::Overflow));
}
