use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Zero};

use crate::expression::errors::EvalError;
use crate::expression::value::Value;

/// One of the four binary operators available to the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Mul,
    Sub,
    Div,
}

impl Operator {
    /// The full operator set, in the order candidate enumeration uses it.
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Mul, Operator::Sub, Operator::Div];

    /// Apply the operator to two evaluated subresults. The left subtree's
    /// value is always the first operand; subtraction and division are not
    /// commutative.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::DivisionByZero`] when dividing by zero, and
    /// [`EvalError::Overflow`] when an intermediate result no longer fits
    /// the rational representation.
    pub fn apply(self, left: Value, right: Value) -> Result<Value, EvalError> {
        match self {
            Operator::Add => left.checked_add(&right).ok_or(EvalError::Overflow),
            Operator::Mul => left.checked_mul(&right).ok_or(EvalError::Overflow),
            Operator::Sub => left.checked_sub(&right).ok_or(EvalError::Overflow),
            Operator::Div => {
                if right.is_zero() {
                    return Err(EvalError::DivisionByZero);
                }
                left.checked_div(&right).ok_or(EvalError::Overflow)
            }
        }
    }

    /// Display symbol used when rendering expressions.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Mul => '*',
            Operator::Sub => '-',
            Operator::Div => '/',
        }
    }
}
