//! Expression building blocks: tree shapes, operators, evaluation, rendering

mod cursor;
mod errors;
mod eval;
mod operator;
mod render;
mod shape;
mod value;

pub use errors::EvalError;
pub use eval::evaluate;
pub use operator::Operator;
pub use render::render;
pub use shape::{shapes, TreeShape};
pub use value::Value;

#[cfg(test)]
mod tests;
