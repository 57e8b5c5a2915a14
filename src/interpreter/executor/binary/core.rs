use std::collections::HashMap;

use crate::{
    ast::BinaryOperator,
    interpreter::executor::{
        binary::{add, and, div, equal, greater, greater_equal, less, less_equal, mul, not_equal, or,
                 sub},
        core::{BinaryFn, binary_fn},
    },
};

/// Returns the default implementation of a binary operator.
///
/// ## Example
/// ```
/// use ratus::{
///     ast::BinaryOperator,
///     interpreter::{executor::binary::core::default_binary_op, value::core::Value},
/// };
///
/// let less = default_binary_op(BinaryOperator::Less);
/// assert_eq!(less(&Value::Integer(1), &Value::Float(1.5)).unwrap(), Value::Bool(true));
/// ```
#[must_use]
pub fn default_binary_op(op: BinaryOperator) -> BinaryFn {
    match op {
        BinaryOperator::Add => binary_fn(add),
        BinaryOperator::Sub => binary_fn(sub),
        BinaryOperator::Mul => binary_fn(mul),
        BinaryOperator::Div => binary_fn(div),
        BinaryOperator::Equal => binary_fn(equal),
        BinaryOperator::NotEqual => binary_fn(not_equal),
        BinaryOperator::Greater => binary_fn(greater),
        BinaryOperator::GreaterEqual => binary_fn(greater_equal),
        BinaryOperator::Less => binary_fn(less),
        BinaryOperator::LessEqual => binary_fn(less_equal),
        BinaryOperator::And => binary_fn(and),
        BinaryOperator::Or => binary_fn(or),
    }
}

/// Builds the full default binary operator table.
#[must_use]
pub fn default_binary_ops() -> HashMap<BinaryOperator, BinaryFn> {
    BinaryOperator::ALL.into_iter()
                       .map(|op| (op, default_binary_op(op)))
                       .collect()
}
