use std::collections::HashMap;

use crate::{
    ast::UnaryOperator,
    error::ExecutorError,
    interpreter::{
        executor::{
            core::{ExecResult, UnaryFn, unary_fn},
            utils::type_mismatch,
        },
        value::core::Value,
    },
};

/// Negates a number.
///
/// # Errors
/// - `Overflow` for `-i64::MIN`.
/// - `TypeMismatch` for strings and booleans.
///
/// # Example
/// ```
/// use ratus::interpreter::{executor::unary::negate, value::core::Value};
///
/// assert_eq!(negate(&Value::Integer(1)).unwrap(), Value::Integer(-1));
/// assert_eq!(negate(&Value::Float(2.5)).unwrap(), Value::Float(-2.5));
/// assert!(negate(&Value::from("a")).is_err());
/// ```
pub fn negate(operand: &Value) -> ExecResult<Value> {
    let symbol = UnaryOperator::Negate.symbol();

    match operand {
        Value::Integer(n) => n.checked_neg()
                              .map(Value::Integer)
                              .ok_or_else(|| ExecutorError::Overflow { operator: symbol.to_string() }),
        Value::Float(x) => Ok(Value::Float(-x)),
        Value::String(_) | Value::Bool(_) => Err(type_mismatch(symbol, &[operand])),
    }
}

/// Logical negation of the operand's truthiness.
///
/// # Example
/// ```
/// use ratus::interpreter::{executor::unary::not, value::core::Value};
///
/// assert_eq!(not(&Value::Integer(1)).unwrap(), Value::Bool(false));
/// assert_eq!(not(&Value::Float(0.0)).unwrap(), Value::Bool(true));
/// ```
pub fn not(operand: &Value) -> ExecResult<Value> {
    Ok(Value::Bool(!operand.is_truthy()))
}

/// Returns the default implementation of a unary operator.
#[must_use]
pub fn default_unary_op(op: UnaryOperator) -> UnaryFn {
    match op {
        UnaryOperator::Negate => unary_fn(negate),
        UnaryOperator::Not => unary_fn(not),
    }
}

/// Builds the full default unary operator table.
#[must_use]
pub fn default_unary_ops() -> HashMap<UnaryOperator, UnaryFn> {
    UnaryOperator::ALL.into_iter()
                      .map(|op| (op, default_unary_op(op)))
                      .collect()
}
