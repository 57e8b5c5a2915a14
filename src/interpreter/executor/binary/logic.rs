use crate::interpreter::{executor::core::ExecResult, value::core::Value};

/// Logical conjunction of the operands' truthiness.
///
/// # Example
/// ```
/// use ratus::interpreter::{executor::binary::and, value::core::Value};
///
/// assert_eq!(and(&Value::Integer(1), &Value::from("")).unwrap(), Value::Bool(false));
/// ```
pub fn and(left: &Value, right: &Value) -> ExecResult<Value> {
    Ok(Value::Bool(left.is_truthy() && right.is_truthy()))
}

/// Logical disjunction of the operands' truthiness.
pub fn or(left: &Value, right: &Value) -> ExecResult<Value> {
    Ok(Value::Bool(left.is_truthy() || right.is_truthy()))
}
