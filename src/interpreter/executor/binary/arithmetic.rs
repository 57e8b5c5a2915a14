use crate::{
    ast::BinaryOperator,
    error::ExecutorError,
    interpreter::{
        executor::{core::ExecResult, utils::type_mismatch},
        value::core::Value,
    },
};

/// Adds two numbers or concatenates two strings.
///
/// # Example
/// ```
/// use ratus::interpreter::{executor::binary::add, value::core::Value};
///
/// assert_eq!(add(&Value::Integer(1), &Value::Integer(2)).unwrap(), Value::Integer(3));
/// assert_eq!(add(&Value::Integer(1), &Value::Float(0.5)).unwrap(), Value::Float(1.5));
/// assert_eq!(add(&Value::from("PG"), &Value::from("-13")).unwrap(), Value::from("PG-13"));
/// ```
pub fn add(left: &Value, right: &Value) -> ExecResult<Value> {
    match (left, right) {
        (Value::String(a), Value::String(b)) => Ok(Value::String(format!("{a}{b}"))),
        _ => numeric(BinaryOperator::Add, left, right, i64::checked_add, |a, b| a + b),
    }
}

/// Subtracts two numbers.
pub fn sub(left: &Value, right: &Value) -> ExecResult<Value> {
    numeric(BinaryOperator::Sub, left, right, i64::checked_sub, |a, b| a - b)
}

/// Multiplies two numbers.
pub fn mul(left: &Value, right: &Value) -> ExecResult<Value> {
    numeric(BinaryOperator::Mul, left, right, i64::checked_mul, |a, b| a * b)
}

/// Divides two numbers.
///
/// Always true division: the result is a float even for two integers.
///
/// # Errors
/// - `DivisionByZero` if the divisor is zero.
/// - `TypeMismatch` for non-numeric operands.
///
/// # Example
/// ```
/// use ratus::interpreter::{executor::binary::div, value::core::Value};
///
/// assert_eq!(div(&Value::Integer(5), &Value::Integer(2)).unwrap(), Value::Float(2.5));
/// assert!(div(&Value::Integer(5), &Value::Integer(0)).is_err());
/// ```
pub fn div(left: &Value, right: &Value) -> ExecResult<Value> {
    let Some((a, b)) = left.promote_to_float(right)? else {
        return Err(type_mismatch(BinaryOperator::Div.symbol(), &[left, right]));
    };
    if b == 0.0 {
        return Err(ExecutorError::DivisionByZero);
    }
    Ok(Value::Float(a / b))
}

/// Applies an arithmetic operator to two numeric values.
///
/// Two integers use the checked integer operation; otherwise both sides are
/// promoted to floats.
fn numeric(op: BinaryOperator,
           left: &Value,
           right: &Value,
           int_op: fn(i64, i64) -> Option<i64>,
           float_op: fn(f64, f64) -> f64)
           -> ExecResult<Value> {
    if let (Value::Integer(a), Value::Integer(b)) = (left, right) {
        return int_op(*a, *b).map(Value::Integer)
                             .ok_or_else(|| ExecutorError::Overflow { operator: op.symbol().to_string() });
    }

    match left.promote_to_float(right)? {
        Some((a, b)) => Ok(Value::Float(float_op(a, b))),
        None => Err(type_mismatch(op.symbol(), &[left, right])),
    }
}
