use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        executor::{core::ExecResult, utils::type_mismatch},
        value::core::Value,
    },
};

/// `>`
pub fn greater(left: &Value, right: &Value) -> ExecResult<Value> {
    compare(BinaryOperator::Greater, left, right, Ordering::is_gt)
}

/// `>=`
pub fn greater_equal(left: &Value, right: &Value) -> ExecResult<Value> {
    compare(BinaryOperator::GreaterEqual, left, right, Ordering::is_ge)
}

/// `<`
pub fn less(left: &Value, right: &Value) -> ExecResult<Value> {
    compare(BinaryOperator::Less, left, right, Ordering::is_lt)
}

/// `<=`
pub fn less_equal(left: &Value, right: &Value) -> ExecResult<Value> {
    compare(BinaryOperator::LessEqual, left, right, Ordering::is_le)
}

/// `=`
///
/// # Example
/// ```
/// use ratus::interpreter::{executor::binary::equal, value::core::Value};
///
/// assert_eq!(equal(&Value::Integer(2), &Value::Float(2.0)).unwrap(), Value::Bool(true));
/// assert_eq!(equal(&Value::Integer(1), &Value::from("1")).unwrap(), Value::Bool(false));
/// ```
pub fn equal(left: &Value, right: &Value) -> ExecResult<Value> {
    Ok(Value::Bool(values_equal(left, right)))
}

/// `!=`
pub fn not_equal(left: &Value, right: &Value) -> ExecResult<Value> {
    Ok(Value::Bool(!values_equal(left, right)))
}

/// Tests two values for equality.
///
/// Integers and floats compare by exact numeric value, so `2 = 2.0` holds
/// and a large integer never equals a float it merely rounds to. Any other
/// pair is equal only if both the type and the contents match.
#[must_use]
pub fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Integer(n), Value::Float(x)) | (Value::Float(x), Value::Integer(n)) => {
            integer_equals_float(*n, *x)
        },
        _ => left == right,
    }
}

/// Exact comparison of an integer with a float.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn integer_equals_float(n: i64, x: f64) -> bool {
    // i64::MIN is exactly representable; i64::MAX + 1 is the first float past it.
    let in_range = x >= i64::MIN as f64 && x < -(i64::MIN as f64);
    x.fract() == 0.0 && in_range && x as i64 == n
}

/// Orders two values, or reports that the operator does not apply.
///
/// `None` means the values are unordered, which only happens with `NaN`.
fn ordering(op: BinaryOperator, left: &Value, right: &Value) -> ExecResult<Option<Ordering>> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Ok(Some(a.cmp(b))),
        (Value::String(a), Value::String(b)) => Ok(Some(a.cmp(b))),
        (Value::Bool(a), Value::Bool(b)) => Ok(Some(a.cmp(b))),
        _ => match left.promote_to_float(right)? {
            Some((a, b)) => Ok(a.partial_cmp(&b)),
            None => Err(type_mismatch(op.symbol(), &[left, right])),
        },
    }
}

fn compare(op: BinaryOperator,
           left: &Value,
           right: &Value,
           test: fn(Ordering) -> bool)
           -> ExecResult<Value> {
    Ok(Value::Bool(ordering(op, left, right)?.is_some_and(test)))
}
