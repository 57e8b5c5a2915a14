use crate::{
    error::ExecutorError,
    interpreter::{executor::core::ExecResult, value::core::Value},
};

/// Builds a type mismatch error naming the operator and its operand types.
///
/// # Example
/// ```
/// use ratus::interpreter::{executor::utils::type_mismatch, value::core::Value};
///
/// let err = type_mismatch("-", &[&Value::from("a"), &Value::Integer(1)]);
/// assert_eq!(err.to_string(),
///            "Operator '-' is not supported for operand types (string, integer)");
/// ```
#[must_use]
pub fn type_mismatch(operator: &str, operands: &[&Value]) -> ExecutorError {
    ExecutorError::TypeMismatch { operator: operator.to_string(),
                                  operands: operands.iter().map(|v| v.type_name()).collect(), }
}

/// Checks that a function received exactly `expected` arguments.
///
/// # Errors
/// `ExecutorError::ArgumentCountMismatch` if the count differs.
pub fn check_arity(name: &str, args: &[Value], expected: usize) -> ExecResult<()> {
    if args.len() != expected {
        return Err(ExecutorError::ArgumentCountMismatch { name: name.to_string(),
                                                          expected,
                                                          found: args.len() });
    }
    Ok(())
}
