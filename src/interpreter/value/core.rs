use std::fmt;

use crate::{
    ast::LiteralValue,
    error::ExecutorError,
    interpreter::executor::core::ExecResult,
    util::num::i64_to_f64_checked,
};

/// Represents a runtime value produced by the executor.
///
/// Literals only ever produce integers, floats and strings. Booleans arise
/// from comparison and logical operators, and from host functions.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit floating-point number.
    Float(f64),
    /// A string.
    String(String),
    /// A boolean.
    Bool(bool),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Integer(n) => Self::Integer(*n),
            LiteralValue::Float(x) => Self::Float(*x),
            LiteralValue::String(s) => Self::String(s.clone()),
        }
    }
}

impl Value {
    /// Returns the name of the value's type, as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Bool(_) => "bool",
        }
    }

    /// Tests whether the value counts as true in a condition.
    ///
    /// Booleans are themselves; numbers are true when non-zero; strings are
    /// true when non-empty. `NaN` is non-zero and therefore true.
    ///
    /// # Example
    /// ```
    /// use ratus::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(3).is_truthy());
    /// assert!(!Value::Float(0.0).is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(Value::Bool(true).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Float(x) => *x != 0.0,
            Self::String(s) => !s.is_empty(),
            Self::Bool(b) => *b,
        }
    }

    /// Tests whether the value is an integer or a float.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }

    /// Converts a numeric value to `f64`.
    ///
    /// Integers are converted only if the conversion is exact.
    ///
    /// # Returns
    /// - `Ok(Some(f64))` for floats and exactly representable integers.
    /// - `Ok(None)` for strings and booleans.
    /// - `Err(ExecutorError::PrecisionLoss)` for integers beyond `2^53 - 1`.
    pub fn as_float(&self) -> ExecResult<Option<f64>> {
        match self {
            Self::Float(x) => Ok(Some(*x)),
            Self::Integer(n) => {
                Ok(Some(i64_to_f64_checked(*n, ExecutorError::PrecisionLoss { value: *n })?))
            },
            Self::String(_) | Self::Bool(_) => Ok(None),
        }
    }

    /// Promotes a mixed pair of numbers to floats.
    ///
    /// Returns `None` when either side is not numeric. Two integers are still
    /// promoted; callers that keep integer arithmetic match on that case
    /// first.
    ///
    /// # Example
    /// ```
    /// use ratus::interpreter::value::core::Value;
    ///
    /// let pair = Value::Integer(1).promote_to_float(&Value::Float(0.5)).unwrap();
    /// assert_eq!(pair, Some((1.0, 0.5)));
    ///
    /// let pair = Value::Integer(1).promote_to_float(&Value::from("a")).unwrap();
    /// assert_eq!(pair, None);
    /// ```
    pub fn promote_to_float(&self, other: &Self) -> ExecResult<Option<(f64, f64)>> {
        if !self.is_numeric() || !other.is_numeric() {
            return Ok(None);
        }
        match (self.as_float()?, other.as_float()?) {
            (Some(l), Some(r)) => Ok(Some((l, r))),
            _ => Ok(None),
        }
    }
}

/// Floats always show a fractional part (`2.0`), strings are written without
/// quotes.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::String(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}
