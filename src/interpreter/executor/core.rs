use std::{collections::HashMap, fmt, sync::Arc};

use tracing::trace;

use crate::{
    ast::{BinaryOperator, Expression, UnaryOperator},
    error::ExecutorError,
    interpreter::{
        executor::builder::ExecutorBuilder,
        value::core::Value,
    },
};

pub type ExecResult<T> = Result<T, ExecutorError>;

/// Implementation of a binary operator.
pub type BinaryFn = Arc<dyn Fn(&Value, &Value) -> ExecResult<Value> + Send + Sync>;
/// Implementation of a unary operator.
pub type UnaryFn = Arc<dyn Fn(&Value) -> ExecResult<Value> + Send + Sync>;
/// A callable reachable from expression text by name.
///
/// Receives the already evaluated arguments, in call order.
pub type NativeFn = Arc<dyn Fn(&[Value]) -> ExecResult<Value> + Send + Sync>;
/// Functions available to an expression, keyed by name.
pub type FunctionTable = HashMap<String, NativeFn>;

/// Wraps a closure or function as a [`BinaryFn`].
pub fn binary_fn<F>(f: F) -> BinaryFn
    where F: Fn(&Value, &Value) -> ExecResult<Value> + Send + Sync + 'static
{
    Arc::new(f)
}

/// Wraps a closure or function as a [`UnaryFn`].
pub fn unary_fn<F>(f: F) -> UnaryFn
    where F: Fn(&Value) -> ExecResult<Value> + Send + Sync + 'static
{
    Arc::new(f)
}

/// Wraps a closure or function as a [`NativeFn`].
///
/// ## Example
/// ```
/// use ratus::interpreter::{executor::core::native_fn, value::core::Value};
///
/// let lookup = native_fn(|_| Ok(Value::Integer(10)));
/// assert_eq!(lookup(&[]).unwrap(), Value::Integer(10));
/// ```
pub fn native_fn<F>(f: F) -> NativeFn
    where F: Fn(&[Value]) -> ExecResult<Value> + Send + Sync + 'static
{
    Arc::new(f)
}

/// Walks expression trees and computes their values.
///
/// Every operator and every function is looked up in a table, so the meaning
/// of each can be replaced without touching the tree walk. An executor holds
/// no per-evaluation state: it can be shared between threads and reused for
/// any number of expressions.
///
/// ## Example
/// ```
/// use ratus::{
///     ast::{BinaryOperator, Expression},
///     interpreter::{executor::core::Executor, value::core::Value},
/// };
///
/// let expr = Expression::binary(BinaryOperator::Mul, 3_i64, 2_i64);
/// assert_eq!(Executor::new().execute(&expr).unwrap(), Value::Integer(6));
/// ```
#[derive(Clone)]
pub struct Executor {
    pub(crate) binary_ops: HashMap<BinaryOperator, BinaryFn>,
    pub(crate) unary_ops:  HashMap<UnaryOperator, UnaryFn>,
    pub(crate) functions:  FunctionTable,
}

impl Default for Executor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Executor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut functions = self.functions.keys().collect::<Vec<_>>();
        functions.sort();

        f.debug_struct("Executor")
         .field("binary_ops", &self.binary_ops.len())
         .field("unary_ops", &self.unary_ops.len())
         .field("functions", &functions)
         .finish()
    }
}

impl Executor {
    /// Creates an executor with the default operators and built-in functions.
    #[must_use]
    pub fn new() -> Self {
        ExecutorBuilder::default().build()
    }

    /// Starts from the defaults and lets individual entries be replaced.
    #[must_use]
    pub fn builder() -> ExecutorBuilder {
        ExecutorBuilder::default()
    }

    /// Tests whether a function with this name is available.
    #[must_use]
    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Computes the value of an expression tree.
    ///
    /// The walk is post-order: the operands of an operator and all the
    /// arguments of a call are evaluated, left to right, before the operator
    /// or function is applied. In particular both branches of `if` are always
    /// evaluated.
    ///
    /// The walk recurses once per tree level. Trees from the parser are no
    /// deeper than its tree depth limit; hand-built trees carry no such bound.
    ///
    /// # Parameters
    /// - `expression`: The tree to evaluate.
    ///
    /// # Returns
    /// The resulting [`Value`], or the first error raised by an operator or
    /// function. Errors are propagated unchanged.
    ///
    /// # Errors
    /// `ExecutorError::UnknownFunction` if a call names a function that is not
    /// in the table, plus anything an operator or function returns.
    pub fn execute(&self, expression: &Expression) -> ExecResult<Value> {
        match expression {
            Expression::Literal(literal) => Ok(Value::from(literal)),

            Expression::UnaryOp { op, operand } => {
                let operand = self.execute(operand)?;
                self.apply_unary(*op, &operand)
            },

            Expression::BinaryOp { op, left, right } => {
                let left = self.execute(left)?;
                let right = self.execute(right)?;
                self.apply_binary(*op, &left, &right)
            },

            Expression::FunctionCall { name, args } => {
                let args = args.iter()
                               .map(|arg| self.execute(arg))
                               .collect::<ExecResult<Vec<_>>>()?;
                self.call_function(name, &args)
            },
        }
    }

    /// Applies a binary operator from the table to two values.
    pub fn apply_binary(&self, op: BinaryOperator, left: &Value, right: &Value) -> ExecResult<Value> {
        let Some(func) = self.binary_ops.get(&op) else {
            return Err(ExecutorError::other(format!("No implementation for operator '{op}'")));
        };
        func(left, right)
    }

    /// Applies a unary operator from the table to a value.
    pub fn apply_unary(&self, op: UnaryOperator, operand: &Value) -> ExecResult<Value> {
        let Some(func) = self.unary_ops.get(&op) else {
            return Err(ExecutorError::other(format!("No implementation for operator '{op}'")));
        };
        func(operand)
    }

    /// Calls a function from the table with already evaluated arguments.
    ///
    /// # Errors
    /// `ExecutorError::UnknownFunction` if no function has this name.
    pub fn call_function(&self, name: &str, args: &[Value]) -> ExecResult<Value> {
        let Some(func) = self.functions.get(name) else {
            return Err(ExecutorError::UnknownFunction { name: name.to_string() });
        };

        trace!(name, args = args.len(), "calling function");
        func(args)
    }
}
