use std::{collections::HashMap, sync::Arc};

use crate::{
    ast::{BinaryOperator, UnaryOperator},
    interpreter::{
        executor::{
            binary::core::default_binary_ops,
            core::{BinaryFn, ExecResult, Executor, FunctionTable, UnaryFn},
            function::default_functions,
            unary::default_unary_ops,
        },
        value::core::Value,
    },
};

/// Assembles an [`Executor`] from the default tables plus overrides.
///
/// Each override replaces exactly one entry; every other operator and
/// function keeps its default. Functions under new names are added alongside
/// the built-ins.
///
/// ## Example
/// ```
/// use ratus::{
///     ast::{BinaryOperator, Expression},
///     interpreter::{
///         executor::{binary::sub, core::Executor},
///         value::core::Value,
///     },
/// };
///
/// let executor = Executor::builder().binary_op(BinaryOperator::Add, sub).build();
/// let expr = Expression::binary(BinaryOperator::Add, 1_i64, 1_i64);
///
/// assert_eq!(executor.execute(&expr).unwrap(), Value::Integer(0));
/// ```
#[derive(Clone)]
pub struct ExecutorBuilder {
    binary_ops: HashMap<BinaryOperator, BinaryFn>,
    unary_ops:  HashMap<UnaryOperator, UnaryFn>,
    functions:  FunctionTable,
}

impl Default for ExecutorBuilder {
    fn default() -> Self {
        Self { binary_ops: default_binary_ops(),
               unary_ops:  default_unary_ops(),
               functions:  default_functions(), }
    }
}

impl ExecutorBuilder {
    /// Replaces the implementation of one binary operator.
    #[must_use]
    pub fn binary_op<F>(mut self, op: BinaryOperator, f: F) -> Self
        where F: Fn(&Value, &Value) -> ExecResult<Value> + Send + Sync + 'static
    {
        self.binary_ops.insert(op, Arc::new(f));
        self
    }

    /// Replaces the implementation of one unary operator.
    #[must_use]
    pub fn unary_op<F>(mut self, op: UnaryOperator, f: F) -> Self
        where F: Fn(&Value) -> ExecResult<Value> + Send + Sync + 'static
    {
        self.unary_ops.insert(op, Arc::new(f));
        self
    }

    /// Adds a function, or replaces the one already under `name`.
    #[must_use]
    pub fn function<F>(mut self, name: impl Into<String>, f: F) -> Self
        where F: Fn(&[Value]) -> ExecResult<Value> + Send + Sync + 'static
    {
        self.functions.insert(name.into(), Arc::new(f));
        self
    }

    /// Replaces every binary operator present in `ops`.
    #[must_use]
    pub fn binary_ops(mut self, ops: HashMap<BinaryOperator, BinaryFn>) -> Self {
        self.binary_ops.extend(ops);
        self
    }

    /// Replaces every unary operator present in `ops`.
    #[must_use]
    pub fn unary_ops(mut self, ops: HashMap<UnaryOperator, UnaryFn>) -> Self {
        self.unary_ops.extend(ops);
        self
    }

    /// Adds or replaces every function present in `functions`.
    #[must_use]
    pub fn functions(mut self, functions: FunctionTable) -> Self {
        self.functions.extend(functions);
        self
    }

    /// Finishes the executor.
    #[must_use]
    pub fn build(self) -> Executor {
        Executor { binary_ops: self.binary_ops,
                   unary_ops:  self.unary_ops,
                   functions:  self.functions, }
    }
}
