//! # ratus
//!
//! ratus is a small, safe expression language for embedding in host
//! applications. Source text such as `if(2 * 3 > 5, lookup("bonus"), 0)` is
//! tokenised, parsed into an expression tree and executed by a tree-walking
//! executor whose operators and functions can be overridden or extended by
//! the host.
//!
//! ```
//! use ratus::{Value, evaluate};
//!
//! assert_eq!(evaluate("1 + 3 * 2", None).unwrap(), Value::Integer(7));
//! assert_eq!(evaluate("if(1 > 2, 10, 5)", None).unwrap(), Value::Integer(5));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

/// Defines the expression tree.
///
/// This module declares the `Expression` enum, the literal values it carries
/// and the unary and binary operator kinds. Trees are built by the parser and
/// walked by the executor.
///
/// # Responsibilities
/// - Defines one node type per language construct.
/// - Renders trees in a fully parenthesised prefix form for diagnostics.
pub mod ast;
/// Provides the error types of every stage.
///
/// This module defines the errors raised while tokenising, parsing or
/// executing an expression, and the top-level [`Error`] that wraps them.
///
/// # Responsibilities
/// - Defines one error enum per stage, with the offending text and position.
/// - Implements `Display` and `std::error::Error` for all of them.
pub mod error;
/// Implements the evaluation pipeline.
///
/// This module holds the lexer, the parser, the executor and the runtime
/// value type. The functions at the crate root tie them together.
pub mod interpreter;
/// General utilities.
///
/// Currently the lossless integer to float conversion used by numeric
/// promotion.
pub mod util;

pub use crate::{
    ast::{BinaryOperator, Expression, LiteralValue, UnaryOperator},
    error::{Error, ExecutorError, ParserError, TokeniserError},
    interpreter::{
        executor::{
            builder::ExecutorBuilder,
            core::{BinaryFn, ExecResult, Executor, FunctionTable, NativeFn, UnaryFn, binary_fn,
                   native_fn, unary_fn},
            function::BUILTIN_FUNCTIONS,
        },
        lexer::{Token, TokenKind, tokenise},
        parser::core::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_TREE_DEPTH, Parser, parse},
        value::core::Value,
    },
};

/// Tokenises, parses and executes expressions.
///
/// An evaluator is a parser configuration paired with an executor. It keeps
/// no state between calls, so one instance can serve any number of
/// evaluations, concurrently if shared between threads.
///
/// ## Example
/// ```
/// use ratus::{Evaluator, Value, native_fn};
///
/// let evaluator = Evaluator::with_functions([("lookup".to_string(),
///                                             native_fn(|_| Ok(Value::Integer(10))))].into());
///
/// assert_eq!(evaluator.evaluate("if(1 < 2, lookup(\"x\"), 0)").unwrap(), Value::Integer(10));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    parser:   Parser,
    executor: Executor,
}

impl Evaluator {
    /// Creates an evaluator with the default parser and executor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an evaluator whose function table is extended with
    /// `functions`. Entries under built-in names replace the built-ins.
    #[must_use]
    pub fn with_functions(functions: FunctionTable) -> Self {
        Self { parser:   Parser::default(),
               executor: Executor::builder().functions(functions).build(), }
    }

    /// Creates an evaluator from an explicit parser and executor.
    #[must_use]
    pub const fn from_parts(parser: Parser, executor: Executor) -> Self {
        Self { parser, executor }
    }

    /// Returns the parser configuration.
    #[must_use]
    pub const fn parser(&self) -> &Parser {
        &self.parser
    }

    /// Returns the executor.
    #[must_use]
    pub const fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Evaluates an expression.
    ///
    /// # Parameters
    /// - `source`: The expression text.
    ///
    /// # Returns
    /// The computed [`Value`], or the first error from whichever stage
    /// failed. Later stages never run after an earlier one fails.
    pub fn evaluate(&self, source: &str) -> Result<Value, Error> {
        let tokens = tokenise(source)?;
        let expression = self.parser.parse(&tokens)?;
        let value = self.executor.execute(&expression)?;

        debug!(%value, "evaluated expression");
        Ok(value)
    }
}

/// Executes an expression tree with the default executor.
///
/// ## Example
/// ```
/// use ratus::{Expression, Value, execute};
///
/// let expr = Expression::call("if",
///                             vec![1_i64.into(), "yes".into(), "no".into()]);
/// assert_eq!(execute(&expr).unwrap(), Value::from("yes"));
/// ```
pub fn execute(expression: &Expression) -> ExecResult<Value> {
    Executor::new().execute(expression)
}

/// Evaluates an expression in one call.
///
/// `functions`, when given, extends or overrides the built-in function
/// table for this evaluation only.
///
/// # Errors
/// The first [`Error`] from tokenising, parsing or executing.
///
/// # Examples
/// ```
/// use ratus::{Value, evaluate, native_fn};
///
/// assert_eq!(evaluate("1 + 3 * 2 > 6", None).unwrap(), Value::Bool(true));
///
/// let functions = [("lookup".to_string(), native_fn(|_| Ok(Value::Integer(10))))].into();
/// assert_eq!(evaluate("lookup(12345, 'PG')", Some(functions)).unwrap(),
///            Value::Integer(10));
///
/// let err = evaluate("missing(1)", None).unwrap_err();
/// assert_eq!(err.to_string(), "Function 'missing' is not defined");
/// ```
pub fn evaluate(source: &str, functions: Option<FunctionTable>) -> Result<Value, Error> {
    functions.map_or_else(Evaluator::new, Evaluator::with_functions)
             .evaluate(source)
}
