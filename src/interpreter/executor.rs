/// The executor itself and its operation tables.
///
/// Holds [`core::Executor`], the `ExecResult` alias and the shared
/// function-pointer types used to populate the tables.
pub mod core;

/// Builder for executors with overridden operators or extra functions.
pub mod builder;

/// Default implementations of the binary operators.
///
/// Arithmetic, comparison and logical operators, each a plain function that
/// can also be installed under a different operator.
pub mod binary;

/// Default implementations of the unary operators.
pub mod unary;

/// Built-in functions available to every expression.
///
/// Currently the eager ternary `if`.
pub mod function;

/// Helpers shared by the default operator and function implementations.
pub mod utils;
