/// Operator table assembly and dispatch.
pub mod core;

/// `+`, `-`, `*` and `/`.
///
/// Integer arithmetic is checked; any integer/float mix is computed in
/// floating point. `/` is true division and always yields a float.
pub mod arithmetic;

/// Ordering and equality operators.
///
/// Numbers compare by value across integers and floats. Strings compare
/// lexicographically and booleans order `false < true`.
pub mod comparison;

/// `and` and `or`.
///
/// Both operands have already been evaluated; only their truthiness is used.
pub mod logic;

pub use arithmetic::{add, div, mul, sub};
pub use comparison::{equal, greater, greater_equal, less, less_equal, not_equal};
pub use logic::{and, or};
