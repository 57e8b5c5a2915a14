/// Numeric conversion helpers.
///
/// Lossless conversion from `i64` to `f64`, used whenever an integer operand
/// is promoted to a float for mixed arithmetic or comparison.
pub mod num;
