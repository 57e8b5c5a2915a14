/// Parser entry points, configuration and the token cursor.
///
/// Holds the [`core::Parser`] configuration, the `parse` entry point and the
/// index-based cursor every other parsing routine works through.
pub mod core;

/// Expression-level and term-level operator chains.
///
/// Implements the flat, left-associative chain of additive, comparison and
/// logical operators, and the tighter multiplicative chain beneath it.
pub mod binary;

/// Factors and signed numbers.
///
/// Parses parenthesised groups and numeric literals with at most one leading
/// `-` or `!`.
pub mod unary;

/// Function calls and parenthesis matching.
///
/// Provides the nesting-counter helpers shared by grouping and call parsing,
/// and the parser for `name(arg, ...)`.
pub mod utils;
