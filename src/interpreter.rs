/// The lexer module turns source text into tokens.
///
/// The lexer reads the raw expression text and produces a sequence of
/// tokens: numeric and string literals, identifiers, the `and`/`or`
/// keywords, operators and punctuation. This is the first stage of
/// evaluation.
///
/// # Responsibilities
/// - Converts the input characters into tokens carrying their lexeme and byte
///   offset.
/// - Decodes integer, float and string literals.
/// - Reports lexical errors for unterminated strings, malformed numbers and
///   unknown characters.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser is a recursive-descent parser over an index-based cursor. It
/// recognises string literals, function calls, groupings, signed numbers and
/// two levels of operator precedence, and rejects anything left over after a
/// complete expression.
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast::Expression`] trees.
/// - Reports syntax errors with the offending token and its position.
/// - Bounds nesting depth and tree depth on adversarial input, which also
///   bounds the executor's recursion over any tree it produces.
pub mod parser;
/// The executor module computes the value of an expression tree.
///
/// Every operator and function is dispatched through a table that the host
/// can override entry by entry, or extend with its own functions.
///
/// # Responsibilities
/// - Walks the tree post-order, evaluating all operands and arguments first.
/// - Provides the default operator semantics and the built-in `if`.
/// - Reports unknown functions and propagates operator and function failures.
pub mod executor;
/// The value module defines the runtime value type.
///
/// Declares the `Value` enum (integer, float, string, boolean) together with
/// truthiness and the numeric promotion used by mixed arithmetic.
pub mod value;
