/// Lexical errors.
///
/// Defines the errors raised while scanning source text into tokens:
/// malformed numeric literals, unterminated strings and characters the
/// language does not recognise.
pub mod tokeniser_error;
/// Syntax errors.
///
/// Defines the errors raised while building an expression tree from a token
/// sequence, such as unbalanced parentheses, missing operators or malformed
/// function calls.
pub mod parser_error;
/// Runtime errors.
///
/// Contains the errors raised while executing an expression tree: unknown
/// functions, operand type mismatches, division by zero and failures reported
/// by host functions.
pub mod executor_error;

pub use executor_error::ExecutorError;
pub use parser_error::ParserError;
pub use tokeniser_error::TokeniserError;

/// The first error raised by any stage of an evaluation.
///
/// Each variant wraps the stage error unchanged, so the message seen by the
/// caller is exactly the one produced by the failing stage.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Scanning the source text failed.
    Tokeniser(TokeniserError),
    /// Building the expression tree failed.
    Parser(ParserError),
    /// Executing the expression tree failed.
    Executor(ExecutorError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tokeniser(e) => write!(f, "{e}"),
            Self::Parser(e) => write!(f, "{e}"),
            Self::Executor(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Tokeniser(e) => Some(e),
            Self::Parser(e) => Some(e),
            Self::Executor(e) => Some(e),
        }
    }
}

impl From<TokeniserError> for Error {
    fn from(e: TokeniserError) -> Self {
        Self::Tokeniser(e)
    }
}

impl From<ParserError> for Error {
    fn from(e: ParserError) -> Self {
        Self::Parser(e)
    }
}

impl From<ExecutorError> for Error {
    fn from(e: ExecutorError) -> Self {
        Self::Executor(e)
    }
}
