use std::ops::Range;

use logos::Logos;
use tracing::trace;

use crate::{ast::LiteralValue, error::TokeniserError};

/// Result type used by the tokeniser.
pub type LexResult<T> = Result<T, TokeniserError>;

/// Classifies a lexical token.
///
/// Literal-bearing kinds carry the value decoded from their lexeme; every
/// other kind is a bare operator, keyword or punctuation mark.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexFault)]
pub enum TokenKind {
    /// Float literal tokens, such as `3.14` or `2.0`.
    #[regex(r"[0-9]+\.[0-9]+", parse_float)]
    #[regex(r"[0-9]+\.", dangling_dot)]
    Float(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// String literal tokens in single or double quotes.
    #[regex(r#""[^"]*""#, strip_quotes, allow_greedy = true)]
    #[regex(r"'[^']*'", strip_quotes, allow_greedy = true)]
    #[regex(r#""[^"]*"#, unterminated_string, allow_greedy = true)]
    #[regex(r"'[^']*", unterminated_string, allow_greedy = true)]
    String(String),
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// Identifier tokens; function names such as `if` or `lookup`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Equal,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `!`
    #[token("!")]
    Bang,

    /// Whitespace between tokens.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Why a lexeme could not be turned into a token.
///
/// Logos only knows the faulty slice; [`tokenise`] adds the position and the
/// surrounding characters to build the public [`TokeniserError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexFault {
    /// No token starts with this character.
    #[default]
    UnexpectedCharacter,
    /// A quote was never closed.
    UnterminatedString,
    /// A number ended in `.` without a fractional digit.
    DanglingDot,
    /// An integer does not fit in `i64`.
    IntegerOverflow,
}

impl LexFault {
    /// Builds the public error for a fault found at `span` in `source`.
    fn into_error(self, source: &str, span: Range<usize>) -> TokeniserError {
        let lexeme = source.get(span.clone()).unwrap_or_default().to_string();
        let position = span.start;
        let char_at = |offset: usize| source.get(offset..).and_then(|rest| rest.chars().next());

        match self {
            Self::UnexpectedCharacter => {
                TokeniserError::UnexpectedCharacter { character: char_at(position).unwrap_or('\u{fffd}'),
                                                      position }
            },
            Self::UnterminatedString => TokeniserError::UnterminatedString { lexeme, position },
            Self::DanglingDot => {
                TokeniserError::ExpectedDigitAfterDot { lexeme,
                                                        found: char_at(span.end),
                                                        position }
            },
            Self::IntegerOverflow => TokeniserError::LiteralTooLarge { lexeme, position },
        }
    }
}

/// A classified lexical unit together with the text it was scanned from.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The token classification, carrying any decoded literal.
    pub kind:     TokenKind,
    /// The raw source text of the token.
    pub lexeme:   String,
    /// Byte offset of the lexeme in the source.
    pub position: usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: usize) -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               position }
    }

    /// Returns the decoded literal for integer, float and string tokens.
    ///
    /// ## Example
    /// ```
    /// use ratus::{ast::LiteralValue, interpreter::lexer::tokenise};
    ///
    /// let tokens = tokenise("'PG'").unwrap();
    /// assert_eq!(tokens[0].literal(), Some(LiteralValue::String("PG".to_string())));
    /// ```
    #[must_use]
    pub fn literal(&self) -> Option<LiteralValue> {
        match &self.kind {
            TokenKind::Integer(n) => Some(LiteralValue::Integer(*n)),
            TokenKind::Float(x) => Some(LiteralValue::Float(*x)),
            TokenKind::String(s) => Some(LiteralValue::String(s.clone())),
            _ => None,
        }
    }
}

/// Scans source text into tokens.
///
/// Tokens are returned in source order. Scanning stops at the first invalid
/// construct; no partial token sequence is returned.
///
/// # Parameters
/// - `source`: The expression text.
///
/// # Returns
/// The token sequence, or the first [`TokeniserError`].
///
/// # Example
/// ```
/// use ratus::interpreter::lexer::{TokenKind, tokenise};
///
/// let kinds: Vec<_> = tokenise("1 >= 2").unwrap().into_iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            vec![TokenKind::Integer(1), TokenKind::GreaterEqual, TokenKind::Integer(2)]);
/// ```
pub fn tokenise(source: &str) -> LexResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(kind) => tokens.push(Token { kind,
                                            lexeme: lexer.slice().to_string(),
                                            position: span.start }),
            Err(fault) => return Err(fault.into_error(source, span)),
        }
    }

    trace!(count = tokens.len(), "tokenised source");
    Ok(tokens)
}

/// Parses a float literal from the current token slice.
///
/// Rust's float parsing is correctly rounded, so the value is the nearest
/// `f64` to the decimal lexeme.
fn parse_float(lex: &logos::Lexer<TokenKind>) -> Result<f64, LexFault> {
    lex.slice().parse().map_err(|_| LexFault::DanglingDot)
}

/// Parses an integer literal from the current token slice.
///
/// Only digits reach this callback, so the single failure mode is overflow.
fn parse_integer(lex: &logos::Lexer<TokenKind>) -> Result<i64, LexFault> {
    lex.slice().parse().map_err(|_| LexFault::IntegerOverflow)
}

/// Rejects a number whose `.` is not followed by a digit.
const fn dangling_dot(_: &logos::Lexer<TokenKind>) -> Result<f64, LexFault> {
    Err(LexFault::DanglingDot)
}

/// Decodes a string literal by removing its surrounding quotes.
fn strip_quotes(lex: &logos::Lexer<TokenKind>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// Rejects a string literal that reached the end of input unclosed.
const fn unterminated_string(_: &logos::Lexer<TokenKind>) -> Result<String, LexFault> {
    Err(LexFault::UnterminatedString)
}
