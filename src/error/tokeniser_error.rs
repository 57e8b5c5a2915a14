#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenising source text.
pub enum TokeniserError {
    /// Found a character that does not start any token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the source.
        position:  usize,
    },
    /// A quoted string ran to the end of the input without its closing quote.
    UnterminatedString {
        /// The partial string, including its opening quote.
        lexeme:   String,
        /// Byte offset of the opening quote.
        position: usize,
    },
    /// A numeric literal contained a `.` that was not followed by a digit.
    ExpectedDigitAfterDot {
        /// The literal up to and including the `.`.
        lexeme:   String,
        /// The character found after the `.`, if any.
        found:    Option<char>,
        /// Byte offset of the literal.
        position: usize,
    },
    /// An integer literal does not fit in a 64 bit signed integer.
    LiteralTooLarge {
        /// The literal as written.
        lexeme:   String,
        /// Byte offset of the literal.
        position: usize,
    },
}

impl TokeniserError {
    /// Byte offset in the source where the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::UnterminatedString { position, .. }
            | Self::ExpectedDigitAfterDot { position, .. }
            | Self::LiteralTooLarge { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for TokeniserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, position } => {
                write!(f, "Unexpected character '{character}' at position {position}")
            },
            Self::UnterminatedString { lexeme, position } => write!(f,
                                                                    "Unterminated string starting at position {position}: {lexeme}"),
            Self::ExpectedDigitAfterDot { lexeme,
                                          found: Some(c),
                                          position, } => write!(f,
                                                                "Expected digit after '.' in number '{lexeme}' at position {position}, found '{c}'"),
            Self::ExpectedDigitAfterDot { lexeme,
                                          found: None,
                                          position, } => write!(f,
                                                                "Number '{lexeme}' at position {position} cannot end with '.'. Expected digit after '.'"),
            Self::LiteralTooLarge { lexeme, position } => write!(f,
                                                                 "Integer literal '{lexeme}' at position {position} is too large"),
        }
    }
}

impl std::error::Error for TokeniserError {}
