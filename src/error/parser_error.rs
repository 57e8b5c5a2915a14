#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token sequence.
pub enum ParserError {
    /// An expression (top-level, grouped or function argument) had no tokens.
    EmptyExpression,
    /// A numeric literal was required, optionally behind one sign.
    ExpectedNumber {
        /// The token found instead, or `None` at the end of input.
        token:    Option<String>,
        /// Byte offset of the token found.
        position: usize,
    },
    /// A complete term was followed by something other than an operator.
    ExpectedOperator {
        /// The term parsed so far, rendered as an expression.
        term:     String,
        /// The token found after it.
        token:    String,
        /// Byte offset of the token found.
        position: usize,
    },
    /// An identifier started an expression but too few tokens follow it.
    InvalidFunctionCall {
        /// The identifier.
        name:     String,
        /// Byte offset of the identifier.
        position: usize,
    },
    /// A function name was not followed by `(`.
    ExpectedLeftParen {
        /// The function name.
        name:     String,
        /// The token found instead of `(`.
        token:    String,
        /// Byte offset of the token found.
        position: usize,
    },
    /// The argument list of a function call never closes.
    UnbalancedCall {
        /// The function name.
        name:     String,
        /// Byte offset of the function name.
        position: usize,
    },
    /// A parenthesised group never closes.
    UnbalancedGrouping {
        /// Byte offset of the opening parenthesis.
        position: usize,
    },
    /// Tokens remain after a complete expression.
    UnexpectedTrailingToken {
        /// The first extra token.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// Groupings and calls are nested deeper than the parser allows.
    NestingTooDeep {
        /// The configured limit.
        max_depth: usize,
        /// Byte offset of the token that exceeded it.
        position:  usize,
    },
    /// The expression tree would be deeper than the parser allows.
    ///
    /// Every operator adds a level, so long operator chains such as
    /// `1 + 1 + ... + 1` reach this limit as well as deep nesting.
    TreeTooDeep {
        /// The configured limit.
        max_tree_depth: usize,
        /// Byte offset of the operator or function name that exceeded it.
        position:       usize,
    },
}

impl std::fmt::Display for ParserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Expression cannot be empty"),

            Self::ExpectedNumber { token: Some(token),
                                   position, } => write!(f,
                                                         "Unexpected token '{token}' at position {position}. Expected an int or float"),
            Self::ExpectedNumber { token: None, .. } => {
                write!(f, "Expected int or float token but none were found")
            },

            Self::ExpectedOperator { term,
                                     token,
                                     position, } => write!(f,
                                                           "Unexpected token '{token}' at position {position} after term {term}. Expected operator '+', '-', '>', '>=', '<', '<=', '=', '!=', 'and', 'or'."),

            Self::InvalidFunctionCall { name, position } => write!(f,
                                                                   "Tokens starting at '{name}' (position {position}) do not form a valid function call"),

            Self::ExpectedLeftParen { name, token, .. } => write!(f,
                                                                  "Expected left paren ('(') following call to function '{name}'. Found '{token}'"),

            Self::UnbalancedCall { name, .. } => {
                write!(f, "Unbalanced parentheses in call to function '{name}'")
            },

            Self::UnbalancedGrouping { position } => write!(f,
                                                            "Unbalanced parentheses in grouping opened at position {position}"),

            Self::UnexpectedTrailingToken { token, position } => write!(f,
                                                                        "Unexpected token '{token}' at position {position} after a complete expression"),

            Self::TreeTooDeep { max_tree_depth,
                                position, } => write!(f,
                                                      "Expression tree exceeds the maximum depth of {max_tree_depth} at position {position}"),

            Self::NestingTooDeep { max_depth, position } => write!(f,
                                                                   "Expression nesting exceeds the maximum depth of {max_depth} at position {position}"),
        }
    }
}

impl std::error::Error for ParserError {}
