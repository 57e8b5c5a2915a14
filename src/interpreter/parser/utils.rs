use crate::{
    ast::Expression,
    error::ParserError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{Cursor, ParseResult, Subtree},
    },
};

/// Finds the `)` matching the `(` at index `open`.
///
/// Walks forward with a nesting counter so that inner groups and calls are
/// skipped over.
///
/// # Returns
/// The index of the matching `)`, or `None` if the parentheses never balance.
pub(in crate::interpreter::parser) fn matching_paren(tokens: &[Token], open: usize) -> Option<usize> {
    let mut nesting = 0usize;

    for (i, token) in tokens.iter().enumerate().skip(open) {
        match token.kind {
            TokenKind::LeftParen => nesting += 1,
            TokenKind::RightParen => {
                nesting = nesting.saturating_sub(1);
                if nesting == 0 {
                    return Some(i);
                }
            },
            _ => {},
        }
    }

    None
}

/// Splits a balanced argument list at its top-level commas.
///
/// Commas inside nested parentheses belong to inner calls or groups and do
/// not separate arguments. An empty list yields no arguments, while a
/// non-empty list always yields one slice more than it has top-level commas,
/// so `f(1,)` produces an empty second argument.
pub(in crate::interpreter::parser) fn split_arguments(tokens: &[Token]) -> Vec<&[Token]> {
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut arguments = Vec::new();
    let mut nesting = 0usize;
    let mut start = 0;

    for (i, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::LeftParen => nesting += 1,
            TokenKind::RightParen => nesting = nesting.saturating_sub(1),
            TokenKind::Comma if nesting == 0 => {
                arguments.push(&tokens[start..i]);
                start = i + 1;
            },
            _ => {},
        }
    }
    arguments.push(&tokens[start..]);

    arguments
}

impl Cursor<'_> {
    /// Parses a function call of the form `name(arg1, arg2, ...)`.
    ///
    /// The cursor is positioned at the identifier. Each argument is parsed as
    /// a complete expression one nesting level deeper. Zero-argument calls
    /// `f()` are legal.
    ///
    /// # Parameters
    /// - `name`: The function name.
    /// - `position`: Byte offset of the name.
    ///
    /// # Errors
    /// - `InvalidFunctionCall` if fewer than three tokens remain.
    /// - `ExpectedLeftParen` if the name is not followed by `(`.
    /// - `UnbalancedCall` if the argument list never closes.
    /// - `TreeTooDeep` if the call node exceeds the tree depth limit.
    /// - Any error from parsing an argument.
    pub(crate) fn parse_function_call(&mut self,
                                      name: &str,
                                      position: usize)
                                      -> ParseResult<Subtree> {
        let tokens = self.tokens;
        let remaining = &tokens[self.pos..];
        if remaining.len() < 3 {
            return Err(ParserError::InvalidFunctionCall { name: name.to_string(),
                                                          position });
        }

        let paren = &remaining[1];
        if paren.kind != TokenKind::LeftParen {
            return Err(ParserError::ExpectedLeftParen { name:     name.to_string(),
                                                        token:    paren.lexeme.clone(),
                                                        position: paren.position, });
        }

        let open = self.pos + 1;
        let Some(close) = matching_paren(tokens, open) else {
            return Err(ParserError::UnbalancedCall { name: name.to_string(),
                                                     position });
        };

        let mut args = Vec::new();
        let mut deepest = 0;
        for arg in split_arguments(&tokens[open + 1..close]) {
            let Subtree { expression, height } = self.nested(arg, position)?.parse_complete()?;
            deepest = deepest.max(height);
            args.push(expression);
        }

        self.pos = close + 1;
        Ok(Subtree { height:     self.node_height(deepest, position)?,
                     expression: Expression::FunctionCall { name: name.to_string(),
                                                            args }, })
    }
}
