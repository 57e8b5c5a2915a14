use crate::{
    ast::{BinaryOperator, Expression},
    error::ParserError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{Cursor, ParseResult, Subtree},
    },
};

impl Cursor<'_> {
    /// Parses a flat chain of expression-level operators.
    ///
    /// `+`, `-`, the comparisons, `and` and `or` all share one precedence
    /// level and associate to the left, so `1 < 2 + 3` parses as
    /// `(1 < 2) + 3`. The chain runs to the end of the current slice: any
    /// token after a term that is not one of these operators is an error.
    ///
    /// Grammar: `chain := term (binop term)*`
    ///
    /// # Returns
    /// A left-leaning `Expression::BinaryOp` tree, or the single term.
    ///
    /// # Errors
    /// `TreeTooDeep` at the first operator that would push the tree past the
    /// configured depth.
    pub(crate) fn parse_chain(&mut self) -> ParseResult<Subtree> {
        let mut left = self.parse_term()?;

        while let Some(token) = self.peek() {
            let Some(op) = chain_operator(&token.kind) else {
                return Err(ParserError::ExpectedOperator { term:     left.expression.to_string(),
                                                           token:    token.lexeme.clone(),
                                                           position: token.position, });
            };
            self.advance();

            let right = self.parse_term()?;
            left = self.fold(op, left, right, token.position)?;
        }

        Ok(left)
    }

    /// Parses multiplication and division.
    ///
    /// Handles left-associative `*` and `/`, which bind tighter than every
    /// chain operator. Stops without consuming at the first other token.
    ///
    /// Grammar: `term := factor (("*" | "/") factor)*`
    pub(crate) fn parse_term(&mut self) -> ParseResult<Subtree> {
        let mut left = self.parse_factor()?;

        while let Some(token) = self.peek()
              && let Some(op) = term_operator(&token.kind)
        {
            self.advance();
            let right = self.parse_factor()?;
            left = self.fold(op, left, right, token.position)?;
        }

        Ok(left)
    }

    /// Joins two operands under `op`, checking the resulting tree depth.
    fn fold(&self,
            op: BinaryOperator,
            left: Subtree,
            right: Subtree,
            position: usize)
            -> ParseResult<Subtree> {
        let height = self.node_height(left.height.max(right.height), position)?;
        Ok(Subtree { expression: Expression::BinaryOp { op,
                                                        left: Box::new(left.expression),
                                                        right: Box::new(right.expression) },
                     height })
    }
}

/// Maps a token to an expression-level (chain) operator.
///
/// # Example
/// ```
/// use ratus::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::chain_operator},
/// };
///
/// assert_eq!(chain_operator(&TokenKind::Or), Some(BinaryOperator::Or));
/// assert_eq!(chain_operator(&TokenKind::Star), None);
/// ```
#[must_use]
pub const fn chain_operator(kind: &TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::Equal => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        TokenKind::And => Some(BinaryOperator::And),
        TokenKind::Or => Some(BinaryOperator::Or),
        _ => None,
    }
}

/// Maps a token to a term-level (multiplicative) operator.
#[must_use]
pub const fn term_operator(kind: &TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
