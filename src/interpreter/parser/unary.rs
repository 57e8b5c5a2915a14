use crate::{
    ast::{Expression, LiteralValue, UnaryOperator},
    error::ParserError,
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{Cursor, ParseResult, Subtree},
            utils::matching_paren,
        },
    },
};

impl Cursor<'_> {
    /// Parses a factor: a parenthesised group or a signed number.
    ///
    /// Grammar: `factor := "(" expression ")" | number`
    pub(crate) fn parse_factor(&mut self) -> ParseResult<Subtree> {
        match self.peek() {
            Some(token) if token.kind == TokenKind::LeftParen => self.parse_grouping(),
            _ => self.parse_number(true),
        }
    }

    /// Parses a parenthesised expression.
    ///
    /// The matching `)` is located with a nesting counter and the enclosed
    /// tokens are parsed as a complete expression one level deeper. The group
    /// yields the inner expression as-is (no wrapper node), so it adds nothing
    /// to the tree depth.
    ///
    /// # Errors
    /// - `UnbalancedGrouping` if the `(` is never closed.
    /// - `EmptyExpression` for `()`.
    /// - `NestingTooDeep` past the configured depth.
    fn parse_grouping(&mut self) -> ParseResult<Subtree> {
        let tokens = self.tokens;
        let open = self.pos;
        let position = tokens[open].position;
        let close = matching_paren(tokens, open).ok_or(ParserError::UnbalancedGrouping { position })?;

        let inner = &tokens[open + 1..close];
        let subtree = self.nested(inner, position)?.parse_complete()?;

        self.pos = close + 1;
        Ok(subtree)
    }

    /// Parses a numeric literal with an optional single sign.
    ///
    /// At most one of `-` (negate) or `!` (not) may precede the literal, so
    /// `--1`, `!-1` and `-!1` are all rejected.
    ///
    /// Grammar: `number := ("-" | "!")? (INTEGER | FLOAT)`
    ///
    /// # Parameters
    /// - `allow_sign`: Whether a sign may still be consumed.
    ///
    /// # Errors
    /// `ExpectedNumber` naming the offending token, or `None` at the end of
    /// the slice.
    pub(crate) fn parse_number(&mut self, allow_sign: bool) -> ParseResult<Subtree> {
        let Some(token) = self.peek() else {
            return Err(ParserError::ExpectedNumber { token:    None,
                                                     position: self.end_position(), });
        };

        let op = match &token.kind {
            TokenKind::Integer(n) => {
                self.advance();
                return Ok(Subtree::leaf(Expression::Literal(LiteralValue::Integer(*n))));
            },
            TokenKind::Float(x) => {
                self.advance();
                return Ok(Subtree::leaf(Expression::Literal(LiteralValue::Float(*x))));
            },
            TokenKind::Minus if allow_sign => UnaryOperator::Negate,
            TokenKind::Bang if allow_sign => UnaryOperator::Not,
            _ => {
                return Err(ParserError::ExpectedNumber { token:    Some(token.lexeme.clone()),
                                                         position: token.position, });
            },
        };

        let position = token.position;
        self.advance();
        let operand = self.parse_number(false)?;
        Ok(Subtree { height:     self.node_height(operand.height, position)?,
                     expression: Expression::UnaryOp { op,
                                                       operand: Box::new(operand.expression) }, })
    }
}
