use tracing::debug;

use crate::{
    ast::{Expression, LiteralValue},
    error::ParserError,
    interpreter::lexer::{Token, TokenKind},
};

pub type ParseResult<T> = Result<T, ParserError>;

/// Default limit on how deeply groupings and function calls may nest.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Default limit on the depth of the expression tree.
///
/// The executor and the tree's destructor both recurse once per level, so
/// this bounds their stack use as well as the parser's.
pub const DEFAULT_MAX_TREE_DEPTH: usize = 1024;

/// Parser configuration.
///
/// Parsing itself is stateless: every call to [`Parser::parse`] is independent
/// of any previous call. Two limits bound the recursion on adversarial input:
/// the nesting limit caps groupings and calls such as `((((...))))`, and the
/// tree depth limit caps the height of the finished tree, which long operator
/// chains like `1 + 1 + ... + 1` grow by one level per operator.
///
/// ## Example
/// ```
/// use ratus::interpreter::{lexer::tokenise, parser::core::Parser};
///
/// let parser = Parser::new().max_depth(2);
///
/// assert!(parser.parse(&tokenise("((1))").unwrap()).is_ok());
/// assert!(parser.parse(&tokenise("(((1)))").unwrap()).is_err());
///
/// let parser = Parser::new().max_tree_depth(3);
///
/// assert!(parser.parse(&tokenise("1 + 2 + 3").unwrap()).is_ok());
/// assert!(parser.parse(&tokenise("1 + 2 + 3 + 4").unwrap()).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parser {
    max_depth:      usize,
    max_tree_depth: usize,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Creates a parser with the default nesting limit.
    #[must_use]
    pub const fn new() -> Self {
        Self { max_depth:      DEFAULT_MAX_DEPTH,
               max_tree_depth: DEFAULT_MAX_TREE_DEPTH, }
    }

    /// Sets the maximum nesting depth of groupings and function calls.
    #[must_use]
    pub const fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the maximum depth of the expression tree.
    ///
    /// A literal has depth 1; each operator or call adds one level above its
    /// deepest operand.
    #[must_use]
    pub const fn max_tree_depth(mut self, max_tree_depth: usize) -> Self {
        self.max_tree_depth = max_tree_depth;
        self
    }

    /// Returns the configured nesting limit.
    #[must_use]
    pub const fn depth_limit(&self) -> usize {
        self.max_depth
    }

    /// Returns the configured tree depth limit.
    #[must_use]
    pub const fn tree_depth_limit(&self) -> usize {
        self.max_tree_depth
    }

    /// Parses a complete token sequence into one expression tree.
    ///
    /// The whole sequence must form a single expression; leftover tokens are
    /// an error, never silently ignored.
    ///
    /// # Parameters
    /// - `tokens`: Tokens produced by the tokeniser.
    ///
    /// # Returns
    /// The root [`Expression`], or the first [`ParserError`].
    pub fn parse(&self, tokens: &[Token]) -> ParseResult<Expression> {
        let Subtree { expression, height } = Cursor::new(tokens, 0, *self).parse_complete()?;
        debug!(tokens = tokens.len(), height, %expression, "parsed expression");
        Ok(expression)
    }
}

/// Parses a token sequence with the default configuration.
///
/// ## Example
/// ```
/// use ratus::{
///     ast::{BinaryOperator, Expression},
///     interpreter::{lexer::tokenise, parser::core::parse},
/// };
///
/// let tokens = tokenise("1 + 2").unwrap();
/// assert_eq!(parse(&tokens).unwrap(),
///            Expression::binary(BinaryOperator::Add, 1_i64, 2_i64));
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Expression> {
    Parser::default().parse(tokens)
}

/// A parsed expression together with the height of its tree.
pub(crate) struct Subtree {
    pub(crate) expression: Expression,
    pub(crate) height:     usize,
}

impl Subtree {
    /// A single literal node.
    pub(crate) const fn leaf(expression: Expression) -> Self {
        Self { expression,
               height: 1 }
    }
}

/// An index-based cursor over an immutable token slice.
///
/// Groupings and function arguments are parsed by opening a nested cursor on
/// the sub-slice between matching parentheses; the nesting depth and the
/// limits travel with it.
pub(crate) struct Cursor<'a> {
    pub(crate) tokens: &'a [Token],
    pub(crate) pos:    usize,
    depth:             usize,
    limits:            Parser,
}

impl<'a> Cursor<'a> {
    pub(crate) const fn new(tokens: &'a [Token], depth: usize, limits: Parser) -> Self {
        Self { tokens,
               pos: 0,
               depth,
               limits }
    }

    /// Opens a cursor one level deeper over `tokens`.
    ///
    /// `position` is reported if the nesting limit is exceeded.
    pub(crate) fn nested(&self, tokens: &'a [Token], position: usize) -> ParseResult<Self> {
        if self.depth >= self.limits.max_depth {
            return Err(ParserError::NestingTooDeep { max_depth: self.limits.max_depth,
                                                     position });
        }
        Ok(Self::new(tokens, self.depth + 1, self.limits))
    }

    /// Checks the height of a node about to be built over `children`.
    ///
    /// `position` is reported if the tree depth limit is exceeded.
    pub(crate) const fn node_height(&self, children: usize, position: usize) -> ParseResult<usize> {
        let height = children + 1;
        if height > self.limits.max_tree_depth {
            return Err(ParserError::TreeTooDeep { max_tree_depth: self.limits.max_tree_depth,
                                                  position });
        }
        Ok(height)
    }

    pub(crate) fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    pub(crate) fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Byte offset just past the last token of this slice.
    pub(crate) fn end_position(&self) -> usize {
        self.tokens
            .last()
            .map_or(0, |token| token.position + token.lexeme.len())
    }

    /// Parses the entire slice as one expression.
    ///
    /// # Errors
    /// - `EmptyExpression` if the slice has no tokens.
    /// - `UnexpectedTrailingToken` if tokens remain after the expression.
    pub(crate) fn parse_complete(mut self) -> ParseResult<Subtree> {
        let subtree = self.parse_expression()?;

        match self.peek() {
            Some(token) => {
                Err(ParserError::UnexpectedTrailingToken { token:    token.lexeme.clone(),
                                                           position: token.position, })
            },
            None => Ok(subtree),
        }
    }

    /// Parses one expression starting at the cursor.
    ///
    /// Strings and function calls are atomic: they are only recognised at the
    /// start of an expression and never take part in operator chains.
    ///
    /// Grammar:
    /// ```text
    ///     expression := string
    ///                 | identifier "(" arguments ")"
    ///                 | term (binop term)*
    /// ```
    fn parse_expression(&mut self) -> ParseResult<Subtree> {
        match self.peek() {
            None => Err(ParserError::EmptyExpression),
            Some(Token { kind: TokenKind::String(value),
                         .. }) => {
                self.advance();
                Ok(Subtree::leaf(Expression::Literal(LiteralValue::String(value.clone()))))
            },
            Some(Token { kind: TokenKind::Identifier(name),
                         position,
                         .. }) => self.parse_function_call(name, *position),
            Some(_) => self.parse_chain(),
        }
    }
}
