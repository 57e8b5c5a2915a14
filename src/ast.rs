use std::fmt;

/// Represents a literal value written directly in source text.
///
/// Booleans are deliberately absent: they only arise at runtime from
/// comparison and logical operators.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Float(f64),
    /// A string literal, without its quotes.
    String(String),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// An abstract syntax tree node.
///
/// Every node owns its children, so a tree has no sharing and no cycles. Two
/// trees compare equal when they have the same shape and literal values.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A literal value.
    Literal(LiteralValue),
    /// A prefix operator applied to an operand.
    UnaryOp {
        /// The operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// An infix operator applied to two operands.
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// A call to a named function, e.g. `if(1 > 2, 10, 5)`.
    FunctionCall {
        /// Name of the function being called.
        name: String,
        /// Arguments, in call order. May be empty.
        args: Vec<Self>,
    },
}

impl Expression {
    /// Builds a [`Expression::UnaryOp`] node.
    #[must_use]
    pub fn unary(op: UnaryOperator, operand: impl Into<Self>) -> Self {
        Self::UnaryOp { op,
                        operand: Box::new(operand.into()) }
    }

    /// Builds a [`Expression::BinaryOp`] node.
    ///
    /// ## Example
    /// ```
    /// use ratus::ast::{BinaryOperator, Expression};
    ///
    /// let expr = Expression::binary(BinaryOperator::Add, 1_i64, 2_i64);
    /// assert_eq!(expr.to_string(), "(+ 1 2)");
    /// ```
    #[must_use]
    pub fn binary(op: BinaryOperator, left: impl Into<Self>, right: impl Into<Self>) -> Self {
        Self::BinaryOp { op,
                         left: Box::new(left.into()),
                         right: Box::new(right.into()) }
    }

    /// Builds a [`Expression::FunctionCall`] node.
    #[must_use]
    pub fn call(name: impl Into<String>, args: Vec<Self>) -> Self {
        Self::FunctionCall { name: name.into(),
                             args }
    }
}

impl From<LiteralValue> for Expression {
    fn from(value: LiteralValue) -> Self {
        Self::Literal(value)
    }
}

impl From<i64> for Expression {
    fn from(value: i64) -> Self {
        Self::Literal(value.into())
    }
}

impl From<f64> for Expression {
    fn from(value: f64) -> Self {
        Self::Literal(value.into())
    }
}

impl From<&str> for Expression {
    fn from(value: &str) -> Self {
        Self::Literal(value.into())
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::String(s) if s.contains('"') => write!(f, "'{s}'"),
            Self::String(s) => write!(f, "\"{s}\""),
        }
    }
}

/// Renders the tree in a fully parenthesised prefix form, e.g.
/// `(+ 1 (* 3 2))`. Function calls keep their call syntax.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "{value}"),
            Self::UnaryOp { op, operand } => write!(f, "({op} {operand})"),
            Self::BinaryOp { op, left, right } => write!(f, "({op} {left} {right})"),
            Self::FunctionCall { name, args } => {
                write!(f, "{name}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            },
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `=`
    Equal,
    /// `!=`
    NotEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `and`
    And,
    /// `or`
    Or,
}

impl BinaryOperator {
    /// Every binary operator, in declaration order.
    pub const ALL: [Self; 12] = [Self::Add,
                                 Self::Sub,
                                 Self::Mul,
                                 Self::Div,
                                 Self::Equal,
                                 Self::NotEqual,
                                 Self::Greater,
                                 Self::GreaterEqual,
                                 Self::Less,
                                 Self::LessEqual,
                                 Self::And,
                                 Self::Or];

    /// The operator as written in source text.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Represents a unary (prefix) operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Numeric negation, `-`.
    Negate,
    /// Logical not, `!`.
    Not,
}

impl UnaryOperator {
    /// Every unary operator, in declaration order.
    pub const ALL: [Self; 2] = [Self::Negate, Self::Not];

    /// The operator as written in source text.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Negate => "-",
            Self::Not => "!",
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
