#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while executing an expression tree.
pub enum ExecutorError {
    /// Called a function that is not in the function table.
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// A function received the wrong number of arguments.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The number of arguments the function accepts.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// An operator does not support the types of its operands.
    TypeMismatch {
        /// The operator symbol.
        operator: String,
        /// Type names of the operands, left to right.
        operands: Vec<&'static str>,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// Integer arithmetic overflowed.
    Overflow {
        /// The operator symbol.
        operator: String,
    },
    /// An integer operand could not be converted to a float without rounding.
    PrecisionLoss {
        /// The integer that was being promoted.
        value: i64,
    },
    /// Some other failure, typically raised by a host function.
    Other {
        /// Details about the failure.
        message: String,
    },
}

impl ExecutorError {
    /// Builds an [`ExecutorError::Other`] from any message.
    ///
    /// Host functions use this to report their own failures.
    #[must_use]
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other { message: message.into() }
    }
}

impl std::fmt::Display for ExecutorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownFunction { name } => write!(f, "Function '{name}' is not defined"),
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found, } => write!(f,
                                                             "Function '{name}' expects {expected} arguments but {found} were given"),
            Self::TypeMismatch { operator, operands } => write!(f,
                                                                "Operator '{operator}' is not supported for operand types ({})",
                                                                operands.join(", ")),
            Self::DivisionByZero => write!(f, "Division by zero"),
            Self::Overflow { operator } => write!(f,
                                                  "Integer overflow while computing operator '{operator}'"),
            Self::PrecisionLoss { value } => write!(f,
                                                    "Integer {value} cannot be represented exactly as a float"),
            Self::Other { message } => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for ExecutorError {}
