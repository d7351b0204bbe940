#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while computing a value.
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    UnknownVariable {
        /// The name of the variable.
        name:     String,
        /// Byte offset of the variable in the line.
        position: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// Byte offset of the operator or call that divided.
        position: usize,
    },
    /// A function was applied outside of its domain, e.g. `SQRT(-1)`.
    DomainError {
        /// The name of the function.
        function: String,
        /// Byte offset of the call.
        position: usize,
    },
    /// A real result, or an integer converted to a real, is too large to be
    /// represented as an `f64`.
    Overflow {
        /// Byte offset of the operation.
        position: usize,
    },
}

impl RuntimeError {
    /// Byte offset at which evaluation failed.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnknownVariable { position, .. }
            | Self::DivisionByZero { position }
            | Self::DomainError { position, .. }
            | Self::Overflow { position } => *position,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, position } => {
                write!(f, "Unknown variable '{name}' at position {position}.")
            },
            Self::DivisionByZero { position } => {
                write!(f, "Division by zero at position {position}.")
            },
            Self::DomainError { function, position } => write!(f,
                                                                "Math domain error in {function} at position {position}."),
            Self::Overflow { position } => write!(f,
                                                  "Numeric overflow while computing result at position {position}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
