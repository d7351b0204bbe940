#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors caused by a token sequence that violates the grammar.
pub enum SyntaxError {
    /// Found a token other than the one the grammar requires.
    UnexpectedToken {
        /// Description of what was expected.
        expected: String,
        /// The token encountered.
        found:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// The line ended while more input was required.
    UnexpectedEndOfInput {
        /// Description of what was expected.
        expected: String,
        /// Byte offset of the end of the line.
        position: usize,
    },
    /// An assignment appeared where only a value may stand, e.g. `1 + x = 5`.
    AssignmentNotAllowed {
        /// The variable that was about to be assigned.
        name:     String,
        /// Byte offset of the `=` token.
        position: usize,
    },
    /// A function call was used as the target of an assignment.
    AssignmentToFunctionCall {
        /// The function name.
        function: String,
        /// Byte offset of the `=` token.
        position: usize,
    },
    /// The expression was complete but more tokens followed it.
    TrailingInput {
        /// The first extra token.
        found:    String,
        /// Byte offset of the extra token.
        position: usize,
    },
}

impl SyntaxError {
    /// Byte offset at which the grammar was violated.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position, .. }
            | Self::AssignmentNotAllowed { position, .. }
            | Self::AssignmentToFunctionCall { position, .. }
            | Self::TrailingInput { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    position, } => write!(f,
                                                          "Invalid syntax at position {position}: expected {expected}, found {found}."),
            Self::UnexpectedEndOfInput { expected, position } => write!(f,
                                                                        "Invalid syntax at position {position}: expected {expected}, found end of input."),
            Self::AssignmentNotAllowed { name, position } => write!(f,
                                                                    "Invalid syntax at position {position}: cannot assign to '{name}' here."),
            Self::AssignmentToFunctionCall { function, position } => write!(f,
                                                                            "Invalid syntax at position {position}: cannot assign to a call of {function}."),
            Self::TrailingInput { found, position } => write!(f,
                                                              "Invalid syntax at position {position}: unexpected {found} after expression."),
        }
    }
}

impl std::error::Error for SyntaxError {}
