#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing a line.
pub enum LexError {
    /// Found a character that does not start any token.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the line.
        position:  usize,
    },
}

impl LexError {
    /// Byte offset at which lexing failed.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::InvalidCharacter { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, position } => {
                write!(f, "Invalid character '{character}' at position {position}.")
            },
        }
    }
}

impl std::error::Error for LexError {}
