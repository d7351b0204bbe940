/// Lexing errors.
///
/// Raised while the raw line is split into tokens, for characters the
/// calculator does not understand.
pub mod lex_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while a value is being
/// computed: reading unknown variables, division by zero, math domain errors
/// and overflow.
pub mod runtime_error;
/// Syntax errors.
///
/// Raised when the token sequence does not follow the grammar, including
/// assignments in positions where they are not allowed.
pub mod syntax_error;

pub use lex_error::LexError;
pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;

/// Coarse classification of an [`Error`].
///
/// Callers that only care about the category of a failure (for example the
/// book tests, which print `error: name`) match on this instead of on the
/// individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An unrecognized character.
    Lex,
    /// A token sequence that violates the grammar.
    Syntax,
    /// A read of a variable that was never assigned.
    Name,
    /// A failed numeric operation.
    Arithmetic,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex => write!(f, "lex"),
            Self::Syntax => write!(f, "syntax"),
            Self::Name => write!(f, "name"),
            Self::Arithmetic => write!(f, "arithmetic"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Any error that aborts the evaluation of a line.
pub enum Error {
    /// The line could not be tokenized.
    Lex(LexError),
    /// The tokens do not form a valid expression.
    Syntax(SyntaxError),
    /// The expression was well formed but could not be computed.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns the category of this error.
    ///
    /// # Example
    /// ```
    /// use linecalc::error::{Error, ErrorKind, RuntimeError};
    ///
    /// let err = Error::from(RuntimeError::UnknownVariable { name:     "z".to_string(),
    ///                                                       position: 0, });
    /// assert_eq!(err.kind(), ErrorKind::Name);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lex(_) => ErrorKind::Lex,
            Self::Syntax(_) => ErrorKind::Syntax,
            Self::Runtime(RuntimeError::UnknownVariable { .. }) => ErrorKind::Name,
            Self::Runtime(_) => ErrorKind::Arithmetic,
        }
    }

    /// Byte offset in the line at which the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Lex(e) => e.position(),
            Self::Syntax(e) => e.position(),
            Self::Runtime(e) => e.position(),
        }
    }

    /// Character column of [`Error::position`] within `source`, the line the
    /// error came from. Used to point at the error under the echoed input.
    ///
    /// # Example
    /// ```
    /// use linecalc::error::{Error, LexError};
    ///
    /// let err = Error::from(LexError::InvalidCharacter { character: '&',
    ///                                                    position:  5, });
    /// assert_eq!(err.column("π + & 1"), 4);
    /// ```
    #[must_use]
    pub fn column(&self, source: &str) -> usize {
        let position = self.position().min(source.len());
        source.get(..position).map_or(position, |prefix| prefix.chars().count())
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<SyntaxError> for Error {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_counts_characters() {
        let err = Error::from(SyntaxError::TrailingInput { found:    "')'".to_string(),
                                                           position: 6, });
        assert_eq!(err.position(), 6);
        assert_eq!(err.column("x = 5 )"), 6);
    }

    #[test]
    fn column_at_end_of_line() {
        let err = Error::from(RuntimeError::UnknownVariable { name:     "z".to_string(),
                                                              position: 10, });
        assert_eq!(err.column("z"), 1);
    }
}
