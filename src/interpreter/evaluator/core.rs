use crate::{
    error::{Error, LexError, RuntimeError, SyntaxError},
    interpreter::{
        lexer::{Lexer, Token},
        value::core::Value,
        variables::VariableStore,
    },
};

/// Result type used by value-level operations.
///
/// Arithmetic and builtin functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Result type used by the grammar methods of [`Evaluator`].
///
/// Besides errors of every phase these can stop with [`Halt::Exit`].
pub type LineResult<T> = Result<T, Halt>;

/// Variable name that ends the session when it starts an assignment.
pub const EXIT_KEYWORD: &str = "EXIT";

/// Why evaluation of a line stopped before producing a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Halt {
    /// `EXIT` was reached in assignment position. Not an error.
    Exit,
    /// Lexing, parsing or computing failed.
    Error(Error),
}

impl From<Error> for Halt {
    fn from(e: Error) -> Self {
        Self::Error(e)
    }
}

impl From<LexError> for Halt {
    fn from(e: LexError) -> Self {
        Self::Error(e.into())
    }
}

impl From<SyntaxError> for Halt {
    fn from(e: SyntaxError) -> Self {
        Self::Error(e.into())
    }
}

impl From<RuntimeError> for Halt {
    fn from(e: RuntimeError) -> Self {
        Self::Error(e.into())
    }
}

/// Evaluates one line while parsing it.
///
/// There is no syntax tree: every grammar method consumes its tokens and
/// returns the computed value, reading and writing the borrowed
/// [`VariableStore`] as it goes. Assignments made before a failure therefore
/// stay in effect.
///
/// The evaluator keeps one token of lookahead (`current`) and remembers the
/// two most recently consumed tokens, which the in-place assignment rule
/// needs to reject `1 + x = 5`.
///
/// # Example
/// ```
/// use linecalc::interpreter::{
///     evaluator::core::Evaluator, value::core::Value, variables::VariableStore,
/// };
///
/// let mut store = VariableStore::new();
/// let value = Evaluator::new("x = 2 * 3", &mut store).and_then(Evaluator::evaluate);
///
/// assert_eq!(value.unwrap(), Value::from(6_i64));
/// assert_eq!(store.get("x", 0).unwrap(), Value::from(6_i64));
/// ```
pub struct Evaluator<'src, 'store> {
    lexer:                   Lexer<'src>,
    pub(crate) variables:    &'store mut VariableStore,
    /// The lookahead token; `None` at the end of the line.
    pub(crate) current:      Option<Token>,
    /// Byte offset of `current`.
    pub(crate) position:     usize,
    /// The most recently consumed token.
    last:                    Option<Token>,
    /// The token consumed before `last`.
    pub(crate) before_last:  Option<Token>,
}

impl<'src, 'store> Evaluator<'src, 'store> {
    /// Creates an evaluator over `source` and reads the first token.
    ///
    /// # Errors
    /// Fails if the first token cannot be lexed.
    pub fn new(source: &'src str, variables: &'store mut VariableStore) -> LineResult<Self> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        let position = lexer.position();

        Ok(Self { lexer,
                  variables,
                  current,
                  position,
                  last: None,
                  before_last: None })
    }

    /// Evaluates the whole line.
    ///
    /// The line is an assignment (which covers plain expressions) and must
    /// be followed by the end of input.
    ///
    /// # Errors
    /// Returns [`Halt::Exit`] when the line asks to end the session, or the
    /// first error encountered.
    pub fn evaluate(mut self) -> LineResult<Value> {
        let value = self.eval_assignment()?;

        match &self.current {
            None => Ok(value),
            Some(token) => Err(SyntaxError::TrailingInput { found:    token.to_string(),
                                                            position: self.position, }.into()),
        }
    }

    /// Evaluates the top-level assignment rule.
    ///
    /// Grammar:
    /// ```text
    ///     assignment := VAR '=' assignment
    ///                 | comparison
    /// ```
    /// - `EXIT` stops evaluation with [`Halt::Exit`].
    /// - An unbound variable followed by `=` is created with the value of the
    ///   right-hand side, which is itself an assignment, so `x = y = 5` binds
    ///   both names.
    /// - An unbound variable followed by anything else is an unknown
    ///   variable.
    /// - Everything else, including bound variables, is a comparison; a bound
    ///   variable is reassigned inside [`eval_primary`](Self::eval_primary).
    pub(crate) fn eval_assignment(&mut self) -> LineResult<Value> {
        if let Some(Token::Variable(name)) = &self.current {
            if name == EXIT_KEYWORD {
                return Err(Halt::Exit);
            }

            if !self.variables.contains(name) {
                let name = name.clone();
                let position = self.position;
                self.advance()?;

                if self.current != Some(Token::Assign) {
                    return Err(RuntimeError::UnknownVariable { name, position }.into());
                }
                self.advance()?;

                let value = self.eval_assignment()?;
                self.variables.set(&name, value.clone());
                return Ok(value);
            }
        }

        self.eval_comparison()
    }

    /// Consumes `current`, shifts the token history and reads the next token.
    pub(crate) fn advance(&mut self) -> LineResult<()> {
        let next = self.lexer.next_token()?;

        self.before_last = self.last.take();
        self.last = std::mem::replace(&mut self.current, next);
        self.position = self.lexer.position();
        Ok(())
    }

    /// Consumes `current` if it equals `expected`.
    ///
    /// # Errors
    /// A syntax error mentioning `description` otherwise.
    pub(crate) fn expect(&mut self, expected: &Token, description: &str) -> LineResult<()> {
        if self.current.as_ref() == Some(expected) {
            self.advance()
        } else {
            Err(self.unexpected(description).into())
        }
    }

    /// Builds the error for a `current` token that the grammar does not allow.
    pub(crate) fn unexpected(&self, expected: &str) -> SyntaxError {
        match &self.current {
            Some(token) => SyntaxError::UnexpectedToken { expected: expected.to_string(),
                                                          found:    token.to_string(),
                                                          position: self.position, },
            None => SyntaxError::UnexpectedEndOfInput { expected: expected.to_string(),
                                                        position: self.position, },
        }
    }
}

/// Evaluates a single line against `variables`.
///
/// Shorthand for [`Evaluator::new`] followed by [`Evaluator::evaluate`].
pub fn evaluate_line(source: &str, variables: &mut VariableStore) -> LineResult<Value> {
    Evaluator::new(source, variables)?.evaluate()
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;

    use super::*;
    use crate::error::ErrorKind;

    fn kind(result: LineResult<Value>) -> ErrorKind {
        match result {
            Err(Halt::Error(e)) => e.kind(),
            other => panic!("expected an error, got {other:?}"),
        }
    }

    #[test]
    fn exit_halts_at_top_level_and_after_assignment() {
        let mut store = VariableStore::new();
        assert_eq!(evaluate_line("EXIT", &mut store), Err(Halt::Exit));
        assert_eq!(evaluate_line("x = EXIT", &mut store), Err(Halt::Exit));
        assert!(!store.contains("x"));
    }

    #[test]
    fn exit_inside_expression_is_an_unknown_variable() {
        let mut store = VariableStore::new();
        assert_eq!(kind(evaluate_line("1 + EXIT", &mut store)), ErrorKind::Name);
    }

    #[test]
    fn history_tracks_two_tokens() {
        let mut store = VariableStore::new();
        let mut evaluator = Evaluator::new("1 + 2", &mut store).unwrap();
        evaluator.advance().unwrap();
        evaluator.advance().unwrap();

        assert_eq!(evaluator.before_last, Some(Token::Integer(BigInt::from(1))));
        assert_eq!(evaluator.last, Some(Token::Plus));
        assert_eq!(evaluator.current, Some(Token::Integer(BigInt::from(2))));
        assert_eq!(evaluator.position, 4);
    }

    #[test]
    fn trailing_tokens_are_rejected() {
        let mut store = VariableStore::new();
        assert_eq!(evaluate_line("1 2", &mut store),
                   Err(Halt::Error(SyntaxError::TrailingInput { found:    "number 2".to_string(),
                                                                position: 2, }.into())));
        assert_eq!(kind(evaluate_line("(1))", &mut store)), ErrorKind::Syntax);
    }

    #[test]
    fn lex_error_on_first_token() {
        let mut store = VariableStore::new();
        assert_eq!(kind(evaluate_line("$", &mut store)), ErrorKind::Lex);
    }
}
