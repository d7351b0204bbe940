use logos::Logos;
use num_bigint::BigInt;
use num_traits::Num;

use crate::{error::LexError, interpreter::evaluator::function::core::Builtin};

/// Represents a lexical token in a line of input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// The end of the line is not a token; [`Lexer::next_token`] reports it as
/// `None`.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens with a decimal point, such as `3.14`, `.5` or
    /// `2.`.
    #[regex(r"[0-9]+\.[0-9]*", parse_real)]
    #[regex(r"\.[0-9]*", parse_real)]
    Real(f64),
    /// Integer literal tokens, such as `42`. There is no size limit.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(BigInt),
    /// One of the builtin function names. Matching is case sensitive.
    #[token("SIN", |_| Builtin::Sin)]
    #[token("COS", |_| Builtin::Cos)]
    #[token("TAN", |_| Builtin::Tan)]
    #[token("CTG", |_| Builtin::Ctg)]
    #[token("SQRT", |_| Builtin::Sqrt)]
    #[token("POW", |_| Builtin::Pow)]
    #[token("LOG", |_| Builtin::Log)]
    Function(Builtin),
    /// Variable names; any run of letters that is not a function name.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Variable(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `=`
    #[token("=")]
    Assign,
    /// Whitespace between tokens, including Unicode spaces and the ASCII
    /// separator controls.
    #[regex(r"[\s\x1C-\x1F]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns `true` for the operators that may precede an operand: `+`, `-`,
    /// `*` and `/`.
    ///
    /// An assignment directly after one of these is rejected.
    #[must_use]
    pub const fn is_arithmetic_operator(&self) -> bool {
        matches!(self, Self::Plus | Self::Minus | Self::Star | Self::Slash)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(r) => write!(f, "number {r}"),
            Self::Integer(n) => write!(f, "number {n}"),
            Self::Function(b) => write!(f, "function {}", b.name()),
            Self::Variable(name) => write!(f, "variable '{name}'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Comma => write!(f, "','"),
            Self::Less => write!(f, "'<'"),
            Self::Greater => write!(f, "'>'"),
            Self::EqualEqual => write!(f, "'=='"),
            Self::LessEqual => write!(f, "'<='"),
            Self::GreaterEqual => write!(f, "'>='"),
            Self::Assign => write!(f, "'='"),
            Self::Ignored => write!(f, "whitespace"),
        }
    }
}

/// Parses a literal with a decimal point from the current token slice.
///
/// A missing integer part defaults to `0`, so `.5` is `0.5` and a lone `.`
/// is `0.0`.
fn parse_real(lex: &logos::Lexer<Token>) -> Option<f64> {
    let slice = lex.slice();
    if slice.starts_with('.') {
        format!("0{slice}").parse().ok()
    } else {
        slice.parse().ok()
    }
}

/// Parses an integer literal of any length from the current token slice.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<BigInt> {
    BigInt::from_str_radix(lex.slice(), 10).ok()
}

/// Pull-based tokenizer over a single line.
///
/// Wraps the generated logos lexer and turns its failures into
/// [`LexError`]s. Once the line is exhausted every further call returns
/// `Ok(None)`.
///
/// # Example
/// ```
/// use linecalc::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("x <= 2.5");
/// assert_eq!(lexer.next_token().unwrap(), Some(Token::Variable("x".to_string())));
/// assert_eq!(lexer.next_token().unwrap(), Some(Token::LessEqual));
/// assert_eq!(lexer.next_token().unwrap(), Some(Token::Real(2.5)));
/// assert_eq!(lexer.next_token().unwrap(), None);
/// assert_eq!(lexer.next_token().unwrap(), None);
/// ```
pub struct Lexer<'src> {
    source:   &'src str,
    inner:    logos::Lexer<'src, Token>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { source,
               inner: Token::lexer(source),
               finished: false }
    }

    /// Returns the next token, `Ok(None)` at the end of the line, or the
    /// reason the text at the cursor is not a token.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        if self.finished {
            return Ok(None);
        }

        match self.inner.next() {
            Some(Ok(token)) => Ok(Some(token)),
            Some(Err(())) => Err(self.error_at_cursor()),
            None => {
                self.finished = true;
                Ok(None)
            },
        }
    }

    /// Byte offset where the most recently returned token starts, or the
    /// length of the line once the end has been reached.
    #[must_use]
    pub fn position(&self) -> usize {
        if self.finished {
            self.source.len()
        } else {
            self.inner.span().start
        }
    }

    fn error_at_cursor(&self) -> LexError {
        let position = self.inner.span().start;
        let character = self.source[position..].chars().next().unwrap_or('\0');
        LexError::InvalidCharacter { character, position }
    }
}
