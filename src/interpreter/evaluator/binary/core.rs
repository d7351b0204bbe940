use crate::interpreter::{
    evaluator::{
        binary::scalar::eval_scalar_op,
        core::{Evaluator, LineResult},
    },
    lexer::Token,
    value::core::Value,
};

/// Represents an arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ArithmeticOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`), always producing a real.
    Div,
}

impl std::fmt::Display for ArithmeticOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Sub => write!(f, "-"),
            Self::Mul => write!(f, "*"),
            Self::Div => write!(f, "/"),
        }
    }
}

/// Maps a token to the arithmetic operator it denotes, if any.
#[must_use]
pub const fn token_to_arithmetic_operator(token: &Token) -> Option<ArithmeticOperator> {
    match token {
        Token::Plus => Some(ArithmeticOperator::Add),
        Token::Minus => Some(ArithmeticOperator::Sub),
        Token::Star => Some(ArithmeticOperator::Mul),
        Token::Slash => Some(ArithmeticOperator::Div),
        _ => None,
    }
}

impl Evaluator<'_, '_> {
    /// Evaluates addition and subtraction.
    ///
    /// Handles left-associative binary operators: `+` and `-`.
    ///
    /// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
    pub(crate) fn eval_additive(&mut self) -> LineResult<Value> {
        let mut left = self.eval_multiplicative()?;
        loop {
            if let Some(op) = self.current.as_ref().and_then(token_to_arithmetic_operator)
               && matches!(op, ArithmeticOperator::Add | ArithmeticOperator::Sub)
            {
                let position = self.position;
                self.advance()?;
                let right = self.eval_multiplicative()?;
                left = eval_scalar_op(op, left, right, position)?;
                continue;
            }
            break;
        }
        Ok(left)
    }

    /// Evaluates multiplication and division.
    ///
    /// The rule is: `multiplicative := unary (("*" | "/") unary)*`
    pub(crate) fn eval_multiplicative(&mut self) -> LineResult<Value> {
        let mut left = self.eval_unary()?;
        loop {
            if let Some(op) = self.current.as_ref().and_then(token_to_arithmetic_operator)
               && matches!(op, ArithmeticOperator::Mul | ArithmeticOperator::Div)
            {
                let position = self.position;
                self.advance()?;
                let right = self.eval_unary()?;
                left = eval_scalar_op(op, left, right, position)?;
                continue;
            }
            break;
        }
        Ok(left)
    }
}
