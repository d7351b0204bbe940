use std::cmp::Ordering;

use crate::interpreter::{
    evaluator::core::{Evaluator, LineResult},
    lexer::Token,
    value::core::Value,
};

/// Represents a relational operator inside a comparison chain.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ComparisonOperator {
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `==`
    Equal,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
}

impl ComparisonOperator {
    /// Maps a token to the comparison operator it denotes, if any.
    #[must_use]
    pub const fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Less => Some(Self::Less),
            Token::Greater => Some(Self::Greater),
            Token::EqualEqual => Some(Self::Equal),
            Token::LessEqual => Some(Self::LessEqual),
            Token::GreaterEqual => Some(Self::GreaterEqual),
            _ => None,
        }
    }

    /// Tests one link `last OP curr` of a chain.
    ///
    /// Each operator names the ordering of `curr` against `last` that breaks
    /// the link:
    ///
    /// | operator | fails when        |
    /// |----------|-------------------|
    /// | `<`      | `curr <= last`    |
    /// | `>`      | `curr >= last`    |
    /// | `==`     | `curr != last`    |
    /// | `<=`     | `curr < last`     |
    /// | `>=`     | `curr > last`     |
    ///
    /// An unordered pair (a NaN operand) therefore breaks only `==`.
    ///
    /// # Example
    /// ```
    /// use linecalc::interpreter::{
    ///     evaluator::binary::comparison::ComparisonOperator, value::core::Value,
    /// };
    ///
    /// let one = Value::from(1_i64);
    /// let two = Value::from(2_i64);
    ///
    /// assert!(ComparisonOperator::Less.link_holds(&one, &two));
    /// assert!(!ComparisonOperator::Less.link_holds(&two, &one));
    /// assert!(ComparisonOperator::LessEqual.link_holds(&one, &one));
    /// ```
    #[must_use]
    pub fn link_holds(self, last: &Value, curr: &Value) -> bool {
        let ordering = curr.compare(last);

        let fails = match self {
            Self::Less => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
            Self::Greater => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
            Self::Equal => ordering != Some(Ordering::Equal),
            Self::LessEqual => ordering == Some(Ordering::Less),
            Self::GreaterEqual => ordering == Some(Ordering::Greater),
        };

        !fails
    }
}

impl Evaluator<'_, '_> {
    /// Evaluates a comparison chain.
    ///
    /// The rule is: `comparison := additive (("<" | ">" | "==" | "<=" | ">=")
    /// additive)*`
    ///
    /// The chain is not associative: `a < b < c` is not `(a < b) < c` but the
    /// conjunction of `a < b` and `b < c`. Every operand is evaluated even
    /// after a link has failed. Without any comparison operator the additive
    /// value is returned unchanged; otherwise the result is a boolean.
    pub(crate) fn eval_comparison(&mut self) -> LineResult<Value> {
        let mut last = self.eval_additive()?;
        if self.current.as_ref().and_then(ComparisonOperator::from_token).is_none() {
            return Ok(last);
        }

        let mut holds = true;
        while let Some(op) = self.current.as_ref().and_then(ComparisonOperator::from_token) {
            self.advance()?;

            let curr = self.eval_additive()?;
            holds &= op.link_holds(&last, &curr);
            last = curr;
        }

        Ok(Value::from(holds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ErrorKind,
        interpreter::{
            evaluator::core::{Halt, evaluate_line},
            variables::VariableStore,
        },
    };

    fn eval(source: &str) -> Value {
        evaluate_line(source, &mut VariableStore::new()).unwrap()
    }

    #[test]
    fn chains_are_conjunctions() {
        assert_eq!(eval("1 < 2 < 3"), Value::Bool(true));
        assert_eq!(eval("3 < 2 < 1"), Value::Bool(false));
        assert_eq!(eval("1 < 3 > 2"), Value::Bool(true));
        assert_eq!(eval("1 < 3 < 2"), Value::Bool(false));
        assert_eq!(eval("2 <= 2 >= 1 == 1"), Value::Bool(true));
    }

    #[test]
    fn single_comparisons() {
        assert_eq!(eval("5 == 5"), Value::Bool(true));
        assert_eq!(eval("5 == 5.0"), Value::Bool(true));
        assert_eq!(eval("4 > 5"), Value::Bool(false));
        assert_eq!(eval("2.5 >= 2"), Value::Bool(true));
    }

    #[test]
    fn no_operator_keeps_the_arithmetic_value() {
        assert_eq!(eval("1 + 1"), Value::from(2_i64));
    }

    #[test]
    fn operands_are_arithmetic_expressions() {
        assert_eq!(eval("1 + 1 == 4 / 2"), Value::Bool(true));
    }

    #[test]
    fn failed_link_does_not_skip_later_operands() {
        let mut store = VariableStore::new();
        assert!(matches!(evaluate_line("3 < 2 < z", &mut store),
                         Err(Halt::Error(e)) if e.kind() == ErrorKind::Name));

        evaluate_line("x = 1", &mut store).unwrap();
        assert_eq!(evaluate_line("1 > 2 < (x = 9)", &mut store), Ok(Value::Bool(false)));
        assert_eq!(store.get("x", 0), Ok(Value::from(9_i64)));
    }

    #[test]
    fn nan_only_breaks_equality() {
        let nan = Value::Real(f64::NAN);
        let one = Value::from(1_i64);
        assert!(ComparisonOperator::Less.link_holds(&nan, &one));
        assert!(ComparisonOperator::GreaterEqual.link_holds(&one, &nan));
        assert!(!ComparisonOperator::Equal.link_holds(&nan, &nan));
    }
}
