use crate::{
    error::Error,
    interpreter::{
        evaluator::core::{Halt, evaluate_line},
        value::core::Value,
        variables::VariableStore,
    },
};

/// The result of evaluating one line.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The line produced a value.
    Value(Value),
    /// Evaluation failed; the session continues with the next line.
    Error(Error),
    /// The line asked to end the session (`EXIT`).
    Exit,
    /// The line was blank.
    Empty,
}

/// Evaluates one line against a caller-owned variable store.
///
/// Blank lines produce [`Outcome::Empty`] without touching the store.
///
/// # Example
/// ```
/// use linecalc::{Outcome, evaluate, interpreter::{value::core::Value, variables::VariableStore}};
///
/// let mut store = VariableStore::new();
/// assert_eq!(evaluate("x = 5", &mut store), Outcome::Value(Value::from(5_i64)));
/// assert_eq!(evaluate("x + 1", &mut store), Outcome::Value(Value::from(6_i64)));
/// assert_eq!(evaluate("EXIT", &mut store), Outcome::Exit);
/// ```
pub fn evaluate(line: &str, variables: &mut VariableStore) -> Outcome {
    if line.trim().is_empty() {
        return Outcome::Empty;
    }

    match evaluate_line(line, variables) {
        Ok(value) => Outcome::Value(value),
        Err(Halt::Exit) => Outcome::Exit,
        Err(Halt::Error(e)) => Outcome::Error(e),
    }
}

/// The outcome of one line of a script, with its 1-based line number.
#[derive(Debug, Clone, PartialEq)]
pub struct LineOutcome {
    pub line:    usize,
    pub outcome: Outcome,
}

/// A calculator session.
///
/// Variables assigned by one line stay visible to all later lines evaluated
/// by the same `Calculator`. A failed line keeps whatever it assigned before
/// failing.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    variables: VariableStore,
}

impl Calculator {
    /// Creates a session with no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates one line in this session.
    pub fn eval_line(&mut self, line: &str) -> Outcome {
        evaluate(line, &mut self.variables)
    }

    /// The variables assigned so far.
    #[must_use]
    pub const fn variables(&self) -> &VariableStore {
        &self.variables
    }

    /// Evaluates every non-blank line of `source` in order.
    ///
    /// Errors do not stop the script. An `EXIT` line is reported and ends it;
    /// later lines are not evaluated.
    ///
    /// # Example
    /// ```
    /// use linecalc::{Calculator, Outcome};
    ///
    /// let mut calculator = Calculator::new();
    /// let results = calculator.run_script("a = 2\n\nz\na * 3\nEXIT\na = 9");
    ///
    /// let lines = results.iter().map(|r| r.line).collect::<Vec<_>>();
    /// assert_eq!(lines, [1, 3, 4, 5]);
    /// assert!(matches!(results[1].outcome, Outcome::Error(_)));
    /// assert_eq!(results[2].outcome.to_string(), "6");
    /// assert_eq!(results[3].outcome, Outcome::Exit);
    /// ```
    pub fn run_script(&mut self, source: &str) -> Vec<LineOutcome> {
        let mut results = Vec::new();

        for (index, line) in source.lines().enumerate() {
            let outcome = self.eval_line(line);
            if outcome == Outcome::Empty {
                continue;
            }

            let exit = outcome == Outcome::Exit;
            results.push(LineOutcome { line: index + 1,
                                       outcome });
            if exit {
                break;
            }
        }

        results
    }
}

impl std::fmt::Display for Outcome {
    /// Values print as they are shown to users; errors as `error: <kind>`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v}"),
            Self::Error(e) => write!(f, "error: {}", e.kind()),
            Self::Exit | Self::Empty => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn variables_persist_between_lines() {
        let mut calculator = Calculator::new();
        calculator.eval_line("x = 5");

        assert_eq!(calculator.eval_line("x + 1"), Outcome::Value(Value::from(6_i64)));
        assert_eq!(calculator.variables().len(), 1);
    }

    #[test]
    fn failed_line_keeps_earlier_assignments() {
        let mut calculator = Calculator::new();
        calculator.eval_line("x = 1");

        let outcome = calculator.eval_line("(x = 7) + 1 / 0");
        assert!(matches!(outcome, Outcome::Error(ref e) if e.kind() == ErrorKind::Arithmetic));
        assert_eq!(calculator.variables().get("x", 0), Ok(Value::from(7_i64)));
    }

    #[test]
    fn blank_lines_are_empty() {
        let mut calculator = Calculator::new();
        assert_eq!(calculator.eval_line("   "), Outcome::Empty);
        assert_eq!(calculator.eval_line(""), Outcome::Empty);
    }
}
