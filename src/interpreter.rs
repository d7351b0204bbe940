/// The calculator module keeps state between lines.
///
/// A `Calculator` owns the variable store for the lifetime of a session and
/// evaluates one line per call, reporting each line's [`Outcome`]. It also
/// runs whole scripts line by line.
///
/// # Responsibilities
/// - Owns the `VariableStore` shared by all lines of a session.
/// - Converts evaluator results into values, errors or exit requests.
/// - Skips blank lines.
///
/// [`Outcome`]: calculator::Outcome
pub mod calculator;
/// The evaluator module computes results while it parses.
///
/// The evaluator pulls tokens from the lexer one at a time and evaluates each
/// precedence level as it descends, without building a syntax tree. It reads
/// and writes variables, dispatches builtin functions and evaluates chained
/// comparisons.
///
/// # Responsibilities
/// - Implements the grammar, from assignment down to primary expressions.
/// - Enforces where assignments may appear.
/// - Reports syntax, name and arithmetic errors with their position.
pub mod evaluator;
/// The lexer module tokenizes a line for the evaluator.
///
/// The lexer reads the raw text and produces a stream of tokens: numbers,
/// function and variable names, operators and punctuation. This is the first
/// stage of evaluation.
///
/// # Responsibilities
/// - Converts the input characters into tokens on demand.
/// - Distinguishes builtin function names from variable names.
/// - Reports invalid characters.
pub mod lexer;
/// The value module defines the runtime data types for evaluation.
pub mod value;
/// The variables module stores assigned variables between lines.
pub mod variables;
