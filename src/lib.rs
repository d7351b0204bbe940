//! # linecalc
//!
//! linecalc is a line-oriented calculator written in Rust.
//! Each line is tokenized, parsed and evaluated in a single pass, without an
//! intermediate syntax tree. Lines may assign variables, which stay available
//! to all later lines of the same session.
//!
//! ```
//! use linecalc::{Calculator, Outcome};
//!
//! let mut calculator = Calculator::new();
//! calculator.eval_line("x = y = 7");
//!
//! assert_eq!(calculator.eval_line("x + y").to_string(), "14");
//! assert_eq!(calculator.eval_line("1 < x < 10").to_string(), "true");
//! assert_eq!(calculator.eval_line("SQRT(2)").to_string(), "1.414");
//! assert_eq!(calculator.eval_line("POW(10, 20)").to_string(), "100000000000000000000");
//! assert_eq!(calculator.eval_line("EXIT"), Outcome::Exit);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides unified error types for lexing and evaluation.
///
/// This module defines all errors that can be raised while a line is
/// tokenized, parsed or computed. Every error carries the byte offset in the
/// line at which it was detected, and every error belongs to one of four
/// categories: lex, syntax, name or arithmetic.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, grammar, runtime).
/// - Classifies errors through [`error::ErrorKind`].
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the evaluation of lines.
///
/// This module ties together lexing, evaluation, value representations and
/// the variable store to provide a complete calculator session. It exposes
/// the public API for evaluating single lines or whole scripts.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, evaluator, values and
///   variables.
/// - Provides entry points for evaluating user input.
/// - Manages the flow of values, errors and exit requests between phases.
pub mod interpreter;
/// General utilities for numeric conversion.
///
/// Conversions between arbitrary-precision integers and `f64` used by
/// promotion in mixed arithmetic and by the normalization of function
/// results.
pub mod util;

pub use interpreter::calculator::{Calculator, LineOutcome, Outcome, evaluate};
