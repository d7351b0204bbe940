/// Binary operator evaluation.
///
/// The additive and multiplicative precedence levels, the comparison chain
/// that sits above them, and the arithmetic on values.
pub mod binary;

/// Unary sign folding and primary expressions.
///
/// Handles runs of `+`/`-`, literals, variable reads and in-place
/// assignments, function calls and parenthesized sub-expressions.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the evaluator itself, the token cursor with its two-token
/// history, the top-level assignment rule and error propagation.
pub mod core;

/// Utility functions for evaluation.
///
/// Provides result checks shared by the builtin functions.
pub mod utils;

/// Function evaluation.
///
/// Defines the fixed set of builtin functions and dispatches calls to them.
pub mod function;
