/// Additive and multiplicative precedence levels.
pub mod core;

/// Chained comparisons.
///
/// Evaluates `a < b <= c ...` as the conjunction of its pairwise links.
pub mod comparison;

/// Scalar arithmetic.
///
/// Applies `+`, `-`, `*` and `/` to integers, reals and coerced booleans.
pub mod scalar;
