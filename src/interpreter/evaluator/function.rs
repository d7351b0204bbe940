/// Trigonometric builtins.
///
/// `SIN`, `COS`, `TAN` and `CTG`.
pub mod builtin;
/// The `LOG` (base 10 logarithm) function implementation.
pub mod log;
/// The `POW` function implementation.
///
/// Raises a base to an arbitrary real exponent.
pub mod pow;
/// The `SQRT` (square root) function implementation.
pub mod sqrt;

pub mod core;
