use crate::{
    error::RuntimeError,
    interpreter::evaluator::{core::EvalResult, utils::checked_result},
};

/// Applies a one-argument real function and checks the result.
///
/// The generated functions fail with a domain error when a non-NaN argument
/// produces NaN (e.g. `SIN` of infinity) and with an overflow error when a
/// finite argument produces an infinite result.
///
/// # Example
/// ```
/// use linecalc::interpreter::evaluator::function::builtin::sin;
///
/// let r = sin(&[std::f64::consts::FRAC_PI_2], 0).unwrap();
/// assert_eq!(r, 1.0);
/// ```
macro_rules! real_builtin {
    ($fname:ident, $real_fn:ident, $label:literal) => {
        pub fn $fname(args: &[f64], position: usize) -> EvalResult<f64> {
            checked_result($label, args[0].$real_fn(), args, position)
        }
    };
}

real_builtin!(sin, sin, "SIN");
real_builtin!(cos, cos, "COS");
real_builtin!(tan, tan, "TAN");

/// Computes the cotangent as `cos(x) / sin(x)`.
///
/// There is no closed-form shortcut; the quotient is what is evaluated, so a
/// point where `sin(x)` is exactly zero is a division by zero.
///
/// # Example
/// ```
/// use linecalc::{error::RuntimeError, interpreter::evaluator::function::builtin::ctg};
///
/// let r = ctg(&[std::f64::consts::FRAC_PI_4], 0).unwrap();
/// assert!((r - 1.0).abs() < 1e-12);
///
/// assert_eq!(ctg(&[0.0], 3), Err(RuntimeError::DivisionByZero { position: 3 }));
/// ```
pub fn ctg(args: &[f64], position: usize) -> EvalResult<f64> {
    let x = args[0];
    let sin = checked_result("CTG", x.sin(), args, position)?;
    let cos = checked_result("CTG", x.cos(), args, position)?;

    if sin == 0.0 {
        return Err(RuntimeError::DivisionByZero { position });
    }

    Ok(cos / sin)
}
