use crate::{
    error::RuntimeError,
    interpreter::evaluator::{core::EvalResult, utils::checked_result},
};

/// Raises `args[0]` to the power `args[1]`.
///
/// - Zero raised to a negative exponent is a domain error.
/// - A negative base with a fractional exponent has no real result and is a
///   domain error.
/// - A finite computation that overflows to infinity is an overflow error.
///
/// # Example
/// ```
/// use linecalc::interpreter::evaluator::function::pow::pow;
///
/// assert_eq!(pow(&[2.0, 10.0], 0).unwrap(), 1024.0);
/// assert_eq!(pow(&[-2.0, 3.0], 0).unwrap(), -8.0);
/// assert!(pow(&[-8.0, 0.5], 0).is_err());
/// ```
pub fn pow(args: &[f64], position: usize) -> EvalResult<f64> {
    let (base, exponent) = (args[0], args[1]);

    if base == 0.0 && exponent < 0.0 {
        return Err(RuntimeError::DomainError { function: "POW".to_string(),
                                               position });
    }

    checked_result("POW", base.powf(exponent), args, position)
}
