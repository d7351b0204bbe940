use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Checks the raw result of a real function.
///
/// - A NaN result from arguments that are not NaN means the arguments were
///   outside the function's domain.
/// - An infinite result from finite arguments is an overflow.
///
/// Anything else is passed through unchanged.
///
/// # Parameters
/// - `function`: Name used in the error message.
/// - `result`: The computed value.
/// - `args`: The arguments the value was computed from.
/// - `position`: Byte offset of the call for error reporting.
///
/// # Example
/// ```
/// use linecalc::{error::RuntimeError, interpreter::evaluator::utils::checked_result};
///
/// assert_eq!(checked_result("SIN", 0.5, &[0.5], 0), Ok(0.5));
/// assert!(matches!(checked_result("SIN", f64::NAN, &[f64::INFINITY], 0),
///                  Err(RuntimeError::DomainError { .. })));
/// assert!(matches!(checked_result("POW", f64::INFINITY, &[10.0, 400.0], 0),
///                  Err(RuntimeError::Overflow { .. })));
/// ```
pub fn checked_result(function: &str,
                      result: f64,
                      args: &[f64],
                      position: usize)
                      -> EvalResult<f64> {
    if result.is_nan() && !args.iter().any(|a| a.is_nan()) {
        return Err(RuntimeError::DomainError { function: function.to_string(),
                                               position });
    }

    if result.is_infinite() && args.iter().all(|a| a.is_finite()) {
        return Err(RuntimeError::Overflow { position });
    }

    Ok(result)
}
