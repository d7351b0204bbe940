use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Computes the base 10 logarithm of a positive real.
///
/// Zero and negative arguments produce a domain error rather than `-inf` or
/// NaN.
///
/// # Example
/// ```
/// use linecalc::{error::RuntimeError, interpreter::evaluator::function::log::log};
///
/// assert_eq!(log(&[100.0], 0).unwrap(), 2.0);
/// assert!(matches!(log(&[0.0], 0), Err(RuntimeError::DomainError { .. })));
/// ```
pub fn log(args: &[f64], position: usize) -> EvalResult<f64> {
    let x = args[0];

    if x <= 0.0 {
        return Err(RuntimeError::DomainError { function: "LOG".to_string(),
                                               position });
    }

    Ok(x.log10())
}
