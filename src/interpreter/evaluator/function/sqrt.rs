use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Computes the square root of a non-negative real.
///
/// Negative arguments are outside the domain; there are no complex results.
///
/// # Example
/// ```
/// use linecalc::{error::RuntimeError, interpreter::evaluator::function::sqrt::sqrt};
///
/// assert_eq!(sqrt(&[9.0], 0).unwrap(), 3.0);
///
/// let err = sqrt(&[-1.0], 4).unwrap_err();
/// assert!(matches!(err, RuntimeError::DomainError { position: 4, .. }));
/// ```
pub fn sqrt(args: &[f64], position: usize) -> EvalResult<f64> {
    let x = args[0];

    if x < 0.0 {
        return Err(RuntimeError::DomainError { function: "SQRT".to_string(),
                                               position });
    }

    Ok(x.sqrt())
}
