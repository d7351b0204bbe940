use num_bigint::BigInt;
use num_traits::{FromPrimitive, ToPrimitive};

/// Converts an `f64` to an integer if and only if the value is finite and
/// integral.
///
/// Negative zero converts to `0`. There is no range limit: every finite
/// integral `f64` has an exact integer counterpart.
///
/// ## Parameters
/// - `value`: The floating-point value to convert.
///
/// ## Returns
/// - `Some(BigInt)`: The exact integer value.
/// - `None`: If the value is fractional or non-finite.
///
/// ## Example
/// ```
/// use linecalc::util::num::f64_to_bigint_exact;
/// use num_bigint::BigInt;
///
/// assert_eq!(f64_to_bigint_exact(2.0), Some(BigInt::from(2)));
/// assert_eq!(f64_to_bigint_exact(-0.0), Some(BigInt::from(0)));
/// assert_eq!(f64_to_bigint_exact(1e20), Some(BigInt::from(100_000_000_000_000_000_000_u128)));
/// assert_eq!(f64_to_bigint_exact(1.5), None);
/// assert_eq!(f64_to_bigint_exact(f64::INFINITY), None);
/// ```
#[must_use]
pub fn f64_to_bigint_exact(value: f64) -> Option<BigInt> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    BigInt::from_f64(value)
}

/// Converts an integer to the nearest `f64`, or `None` if it is beyond the
/// finite `f64` range.
///
/// ## Example
/// ```
/// use linecalc::util::num::bigint_to_f64_exact;
/// use num_bigint::BigInt;
///
/// assert_eq!(bigint_to_f64_exact(&BigInt::from(-7)), Some(-7.0));
/// assert_eq!(bigint_to_f64_exact(&BigInt::from(10).pow(400)), None);
/// ```
#[must_use]
pub fn bigint_to_f64_exact(value: &BigInt) -> Option<f64> {
    value.to_f64().filter(|r| r.is_finite())
}

/// Converts an integer to the nearest `f64`, saturating to an infinity of
/// the same sign when it is out of range.
#[must_use]
pub fn bigint_to_f64(value: &BigInt) -> f64 {
    bigint_to_f64_exact(value).unwrap_or_else(|| {
                                  if value.sign() == num_bigint::Sign::Minus {
                                      f64::NEG_INFINITY
                                  } else {
                                      f64::INFINITY
                                  }
                              })
}
