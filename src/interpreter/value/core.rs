use std::{borrow::Cow, cmp::Ordering};

use num_bigint::BigInt;
use num_traits::Zero;

use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::{bigint_to_f64, bigint_to_f64_exact},
};

/// Represents a runtime value in the calculator.
///
/// Arithmetic works on integers and reals. Booleans come only out of
/// comparison chains; anywhere a number is needed they count as `1` and `0`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer value of arbitrary size.
    Integer(BigInt),
    /// A numeric value (double precision floating-point).
    Real(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison chains such as `1 < 2 < 3`.
    Bool(bool),
}

impl From<BigInt> for Value {
    fn from(v: BigInt) -> Self {
        Self::Integer(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(BigInt::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl Value {
    /// Converts the value to an `f64`, saturating to an infinity when an
    /// integer is too large.
    ///
    /// Only used where the size of the magnitude is all that matters, such as
    /// ordering an integer against a real.
    ///
    /// # Example
    /// ```
    /// use linecalc::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from(10_i64).as_real(), 10.0);
    /// assert_eq!(Value::Bool(true).as_real(), 1.0);
    /// ```
    #[must_use]
    pub fn as_real(&self) -> f64 {
        match self {
            Self::Real(r) => *r,
            Self::Integer(n) => bigint_to_f64(n),
            Self::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            },
        }
    }

    /// Converts the value to an `f64` for real arithmetic.
    ///
    /// # Errors
    /// `RuntimeError::Overflow` if an integer has no finite `f64`
    /// counterpart.
    ///
    /// # Example
    /// ```
    /// use linecalc::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from(3_i64).to_real(0), Ok(3.0));
    ///
    /// let huge = Value::Integer("1".repeat(400).parse().unwrap());
    /// assert!(huge.to_real(0).is_err());
    /// ```
    pub fn to_real(&self, position: usize) -> EvalResult<f64> {
        match self {
            Self::Integer(n) => bigint_to_f64_exact(n).ok_or(RuntimeError::Overflow { position }),
            other => Ok(other.as_real()),
        }
    }

    /// Returns the value with booleans replaced by the integers `1` and `0`.
    ///
    /// Integers and reals are returned unchanged.
    #[must_use]
    pub fn to_number(self) -> Self {
        match self {
            Self::Bool(b) => Self::Integer(BigInt::from(u8::from(b))),
            other => other,
        }
    }

    /// The integer behind an integer or boolean value.
    fn integer(&self) -> Option<Cow<'_, BigInt>> {
        match self {
            Self::Integer(n) => Some(Cow::Borrowed(n)),
            Self::Bool(b) => Some(Cow::Owned(BigInt::from(u8::from(*b)))),
            Self::Real(_) => None,
        }
    }

    /// Returns `true` if the value is zero, in either numeric form.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(n) => n.is_zero(),
            Self::Real(r) => *r == 0.0,
            Self::Bool(b) => !b,
        }
    }

    /// Orders two values numerically.
    ///
    /// Two integers (or booleans) are compared exactly; otherwise both sides
    /// are compared as reals. Returns `None` when a NaN is involved.
    ///
    /// # Example
    /// ```
    /// use std::cmp::Ordering;
    ///
    /// use linecalc::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from(2_i64).compare(&Value::Real(2.5)), Some(Ordering::Less));
    /// assert_eq!(Value::from(1_i64).compare(&Value::Bool(true)), Some(Ordering::Equal));
    /// assert_eq!(Value::Real(f64::NAN).compare(&Value::from(0_i64)), None);
    /// ```
    #[must_use]
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self.integer(), other.integer()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            _ => self.as_real().partial_cmp(&other.as_real()),
        }
    }
}

impl std::fmt::Display for Value {
    /// Integers print without a decimal point, reals with exactly three
    /// decimals and booleans as `true` or `false`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r:.3}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(digits: &str) -> Value {
        Value::Integer(digits.parse().unwrap())
    }

    #[test]
    fn display_formats() {
        assert_eq!(Value::from(-12_i64).to_string(), "-12");
        assert_eq!(big("123456789012345678901234567890").to_string(),
                   "123456789012345678901234567890");
        assert_eq!(Value::Real(2.5).to_string(), "2.500");
        assert_eq!(Value::Real(2.0).to_string(), "2.000");
        assert_eq!(Value::Real(1.0 / 3.0).to_string(), "0.333");
        assert_eq!(Value::Bool(false).to_string(), "false");
    }

    #[test]
    fn booleans_coerce_to_integers() {
        assert_eq!(Value::Bool(true).to_number(), Value::from(1_i64));
        assert_eq!(Value::Bool(false).to_number(), Value::from(0_i64));
        assert_eq!(Value::Real(0.5).to_number(), Value::Real(0.5));
    }

    #[test]
    fn zero_detection() {
        assert!(Value::from(0_i64).is_zero());
        assert!(Value::Real(-0.0).is_zero());
        assert!(Value::Bool(false).is_zero());
        assert!(!Value::Real(1e-300).is_zero());
    }

    #[test]
    fn large_integers_compare_exactly() {
        let a = big("100000000000000000000000000001");
        let b = big("100000000000000000000000000000");
        assert_eq!(a.compare(&b), Some(Ordering::Greater));
        assert_eq!(a.compare(&Value::Real(1.0)), Some(Ordering::Greater));
    }

    #[test]
    fn integers_beyond_f64_do_not_become_reals() {
        let huge = big(&format!("1{}", "0".repeat(400)));
        assert_eq!(huge.to_real(4), Err(RuntimeError::Overflow { position: 4 }));
        assert_eq!(huge.as_real(), f64::INFINITY);
        assert_eq!(Value::from(-7_i64).to_real(0), Ok(-7.0));
    }
}
