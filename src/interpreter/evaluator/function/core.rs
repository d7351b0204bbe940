use crate::{
    interpreter::{
        evaluator::{
            core::EvalResult,
            function::{builtin, log, pow, sqrt},
        },
        value::core::Value,
    },
    util::num::f64_to_bigint_exact,
};

/// Type alias for builtin function handlers.
///
/// A builtin receives its arguments already converted to `f64` together with
/// the position of the call, and returns the raw real result.
type BuiltinFn = fn(&[f64], usize) -> EvalResult<f64>;

/// Defines the builtin functions by generating the [`Builtin`] enum, a lookup
/// table and a name list.
///
/// Each entry provides:
/// - the enum variant,
/// - the name as written in source (case sensitive),
/// - the number of arguments,
/// - a function pointer implementing the builtin.
///
/// The table is indexed by the variant's discriminant, so entries and
/// variants are generated in the same order.
macro_rules! builtin_functions {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => {
                name: $name:literal,
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// A function from the fixed set the calculator knows.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Builtin {
            $(
                $(#[$meta])*
                $variant,
            )*
        }

        struct BuiltinDef {
            name:  &'static str,
            arity: usize,
            func:  BuiltinFn,
        }

        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];

        /// Names of all builtin functions, in declaration order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];

    };
}

builtin_functions! {
    /// Sine, argument in radians.
    Sin  => { name: "SIN",  arity: 1, func: builtin::sin },
    /// Cosine, argument in radians.
    Cos  => { name: "COS",  arity: 1, func: builtin::cos },
    /// Tangent, argument in radians.
    Tan  => { name: "TAN",  arity: 1, func: builtin::tan },
    /// Cotangent, computed as `cos(x) / sin(x)`.
    Ctg  => { name: "CTG",  arity: 1, func: builtin::ctg },
    /// Square root.
    Sqrt => { name: "SQRT", arity: 1, func: sqrt::sqrt },
    /// `POW(base, exponent)`.
    Pow  => { name: "POW",  arity: 2, func: pow::pow },
    /// Base 10 logarithm.
    Log  => { name: "LOG",  arity: 1, func: log::log },
}

impl Builtin {
    fn def(self) -> &'static BuiltinDef {
        &BUILTIN_TABLE[self as usize]
    }

    /// The name of the function as it is written in source.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.def().name
    }

    /// The number of arguments the function takes.
    #[must_use]
    pub fn arity(self) -> usize {
        self.def().arity
    }

    /// Applies the function to already evaluated arguments.
    ///
    /// Arguments are converted to reals first (booleans count as `0` or `1`).
    /// A finite result with no fractional part is returned as
    /// [`Value::Integer`], however large; every other result stays
    /// [`Value::Real`].
    ///
    /// # Errors
    /// The function's own domain and overflow errors, and
    /// `RuntimeError::Overflow` for an integer argument beyond the `f64`
    /// range.
    ///
    /// # Parameters
    /// - `args`: Evaluated arguments; the evaluator always supplies exactly
    ///   [`Builtin::arity`] of them.
    /// - `position`: Byte offset of the call for error reporting.
    ///
    /// # Example
    /// ```
    /// use linecalc::interpreter::{evaluator::function::core::Builtin, value::core::Value};
    ///
    /// let four = Builtin::Sqrt.call(&[Value::from(16_i64)], 0).unwrap();
    /// assert_eq!(four, Value::from(4_i64));
    ///
    /// let root = Builtin::Sqrt.call(&[Value::from(2_i64)], 0).unwrap();
    /// assert_eq!(root.to_string(), "1.414");
    /// ```
    pub fn call(self, args: &[Value], position: usize) -> EvalResult<Value> {
        let def = self.def();
        debug_assert_eq!(args.len(), def.arity, "{} called with wrong arity", def.name);

        let reals = args.iter()
                        .map(|arg| arg.to_real(position))
                        .collect::<EvalResult<Vec<_>>>()?;
        let result = (def.func)(&reals, position)?;

        Ok(normalize_function_result(result))
    }
}

/// Turns an integral real into an integer.
///
/// Only function results go through this; `4 / 2` stays `2.000`.
fn normalize_function_result(result: f64) -> Value {
    f64_to_bigint_exact(result).map_or(Value::from(result), Value::from)
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;

    use super::*;
    use crate::error::RuntimeError;

    fn int(n: i64) -> Value {
        Value::from(n)
    }

    #[test]
    fn table_matches_variants() {
        let builtins = [Builtin::Sin,
                        Builtin::Cos,
                        Builtin::Tan,
                        Builtin::Ctg,
                        Builtin::Sqrt,
                        Builtin::Pow,
                        Builtin::Log];
        for (builtin, name) in builtins.into_iter().zip(BUILTIN_FUNCTIONS) {
            assert_eq!(builtin.name(), *name);
        }
        assert_eq!(BUILTIN_FUNCTIONS.len(), builtins.len());
        assert_eq!(Builtin::Pow.arity(), 2);
        assert_eq!(Builtin::Log.arity(), 1);
    }

    #[test]
    fn integral_results_are_normalized() {
        assert_eq!(Builtin::Pow.call(&[int(2), int(3)], 0), Ok(int(8)));
        assert_eq!(Builtin::Log.call(&[int(100)], 0), Ok(int(2)));
        assert_eq!(Builtin::Cos.call(&[int(0)], 0), Ok(int(1)));
    }

    #[test]
    fn large_integral_results_are_normalized() {
        assert_eq!(Builtin::Pow.call(&[int(10), int(20)], 0),
                   Ok(Value::from(BigInt::from(100_000_000_000_000_000_000_u128))));
        assert_eq!(Builtin::Pow.call(&[int(2), int(63)], 0),
                   Ok(Value::from(BigInt::from(9_223_372_036_854_775_808_u64))));
        assert_eq!(Builtin::Pow.call(&[int(2), Value::Real(0.5)], 0).map(|v| v.to_string()),
                   Ok("1.414".to_string()));
    }

    #[test]
    fn booleans_count_as_numbers() {
        assert_eq!(Builtin::Sqrt.call(&[Value::Bool(true)], 0), Ok(int(1)));
    }

    #[test]
    fn errors_carry_call_position() {
        assert_eq!(Builtin::Sqrt.call(&[int(-4)], 7),
                   Err(RuntimeError::DomainError { function: "SQRT".to_string(),
                                                   position: 7, }));
    }

    #[test]
    fn huge_integer_argument_overflows() {
        let huge = Value::Integer(BigInt::from(10).pow(400));
        assert_eq!(Builtin::Log.call(&[huge], 2), Err(RuntimeError::Overflow { position: 2 }));
    }
}
