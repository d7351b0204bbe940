use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::core::ArithmeticOperator, core::EvalResult},
        value::core::Value,
    },
};

/// Evaluates a scalar arithmetic operation.
///
/// Booleans are first turned into the integers `1` and `0`. Then:
/// - `/` always divides as reals and fails on a zero divisor.
/// - Two integers stay integers; their size is unbounded.
/// - Any other combination is promoted to real. An integer too large for an
///   `f64` cannot be promoted and is reported as an overflow.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Byte offset of the operator for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing the computed scalar.
///
/// # Example
/// ```
/// use linecalc::interpreter::{
///     evaluator::binary::{core::ArithmeticOperator, scalar::eval_scalar_op},
///     value::core::Value,
/// };
///
/// let sum = eval_scalar_op(ArithmeticOperator::Add, Value::from(2_i64), Value::Real(0.5), 0);
/// assert_eq!(sum.unwrap(), Value::Real(2.5));
///
/// let quotient = eval_scalar_op(ArithmeticOperator::Div, Value::from(4_i64), Value::from(2_i64), 0);
/// assert_eq!(quotient.unwrap(), Value::Real(2.0));
/// ```
pub fn eval_scalar_op(op: ArithmeticOperator,
                      left: Value,
                      right: Value,
                      position: usize)
                      -> EvalResult<Value> {
    use ArithmeticOperator::{Add, Div, Mul, Sub};

    let (left, right) = (left.to_number(), right.to_number());

    if op == Div {
        if right.is_zero() {
            return Err(RuntimeError::DivisionByZero { position });
        }
        return Ok(Value::from(left.to_real(position)? / right.to_real(position)?));
    }

    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Ok(Value::from(match op {
                                                                      Add => a + b,
                                                                      Sub => a - b,
                                                                      Mul => a * b,
                                                                      Div => unreachable!(),
                                                                  })),
        (left, right) => {
            let (a, b) = (left.to_real(position)?, right.to_real(position)?);
            Ok(Value::from(match op {
                               Add => a + b,
                               Sub => a - b,
                               Mul => a * b,
                               Div => unreachable!(),
                           }))
        },
    }
}
