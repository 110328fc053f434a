use crate::{
    error::EvalError,
    interpreter::evaluator::core::{EvalResult, Machine},
    program::{BinaryOperator, Instruction},
    util::num::i64_to_u32_checked,
};

impl Machine {
    /// Evaluates an exponentiation with exact integer arithmetic.
    ///
    /// Non-negative exponents use checked exponentiation and report overflow.
    /// A negative exponent yields the real-valued power truncated toward
    /// zero: `1` for base 1, `1` or `-1` for base -1, `0` for any other
    /// nonzero base. A negative power of zero divides by zero. `0 ^ 0` is 1.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    /// - `position`: Instruction index for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<i64>` containing `base ^ exponent`.
    ///
    /// # Example
    /// ```
    /// use rpncalc::interpreter::evaluator::core::Machine;
    ///
    /// assert_eq!(Machine::eval_pow(2, 10, 0), Ok(1024));
    /// assert_eq!(Machine::eval_pow(-1, -3, 0), Ok(-1));
    /// assert_eq!(Machine::eval_pow(2, -1, 0), Ok(0));
    /// assert!(Machine::eval_pow(10, 19, 0).is_err());
    /// ```
    pub fn eval_pow(base: i64, exponent: i64, position: usize) -> EvalResult<i64> {
        let instruction = Instruction::Binary(BinaryOperator::Pow);
        let odd = exponent % 2 != 0;

        match base {
            1 => Ok(1),
            -1 => Ok(if odd { -1 } else { 1 }),
            0 if exponent < 0 => Err(EvalError::DivisionByZero { instruction,
                                                                 position }),
            0 => Ok(i64::from(exponent == 0)),
            _ if exponent < 0 => Ok(0),
            _ => {
                let overflow = EvalError::Overflow { instruction,
                                                     position };
                let exponent = i64_to_u32_checked(exponent, overflow.clone())?;
                base.checked_pow(exponent).ok_or(overflow)
            },
        }
    }
}
