use crate::{
    error::EvalError,
    interpreter::evaluator::core::{EvalResult, Machine},
    program::{Instruction, UnaryOperator},
};

impl Machine {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Abs`: absolute value. `abs(i64::MIN)` has no `i64` representation
    ///   and reports an overflow.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: The popped operand.
    /// - `position`: Instruction index for error reporting.
    ///
    /// # Returns
    /// The computed value wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use rpncalc::{interpreter::evaluator::core::Machine, program::UnaryOperator};
    ///
    /// assert_eq!(Machine::eval_unary(UnaryOperator::Abs, -5, 0), Ok(5));
    /// assert!(Machine::eval_unary(UnaryOperator::Abs, i64::MIN, 0).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: i64, position: usize) -> EvalResult<i64> {
        match op {
            UnaryOperator::Abs => {
                value.checked_abs()
                     .ok_or(EvalError::Overflow { instruction: Instruction::Unary(op),
                                                  position })
            },
        }
    }
}
