use crate::{
    error::EvalError,
    interpreter::evaluator::core::{EvalResult, Machine},
    program::{BinaryOperator, Instruction},
};

impl Machine {
    /// Evaluates a binary operation between two values.
    ///
    /// All arithmetic is checked. Division and remainder truncate toward
    /// zero and reject a zero divisor. Power delegates to
    /// [`Machine::eval_pow`].
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand, popped second.
    /// - `right`: Right operand, popped first.
    /// - `position`: Instruction index for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<i64>` containing `left <op> right`.
    ///
    /// # Example
    /// ```
    /// use rpncalc::{interpreter::evaluator::core::Machine, program::BinaryOperator};
    ///
    /// assert_eq!(Machine::eval_binary(BinaryOperator::Sub, 8, 4, 0), Ok(4));
    /// assert_eq!(Machine::eval_binary(BinaryOperator::Div, -7, 2, 0), Ok(-3));
    /// assert_eq!(Machine::eval_binary(BinaryOperator::Mod, -7, 2, 0), Ok(-1));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: i64,
                       right: i64,
                       position: usize)
                       -> EvalResult<i64> {
        use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};

        let instruction = Instruction::Binary(op);
        let overflow = EvalError::Overflow { instruction,
                                             position };

        match op {
            Add => left.checked_add(right).ok_or(overflow),
            Sub => left.checked_sub(right).ok_or(overflow),
            Mul => left.checked_mul(right).ok_or(overflow),
            Div | Mod => {
                if right == 0 {
                    return Err(EvalError::DivisionByZero { instruction,
                                                           position });
                }
                // Only i64::MIN / -1 is left to overflow.
                if op == Div {
                    left.checked_div(right).ok_or(overflow)
                } else {
                    left.checked_rem(right).ok_or(overflow)
                }
            },
            Pow => Self::eval_pow(left, right, position),
        }
    }
}
