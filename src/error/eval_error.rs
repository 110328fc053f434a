use thiserror::Error;

use crate::program::Instruction;

/// Represents all errors that can occur while a program runs on the stack
/// machine.
///
/// `position` is the index of the failing instruction within the program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// An operator tried to pop from an empty stack.
    #[error("Error at instruction {position}: '{instruction}' is missing an operand.")]
    MissingOperand {
        /// The operator that found the stack empty.
        instruction: Instruction,
        /// Index of the instruction.
        position:    usize,
    },
    /// The program finished with a stack size other than one.
    #[error("Missing operator: {remaining} values left on the stack, expected exactly one.")]
    MissingOperator {
        /// How many values were left on the stack.
        remaining: usize,
    },
    /// Attempted division or remainder by zero, or a negative power of zero.
    #[error("Error at instruction {position}: '{instruction}' divides by zero.")]
    DivisionByZero {
        /// The operator that divided by zero.
        instruction: Instruction,
        /// Index of the instruction.
        position:    usize,
    },
    /// The result does not fit in a 64-bit signed integer.
    #[error("Error at instruction {position}: Integer overflow while computing '{instruction}'.")]
    Overflow {
        /// The operator whose result overflowed.
        instruction: Instruction,
        /// Index of the instruction.
        position:    usize,
    },
}
