/// Binary operator evaluation logic.
///
/// Handles the arithmetic of all two-operand instructions: addition,
/// subtraction, multiplication, truncating division and remainder, and
/// exponentiation.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements the single-operand instructions, currently `abs`.
pub mod unary;

/// Core evaluation logic and the stack machine.
///
/// Contains the [`core::evaluate`] entry point, the [`core::Machine`] with its
/// operand stack, instruction dispatch, and the final single-result check.
pub mod core;
