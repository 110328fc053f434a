use thiserror::Error;

/// Evaluation errors.
///
/// Contains all error types that can be raised while a compiled program runs:
/// stack underflow, leftover operands, division by zero and overflow.
pub mod eval_error;
/// Parsing errors.
///
/// Defines all error types that can occur while lexing and parsing source
/// text. Parse errors include unexpected tokens, unbalanced parentheses,
/// trailing input and literals that do not fit the integer type.
pub mod parse_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;

/// Any failure of a complete parse-then-evaluate run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The source text did not compile.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The compiled program failed on the stack machine.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
