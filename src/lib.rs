//! # rpncalc
//!
//! rpncalc evaluates a single integer arithmetic expression written in infix
//! or postfix notation. Source text is compiled into a flat postfix program,
//! which then runs on a small stack machine.
//!
//! ```
//! use rpncalc::{Options, calculate};
//!
//! assert_eq!(calculate("2^3^2", &Options::infix()), Ok(512));
//! assert_eq!(calculate("3 4 + 2 *", &Options::postfix()), Ok(14));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

use tracing::debug;

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while compiling or
/// running an expression. Every error carries enough location information
/// (a source offset or an instruction index) to point at the failure.
///
/// # Responsibilities
/// - Defines error enums for both phases (parser, evaluator).
/// - Combines them into a single crate-level [`Error`].
pub mod error;
/// Orchestrates the compile-then-execute pipeline.
///
/// This module ties together lexing, parsing and evaluation. It exposes the
/// lexer, the recursive-descent parser and the stack machine.
///
/// # Responsibilities
/// - Turns source text into tokens on demand.
/// - Compiles tokens into a postfix program.
/// - Executes programs and reports typed errors.
pub mod interpreter;
/// Caller-selected settings.
///
/// Defines the input [`Notation`] and the [`Options`] passed to parsing and
/// evaluation, including the debug trace toggle.
pub mod options;
/// Defines the structure of compiled programs.
///
/// This module declares the [`program::Instruction`] type and its operators,
/// and the [`Program`] that holds instructions in postfix order. A program
/// renders itself back to postfix text through `Display`.
pub mod program;
/// General utilities for safe numeric conversion.
pub mod util;

pub use error::{Error, EvalError, ParseError};
pub use interpreter::{evaluator::core::evaluate, parser::core::parse};
pub use options::{Notation, Options};
pub use program::Program;

/// Parses and evaluates an expression in one step.
///
/// # Errors
/// Returns [`Error::Parse`] if the source does not compile and
/// [`Error::Eval`] if the compiled program fails on the stack machine.
///
/// # Examples
/// ```
/// use rpncalc::{Error, Options, calculate};
///
/// assert_eq!(calculate("(5+(10*(5+5)))", &Options::infix()), Ok(105));
///
/// // A postfix program with a stranded operand.
/// let result = calculate("1 + 1", &Options::postfix());
/// assert!(matches!(result, Err(Error::Eval(_))));
///
/// // Unbalanced parentheses.
/// let result = calculate("((4 + -4 + 9/3)*5", &Options::infix());
/// assert!(matches!(result, Err(Error::Parse(_))));
/// ```
pub fn calculate(source: &str, options: &Options) -> Result<i64, Error> {
    let program = parse(source, options)?;
    if options.trace {
        debug!(%program, "compiled");
    }
    Ok(evaluate(&program, options)?)
}
