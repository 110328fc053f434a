use tracing::debug;

use crate::{
    error::EvalError,
    options::Options,
    program::{Instruction, Program},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Runs a compiled program and returns its single result.
///
/// Each call uses a fresh, empty stack that is dropped when the call returns,
/// on success and on every error path alike.
///
/// # Errors
/// - [`EvalError::MissingOperand`] when an operator finds the stack empty.
/// - [`EvalError::MissingOperator`] when the program leaves zero or several
///   values behind.
/// - [`EvalError::DivisionByZero`] and [`EvalError::Overflow`] for arithmetic
///   faults.
///
/// # Examples
/// ```
/// use rpncalc::{EvalError, Options, evaluate, parse};
///
/// let options = Options::infix();
/// let program = parse("(4 + 9/2 - -8)^3 + abs(15 % 4 - 5*2)", &options).unwrap();
/// assert_eq!(evaluate(&program, &options), Ok(4103));
///
/// let options = Options::postfix();
/// let program = parse("1 %", &options).unwrap();
/// assert!(matches!(evaluate(&program, &options),
///                  Err(EvalError::MissingOperand { .. })));
/// ```
pub fn evaluate(program: &Program, options: &Options) -> EvalResult<i64> {
    Machine::new(options.trace).run(program)
}

/// The stack machine for one evaluation.
///
/// ## Usage
///
/// A `Machine` is created empty, consumed by [`Machine::run`], and never
/// reused. Operator implementations live in `unary.rs` and `binary/`.
pub struct Machine {
    /// Operand stack. The last element is the top.
    stack:    Vec<i64>,
    /// Index of the instruction being executed, for error reporting.
    position: usize,
    /// Whether stack operations are reported as debug events.
    trace:    bool,
}

impl Machine {
    /// Creates a machine with an empty stack.
    #[must_use]
    pub const fn new(trace: bool) -> Self {
        Self { stack: Vec::new(),
               position: 0,
               trace }
    }

    /// Executes every instruction in order, then checks that exactly one
    /// value is left.
    ///
    /// # Errors
    /// Aborts on the first failing instruction; see [`evaluate`].
    pub fn run(mut self, program: &Program) -> EvalResult<i64> {
        for (position, instruction) in program.iter().enumerate() {
            self.position = position;
            self.execute(*instruction)?;
        }
        self.finish()
    }

    /// Executes a single instruction.
    ///
    /// Binary operators pop the right operand first, since it was pushed
    /// last.
    fn execute(&mut self, instruction: Instruction) -> EvalResult<()> {
        match instruction {
            Instruction::Push(value) => {
                self.push(value);
                Ok(())
            },
            Instruction::Unary(op) => {
                let operand = self.pop(instruction)?;
                let result = Self::eval_unary(op, operand, self.position)?;
                self.push(result);
                Ok(())
            },
            Instruction::Binary(op) => {
                let right = self.pop(instruction)?;
                let left = self.pop(instruction)?;
                let result = Self::eval_binary(op, left, right, self.position)?;
                self.push(result);
                Ok(())
            },
        }
    }

    fn push(&mut self, value: i64) {
        self.stack.push(value);
        if self.trace {
            debug!(position = self.position, value, depth = self.stack.len(), "push");
        }
    }

    /// Pops the top of the stack on behalf of `instruction`.
    fn pop(&mut self, instruction: Instruction) -> EvalResult<i64> {
        let value = self.stack
                        .pop()
                        .ok_or(EvalError::MissingOperand { instruction,
                                                           position: self.position })?;
        if self.trace {
            debug!(position = self.position, value, depth = self.stack.len(), "pop");
        }
        Ok(value)
    }

    /// Extracts the result once all instructions have run.
    fn finish(self) -> EvalResult<i64> {
        match self.stack.as_slice() {
            [result] => Ok(*result),
            rest => Err(EvalError::MissingOperator { remaining: rest.len() }),
        }
    }
}
