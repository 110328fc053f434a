use std::fmt;

use crate::interpreter::lexer::TokenKind;

/// Represents a binary operator of the stack machine.
///
/// Every binary operator pops its right operand first and its left operand
/// second, then pushes `left <op> right`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Truncating division (`/`)
    Div,
    /// Truncating remainder (`%`)
    Mod,
    /// Integer exponentiation (`^`)
    Pow,
}

/// Represents a unary operator of the stack machine.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Absolute value (`abs`)
    Abs,
}

impl BinaryOperator {
    /// Maps a lexical token kind to the binary operator it denotes.
    ///
    /// Returns `None` for every kind that is not a binary operator, including
    /// parser-only kinds such as parentheses and the end marker.
    ///
    /// # Example
    /// ```
    /// use rpncalc::{interpreter::lexer::TokenKind, program::BinaryOperator};
    ///
    /// assert_eq!(BinaryOperator::from_token_kind(TokenKind::Power),
    ///            Some(BinaryOperator::Pow));
    /// assert_eq!(BinaryOperator::from_token_kind(TokenKind::LeftParen), None);
    /// ```
    #[must_use]
    pub const fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Sub),
            TokenKind::Times => Some(Self::Mul),
            TokenKind::Divide => Some(Self::Div),
            TokenKind::Modulo => Some(Self::Mod),
            TokenKind::Power => Some(Self::Pow),
            TokenKind::Abs
            | TokenKind::Number
            | TokenKind::LeftParen
            | TokenKind::RightParen
            | TokenKind::End
            | TokenKind::Unknown => None,
        }
    }

    /// The symbol used when rendering a program in postfix form.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
        }
    }
}

impl UnaryOperator {
    /// Maps a lexical token kind to the unary operator it denotes.
    #[must_use]
    pub const fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Abs => Some(Self::Abs),
            _ => None,
        }
    }

    /// The name used when rendering a program in postfix form.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Abs => "abs",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single executable unit of a compiled program.
///
/// Instructions are stored in evaluation (postfix) order: operands are
/// pushed before the operator that consumes them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Pushes a literal value onto the stack.
    Push(i64),
    /// Pops one operand and pushes the result.
    Unary(UnaryOperator),
    /// Pops two operands and pushes the result.
    Binary(BinaryOperator),
}

impl Instruction {
    /// Relabels an operator token as the instruction that executes it.
    ///
    /// Numbers carry a value and are converted by the parser, so they map to
    /// `None` here just like the parser-only kinds do.
    ///
    /// # Example
    /// ```
    /// use rpncalc::{
    ///     interpreter::lexer::TokenKind,
    ///     program::{Instruction, UnaryOperator},
    /// };
    ///
    /// assert_eq!(Instruction::from_operator_kind(TokenKind::Abs),
    ///            Some(Instruction::Unary(UnaryOperator::Abs)));
    /// assert_eq!(Instruction::from_operator_kind(TokenKind::End), None);
    /// ```
    #[must_use]
    pub const fn from_operator_kind(kind: TokenKind) -> Option<Self> {
        if let Some(op) = BinaryOperator::from_token_kind(kind) {
            return Some(Self::Binary(op));
        }
        if let Some(op) = UnaryOperator::from_token_kind(kind) {
            return Some(Self::Unary(op));
        }
        None
    }
}

impl From<BinaryOperator> for Instruction {
    fn from(op: BinaryOperator) -> Self {
        Self::Binary(op)
    }
}

impl From<UnaryOperator> for Instruction {
    fn from(op: UnaryOperator) -> Self {
        Self::Unary(op)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Push(value) => write!(f, "{value}"),
            Self::Unary(op) => write!(f, "{op}"),
            Self::Binary(op) => write!(f, "{op}"),
        }
    }
}

/// A compiled program: a flat list of instructions in postfix order.
///
/// A `Program` is built by exactly one parse and is read-only afterwards.
/// Its `Display` implementation renders the postfix form, with literals in
/// decimal and operators as symbols, separated by single spaces.
///
/// # Example
/// ```
/// use rpncalc::{Options, parse};
///
/// let program = parse("(5+(10*(5+5)))", &Options::default()).unwrap();
/// assert_eq!(program.to_string(), "5 10 5 5 + * +");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Creates an empty program.
    #[must_use]
    pub const fn new() -> Self {
        Self { instructions: Vec::new() }
    }

    /// Appends an instruction. Only the parser grows a program.
    pub(crate) fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    /// The instructions in evaluation order.
    #[must_use]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of instructions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the program holds no instructions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Iterates over the instructions in evaluation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }
}

impl FromIterator<Instruction> for Program {
    fn from_iter<T: IntoIterator<Item = Instruction>>(iter: T) -> Self {
        Self { instructions: iter.into_iter().collect() }
    }
}

impl From<Vec<Instruction>> for Program {
    fn from(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }
}

impl<'a> IntoIterator for &'a Program {
    type IntoIter = std::slice::Iter<'a, Instruction>;
    type Item = &'a Instruction;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut instructions = self.instructions.iter();
        if let Some(first) = instructions.next() {
            write!(f, "{first}")?;
            for instruction in instructions {
                write!(f, " {instruction}")?;
            }
        }
        Ok(())
    }
}
