use crate::{
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser, literal_value},
    },
    program::{Instruction, UnaryOperator},
};

impl Parser<'_> {
    /// Parses a factor, the operand level of the grammar.
    ///
    /// Grammar:
    /// ```text
    ///     factor := "(" expression ")"
    ///             | NUMBER
    ///             | "abs" factor
    /// ```
    ///
    /// # Errors
    /// `UnexpectedEndOfInput` on empty input or a dangling operator,
    /// `UnexpectedToken` for anything else that cannot start a factor, and
    /// whatever the chosen alternative reports.
    pub fn parse_factor(&mut self) -> ParseResult<()> {
        self.enter("factor");
        match self.peek_kind() {
            TokenKind::LeftParen => self.parse_grouping(),
            TokenKind::Number => self.parse_literal(),
            TokenKind::Abs => self.parse_abs(),
            _ => Err(self.unexpected()),
        }
    }

    /// Emits a push of the current number literal.
    fn parse_literal(&mut self) -> ParseResult<()> {
        let token = self.advance();
        let value = literal_value(&token)?;
        self.emit(Instruction::Push(value));
        Ok(())
    }

    /// Parses `abs` applied to a single factor.
    ///
    /// `abs` binds tighter than every binary operator, so `abs -3 * 2` takes
    /// the absolute value of `-3` only. A run of `abs` prefixes is counted
    /// rather than recursed into; one `Abs` is emitted per prefix once the
    /// operand is complete.
    fn parse_abs(&mut self) -> ParseResult<()> {
        let mut prefixes = 0usize;
        while self.peek_kind() == TokenKind::Abs {
            self.advance();
            prefixes += 1;
        }
        self.parse_factor()?;
        for _ in 0..prefixes {
            self.emit(Instruction::Unary(UnaryOperator::Abs));
        }
        Ok(())
    }

    /// Parses a parenthesized expression. Parentheses emit nothing.
    fn parse_grouping(&mut self) -> ParseResult<()> {
        self.advance();
        self.nested(Self::parse_expression)?;
        if self.peek_kind() != TokenKind::RightParen {
            return Err(ParseError::ExpectedClosingParen { found:  self.describe_current(),
                                                          offset: self.offset(), });
        }
        self.advance();
        Ok(())
    }
}
