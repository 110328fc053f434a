use crate::{
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
    program::{BinaryOperator, Instruction},
};

impl Parser<'_> {
    /// Parses addition and subtraction.
    ///
    /// Both operators are left-associative: the loop emits each operator as
    /// soon as its right operand is complete, so `8-4-2` becomes `8 4 - 2 -`.
    ///
    /// Grammar: `expression := term (("+" | "-") term)*`
    ///
    /// # Errors
    /// Propagates the first failure of a subordinate rule.
    pub fn parse_expression(&mut self) -> ParseResult<()> {
        self.enter("expression");
        self.parse_term()?;
        loop {
            if let Some(op) = BinaryOperator::from_token_kind(self.peek_kind())
               && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
            {
                self.advance();
                self.parse_term()?;
                self.emit(Instruction::Binary(op));
                continue;
            }
            break;
        }
        Ok(())
    }

    /// Parses multiplication, division and remainder.
    ///
    /// Left-associative, like [`Parser::parse_expression`].
    ///
    /// Grammar: `term := exp (("*" | "/" | "%") exp)*`
    ///
    /// # Errors
    /// Propagates the first failure of a subordinate rule.
    pub fn parse_term(&mut self) -> ParseResult<()> {
        self.enter("term");
        self.parse_exponent()?;
        loop {
            if let Some(op) = BinaryOperator::from_token_kind(self.peek_kind())
               && matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
            {
                self.advance();
                self.parse_exponent()?;
                self.emit(Instruction::Binary(op));
                continue;
            }
            break;
        }
        Ok(())
    }

    /// Parses exponentiation.
    ///
    /// `^` is right-associative, so a chain `a ^ b ^ c` pushes all of its
    /// factors first and then applies one `Pow` per operator: `2^3^2` becomes
    /// `2 3 2 ^ ^` and evaluates to 512. The chain is read in a loop, so its
    /// length does not count toward the nesting limit.
    ///
    /// Grammar: `exp := factor ("^" exp)?`
    ///
    /// # Errors
    /// Propagates the first failure of a subordinate rule.
    pub fn parse_exponent(&mut self) -> ParseResult<()> {
        self.enter("exp");
        self.parse_factor()?;
        let mut pending = 0usize;
        while self.peek_kind() == TokenKind::Power {
            self.advance();
            self.parse_factor()?;
            pending += 1;
        }
        for _ in 0..pending {
            self.emit(Instruction::Binary(BinaryOperator::Pow));
        }
        Ok(())
    }
}
