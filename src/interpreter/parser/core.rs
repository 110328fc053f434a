use tracing::debug;

use crate::{
    error::ParseError,
    interpreter::lexer::{Lexer, Token, TokenKind},
    options::{Notation, Options},
    program::{Instruction, Program},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum nesting of parentheses.
pub const MAX_NESTING_DEPTH: usize = 2048;

/// Compiles source text into a postfix program.
///
/// In infix notation the text is validated against the arithmetic grammar
/// and lowered into postfix order. In postfix notation every token is
/// relabeled as an instruction directly; operand and operator counts are only
/// checked later, by the evaluator.
///
/// # Errors
/// Returns a [`ParseError`] for unknown input, grammar mismatches, unbalanced
/// or overly deep parentheses, trailing tokens, empty input, or literals that
/// do not fit in an `i64`.
///
/// # Examples
/// ```
/// use rpncalc::{Options, parse};
///
/// let program = parse("2^3^2", &Options::infix()).unwrap();
/// assert_eq!(program.to_string(), "2 3 2 ^ ^");
///
/// let program = parse("1 2 + 3 *", &Options::postfix()).unwrap();
/// assert_eq!(program.len(), 5);
///
/// assert!(parse("(1 + 2))", &Options::infix()).is_err());
/// ```
pub fn parse(source: &str, options: &Options) -> ParseResult<Program> {
    match options.notation {
        Notation::Infix => Parser::new(Lexer::new(source), options.trace).parse_infix(),
        Notation::Postfix => Parser::new(Lexer::postfix(source), options.trace).parse_postfix(),
    }
}

/// Recursive-descent parser state for a single parse.
///
/// The parser owns the lexer, the current token (its only lookahead) and the
/// program being emitted. Grammar rules live in `binary.rs` and `unary.rs`;
/// each rule returns `Ok(())` after emitting its instructions, and the first
/// failing rule aborts the whole parse.
pub struct Parser<'src> {
    lexer:   Lexer<'src>,
    current: Token<'src>,
    program: Program,
    depth:   usize,
    trace:   bool,
}

impl<'src> Parser<'src> {
    /// Creates a parser positioned on the first token of `lexer`.
    #[must_use]
    pub fn new(mut lexer: Lexer<'src>, trace: bool) -> Self {
        let current = lexer.advance();
        Self { lexer,
               current,
               program: Program::new(),
               depth: 0,
               trace }
    }

    /// Parses a complete infix expression.
    ///
    /// Grammar: `program := expression END`
    ///
    /// # Errors
    /// Propagates any rule failure, and reports
    /// [`ParseError::UnexpectedTrailingTokens`] if input remains after the
    /// expression.
    pub fn parse_infix(mut self) -> ParseResult<Program> {
        self.parse_expression()?;
        if self.current.kind != TokenKind::End {
            return Err(ParseError::UnexpectedTrailingTokens { token:  self.current
                                                                          .lexeme
                                                                          .to_owned(),
                                                              offset: self.current.span.start, });
        }
        Ok(self.program)
    }

    /// Relabels every token as an instruction, in input order.
    ///
    /// Numbers become pushes and operators become applications. No structure
    /// is checked. Unknown input and parentheses, which have no executable
    /// meaning, fail immediately.
    ///
    /// # Errors
    /// [`ParseError::UnexpectedToken`] for a token without an instruction,
    /// [`ParseError::LiteralOutOfRange`] for an oversized literal.
    pub fn parse_postfix(mut self) -> ParseResult<Program> {
        self.enter("postfix");
        while self.current.kind != TokenKind::End {
            let instruction = match self.current.kind {
                TokenKind::Number => Instruction::Push(literal_value(&self.current)?),
                kind => Instruction::from_operator_kind(kind).ok_or_else(|| self.unexpected())?,
            };
            self.advance();
            self.emit(instruction);
        }
        Ok(self.program)
    }

    /// Kind of the current lookahead token.
    pub(in crate::interpreter::parser) const fn peek_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Moves to the next token and returns the one just left behind.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> Token<'src> {
        let next = self.lexer.advance();
        std::mem::replace(&mut self.current, next)
    }

    /// Appends an instruction to the program.
    pub(in crate::interpreter::parser) fn emit(&mut self, instruction: Instruction) {
        if self.trace {
            debug!(%instruction, index = self.program.len(), "emit");
        }
        self.program.push(instruction);
    }

    /// Reports entry into a grammar rule when tracing.
    pub(in crate::interpreter::parser) fn enter(&self, rule: &'static str) {
        if self.trace {
            debug!(rule,
                   token = self.current.lexeme,
                   offset = self.current.span.start,
                   "enter");
        }
    }

    /// Runs `rule` one nesting level deeper.
    ///
    /// Only parentheses descend. `abs` prefixes and `^` chains are read in
    /// loops and never reach the limit.
    pub(in crate::interpreter::parser) fn nested(&mut self,
                                                 rule: impl FnOnce(&mut Self) -> ParseResult<()>)
                                                 -> ParseResult<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { limit:  MAX_NESTING_DEPTH,
                                                    offset: self.current.span.start, });
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    /// Builds the error for a current token that no rule accepts.
    pub(in crate::interpreter::parser) fn unexpected(&self) -> ParseError {
        match self.current.kind {
            TokenKind::End => ParseError::UnexpectedEndOfInput { offset: self.current.span.start },
            _ => ParseError::UnexpectedToken { token:  self.current.lexeme.to_owned(),
                                               offset: self.current.span.start, },
        }
    }

    /// Describes the current token for error messages.
    pub(in crate::interpreter::parser) fn describe_current(&self) -> String {
        match self.current.kind {
            TokenKind::End => "end of input".to_owned(),
            _ => format!("'{}'", self.current.lexeme),
        }
    }

    /// Offset of the current token.
    pub(in crate::interpreter::parser) const fn offset(&self) -> usize {
        self.current.span.start
    }
}

/// Converts a number token's lexeme, sign included, to its value.
///
/// # Errors
/// [`ParseError::LiteralOutOfRange`] if the literal does not fit in an `i64`.
pub(in crate::interpreter::parser) fn literal_value(token: &Token<'_>) -> ParseResult<i64> {
    token.lexeme
         .parse()
         .map_err(|_| ParseError::LiteralOutOfRange { literal: token.lexeme.to_owned(),
                                                      offset:  token.span.start, })
}
