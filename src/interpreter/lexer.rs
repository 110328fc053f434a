use std::ops::Range;

use logos::Logos;

/// The kind of a lexical token.
///
/// This is the closed set of everything the lexer can report. Only some kinds
/// have an executable meaning; see
/// [`Instruction::from_operator_kind`](crate::program::Instruction::from_operator_kind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Times,
    /// `/`
    Divide,
    /// `%`
    Modulo,
    /// `^`
    Power,
    /// `abs`
    Abs,
    /// Integer literal, optionally with a leading `-`.
    Number,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// End of input. Once reached, it is returned forever.
    End,
    /// Anything the lexer does not recognize.
    Unknown,
}

/// A token produced by [`Lexer::advance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    /// What was recognized.
    pub kind:   TokenKind,
    /// The matched text. For negative literals this includes the sign; for
    /// [`TokenKind::End`] it is empty.
    pub lexeme: &'src str,
    /// Byte range of the lexeme in the source.
    pub span:   Range<usize>,
}

/// Words the lexer knows by name. Any other run of letters is unknown.
const NAMES: &[(&str, TokenKind)] = &[("abs", TokenKind::Abs)];

/// Raw scanner output, before names are looked up and signs are attached to
/// literals.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum RawToken {
    /// A maximal run of digits.
    #[regex(r"[0-9]+", priority = 3)]
    Digits,
    /// A maximal run of letters.
    #[regex(r"[a-zA-Z]+", priority = 3)]
    Word,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Any other single character.
    #[regex(r".", priority = 1)]
    Other,
    /// Whitespace between tokens.
    #[regex(r"[ \t\n\r\f\x0B]+", logos::skip, priority = 3)]
    Ignored,
}

/// How a `-` directly followed by a digit is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SignRule {
    /// Negative literal unless the previous token ends an operand, so that
    /// `4-2` and `(1+2) -2` subtract while `abs(-5)` negates.
    AfterOperand,
    /// Always a negative literal. Postfix operands are whitespace separated,
    /// so `2 -8 *` multiplies by minus eight.
    Always,
}

/// Pull-based lexer with one token of lookbehind.
///
/// The lexer owns a cursor over the source and produces tokens on demand.
/// It keeps no token history except the kind of the token it returned last,
/// which decides whether a `-` starts a negative literal.
///
/// ## Example
/// ```
/// use rpncalc::interpreter::lexer::{Lexer, TokenKind};
///
/// let kinds: Vec<TokenKind> = Lexer::new("abs(-5)").map(|token| token.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Abs,
///             TokenKind::LeftParen,
///             TokenKind::Number,
///             TokenKind::RightParen,
///             TokenKind::End]);
/// ```
pub struct Lexer<'src> {
    raw:       logos::Lexer<'src, RawToken>,
    previous:  Option<TokenKind>,
    sign_rule: SignRule,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer for infix input.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self::with_rule(source, SignRule::AfterOperand)
    }

    /// Creates a lexer for postfix input, where `-` followed by a digit is
    /// always a negative literal.
    #[must_use]
    pub fn postfix(source: &'src str) -> Self {
        Self::with_rule(source, SignRule::Always)
    }

    fn with_rule(source: &'src str, sign_rule: SignRule) -> Self {
        Self { raw: RawToken::lexer(source),
               previous: None,
               sign_rule }
    }

    /// Produces the next token.
    ///
    /// Leading whitespace (space, tab, newline, carriage return, form feed,
    /// vertical tab) is skipped. At the end of input this returns a
    /// [`TokenKind::End`] token, and keeps returning it on every later call.
    pub fn advance(&mut self) -> Token<'src> {
        let token = self.scan();
        self.previous = Some(token.kind);
        token
    }

    fn scan(&mut self) -> Token<'src> {
        let Some(raw) = self.raw.next() else {
            let end = self.raw.source().len();
            return Token { kind:   TokenKind::End,
                           lexeme: "",
                           span:   end..end, };
        };

        let kind = match raw {
            Ok(RawToken::Minus) if self.starts_negative_literal() => {
                return self.negative_literal();
            },
            Ok(RawToken::Digits) => TokenKind::Number,
            Ok(RawToken::Word) => lookup_name(self.raw.slice()),
            Ok(RawToken::Plus) => TokenKind::Plus,
            Ok(RawToken::Minus) => TokenKind::Minus,
            Ok(RawToken::Star) => TokenKind::Times,
            Ok(RawToken::Slash) => TokenKind::Divide,
            Ok(RawToken::Percent) => TokenKind::Modulo,
            Ok(RawToken::Caret) => TokenKind::Power,
            Ok(RawToken::LParen) => TokenKind::LeftParen,
            Ok(RawToken::RParen) => TokenKind::RightParen,
            Ok(RawToken::Other | RawToken::Ignored) | Err(()) => TokenKind::Unknown,
        };

        Token { kind,
                lexeme: self.raw.slice(),
                span: self.raw.span() }
    }

    /// Whether the `-` just scanned is the sign of a literal rather than the
    /// subtraction operator.
    fn starts_negative_literal(&self) -> bool {
        if !self.raw.remainder().starts_with(|c: char| c.is_ascii_digit()) {
            return false;
        }
        match self.sign_rule {
            SignRule::Always => true,
            SignRule::AfterOperand => {
                !matches!(self.previous, Some(TokenKind::Number | TokenKind::RightParen))
            },
        }
    }

    /// Joins the `-` just scanned with the digit run right behind it.
    fn negative_literal(&mut self) -> Token<'src> {
        let start = self.raw.span().start;
        // The remainder starts with a digit, so the next raw token is the
        // whole digit run.
        self.raw.next();
        let end = self.raw.span().end;
        Token { kind:   TokenKind::Number,
                lexeme: &self.raw.source()[start..end],
                span:   start..end, }
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    /// Yields every token up to and including the first
    /// [`TokenKind::End`].
    fn next(&mut self) -> Option<Self::Item> {
        if self.previous == Some(TokenKind::End) {
            return None;
        }
        Some(self.advance())
    }
}

/// Looks a word up in the name table.
fn lookup_name(word: &str) -> TokenKind {
    NAMES.iter()
         .find(|(name, _)| *name == word)
         .map_or(TokenKind::Unknown, |(_, kind)| *kind)
}
