use thiserror::Error;

/// Represents all errors that can occur while turning source text into a
/// program.
///
/// Offsets are byte offsets into the source text. The lexer never fails on
/// its own; unrecognized input reaches the parser as an unknown token and is
/// reported here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a token that cannot start or continue the current rule.
    #[error("Error at offset {offset}: Unexpected token '{token}'.")]
    UnexpectedToken {
        /// The offending lexeme.
        token:  String,
        /// Where the token starts.
        offset: usize,
    },
    /// Reached the end of input while an operand was still expected.
    #[error("Error at offset {offset}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// Length of the source, i.e. where input ran out.
        offset: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error at offset {offset}: Expected closing parenthesis ')' but found {found}.")]
    ExpectedClosingParen {
        /// Description of what was found instead.
        found:  String,
        /// Where the closing parenthesis was expected.
        offset: usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("Error at offset {offset}: Extra tokens after expression, starting at '{token}'.")]
    UnexpectedTrailingTokens {
        /// The first extra lexeme.
        token:  String,
        /// Where the extra input starts.
        offset: usize,
    },
    /// A numeric literal does not fit in a 64-bit signed integer.
    #[error("Error at offset {offset}: Literal {literal} does not fit in a 64-bit integer.")]
    LiteralOutOfRange {
        /// The literal as written, sign included.
        literal: String,
        /// Where the literal starts.
        offset:  usize,
    },
    /// Parentheses are nested deeper than the parser allows.
    #[error("Error at offset {offset}: Expression nests deeper than {limit} levels.")]
    NestingTooDeep {
        /// The maximum nesting depth.
        limit:  usize,
        /// Where the nesting limit was exceeded.
        offset: usize,
    },
}
