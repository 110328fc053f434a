/// Parser state, entry points and shared helpers.
///
/// Holds the [`core::Parser`] struct with its lexer, lookahead token and the
/// program under construction, the [`core::parse`] entry point, and the
/// postfix-notation relabeling.
pub mod core;

/// Binary operator rules.
///
/// Implements the `expression`, `term` and `exp` levels of the grammar,
/// including left-associative iteration and right-associative exponentiation.
pub mod binary;

/// Operand rules.
///
/// Implements the `factor` level: literals, parenthesized groups and `abs`.
pub mod unary;
