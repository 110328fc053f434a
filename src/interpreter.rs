/// The evaluator module executes compiled programs on a stack machine.
///
/// The evaluator walks a program's instructions in order, pushing literals
/// and applying operators to values popped from an explicit integer stack.
/// It is the execution half of the compile-then-execute pipeline.
///
/// # Responsibilities
/// - Executes every instruction kind with checked integer arithmetic.
/// - Reports missing operands, leftover operands, division by zero and
///   overflow.
/// - Keeps no state between evaluations.
pub mod evaluator;
/// The lexer module tokenizes source text on demand.
///
/// The lexer reads the raw source text and produces one token per call:
/// numbers, operators, parentheses, the `abs` keyword, an end marker, or an
/// unknown token for anything else.
///
/// # Responsibilities
/// - Skips whitespace and recognizes maximal digit and letter runs.
/// - Decides whether a `-` is subtraction or the sign of a literal.
/// - Never fails; unrecognized input becomes an unknown token.
pub mod lexer;
/// The parser module compiles tokens into a postfix program.
///
/// In infix notation the parser validates the token stream against the
/// arithmetic grammar by recursive descent and emits instructions in postfix
/// order. In postfix notation it relabels tokens as instructions directly.
///
/// # Responsibilities
/// - Encodes precedence and associativity in the order instructions are
///   emitted.
/// - Rejects malformed input with an error pointing at the offending offset.
/// - Converts literals to integers.
pub mod parser;
