use rpncalc::{
    EvalError, Options, Program, evaluate,
    interpreter::lexer::{Lexer, TokenKind},
    program::{BinaryOperator, Instruction, UnaryOperator},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::new(source).map(|token| token.kind).collect()
}

fn lexemes(source: &str) -> Vec<String> {
    Lexer::new(source).map(|token| token.lexeme.to_owned()).collect()
}

fn run(instructions: Vec<Instruction>) -> Result<i64, EvalError> {
    evaluate(&Program::from(instructions), &Options::postfix())
}

#[test]
fn lexer_recognizes_every_kind() {
    use TokenKind::*;

    assert_eq!(kinds("+ - * / % ^ abs 12 ( ) $"),
               [Plus, Minus, Times, Divide, Modulo, Power, Abs, Number, LeftParen, RightParen,
                Unknown, End]);
}

#[test]
fn operators_win_over_unknown_characters() {
    use TokenKind::*;

    assert_eq!(kinds("+$("), [Plus, Unknown, LeftParen, End]);
    assert_eq!(kinds("+$-$*$/$%$^$($)$"),
               [Plus, Unknown, Minus, Unknown, Times, Unknown, Divide, Unknown, Modulo, Unknown,
                Power, Unknown, LeftParen, Unknown, RightParen, Unknown, End]);
    assert_eq!(lexemes("7#abs"), ["7", "#", "abs", ""]);
}

#[test]
fn lexer_skips_every_whitespace_character() {
    assert_eq!(kinds(" \t\n\r\u{0C}\u{0B}1\u{0B}+ 2"),
               [TokenKind::Number, TokenKind::Plus, TokenKind::Number, TokenKind::End]);
    assert_eq!(rpncalc::calculate("1\u{0B}+ 2", &Options::infix()), Ok(3));
}

#[test]
fn lexer_attaches_sign_only_where_an_operand_starts() {
    assert_eq!(lexemes("4-2"), ["4", "-", "2", ""]);
    assert_eq!(lexemes("(1+2) -2"), ["(", "1", "+", "2", ")", "-", "2", ""]);
    assert_eq!(lexemes("abs(-5)"), ["abs", "(", "-5", ")", ""]);
    assert_eq!(lexemes("4 - -8"), ["4", "-", "-8", ""]);
    assert_eq!(lexemes("- 3"), ["-", "3", ""]);
    assert_eq!(lexemes("-3"), ["-3", ""]);
}

#[test]
fn postfix_lexer_always_attaches_sign() {
    let lexemes: Vec<&str> = Lexer::postfix("2 -8 * 3 -").map(|token| token.lexeme).collect();
    assert_eq!(lexemes, ["2", "-8", "*", "3", "-", ""]);
}

#[test]
fn lexer_reports_spans() {
    let spans: Vec<_> = Lexer::new(" 12 + -3").map(|token| token.span).collect();
    assert_eq!(spans, [1..3, 4..5, 6..8, 8..8]);
}

#[test]
fn lexer_keeps_returning_end() {
    let mut lexer = Lexer::new("7");
    assert_eq!(lexer.advance().kind, TokenKind::Number);
    for _ in 0..3 {
        assert_eq!(lexer.advance().kind, TokenKind::End);
    }
}

#[test]
fn unknown_words_and_symbols() {
    assert_eq!(kinds("absx"), [TokenKind::Unknown, TokenKind::End]);
    assert_eq!(kinds("é"), [TokenKind::Unknown, TokenKind::End]);
    assert_eq!(kinds("ABS"), [TokenKind::Unknown, TokenKind::End]);
}

#[test]
fn operator_kinds_map_to_instructions() {
    assert_eq!(Instruction::from_operator_kind(TokenKind::Modulo),
               Some(Instruction::Binary(BinaryOperator::Mod)));
    assert_eq!(Instruction::from_operator_kind(TokenKind::Abs),
               Some(Instruction::Unary(UnaryOperator::Abs)));
    for kind in [TokenKind::Number,
                 TokenKind::LeftParen,
                 TokenKind::RightParen,
                 TokenKind::End,
                 TokenKind::Unknown]
    {
        assert_eq!(Instruction::from_operator_kind(kind), None, "{kind:?}");
    }
}

#[test]
fn machine_pops_right_operand_first() {
    use Instruction::*;

    assert_eq!(run(vec![Push(10), Push(3), Binary(BinaryOperator::Sub)]), Ok(7));
    assert_eq!(run(vec![Push(2), Push(5), Binary(BinaryOperator::Pow)]), Ok(32));
    assert_eq!(run(vec![Push(-9), Unary(UnaryOperator::Abs)]), Ok(9));
}

#[test]
fn machine_reports_instruction_positions() {
    use Instruction::*;

    assert_eq!(run(vec![Push(1), Push(0), Binary(BinaryOperator::Div)]),
               Err(EvalError::DivisionByZero { instruction: Binary(BinaryOperator::Div),
                                               position:    2, }));
    assert_eq!(run(vec![Unary(UnaryOperator::Abs)]),
               Err(EvalError::MissingOperand { instruction: Unary(UnaryOperator::Abs),
                                               position:    0, }));
    assert_eq!(run(vec![Push(i64::MAX), Push(2), Binary(BinaryOperator::Mul)]),
               Err(EvalError::Overflow { instruction: Binary(BinaryOperator::Mul),
                                         position:    2, }));
}

#[test]
fn machine_requires_exactly_one_result() {
    use Instruction::*;

    assert_eq!(run(Vec::new()), Err(EvalError::MissingOperator { remaining: 0 }));
    assert_eq!(run(vec![Push(1), Push(2)]), Err(EvalError::MissingOperator { remaining: 2 }));
}

#[test]
fn program_renders_postfix_text() {
    use Instruction::*;

    let program: Program = [Push(-5), Unary(UnaryOperator::Abs), Push(3), Binary(BinaryOperator::Mod)]
        .into_iter()
        .collect();
    assert_eq!(program.to_string(), "-5 abs 3 %");
    assert_eq!(Program::new().to_string(), "");
}

#[test]
fn error_messages_name_the_failure() {
    let err = rpncalc::calculate("(1", &Options::infix()).unwrap_err();
    assert!(err.to_string().contains("')'"), "{err}");

    let err = rpncalc::calculate("1 0 /", &Options::postfix()).unwrap_err();
    assert!(err.to_string().contains("zero"), "{err}");
}
