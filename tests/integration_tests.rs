//! Integration tests for end-to-end evaluation.
//!
//! These tests drive the public `evaluate` entry point, the lexer and the
//! diagnostic renderer the same way the `intcalc` binary does.

use intcalc::{
    errors::errors::ErrorImpl,
    evaluate,
    lexer::{lexer::tokenize, tokens::TokenKind},
    parser::parser::Parser,
    render_error,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_evaluate_examples() {
    init_logger();

    let cases = [
        ("2+3", 5),
        ("2 + 3", 5),
        ("2 +3", 5),
        ("5-2", 3),
        ("12+3", 15),
        ("32 -3", 29),
        ("14 + 2 * 3 - 6 / 2", 17),
        ("10 * 4 * 2 * 3 / 8", 30),
        ("7 * 4 / 2 * 3", 42),
    ];

    for (expression, expected) in cases {
        assert_eq!(evaluate(expression).unwrap(), expected, "{}", expression);
    }
}

#[test]
fn test_evaluate_errors() {
    init_logger();

    assert_eq!(evaluate("1/0").unwrap_err().get_error_name(), "DivisionByZero");
    assert_eq!(evaluate("2 + + 3").unwrap_err().get_error_name(), "UnexpectedToken");
    assert_eq!(evaluate("2 $ 3").unwrap_err().get_error_name(), "InvalidCharacter");
    assert_eq!(evaluate("").unwrap_err().get_error_name(), "EmptyInput");
    assert_eq!(evaluate("2+3 4").unwrap_err().get_error_name(), "TrailingInput");
    assert_eq!(
        evaluate("99999999999999999999").unwrap_err().get_error_name(),
        "NumberParseError"
    );
    assert_eq!(
        evaluate("9223372036854775807 + 1").unwrap_err().get_error_name(),
        "IntegerOverflow"
    );
}

#[test]
fn test_only_spaces_separate_tokens() {
    for expression in ["2\t+3", "2\n+3", "2\u{a0}+3", "2\r\n*3"] {
        assert_eq!(
            evaluate(expression).unwrap_err().get_error_name(),
            "InvalidCharacter",
            "{:?}",
            expression
        );
    }
    assert_eq!(evaluate("  2  +  3  ").unwrap(), 5);
}

#[test]
fn test_trailing_input_position() {
    let error = evaluate("2+3 4").unwrap_err();

    assert_eq!(
        error.kind(),
        &ErrorImpl::TrailingInput {
            token: TokenKind::Integer
        }
    );
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_evaluate_is_repeatable() {
    let expression = "14 + 2 * 3 - 6 / 2";

    let first = evaluate(expression).unwrap();
    for _ in 0..5 {
        assert_eq!(evaluate(expression).unwrap(), first);
    }
}

#[test]
fn test_named_source_in_errors() {
    let error = Parser::new("1 /".to_string(), Some("input.calc".to_string()))
        .and_then(Parser::evaluate)
        .unwrap_err();

    assert_eq!(error.get_position().1.as_str(), "input.calc");
    assert_eq!(error.get_position().0, 3);
}

#[test]
fn test_tokenize_matches_parser_view() {
    let tokens = tokenize("10 * 4 - 2".to_string(), None).unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Integer,
            TokenKind::Mul,
            TokenKind::Integer,
            TokenKind::Minus,
            TokenKind::Integer,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_render_division_by_zero() {
    let error = evaluate("1/0").unwrap_err();

    assert_eq!(
        render_error(&error, "1/0"),
        "Error: DivisionByZero (Division by zero, the right operand of `/` evaluated to 0)\n\
         -> shell\n  |\n1 | 1/0\n  | -^\n"
    );
}

#[test]
fn test_error_implements_std_error() {
    let error: Box<dyn std::error::Error> = Box::new(evaluate("2 $ 3").unwrap_err());

    assert_eq!(error.to_string(), "invalid character: '$' at shell:2");
}
