//! Integration tests for the end-to-end pipeline.
//!
//! These tests verify that source text goes through tokenization, parsing
//! and interpretation and produces the expected printed output or error.

use lox::{
    errors::errors::{Error, ErrorImpl, ErrorKind},
    run,
};

fn run_source(source: &str) -> Result<String, Error> {
    let out = run(source, Some("test.lox".to_string()), Vec::new())?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_echo_addition() {
    assert_eq!(run_source("1 + 2").unwrap(), "3\n");
}

#[test]
fn test_echo_concatenation() {
    assert_eq!(run_source("\"a\" + \"b\"").unwrap(), "ab\n");
}

#[test]
fn test_mixed_addition_is_runtime_error() {
    let error = run_source("1 + \"a\"").unwrap_err();

    assert_eq!(error.get_error_kind(), ErrorKind::Runtime);
    assert_eq!(
        error.get_internal_error().to_string(),
        "operands must be two numbers or two strings"
    );
}

#[test]
fn test_grouping_changes_precedence() {
    assert_eq!(run_source("(1 + 2) * 3").unwrap(), "9\n");
    assert_eq!(run_source("1 + 2 * 3").unwrap(), "7\n");
}

#[test]
fn test_not_nil() {
    assert_eq!(run_source("!nil").unwrap(), "true\n");
}

#[test]
fn test_term_before_comparison() {
    assert_eq!(run_source("2 - 3 > 9").unwrap(), "false\n");
}

#[test]
fn test_left_associative_subtraction() {
    assert_eq!(run_source("10 - 4 - 3").unwrap(), "3\n");
    assert_eq!(run_source("16 / 4 / 2").unwrap(), "2\n");
}

#[test]
fn test_division_by_zero() {
    assert_eq!(run_source("1 / 0").unwrap(), "inf\n");
    assert_eq!(run_source("-1 / 0").unwrap(), "-inf\n");
}

#[test]
fn test_equality_across_types() {
    assert_eq!(run_source("nil == nil").unwrap(), "true\n");
    assert_eq!(run_source("nil == false").unwrap(), "false\n");
    assert_eq!(run_source("1 == \"1\"").unwrap(), "false\n");
    assert_eq!(run_source("\"a\" != \"a\"").unwrap(), "false\n");
}

#[test]
fn test_comparison_requires_numbers() {
    for source in ["\"a\" < \"b\"", "true >= 1", "1 > nil", "nil <= nil"] {
        let error = run_source(source).unwrap_err();
        assert_eq!(error.get_error_kind(), ErrorKind::Runtime, "{}", source);
    }
}

#[test]
fn test_truthiness_of_zero_and_empty_string() {
    assert_eq!(run_source("!0").unwrap(), "false\n");
    assert_eq!(run_source("!\"\"").unwrap(), "false\n");
    assert_eq!(run_source("!false").unwrap(), "true\n");
}

#[test]
fn test_print_statements() {
    let source = "print 1;\nprint \"two\";\n3 + 4;\nprint true == !false;\nprint nil;\n";

    assert_eq!(run_source(source).unwrap(), "1\ntwo\ntrue\nnil\n");
}

#[test]
fn test_fractional_numbers() {
    assert_eq!(run_source("print 2.5 * 2;").unwrap(), "5\n");
    assert_eq!(run_source("print 1 / 4;").unwrap(), "0.25\n");
}

#[test]
fn test_output_before_runtime_error_is_kept() {
    let mut out = Vec::new();
    let result = {
        let out = &mut out;
        run("print 1;\nprint -\"x\";\nprint 2;", None, out).map(|_| ())
    };

    assert!(result.is_err());
    assert_eq!(String::from_utf8(out).unwrap(), "1\n");
}

#[test]
fn test_unbalanced_paren_is_parse_error() {
    let error = run_source("(1 + 2").unwrap_err();

    assert_eq!(error.get_error_kind(), ErrorKind::Parse);
    assert_eq!(error.get_internal_error().to_string(), "expect ')' after expression.");
}

#[test]
fn test_parse_error_prevents_any_output() {
    let error = run_source("print 1;\nprint (2;").unwrap_err();

    assert_eq!(error.get_error_kind(), ErrorKind::Parse);
    assert_eq!(error.get_position().0, 2);
}

#[test]
fn test_lex_error() {
    let error = run_source("print 1 # 2;").unwrap_err();

    assert_eq!(error.get_error_kind(), ErrorKind::Lex);
    assert!(matches!(
        error.get_internal_error(),
        ErrorImpl::UnexpectedCharacter { character: '#' }
    ));

    let error = run_source("print \"open;").unwrap_err();
    assert!(matches!(error.get_internal_error(), ErrorImpl::UnterminatedString));
}

#[test]
fn test_runtime_error_line() {
    let error = run_source("print 1;\n\nprint 2 * nil;").unwrap_err();

    assert_eq!(error.get_position().0, 3);
    assert_eq!(error.get_position().1.as_str(), "test.lox");
    assert_eq!(
        error.to_string(),
        "RuntimeError (line 3): nil operand must be a number"
    );
}

#[test]
fn test_empty_source() {
    assert_eq!(run_source("").unwrap(), "");
    assert_eq!(run_source("  // nothing here\n").unwrap(), "");
}
