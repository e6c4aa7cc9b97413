//! Integration tests for end-to-end runs.
//!
//! These tests drive the complete pipeline from source text or hand-built
//! token sequences through parsing and evaluation, and the command-line
//! driver on top of it.

use std::process::Command;

use literals::{
    errors::errors::{ErrorImpl, Expected},
    interpreter::{
        interpreter::{Interpreter, Outcome},
        value::Value,
    },
    lexer::{
        source::TokenStream,
        tokens::{Token, TokenKind},
    },
    parser::parser::parse,
    render_error, run_source,
};

use TokenKind::*;

fn run_lexemes(lexemes: &[(TokenKind, &str)]) -> Result<Outcome, literals::errors::errors::Error> {
    let tokens = lexemes
        .iter()
        .map(|(kind, value)| Token::bare(*kind, value))
        .collect();
    let program = parse(TokenStream::new(tokens))?;

    Interpreter::new().run(&program)
}

#[test]
fn test_set_var_to_constant() {
    let outcome = run_lexemes(&[
        (BOF, ""),
        (SetVar, "Set"),
        (IdentifierWord, "x"),
        (To, "to"),
        (Number, "-39"),
        (Dot, "."),
        (EOF, ""),
    ])
    .unwrap();

    assert_eq!(
        outcome,
        Outcome::Assigned {
            name: "x".to_string(),
            value: Value::Number(-39.0),
        }
    );
}

#[test]
fn test_if_compare_constants_fires() {
    let outcome = run_lexemes(&[
        (BOF, ""),
        (If, "If"),
        (Number, "6800"),
        (Comparison, "is"),
        (Number, "6800"),
        (Then, "then"),
        (SetVar, "set"),
        (IdentifierWord, "successor"),
        (To, "to"),
        (Number, "68000"),
        (Dot, "."),
        (EOF, ""),
    ])
    .unwrap();

    assert_eq!(outcome.to_string(), "successor = 68000");
}

#[test]
fn test_if_compare_variable_and_variable() {
    // With nothing bound, both sides are compared as names.
    let outcome = run_lexemes(&[
        (BOF, ""),
        (If, "If"),
        (IdentifierWord, "processor"),
        (IdentifierWord, "type"),
        (Comparison, "is"),
        (IdentifierWord, "eight"),
        (IdentifierWord, "bit"),
        (Then, "then"),
        (SetVar, "set"),
        (IdentifierWord, "processor"),
        (IdentifierWord, "architecture"),
        (To, "to"),
        (Number, "6502"),
        (Dot, "."),
        (EOF, ""),
    ])
    .unwrap();

    assert_eq!(outcome, Outcome::Skipped);
}

#[test]
fn test_missing_terminator_before_eof() {
    let error = run_lexemes(&[
        (BOF, ""),
        (SetVar, "Set"),
        (IdentifierWord, "x"),
        (To, "to"),
        (Number, "-39"),
        (EOF, ""),
    ])
    .unwrap_err();

    assert_eq!(
        error.kind(),
        &ErrorImpl::SyntaxError {
            expected: Expected::Token(Dot),
            actual: EOF,
        }
    );
}

#[test]
fn test_run_source_end_to_end() {
    let outcome = run_source(
        "// bump the processor\nIf 6800 is less than 68000 then set successor to 68000 .",
        Some("bump.lit".to_string()),
    )
    .unwrap();

    assert_eq!(outcome.to_string(), "successor = 68000");
}

#[test]
fn test_diagnostic_points_at_offending_token() {
    let source = "Set x\n  to 5 then.";
    let error = run_source(source, Some("bad.lit".to_string())).unwrap_err();
    let rendered = render_error(&error, source);

    assert_eq!(
        rendered,
        [
            "Error: SyntaxError (expected Dot, found Then)",
            "-> bad.lit",
            "  |",
            "2 | to 5 then.",
            "  | -----^",
        ]
        .join("\n")
    );
}

#[test]
fn test_cli_eval() {
    let output = Command::new(env!("CARGO_BIN_EXE_literals"))
        .args(["--eval", "Set retirement age to 67."])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "retirement age = 67");
}

#[test]
fn test_cli_reports_syntax_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_literals"))
        .args(["--eval", "Set x to 1"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: SyntaxError (expected Dot, found EOF)"));
    assert!(stderr.contains("-> <eval>"));
}
