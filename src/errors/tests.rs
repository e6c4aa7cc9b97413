//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip, Expected};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10, Rc::new("test.lit".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.lit".to_string()));
    let error = Error::syntax(TokenKind::Dot, TokenKind::EOF, pos.clone());

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position(), &pos);
}

#[test]
fn test_syntax_error_names_both_kinds() {
    let error = Error::syntax(TokenKind::To, TokenKind::Number, Position::null());

    assert_eq!(error.get_error_name(), "SyntaxError");
    assert_eq!(
        error.kind(),
        &ErrorImpl::SyntaxError {
            expected: Expected::Token(TokenKind::To),
            actual: TokenKind::Number,
        }
    );
    assert_eq!(
        error.kind().to_string(),
        "syntax error: expected To, found Number"
    );
}

#[test]
fn test_syntax_error_one_of() {
    let error = Error::syntax_one_of(
        vec![TokenKind::IdentifierWord, TokenKind::Number],
        TokenKind::Then,
        Position::null(),
    );

    assert_eq!(
        error.get_tip().to_string(),
        "expected one of IdentifierWord, Number, found Then"
    );
}

#[test]
fn test_nesting_too_deep_error() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 4 }, Position::null());

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.kind().to_string(), "conditionals nested deeper than 4");
}

#[test]
fn test_type_mismatch_error() {
    let error = Error::new(
        ErrorImpl::TypeMatchError {
            operator: "plus".to_string(),
            left: "name `x`".to_string(),
            right: "number 1".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "TypeMatchError");
    assert_eq!(
        error.get_tip().to_string(),
        "`plus` cannot be applied to name `x` and number 1"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position::null(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_display_includes_location() {
    let error = Error::new(
        ErrorImpl::DivisionByZero,
        Position(7, Rc::new("test.lit".to_string())),
    );

    assert_eq!(error.to_string(), "division by zero at test.lit:7");
}
