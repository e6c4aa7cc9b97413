//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and multi-word identifiers
//! - Numeric literals (negative and fractional)
//! - Comparison and arithmetic phrases
//! - Comments and positions
//! - Token sources
//! - Error cases

use crate::errors::errors::ErrorImpl;

use super::{
    lexer::tokenize,
    source::{TokenSource, TokenStream},
    tokens::{Token, TokenKind},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.lit".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::BOF, TokenKind::EOF]);
    assert_eq!(kinds("   \n\t"), vec![TokenKind::BOF, TokenKind::EOF]);
}

#[test]
fn test_tokenize_keywords_case_insensitive() {
    let tokens = tokenize("Set if THEN to done".to_string(), None).unwrap();

    assert_eq!(tokens[1].kind, TokenKind::SetVar);
    assert_eq!(tokens[1].value, "Set");
    assert_eq!(tokens[2].kind, TokenKind::If);
    assert_eq!(tokens[3].kind, TokenKind::Then);
    assert_eq!(tokens[4].kind, TokenKind::To);
    assert_eq!(tokens[5].kind, TokenKind::LeaveBlock);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_set_statement() {
    assert_eq!(
        kinds("Set x to -39."),
        vec![
            TokenKind::BOF,
            TokenKind::SetVar,
            TokenKind::IdentifierWord,
            TokenKind::To,
            TokenKind::Number,
            TokenKind::Dot,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifier_words() {
    let tokens = tokenize("retirement age driver's_licence".to_string(), None).unwrap();

    assert_eq!(tokens[1].kind, TokenKind::IdentifierWord);
    assert_eq!(tokens[1].value, "retirement");
    assert_eq!(tokens[2].value, "age");
    assert_eq!(tokens[3].value, "driver's_licence");
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 -39 5.".to_string(), None).unwrap();

    assert_eq!(tokens[1].value, "42");
    assert_eq!(tokens[2].value, "3.14");
    assert_eq!(tokens[3].value, "-39");
    assert_eq!(tokens[4].kind, TokenKind::Number);
    assert_eq!(tokens[4].value, "5");
    assert_eq!(tokens[5].kind, TokenKind::Dot);
}

#[test]
fn test_tokenize_comparison_phrases() {
    let tokens = tokenize(
        "is  IS NOT is less than is not greater than is at least".to_string(),
        None,
    )
    .unwrap();

    let values: Vec<_> = tokens[1..tokens.len() - 1]
        .iter()
        .map(|token| (token.kind, token.value.as_str()))
        .collect();

    assert_eq!(
        values,
        vec![
            (TokenKind::Comparison, "is"),
            (TokenKind::Comparison, "is not"),
            (TokenKind::Comparison, "is less than"),
            (TokenKind::Comparison, "is not greater than"),
            (TokenKind::Comparison, "is at least"),
        ]
    );
}

#[test]
fn test_tokenize_is_prefix_is_a_word() {
    let tokens = tokenize("island".to_string(), None).unwrap();

    assert_eq!(tokens[1].kind, TokenKind::IdentifierWord);
    assert_eq!(tokens[1].value, "island");
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("<= >= == != < > = + - * / plus Minus times divided  by".to_string(), None).unwrap();

    let values: Vec<_> = tokens[1..tokens.len() - 1]
        .iter()
        .map(|token| (token.kind, token.value.as_str()))
        .collect();

    assert_eq!(
        values,
        vec![
            (TokenKind::Comparison, "<="),
            (TokenKind::Comparison, ">="),
            (TokenKind::Comparison, "=="),
            (TokenKind::Comparison, "!="),
            (TokenKind::Comparison, "<"),
            (TokenKind::Comparison, ">"),
            (TokenKind::Comparison, "="),
            (TokenKind::Binop, "+"),
            (TokenKind::Binop, "-"),
            (TokenKind::Binop, "*"),
            (TokenKind::Binop, "/"),
            (TokenKind::Binop, "plus"),
            (TokenKind::Binop, "minus"),
            (TokenKind::Binop, "times"),
            (TokenKind::Binop, "divided by"),
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    assert_eq!(
        kinds("// a remark\nSet x to 1. // another"),
        vec![
            TokenKind::BOF,
            TokenKind::SetVar,
            TokenKind::IdentifierWord,
            TokenKind::To,
            TokenKind::Number,
            TokenKind::Dot,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_positions() {
    let tokens = tokenize("Set x to 1".to_string(), Some("test.lit".to_string())).unwrap();

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[2].span.start.0, 4);
    assert_eq!(tokens[2].span.end.0, 5);
    assert_eq!(tokens[4].span.start.0, 9);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
    assert_eq!(tokens[5].span.start.0, 10);
    assert_eq!(tokens[5].span.start.1.as_str(), "test.lit");
}

#[test]
fn test_tokenize_unrecognised_character() {
    let error = tokenize("Set x to 1 @".to_string(), None).unwrap_err();

    assert_eq!(
        error.kind(),
        &ErrorImpl::UnrecognisedToken {
            token: "@".to_string()
        }
    );
    assert_eq!(error.get_position().0, 11);
}

#[test]
fn test_token_debug() {
    assert_eq!(Token::bare(TokenKind::IdentifierWord, "x").debug(), "IdentifierWord (x)");
    assert_eq!(Token::bare(TokenKind::Dot, ".").debug(), "Dot ()");
}

#[test]
fn test_token_stream_yields_eof_when_exhausted() {
    let mut stream = TokenStream::new(vec![Token::bare(TokenKind::BOF, "")]);

    assert_eq!(stream.next_token().kind, TokenKind::BOF);
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_closure_token_source() {
    let mut words = vec!["b", "a"];
    let mut source = move || match words.pop() {
        Some(word) => Token::bare(TokenKind::IdentifierWord, word),
        None => Token::bare(TokenKind::EOF, ""),
    };

    assert_eq!(source.next_token().value, "a");
    assert_eq!(source.next_token().value, "b");
    assert_eq!(source.next_token().kind, TokenKind::EOF);
}
