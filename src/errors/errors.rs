use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// Builds a `SyntaxError` for a single expected token kind.
    pub fn syntax(expected: TokenKind, actual: TokenKind, position: Position) -> Self {
        Error::new(
            ErrorImpl::SyntaxError {
                expected: Expected::Token(expected),
                actual,
            },
            position,
        )
    }

    /// Builds a `SyntaxError` for a choice between several token kinds.
    pub fn syntax_one_of(expected: Vec<TokenKind>, actual: TokenKind, position: Position) -> Self {
        Error::new(
            ErrorImpl::SyntaxError {
                expected: Expected::OneOf(expected),
                actual,
            },
            position,
        )
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::SyntaxError { .. } => "SyntaxError",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::UnknownOperator { .. } => "UnknownOperator",
            ErrorImpl::TypeMatchError { .. } => "TypeMatchError",
            ErrorImpl::DivisionByZero => "DivisionByZero",
            ErrorImpl::InvalidCondition { .. } => "InvalidCondition",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::SyntaxError { expected, actual } => {
                ErrorTip::Suggestion(format!("expected {}, found {}", expected, actual))
            }
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Conditionals may be nested at most {} deep",
                limit
            )),
            ErrorImpl::UnknownOperator { operator } => {
                ErrorTip::Suggestion(format!("Unknown operator `{}`", operator))
            }
            ErrorImpl::TypeMatchError {
                operator,
                left,
                right,
            } => ErrorTip::Suggestion(format!(
                "`{}` cannot be applied to {} and {}",
                operator, left, right
            )),
            ErrorImpl::DivisionByZero => ErrorTip::None,
            ErrorImpl::InvalidCondition { value } => ErrorTip::Suggestion(format!(
                "`{}` is not a number or a comparison, did you forget to set it?",
                value
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}:{}", self.internal_error, self.position.1, self.position.0)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// What a `SyntaxError` wanted to see at the failing position.
#[derive(Debug, Clone, PartialEq)]
pub enum Expected {
    Token(TokenKind),
    OneOf(Vec<TokenKind>),
}

impl Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expected::Token(kind) => write!(f, "{}", kind),
            Expected::OneOf(kinds) => {
                let names = kinds
                    .iter()
                    .map(|kind| kind.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "one of {}", names)
            }
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("syntax error: expected {expected}, found {actual}")]
    SyntaxError { expected: Expected, actual: TokenKind },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("conditionals nested deeper than {limit}")]
    NestingTooDeep { limit: usize },
    #[error("unknown operator {operator:?}")]
    UnknownOperator { operator: String },
    #[error("operator {operator:?} cannot be applied to {left} and {right}")]
    TypeMatchError {
        operator: String,
        left: String,
        right: String,
    },
    #[error("division by zero")]
    DivisionByZero,
    #[error("{value} cannot be used as a condition")]
    InvalidCondition { value: String },
}
