use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    /// Reserved words, looked up after lower-casing the scanned word.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("set", TokenKind::SetVar);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("to", TokenKind::To);
        map.insert("done", TokenKind::LeaveBlock);
        map.insert("plus", TokenKind::Binop);
        map.insert("minus", TokenKind::Binop);
        map.insert("times", TokenKind::Binop);
        map
    };
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum TokenKind {
    BOF,
    EOF,

    // Reserved
    SetVar,
    If,
    Then,
    To,
    LeaveBlock,

    IdentifierWord,
    Number,

    Binop,      // plus, minus, +, -
    Comparison, // is, is not, <, >=

    Dot,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    /// Creates a token without source position, for token sources that do
    /// not come from the scanner.
    pub fn bare(kind: TokenKind, value: &str) -> Self {
        Token {
            kind,
            value: value.to_string(),
            span: Span::null(),
        }
    }

    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    /// One-line rendering used by the `--tokens` dump.
    pub fn debug(&self) -> String {
        if self.is_one_of_many(&[
            TokenKind::IdentifierWord,
            TokenKind::Number,
            TokenKind::Binop,
            TokenKind::Comparison,
        ]) {
            format!("{} ({})", self.kind, self.value)
        } else {
            format!("{} ()", self.kind)
        }
    }
}
