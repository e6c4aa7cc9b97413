use crate::{lexer::tokens::Token, Span};

use super::ast::Operand;

// LITERALS

/// Number Expression
/// Represents a numeric literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: f64,
    pub span: Span,
}

/// Symbol Expression
/// A multi-word identifier, its words joined by single spaces.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub value: String,
    pub span: Span,
}

// OPERATIONS

/// Binary Expression
///
/// For arithmetic the right-hand side is always a numeric literal;
/// identifiers are only accepted there when comparing.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Operand,
    pub operator: Token,
    pub right: Operand,
    pub span: Span,
}
