use crate::Span;

use super::{
    expressions::{BinaryExpr, NumberExpr, SymbolExpr},
    statements::{AssignStmt, IfStmt},
};

/// A whole program: the single statement between `BOF` and `EOF`.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statement: Stmt,
    pub span: Span,
}

/// Statement Types
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Assign(AssignStmt),
    If(IfStmt),
}

impl Stmt {
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Assign(stmt) => &stmt.span,
            Stmt::If(stmt) => &stmt.span,
        }
    }

    /// Number of `if`s wrapped around the innermost statement.
    pub fn depth(&self) -> usize {
        match self {
            Stmt::Assign(_) => 0,
            Stmt::If(stmt) => 1 + stmt.body.depth(),
        }
    }
}

/// Either side of a binary operation, or a value on its own.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Number(NumberExpr),
    Symbol(SymbolExpr),
}

impl Operand {
    pub fn get_span(&self) -> &Span {
        match self {
            Operand::Number(expr) => &expr.span,
            Operand::Symbol(expr) => &expr.span,
        }
    }
}

/// Expression Types
///
/// The grammar allows at most one binary operation per expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Operand(Operand),
    Binary(BinaryExpr),
}

impl Expr {
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Operand(operand) => operand.get_span(),
            Expr::Binary(expr) => &expr.span,
        }
    }
}
