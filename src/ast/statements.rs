use crate::Span;

use super::ast::{Expr, Operand, Stmt};

/// `Set <identifier> to <operand>`
#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub target: String,
    pub value: Operand,
    pub span: Span,
}

/// `If <expression> then <statement body>`
///
/// The body carries no terminator of its own; the enclosing statement's
/// `.` closes both.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub body: Box<Stmt>,
    pub span: Span,
}
