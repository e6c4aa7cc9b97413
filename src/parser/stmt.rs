use tracing::trace;

use crate::{
    ast::{
        ast::{Program, Stmt},
        statements::{AssignStmt, IfStmt},
    },
    errors::errors::Error,
    lexer::{
        source::TokenSource,
        tokens::{Token, TokenKind},
    },
    Span,
};

use super::{
    expr::{parse_expr, parse_identifier, parse_operand},
    parser::Parser,
};

/// `BOF statement EOF`
pub fn parse_program<S: TokenSource>(parser: &mut Parser<S>) -> Result<Program, Error> {
    let start = parser.expect(TokenKind::BOF)?.span.start;
    let statement = parse_stmt(parser)?;
    parser.expect(TokenKind::EOF)?;

    Ok(Program {
        statement,
        span: Span {
            start,
            end: parser.get_position(),
        },
    })
}

/// Statements up to a `LeaveBlock` or `EOF`, neither of which is consumed.
pub fn parse_stmts<S: TokenSource>(parser: &mut Parser<S>) -> Result<Vec<Stmt>, Error> {
    let mut statements = Vec::new();

    while !matches!(parser.peek_kind(), TokenKind::LeaveBlock | TokenKind::EOF) {
        statements.push(parse_stmt(parser)?);
    }

    Ok(statements)
}

/// A statement body followed by its terminating `.`.
pub fn parse_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<Stmt, Error> {
    let stmt = parse_stmt_contents(parser)?;
    parser.expect(TokenKind::Dot)?;

    Ok(stmt)
}

/// Consumes one token and hands off to the statement registered for it.
pub fn parse_stmt_contents<S: TokenSource>(parser: &mut Parser<S>) -> Result<Stmt, Error> {
    let token = parser.advance();

    let handler = match parser.get_stmt_lookup().get(&token.kind) {
        Some(handler) => *handler,
        None => {
            return Err(Error::syntax_one_of(
                parser.statement_keywords(),
                token.kind,
                token.span.start,
            ))
        }
    };

    trace!(keyword = %token.kind, "statement");
    handler(parser, token)
}

pub fn parse_set_stmt<S: TokenSource>(parser: &mut Parser<S>, keyword: Token) -> Result<Stmt, Error> {
    let target = parse_identifier(parser)?;
    parser.expect(TokenKind::To)?;
    let value = parse_operand(parser)?;

    Ok(Stmt::Assign(AssignStmt {
        target: target.value,
        span: Span {
            start: keyword.span.start,
            end: value.get_span().end.clone(),
        },
        value,
    }))
}

pub fn parse_if_stmt<S: TokenSource>(parser: &mut Parser<S>, keyword: Token) -> Result<Stmt, Error> {
    let condition = parse_expr(parser)?;
    parser.expect(TokenKind::Then)?;

    // The dependent statement is parsed whatever the condition turns out to
    // be, and its terminator belongs to the enclosing statement.
    parser.enter_nested(parser.peek().span.start.clone())?;
    let body = parse_stmt_contents(parser)?;
    parser.leave_nested();

    Ok(Stmt::If(IfStmt {
        condition,
        span: Span {
            start: keyword.span.start,
            end: body.get_span().end.clone(),
        },
        body: Box::new(body),
    }))
}
