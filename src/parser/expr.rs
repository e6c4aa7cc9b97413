use crate::{
    ast::{
        ast::{Expr, Operand},
        expressions::{BinaryExpr, NumberExpr, SymbolExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{source::TokenSource, tokens::TokenKind},
    Span,
};

use super::parser::Parser;

/// One or more identifier words, joined by single spaces. Stops at the first
/// token that is not an identifier word.
pub fn parse_identifier<S: TokenSource>(parser: &mut Parser<S>) -> Result<SymbolExpr, Error> {
    let first = parser.expect(TokenKind::IdentifierWord)?;

    let start = first.span.start;
    let mut end = first.span.end;
    let mut words = vec![first.value];

    while parser.peek_kind() == TokenKind::IdentifierWord {
        let word = parser.advance();
        end = word.span.end;
        words.push(word.value);
    }

    Ok(SymbolExpr {
        value: words.join(" "),
        span: Span { start, end },
    })
}

pub fn parse_number<S: TokenSource>(parser: &mut Parser<S>) -> Result<NumberExpr, Error> {
    let token = parser.expect(TokenKind::Number)?;

    match token.value.parse() {
        Ok(value) => Ok(NumberExpr {
            value,
            span: token.span,
        }),
        Err(_) => Err(Error::new(
            ErrorImpl::NumberParseError { token: token.value },
            token.span.start,
        )),
    }
}

pub fn parse_operand<S: TokenSource>(parser: &mut Parser<S>) -> Result<Operand, Error> {
    match parser.peek_kind() {
        TokenKind::Number => Ok(Operand::Number(parse_number(parser)?)),
        TokenKind::IdentifierWord => Ok(Operand::Symbol(parse_identifier(parser)?)),
        kind => Err(Error::syntax_one_of(
            vec![TokenKind::IdentifierWord, TokenKind::Number],
            kind,
            parser.peek().span.start.clone(),
        )),
    }
}

/// An operand, optionally followed by one operator and a second operand.
pub fn parse_expr<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    let first = parse_operand(parser)?;

    match parser.peek_kind() {
        TokenKind::Binop | TokenKind::Comparison => Ok(Expr::Binary(parse_operation(parser, first)?)),
        _ => Ok(Expr::Operand(first)),
    }
}

/// The operator and right-hand side of a binary operation.
///
/// Arithmetic only accepts a numeric literal on the right; a comparison
/// accepts any operand.
pub fn parse_operation<S: TokenSource>(
    parser: &mut Parser<S>,
    left: Operand,
) -> Result<BinaryExpr, Error> {
    let operator = parser.advance();

    let right = match operator.kind {
        TokenKind::Comparison => parse_operand(parser)?,
        _ => Operand::Number(parse_number(parser)?),
    };

    Ok(BinaryExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        left,
        operator,
        right,
    })
}
