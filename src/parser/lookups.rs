use std::collections::HashMap;

use crate::{
    ast::ast::Stmt,
    errors::errors::Error,
    lexer::{
        source::TokenSource,
        tokens::{Token, TokenKind},
    },
};

use super::{parser::Parser, stmt::*};

/// Handler for a statement body. Receives the keyword token that selected it,
/// already consumed.
pub type StmtHandler<S> = fn(&mut Parser<S>, Token) -> Result<Stmt, Error>;

// Lookup table inside parser struct, so it's easier
pub type StmtLookup<S> = HashMap<TokenKind, StmtHandler<S>>;

pub fn create_token_lookups<S: TokenSource>(parser: &mut Parser<S>) {
    // Statements
    parser.stmt(TokenKind::SetVar, parse_set_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
}
