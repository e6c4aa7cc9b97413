//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parsing entry points.
//! The parser is a predictive recursive descent over a pull-based token
//! source with exactly one token of lookahead. Statement bodies are selected
//! through a lookup table keyed by the keyword that starts them.

use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        source::TokenSource,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    cursor::Cursor,
    lookups::{create_token_lookups, StmtHandler, StmtLookup},
    stmt::parse_program,
};

pub const DEFAULT_MAX_NESTING_DEPTH: usize = 64;

/// Tunables for a parse.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserConfig {
    /// How many conditionals may be nested inside one another before the
    /// parse is rejected.
    pub max_nesting_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

/// The main parser structure that maintains parsing state.
///
/// A parser exclusively owns its cursor for the duration of one program's
/// parse.
pub struct Parser<S: TokenSource> {
    /// Lookahead cursor over the token source
    cursor: Cursor<S>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup<S>,
    config: ParserConfig,
    /// Conditionals currently open around the statement being parsed
    depth: usize,
}

impl<S: TokenSource> Parser<S> {
    /// Creates a new Parser instance with its lookup tables registered.
    ///
    /// The cursor pulls the first token straight away.
    pub fn new(source: S, config: ParserConfig) -> Self {
        let mut parser = Parser {
            cursor: Cursor::new(source),
            stmt_lookup: HashMap::new(),
            config,
            depth: 0,
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Returns the lookahead token without advancing.
    pub fn peek(&self) -> &Token {
        self.cursor.peek()
    }

    /// Returns the kind of the lookahead token.
    pub fn peek_kind(&self) -> TokenKind {
        self.cursor.peek().kind
    }

    /// Consumes the lookahead token and returns it.
    pub fn advance(&mut self) -> Token {
        self.cursor.advance()
    }

    /// Consumes a token that must be of the specified kind.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.cursor.expect(expected_kind)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup<S> {
        &self.stmt_lookup
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler<S>) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Keywords that may start a statement body, in a stable order.
    pub fn statement_keywords(&self) -> Vec<TokenKind> {
        let mut kinds = self.stmt_lookup.keys().copied().collect::<Vec<_>>();
        kinds.sort();
        kinds
    }

    pub fn get_config(&self) -> &ParserConfig {
        &self.config
    }

    /// Opens one more level of conditional nesting.
    pub fn enter_nested(&mut self, position: Position) -> Result<(), Error> {
        if self.depth >= self.config.max_nesting_depth {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: self.config.max_nesting_depth,
                },
                position,
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave_nested(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Returns the end position of the last consumed token.
    pub fn get_position(&self) -> Position {
        self.cursor
            .current()
            .map(|token| token.span.end.clone())
            .unwrap_or_else(Position::null)
    }
}

/// Parses a whole program from `source` with the default configuration.
///
/// This is the main entry point for parsing. The first structural mismatch
/// aborts the parse and is returned as the error.
pub fn parse<S: TokenSource>(source: S) -> Result<Program, Error> {
    parse_with_config(source, ParserConfig::default())
}

/// Parses a whole program from `source`.
pub fn parse_with_config<S: TokenSource>(
    source: S,
    config: ParserConfig,
) -> Result<Program, Error> {
    let mut parser = Parser::new(source, config);
    let program = parse_program(&mut parser)?;

    debug!(depth = program.statement.depth(), "parsed program");
    Ok(program)
}
