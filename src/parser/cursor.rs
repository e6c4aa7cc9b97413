//! One-token lookahead over a pull-based token source.

use tracing::trace;

use crate::{
    errors::errors::Error,
    lexer::{
        source::TokenSource,
        tokens::{Token, TokenKind},
    },
};

/// Holds the token most recently consumed and the single lookahead token.
///
/// The lookahead slot is filled on construction, so `peek` is valid
/// immediately. Nothing is pulled from the source once `EOF` has been
/// consumed.
pub struct Cursor<S: TokenSource> {
    source: S,
    current: Option<Token>,
    next: Token,
}

impl<S: TokenSource> Cursor<S> {
    pub fn new(mut source: S) -> Self {
        let next = source.next_token();

        Cursor {
            source,
            current: None,
            next,
        }
    }

    /// Returns the lookahead token without consuming it.
    pub fn peek(&self) -> &Token {
        &self.next
    }

    /// Returns the token consumed by the last `advance`, if any.
    pub fn current(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    /// Consumes the lookahead token and returns it.
    ///
    /// # Panics
    ///
    /// Panics if `EOF` has already been consumed. Productions never read past
    /// the end marker, so this is a bug in the caller.
    pub fn advance(&mut self) -> Token {
        if let Some(current) = &self.current {
            if current.kind == TokenKind::EOF {
                panic!("advance() called after EOF was consumed");
            }
        }

        let following = if self.next.kind == TokenKind::EOF {
            self.next.clone()
        } else {
            self.source.next_token()
        };

        let consumed = std::mem::replace(&mut self.next, following);
        trace!(kind = %consumed.kind, value = %consumed.value, "advance");

        self.current = Some(consumed.clone());
        consumed
    }

    /// Consumes the lookahead token, failing unless it is of `expected_kind`.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let token = self.advance();

        if token.kind != expected_kind {
            return Err(Error::syntax(
                expected_kind,
                token.kind,
                token.span.start.clone(),
            ));
        }

        Ok(token)
    }
}
