//! Pull-based token sources consumed by the parser.

use std::vec::IntoIter;

use crate::Span;

use super::tokens::{Token, TokenKind};

/// A producer of tokens, pulled one at a time.
///
/// Every call yields exactly one token. Once the input is exhausted a source
/// must keep yielding `EOF`.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

impl<F> TokenSource for F
where
    F: FnMut() -> Token,
{
    fn next_token(&mut self) -> Token {
        self()
    }
}

/// A token source over an already scanned token list.
pub struct TokenStream {
    tokens: IntoIter<Token>,
    end: Span,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        let end = tokens
            .last()
            .map(|token| token.span.clone())
            .unwrap_or_else(Span::null);

        TokenStream {
            tokens: tokens.into_iter(),
            end,
        }
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Token {
        match self.tokens.next() {
            Some(token) => token,
            None => Token {
                kind: TokenKind::EOF,
                value: String::new(),
                span: self.end.clone(),
            },
        }
    }
}
