//! Lexical analysis module.
//!
//! This module contains the scanner that converts program text into a
//! stream of tokens for parsing. It handles:
//!
//! - Tokenization of source text using regex patterns
//! - Recognition of keywords, identifier words, numbers and operator phrases
//! - Token position tracking for error reporting
//! - Comments and whitespace handling
//!
//! It also defines the pull-based `TokenSource` interface the parser reads
//! from, so hand-built token sequences can be parsed without scanning.

pub mod lexer;
pub mod source;
pub mod tokens;

#[cfg(test)]
mod tests;
