//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens into
//! a small tagged AST. It is a predictive recursive descent with exactly one
//! token of lookahead and handles:
//!
//! - The lookahead cursor and its `expect` validation primitive
//! - Statement parsing (assignments and conditionals)
//! - Expression parsing (operands and a single binary operation)
//!
//! The first structural mismatch aborts the parse; there is no recovery.

pub mod cursor;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
