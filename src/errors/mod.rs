//! Error types and error handling for the interpreter.
//!
//! This module defines the error types used across every phase. It includes:
//!
//! - Error structures with source position information
//! - The `SyntaxError` variant carrying expected and actual token kinds
//! - Evaluation failures reported by the evaluator
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
