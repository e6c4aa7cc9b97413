//! Runtime for parsed programs.
//!
//! - interpreter: walks the AST and produces an `Outcome`
//! - evaluator: the `Evaluator` interface and the standard operations
//! - environment: name to value bindings made by assignments
//! - value: runtime values

pub mod environment;
pub mod evaluator;
pub mod interpreter;
pub mod value;
