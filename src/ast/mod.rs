/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Program, statement, expression and operand variants
/// - expressions: Literal, symbol and binary expression nodes
/// - statements: Assignment and conditional statement nodes
pub mod ast;
pub mod expressions;
pub mod statements;
