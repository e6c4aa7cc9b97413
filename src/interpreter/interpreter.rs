//! Executes a parsed program.
//!
//! The interpreter walks the AST once, resolving identifiers through its
//! environment and delegating every operation to its evaluator.

use std::fmt::Display;

use tracing::debug;

use crate::{
    ast::{
        ast::{Expr, Operand, Program, Stmt},
        statements::{AssignStmt, IfStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    environment::Environment,
    evaluator::{Evaluator, StandardEvaluator},
    value::Value,
};

/// What running a statement did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Assigned { name: String, value: Value },
    /// A conditional whose condition was false.
    Skipped,
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Assigned { name, value } => write!(f, "{} = {}", name, value),
            Outcome::Skipped => write!(f, "condition was false, nothing set"),
        }
    }
}

pub struct Interpreter<E: Evaluator = StandardEvaluator> {
    evaluator: E,
    environment: Environment,
}

impl Interpreter<StandardEvaluator> {
    pub fn new() -> Self {
        Interpreter::with_evaluator(StandardEvaluator)
    }
}

impl Default for Interpreter<StandardEvaluator> {
    fn default() -> Self {
        Interpreter::new()
    }
}

impl<E: Evaluator> Interpreter<E> {
    pub fn with_evaluator(evaluator: E) -> Self {
        Interpreter {
            evaluator,
            environment: Environment::new(),
        }
    }

    pub fn get_environment(&self) -> &Environment {
        &self.environment
    }

    pub fn get_evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Runs the program's statement. Bindings persist on this interpreter.
    pub fn run(&mut self, program: &Program) -> Result<Outcome, Error> {
        self.exec_stmt(&program.statement)
    }

    pub fn exec_stmt(&mut self, stmt: &Stmt) -> Result<Outcome, Error> {
        match stmt {
            Stmt::Assign(stmt) => Ok(self.exec_assign(stmt)),
            Stmt::If(stmt) => self.exec_if(stmt),
        }
    }

    fn exec_assign(&mut self, stmt: &AssignStmt) -> Outcome {
        let value = self.eval_operand(&stmt.value);
        debug!(name = %stmt.target, %value, "assign");

        self.environment.bind(stmt.target.clone(), value.clone());

        Outcome::Assigned {
            name: stmt.target.clone(),
            value,
        }
    }

    fn exec_if(&mut self, stmt: &IfStmt) -> Result<Outcome, Error> {
        let condition = self.eval_expr(&stmt.condition)?;

        let holds = match condition {
            Value::Boolean(holds) => holds,
            Value::Number(number) => number != 0.0,
            Value::Name(_) => {
                return Err(Error::new(
                    ErrorImpl::InvalidCondition {
                        value: condition.describe(),
                    },
                    stmt.condition.get_span().start.clone(),
                ))
            }
        };
        debug!(%condition, holds, "if");

        if holds {
            self.exec_stmt(&stmt.body)
        } else {
            Ok(Outcome::Skipped)
        }
    }

    pub fn eval_expr(&self, expr: &Expr) -> Result<Value, Error> {
        match expr {
            Expr::Operand(operand) => Ok(self.eval_operand(operand)),
            Expr::Binary(binary) => {
                let left = self.eval_operand(&binary.left);
                let right = self.eval_operand(&binary.right);
                let operator = binary.operator.value.as_str();

                let result = match binary.operator.kind {
                    TokenKind::Comparison => self
                        .evaluator
                        .apply_comparison(operator, &left, &right)
                        .map(Value::Boolean),
                    _ => self.evaluator.apply_binop(operator, &left, &right),
                };

                result.map_err(|error| Error::new(error, binary.span.start.clone()))
            }
        }
    }

    /// Numbers evaluate to themselves; identifiers to their binding, or to
    /// their own name when unbound.
    pub fn eval_operand(&self, operand: &Operand) -> Value {
        match operand {
            Operand::Number(number) => Value::Number(number.value),
            Operand::Symbol(symbol) => self
                .environment
                .lookup(&symbol.value)
                .cloned()
                .unwrap_or_else(|| Value::Name(symbol.value.clone())),
        }
    }
}
