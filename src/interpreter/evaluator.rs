//! Arithmetic and comparison operations.
//!
//! The interpreter hands every binary operation to an `Evaluator` together
//! with the operator text exactly as scanned. `StandardEvaluator` understands
//! both the symbolic and the worded spellings.

use crate::errors::errors::ErrorImpl;

use super::value::Value;

/// Computes the result of a binary operation from its operator text and two
/// operand values.
///
/// Implementations are expected to be free of side effects. Errors are
/// surfaced to the caller unchanged, positioned at the expression.
pub trait Evaluator {
    fn apply_binop(&self, operator: &str, left: &Value, right: &Value) -> Result<Value, ErrorImpl>;

    fn apply_comparison(&self, operator: &str, left: &Value, right: &Value) -> Result<bool, ErrorImpl>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl ArithmeticOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" | "plus" => Some(ArithmeticOp::Add),
            "-" | "minus" => Some(ArithmeticOp::Subtract),
            "*" | "times" => Some(ArithmeticOp::Multiply),
            "/" | "divided by" => Some(ArithmeticOp::Divide),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    Equal,
    NotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
}

impl ComparisonOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "is" | "=" | "==" => Some(ComparisonOp::Equal),
            "is not" | "!=" => Some(ComparisonOp::NotEqual),
            "is less than" | "<" => Some(ComparisonOp::Less),
            "is greater than" | ">" => Some(ComparisonOp::Greater),
            "is at most" | "is not greater than" | "<=" => Some(ComparisonOp::LessEqual),
            "is at least" | "is not less than" | ">=" => Some(ComparisonOp::GreaterEqual),
            _ => None,
        }
    }
}

/// Numbers-only arithmetic; equality over any two values, ordering over
/// numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardEvaluator;

fn type_mismatch(operator: &str, left: &Value, right: &Value) -> ErrorImpl {
    ErrorImpl::TypeMatchError {
        operator: operator.to_string(),
        left: left.describe(),
        right: right.describe(),
    }
}

fn unknown_operator(operator: &str) -> ErrorImpl {
    ErrorImpl::UnknownOperator {
        operator: operator.to_string(),
    }
}

impl Evaluator for StandardEvaluator {
    fn apply_binop(&self, operator: &str, left: &Value, right: &Value) -> Result<Value, ErrorImpl> {
        let op = ArithmeticOp::from_symbol(operator).ok_or_else(|| unknown_operator(operator))?;

        let (Value::Number(lhs), Value::Number(rhs)) = (left, right) else {
            return Err(type_mismatch(operator, left, right));
        };

        let result = match op {
            ArithmeticOp::Add => lhs + rhs,
            ArithmeticOp::Subtract => lhs - rhs,
            ArithmeticOp::Multiply => lhs * rhs,
            ArithmeticOp::Divide => {
                if *rhs == 0.0 {
                    return Err(ErrorImpl::DivisionByZero);
                }
                lhs / rhs
            }
        };

        Ok(Value::Number(result))
    }

    fn apply_comparison(&self, operator: &str, left: &Value, right: &Value) -> Result<bool, ErrorImpl> {
        let op = ComparisonOp::from_symbol(operator).ok_or_else(|| unknown_operator(operator))?;

        match op {
            // Values of different kinds are never equal.
            ComparisonOp::Equal => Ok(left == right),
            ComparisonOp::NotEqual => Ok(left != right),
            _ => {
                let (Value::Number(lhs), Value::Number(rhs)) = (left, right) else {
                    return Err(type_mismatch(operator, left, right));
                };

                Ok(match op {
                    ComparisonOp::Less => lhs < rhs,
                    ComparisonOp::Greater => lhs > rhs,
                    ComparisonOp::LessEqual => lhs <= rhs,
                    _ => lhs >= rhs,
                })
            }
        }
    }
}
