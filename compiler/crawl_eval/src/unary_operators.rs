//! Unary operator implementations for the evaluator.

use crawl_ir::UnaryOp;

use crate::errors::{integer_overflow, negation_of_non_numeric, not_of_non_boolean, EvalResult};
use crate::Value;

/// Evaluate a unary operation using direct pattern matching.
pub fn evaluate_unary(value: Value, op: UnaryOp) -> EvalResult {
    match (value, op) {
        (value, UnaryOp::Paren) => Ok(value),

        // Numeric negation
        (Value::Int(n), UnaryOp::Neg) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("negation")),
        (Value::Double(d), UnaryOp::Neg) => Ok(Value::Double(-d)),
        (_, UnaryOp::Neg) => Err(negation_of_non_numeric()),

        // Logical not
        (Value::Bool(b), UnaryOp::Not) => Ok(Value::Bool(!b)),
        (_, UnaryOp::Not) => Err(not_of_non_boolean()),
    }
}
