//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch over the closed value set. `and`/`or` are
//! short-circuited by the interpreter before reaching here; the arms below
//! cover them only for callers that already hold both operands.

use crawl_ir::BinaryOp;

use crate::errors::{
    division_by_zero, integer_overflow, invalid_tuple_operation, modulo_by_zero,
    non_integer_operand, non_numeric_operand, EvalResult,
};
use crate::value::{TupleTable, Value};

// Helper functions for repetitive checked arithmetic patterns

/// Checked arithmetic operation with overflow handling.
#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> EvalResult {
    result.map(Value::Int).ok_or_else(|| integer_overflow(op_name))
}

/// Checked division with zero guard.
#[inline]
fn checked_div(a: i64, b: i64) -> EvalResult {
    if b == 0 {
        Err(division_by_zero())
    } else {
        checked_arith(a.checked_div(b), "division")
    }
}

/// Checked modulo with zero guard.
#[inline]
fn checked_mod(a: i64, b: i64) -> EvalResult {
    if b == 0 {
        Err(modulo_by_zero())
    } else {
        checked_arith(a.checked_rem(b), "modulo")
    }
}

// Direct Dispatch Function

/// Evaluate a binary operation on two evaluated operands.
///
/// Tuples only support `+` (concatenation into a new tuple from `tuples`).
/// Mixed int/double arithmetic promotes to double.
pub fn evaluate_binary(
    left: &Value,
    right: &Value,
    op: BinaryOp,
    tuples: &TupleTable,
) -> EvalResult {
    let has_tuple = matches!(left, Value::Tuple(_)) || matches!(right, Value::Tuple(_));
    if has_tuple && !op.is_short_circuit() {
        return eval_tuple_binary(left, right, op, tuples);
    }

    match op {
        BinaryOp::And => Ok(Value::Bool(left.is_truthy() && right.is_truthy())),
        BinaryOp::Or => Ok(Value::Bool(left.is_truthy() || right.is_truthy())),
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul => eval_arith(left, right, op),
        BinaryOp::Div => {
            let (a, b) = numeric_pair(left, right, op)?;
            Ok(Value::Double(a / b))
        }
        BinaryOp::FloorDiv => eval_floor_div(left, right),
        BinaryOp::Mod | BinaryOp::BitAnd | BinaryOp::BitOr | BinaryOp::BitXor => {
            eval_int_only(left, right, op)
        }
        BinaryOp::Eq => Ok(Value::Bool(values_equal(left, right))),
        BinaryOp::NotEq => Ok(Value::Bool(!values_equal(left, right))),
        BinaryOp::Lt | BinaryOp::LtEq | BinaryOp::Gt | BinaryOp::GtEq => {
            eval_comparison(left, right, op)
        }
    }
}

// Type-Specific Evaluation Functions

fn eval_tuple_binary(left: &Value, right: &Value, op: BinaryOp, tuples: &TupleTable) -> EvalResult {
    if op != BinaryOp::Add {
        return Err(invalid_tuple_operation());
    }
    match (left.as_tuple(), right.as_tuple()) {
        (Some(a), Some(b)) => {
            let mut items = Vec::with_capacity(a.len() + b.len());
            items.extend_from_slice(a);
            items.extend_from_slice(b);
            Ok(tuples.alloc(items))
        }
        _ => Err(non_numeric_operand(op)),
    }
}

/// Both operands widened to `f64`, or the operator's non-numeric error.
fn numeric_pair(left: &Value, right: &Value, op: BinaryOp) -> EvalResult<(f64, f64)> {
    match (left.as_f64(), right.as_f64()) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(non_numeric_operand(op)),
    }
}

fn eval_arith(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    if let (Value::Int(a), Value::Int(b)) = (left, right) {
        return match op {
            BinaryOp::Add => checked_arith(a.checked_add(*b), "addition"),
            BinaryOp::Sub => checked_arith(a.checked_sub(*b), "subtraction"),
            _ => checked_arith(a.checked_mul(*b), "multiplication"),
        };
    }
    let (a, b) = numeric_pair(left, right, op)?;
    Ok(Value::Double(match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        _ => a * b,
    }))
}

/// `//` truncates toward zero; with a double operand the quotient is
/// computed in `f64` and truncated to an integer.
#[expect(
    clippy::cast_possible_truncation,
    reason = "`//` of doubles yields a truncated integer"
)]
fn eval_floor_div(left: &Value, right: &Value) -> EvalResult {
    if let (Value::Int(a), Value::Int(b)) = (left, right) {
        return checked_div(*a, *b);
    }
    let (a, b) = numeric_pair(left, right, BinaryOp::FloorDiv)?;
    Ok(Value::Int((a / b).trunc() as i64))
}

fn eval_int_only(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    let (Value::Int(a), Value::Int(b)) = (left, right) else {
        return Err(non_integer_operand(op));
    };
    match op {
        BinaryOp::Mod => checked_mod(*a, *b),
        BinaryOp::BitAnd => Ok(Value::Int(a & b)),
        BinaryOp::BitOr => Ok(Value::Int(a | b)),
        _ => Ok(Value::Int(a ^ b)),
    }
}

fn eval_comparison(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    let result = if let (Value::Int(a), Value::Int(b)) = (left, right) {
        compare(a, b, op)
    } else {
        let (a, b) = numeric_pair(left, right, op)?;
        compare(&a, &b, op)
    };
    Ok(Value::Bool(result))
}

fn compare<T: PartialOrd>(a: &T, b: &T, op: BinaryOp) -> bool {
    match op {
        BinaryOp::Lt => a < b,
        BinaryOp::LtEq => a <= b,
        BinaryOp::Gt => a > b,
        _ => a >= b,
    }
}

/// `None` equals only `None`, a bool equals only the same bool; anything
/// else compares numerically. Non-numeric pairs are simply unequal.
#[expect(
    clippy::float_cmp,
    reason = "script equality on doubles is exact, matching integer equality"
)]
fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::None, other) | (other, Value::None) => matches!(other, Value::None),
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Bool(_), _) | (_, Value::Bool(_)) => false,
        (Value::Int(a), Value::Int(b)) => a == b,
        _ => match (left.as_f64(), right.as_f64()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        },
    }
}
