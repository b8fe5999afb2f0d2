//! Tests for binary operator implementations.

use crawl_ir::BinaryOp;
use pretty_assertions::assert_eq;

use crate::operators::evaluate_binary;
use crate::{EvalResult, TupleTable, Value};

fn eval(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    evaluate_binary(&left, &right, op, &TupleTable::new())
}

fn message(result: EvalResult) -> String {
    result.unwrap_err().message.into_owned()
}

#[test]
fn test_int_arithmetic() {
    assert_eq!(eval(Value::Int(1), Value::Int(2), BinaryOp::Add).unwrap(), Value::Int(3));
    assert_eq!(eval(Value::Int(5), Value::Int(3), BinaryOp::Sub).unwrap(), Value::Int(2));
    assert_eq!(eval(Value::Int(2), Value::Int(3), BinaryOp::Mul).unwrap(), Value::Int(6));
    assert_eq!(eval(Value::Int(7), Value::Int(2), BinaryOp::Mod).unwrap(), Value::Int(1));
}

#[test]
fn test_mixed_arithmetic_promotes_to_double() {
    assert_eq!(
        eval(Value::Int(1), Value::Double(2.0), BinaryOp::Add).unwrap(),
        Value::Double(3.0)
    );
    assert_eq!(
        eval(Value::Double(1.5), Value::Int(2), BinaryOp::Mul).unwrap(),
        Value::Double(3.0)
    );
}

#[test]
fn test_division_always_double() {
    assert_eq!(eval(Value::Int(5), Value::Int(2), BinaryOp::Div).unwrap(), Value::Double(2.5));
    assert_eq!(eval(Value::Int(4), Value::Int(2), BinaryOp::Div).unwrap(), Value::Double(2.0));
}

#[test]
fn test_floor_division_truncates() {
    assert_eq!(eval(Value::Int(5), Value::Int(2), BinaryOp::FloorDiv).unwrap(), Value::Int(2));
    assert_eq!(eval(Value::Int(-5), Value::Int(2), BinaryOp::FloorDiv).unwrap(), Value::Int(-2));
    assert_eq!(
        eval(Value::Double(7.5), Value::Int(2), BinaryOp::FloorDiv).unwrap(),
        Value::Int(3)
    );
}

#[test]
fn test_division_by_zero() {
    assert_eq!(message(eval(Value::Int(1), Value::Int(0), BinaryOp::FloorDiv)), "Division by zero");
    assert_eq!(message(eval(Value::Int(1), Value::Int(0), BinaryOp::Mod)), "Modulo by zero");
}

#[test]
fn test_integer_overflow() {
    assert_eq!(
        message(eval(Value::Int(i64::MAX), Value::Int(1), BinaryOp::Add)),
        "Integer overflow in addition"
    );
    assert_eq!(
        message(eval(Value::Int(i64::MIN), Value::Int(1), BinaryOp::Sub)),
        "Integer overflow in subtraction"
    );
    assert_eq!(
        message(eval(Value::Int(i64::MIN), Value::Int(-1), BinaryOp::FloorDiv)),
        "Integer overflow in division"
    );
}

#[test]
fn test_bitwise_requires_ints() {
    assert_eq!(eval(Value::Int(6), Value::Int(3), BinaryOp::BitAnd).unwrap(), Value::Int(2));
    assert_eq!(eval(Value::Int(6), Value::Int(3), BinaryOp::BitOr).unwrap(), Value::Int(7));
    assert_eq!(eval(Value::Int(6), Value::Int(3), BinaryOp::BitXor).unwrap(), Value::Int(5));
    assert_eq!(
        message(eval(Value::Int(6), Value::Double(3.0), BinaryOp::BitAnd)),
        "Bitwise and of non-integer type"
    );
    assert_eq!(
        message(eval(Value::Double(6.0), Value::Int(3), BinaryOp::Mod)),
        "Modulo of non-integer type"
    );
}

#[test]
fn test_non_numeric_operands() {
    assert_eq!(
        message(eval(Value::Bool(true), Value::Int(1), BinaryOp::Add)),
        "Addition of non-numeric type"
    );
    assert_eq!(
        message(eval(Value::None, Value::Int(1), BinaryOp::Lt)),
        "Comparison of non-numeric type"
    );
}

#[test]
fn test_comparisons() {
    assert_eq!(eval(Value::Int(2), Value::Int(3), BinaryOp::Lt).unwrap(), Value::Bool(true));
    assert_eq!(eval(Value::Int(3), Value::Int(3), BinaryOp::LtEq).unwrap(), Value::Bool(true));
    assert_eq!(eval(Value::Int(3), Value::Int(2), BinaryOp::Gt).unwrap(), Value::Bool(true));
    assert_eq!(eval(Value::Int(2), Value::Int(3), BinaryOp::GtEq).unwrap(), Value::Bool(false));
    assert_eq!(
        eval(Value::Double(2.5), Value::Int(2), BinaryOp::GtEq).unwrap(),
        Value::Bool(true)
    );
}

#[test]
fn test_equality_special_cases() {
    assert_eq!(eval(Value::None, Value::None, BinaryOp::Eq).unwrap(), Value::Bool(true));
    assert_eq!(eval(Value::None, Value::Int(0), BinaryOp::Eq).unwrap(), Value::Bool(false));
    assert_eq!(eval(Value::Bool(true), Value::Bool(true), BinaryOp::Eq).unwrap(), Value::Bool(true));
    assert_eq!(eval(Value::Bool(true), Value::Int(1), BinaryOp::Eq).unwrap(), Value::Bool(false));
    assert_eq!(eval(Value::Int(1), Value::Double(1.0), BinaryOp::Eq).unwrap(), Value::Bool(true));
    assert_eq!(eval(Value::Int(1), Value::Int(2), BinaryOp::NotEq).unwrap(), Value::Bool(true));
    assert_eq!(eval(Value::None, Value::None, BinaryOp::NotEq).unwrap(), Value::Bool(false));
}

#[test]
fn test_tuple_concatenation() {
    let table = TupleTable::new();
    let a = table.alloc(vec![Value::Int(1)]);
    let b = table.alloc(vec![Value::Int(2), Value::Int(3)]);
    let joined = evaluate_binary(&a, &b, BinaryOp::Add, &table).unwrap();
    assert_eq!(joined.to_string(), "(1, 2, 3)");
    assert_eq!(table.live(), 3);
    drop(joined);
    assert_eq!(table.live(), 2);
}

#[test]
fn test_tuple_rejects_other_operators() {
    let table = TupleTable::new();
    let a = table.alloc(vec![]);
    let err = evaluate_binary(&a, &a, BinaryOp::Eq, &table).unwrap_err();
    assert_eq!(err.message, "Invalid binary operation for tuple");
    let err = evaluate_binary(&a, &Value::Int(1), BinaryOp::Add, &table).unwrap_err();
    assert_eq!(err.message, "Addition of non-numeric type");
}

#[test]
fn test_logical_operators_on_values() {
    assert_eq!(eval(Value::Int(1), Value::Int(0), BinaryOp::And).unwrap(), Value::Bool(false));
    assert_eq!(eval(Value::Int(0), Value::Double(0.5), BinaryOp::Or).unwrap(), Value::Bool(true));
}
