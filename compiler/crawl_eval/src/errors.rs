//! Centralized error constructors for the evaluator.
//!
//! Operators and builtins produce a line-less `EvalError`; the interpreter
//! attaches the source line of the node being evaluated with
//! `EvalError::at`, yielding the `RuntimeError` reported to the host.

use std::borrow::Cow;

use crawl_ir::BinaryOp;
use thiserror::Error;

/// A failed evaluation step, before its source line is known.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{message}")]
pub struct EvalError {
    pub message: Cow<'static, str>,
}

impl EvalError {
    fn new(message: impl Into<Cow<'static, str>>) -> Self {
        EvalError {
            message: message.into(),
        }
    }

    /// Attach the 0-based source line.
    pub fn at(self, line: u32) -> RuntimeError {
        RuntimeError {
            message: self.message.into_owned(),
            line,
        }
    }
}

pub type EvalResult<T = crate::Value> = Result<T, EvalError>;

/// A fatal error that aborts the current run.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{message} at line {}", .line + 1)]
pub struct RuntimeError {
    pub message: String,
    /// 0-based source line.
    pub line: u32,
}

impl RuntimeError {
    /// The text posted to the host's print log.
    pub fn report(&self) -> String {
        format!("Runtime error: {self}\n")
    }
}

// Variable and Function Errors

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::new(format!("Tried to access undefined variable '{name}'"))
}

#[cold]
pub fn undefined_function(name: &str) -> EvalError {
    EvalError::new(format!("Tries to access undefined function '{name}'"))
}

#[cold]
pub fn wrong_arg_count() -> EvalError {
    EvalError::new("Wrong number of arguments")
}

#[cold]
pub fn recursion_limit_hit() -> EvalError {
    EvalError::new("Recursion limit hit")
}

// Control Flow Errors

#[cold]
pub fn misplaced_flow() -> EvalError {
    EvalError::new("Invalid placement of break / continue")
}

#[cold]
pub fn return_outside_function() -> EvalError {
    EvalError::new("Return outside of function")
}

#[cold]
pub fn for_requires_tuple() -> EvalError {
    EvalError::new("For loop requires tuple")
}

// Binary Operation Errors

#[cold]
pub fn invalid_tuple_operation() -> EvalError {
    EvalError::new("Invalid binary operation for tuple")
}

#[cold]
pub fn non_numeric_operand(op: BinaryOp) -> EvalError {
    let operation = match op {
        BinaryOp::Add => "Addition",
        BinaryOp::Sub => "Subtraction",
        BinaryOp::Mul => "Multiplication",
        BinaryOp::Div | BinaryOp::FloorDiv => "Division",
        _ => "Comparison",
    };
    EvalError::new(format!("{operation} of non-numeric type"))
}

#[cold]
pub fn non_integer_operand(op: BinaryOp) -> EvalError {
    let operation = match op {
        BinaryOp::BitAnd => "Bitwise and",
        BinaryOp::BitOr => "Bitwise or",
        BinaryOp::BitXor => "Bitwise xor",
        _ => "Modulo",
    };
    EvalError::new(format!("{operation} of non-integer type"))
}

#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::new(format!("Integer overflow in {operation}"))
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::new("Division by zero")
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::new("Modulo by zero")
}

// Unary Operation Errors

#[cold]
pub fn negation_of_non_numeric() -> EvalError {
    EvalError::new("Negation of non-numeric type")
}

#[cold]
pub fn not_of_non_boolean() -> EvalError {
    EvalError::new("Boolean not of non-boolean type")
}

// Builtin Errors

#[cold]
pub fn invalid_argument() -> EvalError {
    EvalError::new("Invalid argument")
}

#[cold]
pub fn invalid_integer() -> EvalError {
    EvalError::new("Invalid integer")
}

#[cold]
pub fn index_out_of_bounds() -> EvalError {
    EvalError::new("Index out of bounds")
}

#[cold]
pub fn non_integer_index() -> EvalError {
    EvalError::new("Non-integer index")
}

#[cold]
pub fn len_requires_tuple() -> EvalError {
    EvalError::new("len requires tuple")
}
