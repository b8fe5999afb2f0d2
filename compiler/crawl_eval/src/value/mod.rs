//! Runtime values.
//!
//! A closed tagged union. `Tuple` is the only composite; it is immutable
//! and shared through `Heap`, so copying a value bumps a count and the
//! tuple is freed when the last copy is dropped. Tuples can only nest
//! acyclically, so counting never leaks.

mod format;
mod heap;
mod tuple;

pub use format::format_double;
pub use heap::Heap;
pub use tuple::{TupleData, TupleTable};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    None,
    Bool(bool),
    Int(i64),
    Double(f64),
    Tuple(Heap<TupleData>),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "None",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Double(_) => "double",
            Value::Tuple(_) => "tuple",
        }
    }

    /// Condition semantics: `None`, `False`, zero and the empty tuple are
    /// false; everything else is true.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::None => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Double(d) => *d != 0.0,
            Value::Tuple(t) => !t.is_empty(),
        }
    }

    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Double(_))
    }

    /// Numeric value widened to `f64`.
    #[expect(
        clippy::cast_precision_loss,
        reason = "mixed int/double arithmetic promotes to double"
    )]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Double(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&[Value]> {
        match self {
            Value::Tuple(t) => Some(t.items()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests;
