//! Display formatting for values.

use std::fmt;

use crawl_stack::ensure_sufficient_stack;

use super::{TupleData, Value};

/// Significant digits for doubles, matching C's `%g`.
const PRECISION: i32 = 6;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => f.write_str("None"),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Double(d) => f.write_str(&format_double(*d)),
            Value::Tuple(t) => ensure_sufficient_stack(|| write_tuple(f, t)),
        }
    }
}

fn write_tuple(f: &mut fmt::Formatter<'_>, tuple: &TupleData) -> fmt::Result {
    f.write_str("(")?;
    for (i, item) in tuple.items().iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    if tuple.len() == 1 {
        f.write_str(",")?;
    }
    f.write_str(")")
}

/// Format a double like C's `%g`: six significant digits, trailing zeros
/// removed, scientific notation for very small or large magnitudes.
pub fn format_double(d: f64) -> String {
    if d.is_nan() {
        return "nan".to_string();
    }
    if d.is_infinite() {
        return if d > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if d == 0.0 {
        return if d.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // PRECISION - 1 digits after the point.
    let scientific = format!("{d:.5e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return d.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return d.to_string();
    };

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            strip_trailing_zeros(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = usize::try_from(PRECISION - 1 - exponent).unwrap_or(0);
        strip_trailing_zeros(&format!("{d:.decimals$}")).to_string()
    }
}

fn strip_trailing_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
