//! Builtin dispatch.
//!
//! Arity is checked before any argument is evaluated. Host-effecting
//! builtins pause the run, post their event and then block in a status
//! check until the host resumes.

use rand::Rng;

use crawl_ir::{Builtin, ExprId, ExprRange};

use super::{ExecResult, Interpreter};
use crate::errors::{
    index_out_of_bounds, invalid_argument, invalid_integer, len_requires_tuple, non_integer_index,
    wrong_arg_count, EvalResult,
};
use crate::host::{encode_direction, EventKind, HostEvent, Payload, SensorCell};
use crate::Value;

/// `rand()` returns an integer in `0..RAND_BOUND`.
const RAND_BOUND: i64 = 100;

impl Interpreter<'_> {
    pub(super) fn call_builtin(
        &mut self,
        builtin: Builtin,
        args: ExprRange,
        line: u32,
    ) -> ExecResult<Value> {
        let args = self.ast().expr_list(args);
        tracing::trace!(builtin = builtin.name(), args = args.len(), line, "builtin");

        match (builtin, args) {
            (Builtin::Print, args) => {
                let values = self.eval_args(args)?;
                let mut text = values
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                text.push('\n');
                self.post(EventKind::Print, Payload::Text(text));
                Ok(Value::None)
            }
            (Builtin::Tuple, args) => {
                let values = self.eval_args(args)?;
                Ok(self.tuples.alloc(values))
            }
            (Builtin::Len, &[tuple]) => {
                let tuple = self.eval_expr(tuple)?;
                let len = tuple
                    .as_tuple()
                    .map(<[Value]>::len)
                    .ok_or_else(|| len_requires_tuple().at(line))?;
                Ok(Value::Int(i64::try_from(len).unwrap_or(i64::MAX)))
            }
            (Builtin::Elem, &[tuple, index]) => {
                let tuple = self.eval_expr(tuple)?;
                let index = self.eval_expr(index)?;
                Ok(element(&tuple, &index).map_err(|e| e.at(line))?)
            }
            (Builtin::Move, &[x, y]) => {
                let x = self.eval_integer(x, line)?;
                let y = self.eval_integer(y, line)?;
                self.host_effect(
                    EventKind::Move,
                    Payload::Direction(encode_direction(x, y)),
                    line,
                )?;
                Ok(Value::None)
            }
            (Builtin::RotateLeft, &[]) => {
                self.host_effect(EventKind::RotateLeft, Payload::Empty, line)?;
                Ok(Value::None)
            }
            (Builtin::RotateRight, &[]) => {
                self.host_effect(EventKind::RotateRight, Payload::Empty, line)?;
                Ok(Value::None)
            }
            (Builtin::Forward, &[]) => {
                self.host_effect(EventKind::Forward, Payload::Empty, line)?;
                Ok(Value::None)
            }
            (Builtin::ReadFront, &[]) => {
                let cell = SensorCell::new();
                self.host_effect(EventKind::ReadFront, Payload::Sensor(cell.clone()), line)?;
                Ok(Value::Bool(cell.get().unwrap_or(false)))
            }
            (Builtin::Rand, &[]) => Ok(Value::Int(self.rng.random_range(0..RAND_BOUND))),
            _ => Err(wrong_arg_count().at(line).into()),
        }
    }

    fn post(&self, kind: EventKind, payload: Payload) {
        self.host.post(HostEvent {
            kind,
            id: self.events.id(kind),
            payload,
        });
    }

    /// Hand an effect to the host and wait for it to resume the run.
    ///
    /// The pause flag is raised before posting, so a host that resumes
    /// from inside `post` cannot be missed.
    fn host_effect(&mut self, kind: EventKind, payload: Payload, line: u32) -> ExecResult<()> {
        self.control.pause();
        self.post(kind, payload);
        self.status(line)
    }

    fn eval_integer(&mut self, arg: ExprId, line: u32) -> ExecResult<i64> {
        let value = self.eval_expr(arg)?;
        Ok(to_integer(&value)
            .ok_or_else(invalid_integer)
            .map_err(|e| e.at(line))?)
    }
}

/// An int, or a double with no fractional part.
#[expect(
    clippy::cast_possible_truncation,
    reason = "whole doubles are accepted where integers are expected"
)]
fn to_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Int(n) => Some(*n),
        Value::Double(d) if d.fract() == 0.0 => Some(*d as i64),
        _ => None,
    }
}

/// `elem(tuple, index)`.
#[expect(
    clippy::cast_possible_truncation,
    reason = "whole doubles are accepted as indices"
)]
fn element(tuple: &Value, index: &Value) -> EvalResult {
    let Some(items) = tuple.as_tuple() else {
        return Err(invalid_argument());
    };
    let index = match index {
        Value::Int(n) => *n,
        Value::Double(d) if d.fract() != 0.0 => return Err(non_integer_index()),
        Value::Double(d) => *d as i64,
        _ => return Err(invalid_argument()),
    };
    usize::try_from(index)
        .ok()
        .and_then(|i| items.get(i))
        .cloned()
        .ok_or_else(index_out_of_bounds)
}
