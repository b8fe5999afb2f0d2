//! Crawl evaluator and program runtime.
//!
//! - [`Value`] and the per-run [`TupleTable`]
//! - [`Environment`]: globals plus call scopes
//! - [`Interpreter`]: tree-walking evaluation of a [`crawl_ir::ParsedProgram`]
//! - [`Control`]: the pause/resume/stop handshake with the host
//! - [`Program`]: loads a program and runs it on its own thread, posting
//!   effects to a [`HostSink`]

mod config;
mod control;
mod environment;
pub mod errors;
mod host;
mod interpreter;
mod operators;
mod program;
mod unary_operators;
mod value;

pub use crawl_stack::ensure_sufficient_stack;

pub use config::{RuntimeConfig, DEFAULT_POLL_INTERVAL, DEFAULT_REPEAT_DELAY};
pub use control::{Cancelled, Control};
pub use environment::{Environment, DEFAULT_RECURSION_LIMIT};
pub use errors::{EvalError, EvalResult, RuntimeError};
pub use host::{
    channel_sink, decode_direction, encode_direction, ChannelSink, EventIds, EventKind, HostEvent,
    HostSink, OutputLog, Payload, SensorCell, DEFAULT_LOG_DEPTH,
};
pub use interpreter::{ExecResult, Flow, Interpreter, ScopedInterpreter, Unwind};
pub use operators::evaluate_binary;
pub use program::{Program, ProgramError, ProgramHandle};
pub use unary_operators::evaluate_unary;
pub use value::{format_double, Heap, TupleData, TupleTable, Value};

#[cfg(test)]
mod tests;
