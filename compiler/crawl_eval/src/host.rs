//! The boundary between the execution thread and its host.
//!
//! The runtime never touches host state directly. Every effect is posted
//! as a `HostEvent` through an injected `HostSink`; the only shared state
//! is the `SensorCell` a host fills in to answer `read_front()`.

use std::collections::VecDeque;
use std::sync::Arc;

use crossbeam::channel::{self, Receiver, Sender};
use parking_lot::Mutex;

use crawl_ir::Builtin;

/// Action classes a host distinguishes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum EventKind {
    Print,
    Move,
    RotateLeft,
    RotateRight,
    ReadFront,
    Forward,
}

impl EventKind {
    /// Every kind, in id order.
    pub const ALL: [EventKind; 6] = [
        EventKind::Print,
        EventKind::Move,
        EventKind::RotateLeft,
        EventKind::RotateRight,
        EventKind::ReadFront,
        EventKind::Forward,
    ];

    const fn offset(self) -> u32 {
        match self {
            EventKind::Print => 0,
            EventKind::Move => 1,
            EventKind::RotateLeft => 2,
            EventKind::RotateRight => 3,
            EventKind::ReadFront => 4,
            EventKind::Forward => 5,
        }
    }

    /// The event posted by a builtin, if it posts one.
    pub const fn for_builtin(builtin: Builtin) -> Option<EventKind> {
        match builtin {
            Builtin::Print => Some(EventKind::Print),
            Builtin::Move => Some(EventKind::Move),
            Builtin::RotateLeft => Some(EventKind::RotateLeft),
            Builtin::RotateRight => Some(EventKind::RotateRight),
            Builtin::ReadFront => Some(EventKind::ReadFront),
            Builtin::Forward => Some(EventKind::Forward),
            Builtin::Len | Builtin::Elem | Builtin::Tuple | Builtin::Rand => None,
        }
    }
}

/// A contiguous block of host event ids starting at `base`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct EventIds {
    base: u32,
}

impl EventIds {
    pub const fn new(base: u32) -> Self {
        EventIds { base }
    }

    #[inline]
    pub const fn id(self, kind: EventKind) -> u32 {
        self.base + kind.offset()
    }

    /// Map a host id back to its kind.
    pub fn kind(self, id: u32) -> Option<EventKind> {
        EventKind::ALL.into_iter().find(|k| self.id(*k) == id)
    }
}

/// Result slot for a sensor read, written by the host before it resumes.
#[derive(Clone, Debug, Default)]
pub struct SensorCell(Arc<Mutex<Option<bool>>>);

impl SensorCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, blocked: bool) {
        *self.0.lock() = Some(blocked);
    }

    pub fn get(&self) -> Option<bool> {
        *self.0.lock()
    }
}

#[derive(Clone, Debug)]
pub enum Payload {
    /// Formatted print output, newline terminated.
    Text(String),
    /// `move(x, y)` direction bits, see `encode_direction`.
    Direction(u8),
    Sensor(SensorCell),
    Empty,
}

#[derive(Clone, Debug)]
pub struct HostEvent {
    pub kind: EventKind,
    /// Host-assigned id from `EventIds`.
    pub id: u32,
    pub payload: Payload,
}

/// Receives events from the execution thread.
pub trait HostSink: Send + Sync {
    fn post(&self, event: HostEvent);
}

impl<F> HostSink for F
where
    F: Fn(HostEvent) + Send + Sync,
{
    fn post(&self, event: HostEvent) {
        self(event);
    }
}

/// A sink that forwards events over an unbounded channel.
#[derive(Clone, Debug)]
pub struct ChannelSink {
    sender: Sender<HostEvent>,
}

impl HostSink for ChannelSink {
    fn post(&self, event: HostEvent) {
        if self.sender.send(event).is_err() {
            tracing::trace!("host receiver dropped, event discarded");
        }
    }
}

/// A channel-backed sink and the receiver a host polls.
pub fn channel_sink() -> (ChannelSink, Receiver<HostEvent>) {
    let (sender, receiver) = channel::unbounded();
    (ChannelSink { sender }, receiver)
}

/// Two bits per axis: `0b01` positive, `0b11` negative, `0b00` zero.
/// The x axis occupies bits 2..4, the y axis bits 0..2.
pub fn encode_direction(x: i64, y: i64) -> u8 {
    fn axis(v: i64) -> u8 {
        match v.signum() {
            1 => 0b01,
            -1 => 0b11,
            _ => 0b00,
        }
    }
    (axis(x) << 2) | axis(y)
}

/// Inverse of `encode_direction`, as unit steps.
pub fn decode_direction(bits: u8) -> (i8, i8) {
    fn axis(bits: u8) -> i8 {
        match bits & 0b11 {
            0b01 => 1,
            0b11 => -1,
            _ => 0,
        }
    }
    (axis(bits >> 2), axis(bits))
}

/// Lines shown in a host's scrolling output log.
pub const DEFAULT_LOG_DEPTH: usize = 8;

/// Fixed-depth ring of printed lines; the oldest line scrolls out.
#[derive(Clone, Debug)]
pub struct OutputLog {
    lines: VecDeque<String>,
    depth: usize,
}

impl OutputLog {
    pub fn new(depth: usize) -> Self {
        OutputLog {
            lines: VecDeque::with_capacity(depth),
            depth,
        }
    }

    /// Append one print payload as a line.
    pub fn push(&mut self, text: &str) {
        if self.depth == 0 {
            return;
        }
        if self.lines.len() == self.depth {
            self.lines.pop_front();
        }
        self.lines
            .push_back(text.strip_suffix('\n').unwrap_or(text).to_owned());
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Default for OutputLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_DEPTH)
    }
}

#[cfg(test)]
mod tests;
