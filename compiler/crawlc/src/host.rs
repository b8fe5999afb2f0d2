//! Console stand-in for the game host.
//!
//! Prints script output to stdout through a scrolling `OutputLog`, keeps a
//! minimal robot pose so actions can be logged meaningfully, answers
//! sensor reads from a fixed setting, and resumes the run after each
//! action once the configured delay has passed.

use std::thread;
use std::time::Duration;

use crossbeam::channel::{Receiver, RecvTimeoutError};

use crawl_eval::{decode_direction, EventKind, HostEvent, OutputLog, Payload, ProgramHandle};

/// How often an idle host checks whether the run has finished.
const IDLE_POLL: Duration = Duration::from_millis(20);

const RUNTIME_ERROR_PREFIX: &str = "Runtime error:";

/// Facing, clockwise from north.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Heading {
    #[default]
    North,
    East,
    South,
    West,
}

impl Heading {
    fn right(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    fn left(self) -> Self {
        self.right().right().right()
    }

    fn step(self) -> (i64, i64) {
        match self {
            Heading::North => (0, -1),
            Heading::East => (1, 0),
            Heading::South => (0, 1),
            Heading::West => (-1, 0),
        }
    }
}

#[derive(Debug)]
pub struct ConsoleHost {
    log: OutputLog,
    delay: Duration,
    sensor_closed: bool,
    position: (i64, i64),
    heading: Heading,
    runtime_errors: usize,
}

impl ConsoleHost {
    pub fn new(delay: Duration, sensor_closed: bool) -> Self {
        ConsoleHost {
            log: OutputLog::default(),
            delay,
            sensor_closed,
            position: (0, 0),
            heading: Heading::default(),
            runtime_errors: 0,
        }
    }

    /// Handle events until the run is over and its queue is drained.
    pub fn serve(&mut self, events: &Receiver<HostEvent>, program: &ProgramHandle) {
        loop {
            match events.recv_timeout(IDLE_POLL) {
                Ok(event) => {
                    if let Some(text) = self.apply(&event) {
                        print!("{text}");
                    }
                    if event.kind != EventKind::Print {
                        thread::sleep(self.delay);
                        program.resume();
                    }
                }
                Err(RecvTimeoutError::Timeout) => {
                    if !program.is_running() {
                        break;
                    }
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    }

    /// Apply one event to the host state. Returns printed text, if any.
    pub fn apply(&mut self, event: &HostEvent) -> Option<String> {
        match (&event.kind, &event.payload) {
            (EventKind::Print, Payload::Text(text)) => {
                if text.starts_with(RUNTIME_ERROR_PREFIX) {
                    self.runtime_errors += 1;
                }
                self.log.push(text);
                return Some(text.clone());
            }
            (EventKind::Move, Payload::Direction(bits)) => {
                let (dx, dy) = decode_direction(*bits);
                self.position.0 += i64::from(dx);
                self.position.1 += i64::from(dy);
            }
            (EventKind::Forward, _) => {
                let (dx, dy) = self.heading.step();
                self.position.0 += dx;
                self.position.1 += dy;
            }
            (EventKind::RotateLeft, _) => self.heading = self.heading.left(),
            (EventKind::RotateRight, _) => self.heading = self.heading.right(),
            (EventKind::ReadFront, Payload::Sensor(cell)) => cell.set(self.sensor_closed),
            (kind, payload) => {
                tracing::warn!(?kind, ?payload, "unexpected event payload");
                return None;
            }
        }
        tracing::info!(
            kind = ?event.kind,
            x = self.position.0,
            y = self.position.1,
            heading = ?self.heading,
            "action applied"
        );
        None
    }

    pub fn log(&self) -> &OutputLog {
        &self.log
    }

    pub fn position(&self) -> (i64, i64) {
        self.position
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Runtime error reports seen so far.
    pub fn runtime_errors(&self) -> usize {
        self.runtime_errors
    }
}

#[cfg(test)]
mod tests;
