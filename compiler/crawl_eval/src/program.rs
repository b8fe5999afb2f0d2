//! The program runtime: one loaded program, at most one execution thread.
//!
//! `Program` is owned by the host. The execution thread receives shared
//! handles to the parsed program, the control block and the sink, builds
//! an `Interpreter` for the run and drops it (with every runtime value)
//! before reporting itself finished.

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use thiserror::Error;

use crawl_ir::ParsedProgram;

use crate::control::Control;
use crate::host::{EventIds, EventKind, HostEvent, HostSink, Payload};
use crate::interpreter::{Interpreter, Unwind};
use crate::{RuntimeConfig, TupleTable};

const THREAD_NAME: &str = "crawl-run";

#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("no program loaded")]
    NotLoaded,
    #[error("program is already running")]
    AlreadyRunning,
    #[error("failed to spawn execution thread: {0}")]
    Spawn(#[from] io::Error),
}

/// Cloneable control surface for host callbacks.
///
/// Lets an event handler resume or stop the run without holding the
/// `Program` itself.
#[derive(Clone, Debug)]
pub struct ProgramHandle {
    control: Arc<Control>,
}

impl ProgramHandle {
    pub fn pause(&self) {
        self.control.pause();
    }

    pub fn resume(&self) {
        self.control.resume();
    }

    /// Ask the run to stop without waiting for it.
    pub fn request_stop(&self) {
        self.control.request_stop();
    }

    pub fn is_running(&self) -> bool {
        self.control.is_running()
    }

    pub fn is_paused(&self) -> bool {
        self.control.is_paused()
    }

    pub fn current_line(&self) -> u32 {
        self.control.current_line()
    }
}

pub struct Program {
    sink: Arc<dyn HostSink>,
    config: RuntimeConfig,
    events: EventIds,
    control: Arc<Control>,
    tuples: TupleTable,
    loaded: Option<Arc<ParsedProgram>>,
    thread: Option<JoinHandle<()>>,
}

impl Program {
    pub fn new(sink: Arc<dyn HostSink>, config: RuntimeConfig) -> Self {
        let control = Arc::new(Control::new(config.poll_interval));
        Program {
            sink,
            config,
            events: EventIds::default(),
            control,
            tuples: TupleTable::new(),
            loaded: None,
            thread: None,
        }
    }

    /// Use the host's id block starting at `base` for posted events.
    pub fn set_event_ids(&mut self, base: u32) {
        self.events = EventIds::new(base);
    }

    pub fn event_ids(&self) -> EventIds {
        self.events
    }

    /// Take ownership of a parsed program, stopping any current run.
    pub fn load_program(&mut self, program: ParsedProgram) {
        self.stop();
        tracing::debug!(
            statements = program.ast.stmt_count(),
            expressions = program.ast.expr_count(),
            "program loaded"
        );
        self.loaded = Some(Arc::new(program));
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    /// Start a run of the loaded program on a new execution thread.
    pub fn start(&mut self) -> Result<(), ProgramError> {
        self.reap_finished();
        if self.thread.is_some() {
            return Err(ProgramError::AlreadyRunning);
        }
        let Some(program) = self.loaded.clone() else {
            return Err(ProgramError::NotLoaded);
        };

        self.control.begin_run();
        let run = Run {
            program,
            control: Arc::clone(&self.control),
            sink: Arc::clone(&self.sink),
            config: self.config.clone(),
            events: self.events,
            tuples: self.tuples.clone(),
        };
        let spawned = thread::Builder::new()
            .name(THREAD_NAME.to_owned())
            .spawn(move || run.execute());
        match spawned {
            Ok(handle) => {
                self.thread = Some(handle);
                Ok(())
            }
            Err(error) => {
                self.control.finish();
                Err(ProgramError::Spawn(error))
            }
        }
    }

    /// Stop the run, wait for the thread, and unload the program.
    ///
    /// Idempotent.
    pub fn stop(&mut self) {
        self.control.request_stop();
        if let Some(handle) = self.thread.take() {
            if handle.join().is_err() {
                tracing::warn!("execution thread panicked");
            }
            tracing::debug!("execution thread joined");
        }
        self.loaded = None;
    }

    pub fn pause(&self) {
        self.control.pause();
    }

    pub fn resume(&self) {
        self.control.resume();
    }

    pub fn handle(&self) -> ProgramHandle {
        ProgramHandle {
            control: Arc::clone(&self.control),
        }
    }

    pub fn is_running(&self) -> bool {
        self.control.is_running()
    }

    pub fn is_paused(&self) -> bool {
        self.control.is_paused()
    }

    /// 0-based line of the statement or expression last reached.
    pub fn current_line(&self) -> u32 {
        self.control.current_line()
    }

    /// The table every tuple of every run is allocated through.
    pub fn tuples(&self) -> &TupleTable {
        &self.tuples
    }

    /// Join a thread whose run is over, keeping the program loaded.
    ///
    /// A run is over once the thread has exited or its control block is no
    /// longer running; in the latter case the thread is at most unwinding.
    fn reap_finished(&mut self) {
        let over = self
            .thread
            .as_ref()
            .is_some_and(|handle| handle.is_finished() || !self.control.is_running());
        if !over {
            return;
        }
        if let Some(handle) = self.thread.take() {
            if handle.join().is_err() {
                tracing::warn!("execution thread panicked");
            }
        }
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Everything the execution thread owns for one run.
struct Run {
    program: Arc<ParsedProgram>,
    control: Arc<Control>,
    sink: Arc<dyn HostSink>,
    config: RuntimeConfig,
    events: EventIds,
    tuples: TupleTable,
}

impl Run {
    fn execute(self) {
        tracing::debug!("execution thread started");
        let outcome = {
            let mut interpreter =
                Interpreter::new(&self.program, &self.control, &*self.sink, &self.config)
                    .with_event_ids(self.events)
                    .with_tuples(self.tuples.clone());
            self.passes(&mut interpreter)
        };

        match outcome {
            Ok(()) => tracing::debug!("run finished"),
            Err(Unwind::Cancelled(_)) => tracing::debug!("run cancelled"),
            Err(Unwind::Runtime(error)) => {
                tracing::warn!(line = error.line + 1, %error, "run aborted");
                self.sink.post(HostEvent {
                    kind: EventKind::Print,
                    id: self.events.id(EventKind::Print),
                    payload: Payload::Text(error.report()),
                });
            }
        }
        self.control.finish();
    }

    /// Run the entry statement once, or repeatedly until stopped.
    fn passes(&self, interpreter: &mut Interpreter<'_>) -> Result<(), Unwind> {
        loop {
            interpreter.run_entry()?;
            if !self.config.repeat {
                return Ok(());
            }
            self.control.wait(self.config.repeat_delay)?;
        }
    }
}
