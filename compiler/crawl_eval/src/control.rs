//! Run control shared between the execution thread and the host.
//!
//! The host flips `running`/`paused` from its own thread; the execution
//! thread observes them at every status check. A paused thread sleeps on
//! a condition variable instead of spinning, waking on `resume`, on
//! `request_stop`, or after one poll interval to re-check cancellation.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};
use thiserror::Error;

/// The run was stopped by the host. Never reported to the script.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
#[error("run cancelled")]
pub struct Cancelled;

#[derive(Debug)]
pub struct Control {
    running: AtomicBool,
    paused: AtomicBool,
    /// 0-based line of the most recent status check.
    line: AtomicU32,
    gate: Mutex<()>,
    wake: Condvar,
    poll_interval: Duration,
}

impl Control {
    pub fn new(poll_interval: Duration) -> Self {
        Control {
            running: AtomicBool::new(false),
            paused: AtomicBool::new(false),
            line: AtomicU32::new(0),
            gate: Mutex::new(()),
            wake: Condvar::new(),
            poll_interval,
        }
    }

    /// Arm for a new run.
    pub fn begin_run(&self) {
        let _gate = self.gate.lock();
        self.paused.store(false, Ordering::SeqCst);
        self.line.store(0, Ordering::SeqCst);
        self.running.store(true, Ordering::SeqCst);
    }

    /// Check for cancellation and block while paused.
    ///
    /// Called by the execution thread before each statement, each
    /// non-trivial expression and each loop iteration.
    pub fn status(&self, line: u32) -> Result<(), Cancelled> {
        if !self.is_running() {
            return Err(Cancelled);
        }
        if self.is_paused() {
            let mut gate = self.gate.lock();
            while self.is_paused() && self.is_running() {
                self.wake.wait_for(&mut gate, self.poll_interval);
            }
        }
        if !self.is_running() {
            return Err(Cancelled);
        }
        self.line.store(line, Ordering::Relaxed);
        tracing::trace!(line, "status");
        Ok(())
    }

    pub fn pause(&self) {
        let _gate = self.gate.lock();
        self.paused.store(true, Ordering::SeqCst);
    }

    pub fn resume(&self) {
        let _gate = self.gate.lock();
        self.paused.store(false, Ordering::SeqCst);
        self.wake.notify_all();
    }

    /// Ask the execution thread to unwind at its next status check.
    pub fn request_stop(&self) {
        let _gate = self.gate.lock();
        self.running.store(false, Ordering::SeqCst);
        self.wake.notify_all();
    }

    /// Mark the run finished. Called by the execution thread on exit.
    pub fn finish(&self) {
        self.request_stop();
    }

    /// Sleep for `delay`, returning early with `Cancelled` on stop.
    pub fn wait(&self, delay: Duration) -> Result<(), Cancelled> {
        let deadline = Instant::now() + delay;
        let mut gate = self.gate.lock();
        while self.is_running() && Instant::now() < deadline {
            self.wake.wait_until(&mut gate, deadline);
        }
        if self.is_running() {
            Ok(())
        } else {
            Err(Cancelled)
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    #[inline]
    pub fn current_line(&self) -> u32 {
        self.line.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

impl Default for Control {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_POLL_INTERVAL)
    }
}

#[cfg(test)]
mod tests;
