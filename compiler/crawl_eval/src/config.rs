//! Runtime configuration.

use std::time::Duration;

use crate::environment::DEFAULT_RECURSION_LIMIT;

/// How long a paused execution thread sleeps between cancellation checks.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Pause between repeated passes over the program.
pub const DEFAULT_REPEAT_DELAY: Duration = Duration::from_millis(10);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub poll_interval: Duration,
    pub recursion_limit: usize,
    /// Re-run the program body until stopped.
    pub repeat: bool,
    pub repeat_delay: Duration,
    /// Seed for `rand()`; `None` draws one from the OS.
    pub rand_seed: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        RuntimeConfig {
            poll_interval: DEFAULT_POLL_INTERVAL,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            repeat: true,
            repeat_delay: DEFAULT_REPEAT_DELAY,
            rand_seed: None,
        }
    }
}

impl RuntimeConfig {
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    #[must_use]
    pub fn with_recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = limit;
        self
    }

    #[must_use]
    pub fn with_repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }

    #[must_use]
    pub fn with_repeat_delay(mut self, delay: Duration) -> Self {
        self.repeat_delay = delay;
        self
    }

    #[must_use]
    pub fn with_rand_seed(mut self, seed: u64) -> Self {
        self.rand_seed = Some(seed);
        self
    }
}
