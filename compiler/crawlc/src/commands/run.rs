//! The `run` command: execute a program against the console host.

use std::sync::Arc;
use std::time::Duration;

use crawl_eval::{channel_sink, Program, RuntimeConfig};

use super::{read_file, report_parse_errors, source_lines};
use crate::host::ConsoleHost;

/// Default host delay after applying an action.
const DEFAULT_DELAY: Duration = Duration::from_millis(100);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub once: bool,
    pub seed: Option<u64>,
    pub delay: Duration,
    /// `read_front()` reports a blocked path.
    pub sensor_closed: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            once: false,
            seed: None,
            delay: DEFAULT_DELAY,
            sensor_closed: false,
        }
    }
}

impl RunOptions {
    pub fn runtime_config(&self) -> RuntimeConfig {
        let config = RuntimeConfig::default().with_repeat(!self.once);
        match self.seed {
            Some(seed) => config.with_rand_seed(seed),
            None => config,
        }
    }
}

/// Parse `run` flags.
pub fn parse_run_options(flags: &[&str]) -> Result<RunOptions, String> {
    let mut options = RunOptions::default();
    for &flag in flags {
        if flag == "--once" {
            options.once = true;
        } else if let Some(seed) = flag.strip_prefix("--seed=") {
            let seed = seed
                .parse()
                .map_err(|_| format!("invalid seed '{seed}'"))?;
            options.seed = Some(seed);
        } else if let Some(delay) = flag.strip_prefix("--delay=") {
            let ms = delay
                .parse()
                .map_err(|_| format!("invalid delay '{delay}'"))?;
            options.delay = Duration::from_millis(ms);
        } else if let Some(state) = flag.strip_prefix("--sensor=") {
            options.sensor_closed = match state {
                "open" => false,
                "closed" => true,
                _ => return Err(format!("invalid sensor state '{state}', expected open or closed")),
            };
        } else {
            return Err(format!("unknown option '{flag}'"));
        }
    }
    Ok(options)
}

/// Parse and run a file until it finishes (with `--once`) or forever.
pub fn run_file(path: &str, options: &RunOptions) {
    let lines = source_lines(&read_file(path));
    let parsed = match crawl_parse::parse(&lines) {
        Ok(parsed) => parsed,
        Err(errors) => {
            report_parse_errors(path, &errors);
            std::process::exit(1);
        }
    };

    let (sink, events) = channel_sink();
    let mut program = Program::new(Arc::new(sink), options.runtime_config());
    program.load_program(parsed);
    if let Err(e) = program.start() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }

    let mut host = ConsoleHost::new(options.delay, options.sensor_closed);
    host.serve(&events, &program.handle());
    program.stop();

    if host.runtime_errors() > 0 {
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests;
