//! Output sinks for rendered outcomes and summaries.
//!
//! The harness only formats strings and decides which channel they go to; a [`Sink`] decides how they are shown.
//! Passing outcomes and summaries go to [`Sink::log`], everything else to [`Sink::error`].

use std::sync::Mutex;

use crate::config::RunConfig;

const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Destination for printed lines.
pub trait Sink: Send + Sync {
    /// Emit a regular line.
    fn log(&self, line: &str);

    /// Emit an error line.
    fn error(&self, line: &str);
}

/// Console sink: regular lines to stdout, error lines to stderr.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSink {
    color: bool,
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::from_config(&RunConfig::default())
    }
}

impl ConsoleSink {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn from_config(config: &RunConfig) -> Self {
        Self::new(config.color.enabled())
    }
}

impl Sink for ConsoleSink {
    fn log(&self, line: &str) {
        println!("{}", line);
    }

    fn error(&self, line: &str) {
        if self.color {
            eprintln!("{RED}{}{RESET}", line);
        } else {
            eprintln!("{}", line);
        }
    }
}

/// Forwards lines to `tracing` at `info` / `error` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl Sink for TracingSink {
    fn log(&self, line: &str) {
        tracing::info!(target: "verdict::report", "{}", line);
    }

    fn error(&self, line: &str) {
        tracing::error!(target: "verdict::report", "{}", line);
    }
}

/// Which [`Sink`] method received a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Log,
    Error,
}

/// Captures lines in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<(Channel, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every captured line with its channel.
    pub fn lines(&self) -> Vec<(Channel, String)> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Captured lines sent to `channel`.
    pub fn channel(&self, channel: Channel) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, line)| line)
            .collect()
    }

    fn push(&self, channel: Channel, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((channel, line.to_string()));
        }
    }
}

impl Sink for MemorySink {
    fn log(&self, line: &str) {
        self.push(Channel::Log, line);
    }

    fn error(&self, line: &str) {
        self.push(Channel::Error, line);
    }
}
