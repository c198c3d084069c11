//! Run configuration.

use std::env;
use std::time::Duration;

/// Whether error lines printed to the console are wrapped in ANSI colour codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Colour unless `NO_COLOR` is set.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolve to a concrete on/off decision.
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Auto => env::var_os("NO_COLOR").is_none(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// Options for running a test set.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Print each outcome as it is produced, then the summary
    pub print_results: bool,
    /// Colour choice for the console sink
    pub color: ColorChoice,
    /// Default upper bound used by `until`-based fixtures
    pub until_timeout: Option<Duration>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            print_results: false,
            color: ColorChoice::Auto,
            until_timeout: Some(Duration::from_millis(1000)),
        }
    }
}

impl RunConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether results are printed while running
    pub fn with_print_results(mut self, print_results: bool) -> Self {
        self.print_results = print_results;
        self
    }

    /// Set the colour choice
    pub fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set the default `until` timeout (`None` waits indefinitely)
    pub fn with_until_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.until_timeout = timeout;
        self
    }
}
