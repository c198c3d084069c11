//! Run summary: aggregated outcomes of one test set run.

use std::collections::HashSet;
use std::fmt;

use verdict_core::{OutcomeKind, Tally};

use crate::outcome::{Outcome, OutcomeId};
use crate::sink::Sink;

/// Aggregates outcomes and keeps per-kind counts.
///
/// Outcomes are deduplicated by identity: adding the same outcome (or a clone of it) twice is a no-op. Two
/// different outcomes with equal contents are both counted.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    results: Vec<Outcome>,
    seen: HashSet<OutcomeId>,
    tally: Tally,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an outcome. Returns `false` if this outcome was already present.
    pub fn add_result(&mut self, outcome: &Outcome) -> bool {
        if !self.seen.insert(outcome.id()) {
            tracing::trace!(test = outcome.test(), "outcome already counted");
            return false;
        }

        self.tally.record(outcome.kind());
        self.results.push(outcome.clone());
        true
    }

    /// Retained outcomes, in the order they were added.
    pub fn results(&self) -> &[Outcome] {
        &self.results
    }

    /// Number of tests that were executed.
    pub fn total(&self) -> usize {
        self.tally.total()
    }

    pub fn passed(&self) -> usize {
        self.tally.passed()
    }

    pub fn failed(&self) -> usize {
        self.tally.failed()
    }

    /// Number of tests that had errors.
    pub fn errors(&self) -> usize {
        self.tally.errors()
    }

    pub fn count(&self, kind: OutcomeKind) -> usize {
        self.tally.count(kind)
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Check that nothing failed or errored.
    pub fn is_success(&self) -> bool {
        self.failed() == 0 && self.errors() == 0
    }

    /// Print the summary line to the log channel of `sink`.
    pub fn print(&self, sink: &dyn Sink) {
        sink.log(&self.to_string());
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tally.sentence())
    }
}
