//! Outcome model: the immutable record of one test run.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use verdict_core::OutcomeKind;
use verdict_core::messages::UNKNOWN_ERROR_MSG;

use crate::sink::Sink;

/// Global outcome ID counter
static OUTCOME_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of an [`Outcome`].
///
/// Clones of an outcome share its id; two runs of the same test never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OutcomeId(u64);

impl OutcomeId {
    fn next() -> Self {
        OutcomeId(OUTCOME_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Result of running one test.
///
/// Invariants, enforced by [`Outcome::new`]:
/// - `Pass` never carries a cause.
/// - `Error` always carries a cause, `"Unknown error"` when none was available.
/// - An empty cause counts as no cause.
#[derive(Debug, Clone)]
pub struct Outcome {
    id: OutcomeId,
    test: Arc<str>,
    kind: OutcomeKind,
    cause: Option<String>,
}

impl Outcome {
    pub fn new(test: impl Into<Arc<str>>, kind: OutcomeKind, cause: Option<String>) -> Self {
        let cause = match kind {
            OutcomeKind::Pass => None,
            OutcomeKind::Fail => cause.filter(|c| !c.is_empty()),
            OutcomeKind::Error => Some(
                cause
                    .filter(|c| !c.is_empty())
                    .unwrap_or_else(|| UNKNOWN_ERROR_MSG.to_string()),
            ),
        };

        Self {
            id: OutcomeId::next(),
            test: test.into(),
            kind,
            cause,
        }
    }

    pub fn pass(test: impl Into<Arc<str>>) -> Self {
        Self::new(test, OutcomeKind::Pass, None)
    }

    pub fn fail(test: impl Into<Arc<str>>, cause: impl Into<String>) -> Self {
        Self::new(test, OutcomeKind::Fail, Some(cause.into()))
    }

    pub fn error(test: impl Into<Arc<str>>, cause: Option<String>) -> Self {
        Self::new(test, OutcomeKind::Error, cause)
    }

    pub fn id(&self) -> OutcomeId {
        self.id
    }

    /// Name of the test that produced this outcome.
    pub fn test(&self) -> &str {
        &self.test
    }

    pub fn kind(&self) -> OutcomeKind {
        self.kind
    }

    pub fn cause(&self) -> Option<&str> {
        self.cause.as_deref()
    }

    /// Check whether `other` is this very outcome (or a clone of it).
    pub fn same_instance(&self, other: &Outcome) -> bool {
        self.id == other.id
    }

    /// Print the rendered outcome: passes to [`Sink::log`], everything else to [`Sink::error`].
    pub fn print(&self, sink: &dyn Sink) {
        let line = self.to_string();
        match self.kind {
            OutcomeKind::Pass => sink.log(&line),
            OutcomeKind::Fail | OutcomeKind::Error => sink.error(&line),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}", self.kind.symbol(), self.kind.label(), self.test)?;
        if let Some(cause) = &self.cause {
            write!(f, ": \n  - {}", cause)?;
        }
        Ok(())
    }
}
