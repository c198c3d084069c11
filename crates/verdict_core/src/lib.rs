//! Provide the shared outcome vocabulary and pure formatting helpers for the verdict test harness.
//!
//! This crate is intentionally small and dependency-free. It contains deterministic helpers that both:
//! - the harness uses to classify, count and render test outcomes, and
//! - reporters or tooling can use to produce the same user-facing text without running anything.
//!
//! ## Notes
//!
//! - This is a “semantic core” crate: **no IO**, no global state, and no async types.
//! - Current scope: the closed set of outcome kinds and their registry, canonical messages, per-kind tallies and the
//!   run summary sentence.

pub mod kinds;
pub mod messages;
pub mod strings;
pub mod tally;

pub use tally::Tally;

/// Classify the result of running one test.
///
/// The set is closed: every consumer matches it exhaustively, and there is no way to register additional kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    /// The body completed and every hook succeeded.
    Pass,
    /// The body raised an assertion failure.
    Fail,
    /// A hook or the body raised anything other than an assertion failure.
    Error,
}

impl OutcomeKind {
    /// All kinds, in reporting order.
    pub const ALL: [OutcomeKind; 3] = [OutcomeKind::Pass, OutcomeKind::Fail, OutcomeKind::Error];

    /// Canonical lower-case spelling (e.g. `"pass"`).
    #[inline]
    pub fn as_str(self) -> &'static str {
        kinds::as_str(self)
    }

    /// Display label: the canonical spelling with its first character upper-cased (e.g. `"Pass"`).
    pub fn label(self) -> String {
        strings::capitalize_first(kinds::as_str(self))
    }

    /// Symbol printed in front of a rendered outcome.
    #[inline]
    pub fn symbol(self) -> char {
        kinds::symbol(self)
    }
}

impl core::fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
