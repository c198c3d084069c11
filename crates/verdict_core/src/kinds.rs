//! Outcome kind registry.
//!
//! Callers work with [`OutcomeKind`] values and look up spellings and metadata here instead of scattering string
//! literals across reporters.
//!
//! ## Examples
//! ```rust
//! use verdict_core::kinds;
//! use verdict_core::OutcomeKind;
//!
//! assert_eq!(kinds::from_str("fail"), Some(OutcomeKind::Fail));
//! assert_eq!(kinds::tally_label(OutcomeKind::Error), "with errors");
//! ```

use crate::OutcomeKind;

/// Metadata for one outcome kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindInfo {
    pub id: OutcomeKind,
    /// Canonical lower-case spelling.
    pub canonical: &'static str,
    /// Symbol used when rendering a single outcome.
    pub symbol: char,
    /// Label used for this kind's clause in a run summary (`"3 passed"`, `"all with errors"`).
    pub tally: &'static str,
}

/// Registry of outcome kinds, in reporting order.
pub const KINDS: &[KindInfo] = &[
    KindInfo {
        id: OutcomeKind::Pass,
        canonical: "pass",
        symbol: '✓',
        tally: "passed",
    },
    KindInfo {
        id: OutcomeKind::Fail,
        canonical: "fail",
        symbol: '✗',
        tally: "failed",
    },
    KindInfo {
        id: OutcomeKind::Error,
        canonical: "error",
        symbol: '✗',
        tally: "with errors",
    },
];

/// Return full metadata for an outcome kind.
#[inline]
pub fn info_for(kind: OutcomeKind) -> &'static KindInfo {
    match kind {
        OutcomeKind::Pass => &KINDS[0],
        OutcomeKind::Fail => &KINDS[1],
        OutcomeKind::Error => &KINDS[2],
    }
}

/// Return the canonical spelling for a kind (e.g. `"pass"`).
#[inline]
pub fn as_str(kind: OutcomeKind) -> &'static str {
    info_for(kind).canonical
}

#[inline]
pub fn symbol(kind: OutcomeKind) -> char {
    info_for(kind).symbol
}

/// Return the summary clause label for a kind.
#[inline]
pub fn tally_label(kind: OutcomeKind) -> &'static str {
    info_for(kind).tally
}

/// Resolve a spelling to an outcome kind.
///
/// Matching is case-sensitive.
pub fn from_str(name: &str) -> Option<OutcomeKind> {
    KINDS.iter().find(|k| k.canonical == name).map(|k| k.id)
}
