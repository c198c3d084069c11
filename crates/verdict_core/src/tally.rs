//! Per-kind outcome counters and the run summary sentence.
//!
//! A [`Tally`] only grows through [`Tally::record`], so `total == passed + failed + errors` holds for every value a
//! caller can observe.

use crate::OutcomeKind;
use crate::kinds;
use crate::messages::NO_TESTS_EXECUTED_MSG;
use crate::strings::capitalize_first;

/// Running counts of recorded outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    total: usize,
    passed: usize,
    failed: usize,
    errors: usize,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one outcome of the given kind.
    pub fn record(&mut self, kind: OutcomeKind) {
        match kind {
            OutcomeKind::Pass => self.passed += 1,
            OutcomeKind::Fail => self.failed += 1,
            OutcomeKind::Error => self.errors += 1,
        }
        self.total += 1;
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn errors(&self) -> usize {
        self.errors
    }

    /// Return the counter for `kind`.
    pub fn count(&self, kind: OutcomeKind) -> usize {
        match kind {
            OutcomeKind::Pass => self.passed,
            OutcomeKind::Fail => self.failed,
            OutcomeKind::Error => self.errors,
        }
    }

    /// Build the human-readable summary line.
    ///
    /// ## Returns
    /// - `"No tests executed."` when nothing was recorded.
    /// - Otherwise `"{total} tests executed: {clauses}"`, where clauses are the non-zero counts in reporting order
    ///   (`passed`, `failed`, `with errors`), a count equal to the total reads `all`, the last clause is joined with
    ///   `" and "`, and the sentence is capitalized and terminated with `.`.
    ///
    /// ## Examples
    /// ```rust
    /// use verdict_core::{OutcomeKind, Tally};
    ///
    /// let mut tally = Tally::new();
    /// for kind in [OutcomeKind::Pass, OutcomeKind::Pass, OutcomeKind::Pass, OutcomeKind::Fail] {
    ///     tally.record(kind);
    /// }
    /// assert_eq!(tally.sentence(), "4 tests executed: 3 passed and 1 failed.");
    /// ```
    pub fn sentence(&self) -> String {
        if self.total == 0 {
            return NO_TESTS_EXECUTED_MSG.to_string();
        }

        let clauses: Vec<String> = OutcomeKind::ALL
            .iter()
            .filter(|&&kind| self.count(kind) > 0)
            .map(|&kind| {
                let count = self.count(kind);
                let label = kinds::tally_label(kind);
                if count == self.total {
                    format!("all {label}")
                } else {
                    format!("{count} {label}")
                }
            })
            .collect();

        let joined = match clauses.split_last() {
            Some((last, [])) => format!("{last}."),
            Some((last, rest)) => format!("{} and {last}.", rest.join(", ")),
            None => String::new(),
        };

        format!("{} tests executed: {}", self.total, capitalize_first(&joined))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally_of(kinds: &[OutcomeKind]) -> Tally {
        let mut tally = Tally::new();
        for &kind in kinds {
            tally.record(kind);
        }
        tally
    }

    #[test]
    fn test_empty_tally_reports_no_tests() {
        assert_eq!(Tally::new().sentence(), "No tests executed.");
    }

    #[test]
    fn test_all_passed() {
        let tally = tally_of(&[OutcomeKind::Pass, OutcomeKind::Pass]);
        assert_eq!(tally.sentence(), "2 tests executed: All passed.");
    }

    #[test]
    fn test_all_with_errors() {
        let tally = tally_of(&[OutcomeKind::Error]);
        assert_eq!(tally.sentence(), "1 tests executed: All with errors.");
    }

    #[test]
    fn test_two_clauses_joined_with_and() {
        let tally = tally_of(&[OutcomeKind::Pass, OutcomeKind::Pass, OutcomeKind::Pass, OutcomeKind::Fail]);
        assert_eq!(tally.sentence(), "4 tests executed: 3 passed and 1 failed.");
    }

    #[test]
    fn test_three_clauses_use_comma_then_and() {
        let tally = tally_of(&[
            OutcomeKind::Pass,
            OutcomeKind::Fail,
            OutcomeKind::Fail,
            OutcomeKind::Error,
        ]);
        assert_eq!(tally.sentence(), "4 tests executed: 1 passed, 2 failed and 1 with errors.");
    }

    #[test]
    fn test_zero_counts_are_skipped() {
        let tally = tally_of(&[OutcomeKind::Fail, OutcomeKind::Error, OutcomeKind::Error]);
        assert_eq!(tally.sentence(), "3 tests executed: 1 failed and 2 with errors.");
    }

    #[test]
    fn test_record_keeps_total_consistent() {
        let tally = tally_of(&[OutcomeKind::Pass, OutcomeKind::Fail, OutcomeKind::Error, OutcomeKind::Pass]);
        assert_eq!(tally.total(), 4);
        assert_eq!(tally.total(), tally.passed() + tally.failed() + tally.errors());
        assert_eq!(tally.count(OutcomeKind::Pass), 2);
    }
}
