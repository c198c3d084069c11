//! Test set: an ordered batch of test cases under shared setup and teardown.
//!
//! Tests run strictly one after another. Test N has finished (outcome recorded) before test N+1 starts, so fixture
//! state left by one test's hooks is visible to the next.
//!
//! Per-test failures never abort the batch. Set-level hook failures do: they are returned as [`SetError`] and the
//! remaining steps are skipped. Set-level hook panics are not caught.

use std::future::Future;

use crate::case::{Hook, TestCase, hook};
use crate::config::RunConfig;
use crate::error::{Fallible, SetError};
use crate::outcome::Outcome;
use crate::sink::{ConsoleSink, Sink};
use crate::summary::RunSummary;

/// A set of tests to be executed.
#[derive(Default)]
pub struct TestSet {
    tests: Vec<TestCase>,
    before: Option<Hook>,
    after: Option<Hook>,
    last_summary: Option<RunSummary>,
}

impl TestSet {
    pub fn new(tests: impl IntoIterator<Item = TestCase>) -> Self {
        Self {
            tests: tests.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Set the hook run once before all tests
    pub fn before<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Fallible> + Send + 'static,
    {
        self.before = Some(hook(f));
        self
    }

    /// Set the hook run once after all tests
    pub fn after<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Fallible> + Send + 'static,
    {
        self.after = Some(hook(f));
        self
    }

    /// Append a test to the end of the set.
    pub fn push(&mut self, test: TestCase) {
        self.tests.push(test);
    }

    pub fn tests(&self) -> &[TestCase] {
        &self.tests
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Summary of the last completed run.
    pub fn last_summary(&self) -> Option<&RunSummary> {
        self.last_summary.as_ref()
    }

    /// Outcomes of the last completed run (empty before the first run).
    pub fn results(&self) -> &[Outcome] {
        self.last_summary.as_ref().map(RunSummary::results).unwrap_or_default()
    }

    /// Run all tests, printing to the console when `print_results` is set.
    pub async fn run(&mut self, print_results: bool) -> Result<RunSummary, SetError> {
        let config = RunConfig::new().with_print_results(print_results);
        self.run_with(&config).await
    }

    /// Run all tests with the given configuration, printing to a [`ConsoleSink`].
    pub async fn run_with(&mut self, config: &RunConfig) -> Result<RunSummary, SetError> {
        let sink = ConsoleSink::from_config(config);
        self.run_with_sink(config.print_results, &sink).await
    }

    /// Run all tests, printing to `sink` when `print_results` is set.
    #[tracing::instrument(skip_all, fields(tests = self.tests.len()))]
    pub async fn run_with_sink(&mut self, print_results: bool, sink: &dyn Sink) -> Result<RunSummary, SetError> {
        if let Some(before) = &self.before {
            before().await.map_err(|failure| {
                tracing::warn!(%failure, "test set setup failed, aborting run");
                SetError::Setup(failure)
            })?;
        }

        let mut summary = RunSummary::new();
        for test in &mut self.tests {
            let outcome = test.run().await;
            summary.add_result(&outcome);

            if print_results {
                outcome.print(sink);
            }
        }

        if print_results {
            summary.print(sink);
        }

        if let Some(after) = &self.after {
            after().await.map_err(|failure| {
                tracing::warn!(%failure, "test set teardown failed");
                SetError::Teardown(failure)
            })?;
        }

        tracing::debug!(
            total = summary.total(),
            passed = summary.passed(),
            failed = summary.failed(),
            errors = summary.errors(),
            "test set finished"
        );

        self.last_summary = Some(summary.clone());
        Ok(summary)
    }
}

impl std::fmt::Debug for TestSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestSet")
            .field("tests", &self.tests)
            .field("before", &self.before.is_some())
            .field("after", &self.after.is_some())
            .field("last_summary", &self.last_summary)
            .finish()
    }
}
