//! Test case: a named async body with optional setup and teardown hooks.
//!
//! ## Lifecycle
//!
//! [`TestCase::run`] always produces exactly one [`Outcome`] and never lets a failure escape:
//!
//! 1. `before` runs first. If it fails, the test is an `Error` and the body is skipped.
//! 2. Otherwise the body runs: `Ok` → `Pass`, assertion failure → `Fail`, anything else → `Error`.
//! 3. `after` runs unconditionally. Its failure turns a `Pass`/`Fail` into an `Error`; an existing `Error` is kept
//!    (first fatal error wins).
//!
//! Panics raised by a hook or the body are caught and treated as unexpected failures.

use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use verdict_core::OutcomeKind;

use crate::error::{Fallible, Failure};
use crate::outcome::Outcome;
use crate::sink::Sink;

/// A boxed, shareable async operation: a hook or a test body.
pub type Hook = Arc<dyn Fn() -> BoxFuture<'static, Fallible> + Send + Sync>;

/// Box an async closure into a [`Hook`].
pub fn hook<F, Fut>(f: F) -> Hook
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Fallible> + Send + 'static,
{
    Arc::new(move || f().boxed())
}

/// Invoke a hook, converting panics (while building or polling its future) into failures.
async fn invoke(hook: &Hook) -> Fallible {
    let fut = match panic::catch_unwind(AssertUnwindSafe(|| hook())) {
        Ok(fut) => fut,
        Err(payload) => return Err(Failure::from_panic(payload)),
    };

    match AssertUnwindSafe(fut).catch_unwind().await {
        Ok(result) => result,
        Err(payload) => Err(Failure::from_panic(payload)),
    }
}

/// A single test that can be executed.
pub struct TestCase {
    name: Arc<str>,
    body: Hook,
    before: Option<Hook>,
    after: Option<Hook>,
    last_outcome: Option<Outcome>,
}

impl TestCase {
    /// Create a test named `name` running `body`.
    pub fn new<F, Fut>(name: impl Into<Arc<str>>, body: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Fallible> + Send + 'static,
    {
        Self {
            name: name.into(),
            body: hook(body),
            before: None,
            after: None,
            last_outcome: None,
        }
    }

    /// Set the setup hook
    pub fn before<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Fallible> + Send + 'static,
    {
        self.before = Some(hook(f));
        self
    }

    /// Set the teardown hook
    pub fn after<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Fallible> + Send + 'static,
    {
        self.after = Some(hook(f));
        self
    }

    /// Set the setup hook from an already boxed [`Hook`], e.g. one shared between several tests.
    pub fn with_before_hook(mut self, before: Hook) -> Self {
        self.before = Some(before);
        self
    }

    /// Set the teardown hook from an already boxed [`Hook`].
    pub fn with_after_hook(mut self, after: Hook) -> Self {
        self.after = Some(after);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outcome of the most recent run, `None` until the first run completes.
    pub fn last_outcome(&self) -> Option<&Outcome> {
        self.last_outcome.as_ref()
    }

    /// Run the full lifecycle and return its outcome.
    #[tracing::instrument(skip_all, fields(test = %self.name))]
    pub async fn run(&mut self) -> Outcome {
        let setup = match &self.before {
            Some(before) => invoke(before).await,
            None => Ok(()),
        };

        let (mut kind, mut cause) = match setup {
            Err(failure) => {
                tracing::debug!(%failure, "setup failed, skipping body");
                (OutcomeKind::Error, failure.into_message())
            }
            Ok(()) => match invoke(&self.body).await {
                Ok(()) => (OutcomeKind::Pass, None),
                Err(Failure::Assertion(msg)) => (OutcomeKind::Fail, Some(msg)),
                Err(Failure::Unexpected(msg)) => (OutcomeKind::Error, msg),
            },
        };

        if let Some(after) = &self.after {
            if let Err(failure) = invoke(after).await {
                if kind == OutcomeKind::Error {
                    tracing::debug!(%failure, "teardown failed after an earlier error; keeping the first error");
                } else {
                    tracing::debug!(%failure, "teardown failed");
                    kind = OutcomeKind::Error;
                    cause = failure.into_message();
                }
            }
        }

        let outcome = Outcome::new(self.name.clone(), kind, cause);
        tracing::debug!(kind = %outcome.kind(), "test finished");

        self.last_outcome = Some(outcome.clone());
        outcome
    }
}

impl std::fmt::Debug for TestCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .field("before", &self.before.is_some())
            .field("after", &self.after.is_some())
            .field("last_outcome", &self.last_outcome)
            .finish()
    }
}

/// Run a single hookless test, print its outcome to `sink` and return it.
pub async fn run_test<F, Fut>(name: impl Into<Arc<str>>, body: F, sink: &dyn Sink) -> Outcome
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Fallible> + Send + 'static,
{
    let outcome = TestCase::new(name, body).run().await;
    outcome.print(sink);
    outcome
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::assert::{assert, assert_equals};
    use crate::sink::{Channel, MemorySink};

    #[tokio::test]
    async fn test_passing_body() {
        let mut case = TestCase::new("passes", || async { Ok(()) });
        assert!(case.last_outcome().is_none());

        let outcome = case.run().await;
        assert_eq!(outcome.kind(), OutcomeKind::Pass);
        assert_eq!(outcome.cause(), None);
        assert!(case.last_outcome().unwrap().same_instance(&outcome));
    }

    #[tokio::test]
    async fn test_assertion_is_fail() {
        let mut case = TestCase::new("fails", || async {
            assert_equals(1, 2)?;
            Ok(())
        });

        let outcome = case.run().await;
        assert_eq!(outcome.kind(), OutcomeKind::Fail);
        assert_eq!(outcome.cause(), Some("Assertion failed, values are not the same"));
    }

    #[tokio::test]
    async fn test_assertion_in_setup_is_error() {
        let mut case = TestCase::new("setup asserts", || async { Ok(()) }).before(|| async {
            assert(false)?;
            Ok(())
        });

        let outcome = case.run().await;
        assert_eq!(outcome.kind(), OutcomeKind::Error);
        assert_eq!(outcome.cause(), Some("Assertion failed"));
    }

    fn explode() -> Fallible {
        panic!("kaboom")
    }

    #[tokio::test]
    async fn test_panicking_body_is_error() {
        let mut case = TestCase::new("panics", || async { explode() });

        let outcome = case.run().await;
        assert_eq!(outcome.kind(), OutcomeKind::Error);
        assert_eq!(outcome.cause(), Some("kaboom"));
    }

    #[tokio::test]
    async fn test_rerun_overwrites_last_outcome() {
        let mut case = TestCase::new("rerun", || async { Ok(()) });
        let first = case.run().await;
        let second = case.run().await;

        assert!(!first.same_instance(&second));
        assert!(case.last_outcome().unwrap().same_instance(&second));
    }

    #[tokio::test]
    async fn test_run_test_prints_outcome() {
        let sink = MemorySink::new();
        let outcome = run_test("quick", || async { Err(Failure::unknown()) }, &sink).await;

        assert_eq!(outcome.kind(), OutcomeKind::Error);
        assert_eq!(
            sink.channel(Channel::Error),
            vec!["✗ [Error] quick: \n  - Unknown error".to_string()]
        );
    }

    #[tokio::test]
    async fn test_shared_setup_hook() {
        let calls = Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let counter = calls.clone();
        let setup = hook(move || {
            counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            async { Ok(()) }
        });
        let teardown = hook(|| async { Err(Failure::unexpected("cleanup failed")) });

        let mut first = TestCase::new("first", || async { Ok(()) }).with_before_hook(setup.clone());
        let mut second = TestCase::new("second", || async { Ok(()) })
            .with_before_hook(setup)
            .with_after_hook(teardown);

        assert_eq!(first.run().await.kind(), OutcomeKind::Pass);
        let outcome = second.run().await;
        assert_eq!(outcome.kind(), OutcomeKind::Error);
        assert_eq!(outcome.cause(), Some("cleanup failed"));
        assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 2);
    }
}
