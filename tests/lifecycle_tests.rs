//! Integration tests for the test case lifecycle and test set sequencing.
//!
//! Hooks and bodies append to a shared log so each test can assert exactly what ran, and in which order.

use std::future::{Ready, ready};
use std::sync::{Arc, Mutex};

use verdict::{Fallible, Failure, MemorySink, OutcomeKind, SetError, TestCase, TestSet};

type Log = Arc<Mutex<Vec<String>>>;

/// A hook that records `label` and then returns `result`.
fn step(log: &Log, label: &str, result: Fallible) -> impl Fn() -> Ready<Fallible> + Send + Sync + 'static {
    let log = log.clone();
    let label = label.to_string();
    move || {
        log.lock().unwrap().push(label.clone());
        ready(result.clone())
    }
}

fn entries(log: &Log) -> Vec<String> {
    log.lock().unwrap().clone()
}

fn count(log: &Log, label: &str) -> usize {
    entries(log).iter().filter(|e| *e == label).count()
}

#[tokio::test]
async fn passing_body_and_hooks_yield_pass_without_cause() {
    let log = Log::default();
    let mut case = TestCase::new("ok", step(&log, "body", Ok(())))
        .before(step(&log, "before", Ok(())))
        .after(step(&log, "after", Ok(())));

    let outcome = case.run().await;
    assert_eq!(outcome.kind(), OutcomeKind::Pass);
    assert_eq!(outcome.cause(), None);
    assert_eq!(entries(&log), ["before", "body", "after"]);
}

#[tokio::test]
async fn assertion_failures_keep_their_literal_message() {
    for message in ["Assertion failed", "Assertion failed, values are not the same"] {
        let log = Log::default();
        let mut case = TestCase::new("asserts", step(&log, "body", Err(Failure::assertion(message))));

        let outcome = case.run().await;
        assert_eq!(outcome.kind(), OutcomeKind::Fail);
        assert_eq!(outcome.cause(), Some(message));
    }
}

#[tokio::test]
async fn unexpected_errors_keep_message_or_fall_back() {
    let log = Log::default();

    let mut with_message = TestCase::new("m", step(&log, "body", Err(Failure::unexpected("socket closed"))));
    let outcome = with_message.run().await;
    assert_eq!(outcome.kind(), OutcomeKind::Error);
    assert_eq!(outcome.cause(), Some("socket closed"));

    let mut without_message = TestCase::new("n", step(&log, "body", Err(Failure::unknown())));
    let outcome = without_message.run().await;
    assert_eq!(outcome.kind(), OutcomeKind::Error);
    assert_eq!(outcome.cause(), Some("Unknown error"));
}

#[tokio::test]
async fn failing_setup_skips_body_but_runs_teardown_once() {
    let log = Log::default();
    let mut case = TestCase::new("setup fails", step(&log, "body", Ok(())))
        .before(step(&log, "before", Err(Failure::unexpected("no window"))))
        .after(step(&log, "after", Ok(())));

    let outcome = case.run().await;
    assert_eq!(outcome.kind(), OutcomeKind::Error);
    assert_eq!(outcome.cause(), Some("no window"));
    assert_eq!(count(&log, "body"), 0);
    assert_eq!(count(&log, "after"), 1);
}

#[tokio::test]
async fn failing_setup_keeps_its_error_over_teardown_failure() {
    let log = Log::default();
    let mut case = TestCase::new("both fail", step(&log, "body", Ok(())))
        .before(step(&log, "before", Err(Failure::unexpected("setup"))))
        .after(step(&log, "after", Err(Failure::unexpected("teardown"))));

    let outcome = case.run().await;
    assert_eq!(outcome.cause(), Some("setup"));
}

#[tokio::test]
async fn teardown_failure_overrides_pass_and_fail() {
    for body_result in [Ok(()), Err(Failure::assertion("Assertion failed"))] {
        let log = Log::default();
        let mut case = TestCase::new("teardown fails", step(&log, "body", body_result))
            .after(step(&log, "after", Err(Failure::unexpected("release failed"))));

        let outcome = case.run().await;
        assert_eq!(outcome.kind(), OutcomeKind::Error);
        assert_eq!(outcome.cause(), Some("release failed"));
    }
}

#[tokio::test]
async fn teardown_failure_without_message_uses_fallback() {
    let log = Log::default();
    let mut case = TestCase::new("quiet teardown", step(&log, "body", Ok(())))
        .after(step(&log, "after", Err(Failure::unknown())));

    assert_eq!(case.run().await.cause(), Some("Unknown error"));
}

#[tokio::test]
async fn teardown_failure_does_not_replace_body_error() {
    let log = Log::default();
    let mut case = TestCase::new("first error wins", step(&log, "body", Err(Failure::unexpected("body broke"))))
        .after(step(&log, "after", Err(Failure::unexpected("teardown broke"))));

    let outcome = case.run().await;
    assert_eq!(outcome.kind(), OutcomeKind::Error);
    assert_eq!(outcome.cause(), Some("body broke"));
    assert_eq!(count(&log, "after"), 1);
}

#[tokio::test]
async fn set_isolates_a_failing_test() {
    let log = Log::default();
    let mut set = TestSet::new([
        TestCase::new("one", step(&log, "one", Ok(()))),
        TestCase::new("two", step(&log, "two", Err(Failure::unexpected("boom")))),
        TestCase::new("three", step(&log, "three", Ok(()))),
    ]);

    let summary = set.run(false).await.unwrap();
    let kinds: Vec<(&str, OutcomeKind)> = summary.results().iter().map(|o| (o.test(), o.kind())).collect();
    assert_eq!(
        kinds,
        [
            ("one", OutcomeKind::Pass),
            ("two", OutcomeKind::Error),
            ("three", OutcomeKind::Pass),
        ]
    );
    assert_eq!(summary.to_string(), "3 tests executed: 2 passed and 1 with errors.");
}

#[tokio::test]
async fn set_runs_hooks_in_strict_sequence() {
    let log = Log::default();
    let mut set = TestSet::new([
        TestCase::new("a", step(&log, "a.body", Ok(())))
            .before(step(&log, "a.before", Ok(())))
            .after(step(&log, "a.after", Ok(()))),
        TestCase::new("b", step(&log, "b.body", Ok(())))
            .before(step(&log, "b.before", Ok(())))
            .after(step(&log, "b.after", Ok(()))),
    ])
    .before(step(&log, "set.before", Ok(())))
    .after(step(&log, "set.after", Ok(())));

    set.run(false).await.unwrap();
    assert_eq!(
        entries(&log),
        [
            "set.before",
            "a.before",
            "a.body",
            "a.after",
            "b.before",
            "b.body",
            "b.after",
            "set.after",
        ]
    );
}

#[tokio::test]
async fn set_setup_failure_aborts_before_any_test() {
    let log = Log::default();
    let mut set = TestSet::new([TestCase::new("a", step(&log, "a.body", Ok(())))])
        .before(step(&log, "set.before", Err(Failure::unexpected("fixture missing"))))
        .after(step(&log, "set.after", Ok(())));

    let err = set.run(false).await.unwrap_err();
    assert!(matches!(err, SetError::Setup(ref f) if f.message() == "fixture missing"));
    assert_eq!(entries(&log), ["set.before"]);
}

#[tokio::test]
async fn set_prints_outcomes_and_summary_when_asked() {
    let log = Log::default();
    let mut set = TestSet::new([
        TestCase::new("draws", step(&log, "draws", Ok(()))),
        TestCase::new("compares", step(&log, "compares", Err(Failure::assertion("Assertion failed")))),
    ]);

    let quiet = MemorySink::new();
    set.run_with_sink(false, &quiet).await.unwrap();
    assert!(quiet.lines().is_empty());

    let loud = MemorySink::new();
    set.run_with_sink(true, &loud).await.unwrap();
    let transcript: Vec<String> = loud.lines().into_iter().map(|(_, line)| line).collect();
    let transcript: Vec<&str> = transcript.iter().flat_map(|l| l.lines()).map(str::trim_end).collect();
    insta::assert_snapshot!(transcript.join("\n"), @r"
    ✓ [Pass] draws
    ✗ [Fail] compares:
      - Assertion failed
    2 tests executed: 1 passed and 1 failed.
    ");
}

#[tokio::test]
async fn rerunning_a_set_returns_a_fresh_summary() {
    let log = Log::default();
    let mut set = TestSet::new([TestCase::new("a", step(&log, "a", Ok(())))]);

    let first = set.run(false).await.unwrap();
    let second = set.run(false).await.unwrap();

    assert_eq!(first.total(), 1);
    assert_eq!(second.total(), 1);
    assert!(!first.results()[0].same_instance(&second.results()[0]));
    assert!(set.last_summary().unwrap().results()[0].same_instance(&second.results()[0]));
}
