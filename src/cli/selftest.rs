//! Bundled self-check suite.
//!
//! Exercises the harness the way an embedding program would: plain assertion tests, plus a test whose setup waits
//! (through `until`) for a timer-driven callback to populate a shared fixture, and whose teardown clears it.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::time::Instant;

use crate::assert::{assert, assert_equals};
use crate::config::RunConfig;
use crate::error::{Fallible, Failure};
use crate::outcome::Outcome;
use crate::set::TestSet;
use crate::summary::RunSummary;
use crate::until::until;
use crate::{TestCase, sink::ConsoleSink};

use super::{CliError, CliResult};

/// Delay before the ticker fixture fires its callback.
const TICK_DELAY: Duration = Duration::from_millis(5);

/// State written by the ticker callback.
#[derive(Debug, Clone, Copy)]
struct Tick {
    fired_at: Instant,
}

type TickerFixture = Arc<Mutex<Option<Tick>>>;

fn lock(fixture: &TickerFixture) -> Result<MutexGuard<'_, Option<Tick>>, Failure> {
    fixture
        .lock()
        .map_err(|_| Failure::unexpected("ticker fixture lock poisoned"))
}

/// Start a ticker and wait for its first callback.
async fn start_ticker(fixture: TickerFixture, timeout: Option<Duration>) -> Fallible {
    let started = Instant::now();
    let slot = fixture.clone();

    until(
        move |done, reject| async move {
            tokio::spawn(async move {
                tokio::time::sleep(TICK_DELAY).await;
                match slot.lock() {
                    Ok(mut tick) => {
                        *tick = Some(Tick {
                            fired_at: Instant::now(),
                        });
                        done.done();
                    }
                    Err(_) => {
                        reject.reject(Failure::unexpected("ticker fixture lock poisoned"));
                    }
                }
            });
            Ok(())
        },
        timeout,
    )
    .await?;

    match *lock(&fixture)? {
        Some(tick) => {
            tracing::debug!(elapsed = ?tick.fired_at.duration_since(started), "ticker fired");
            Ok(())
        }
        None => Err(Failure::unexpected("ticker did not fire before the timeout")),
    }
}

/// Build the self-check suite.
pub fn selftest_suite(config: &RunConfig) -> TestSet {
    let fixture: TickerFixture = Arc::default();
    let timeout = config.until_timeout;

    let setup_fixture = fixture.clone();
    let body_fixture = fixture.clone();
    let teardown_fixture = fixture;

    TestSet::new([
        TestCase::new("assert accepts truthy values", || async {
            assert(true)?;
            assert(1)?;
            assert("verdict")?;
            Ok(())
        }),
        TestCase::new("assert_equals reports mismatches as assertion failures", || async {
            assert_equals("same", "same")?;
            assert(matches!(assert_equals(1, 2), Err(Failure::Assertion(_))))?;
            Ok(())
        }),
        TestCase::new("outcomes render their kind label", || async {
            assert_equals(Outcome::pass("render").to_string(), "✓ [Pass] render".to_string())?;
            Ok(())
        }),
        TestCase::new("summary counts an outcome once", || async {
            let outcome = Outcome::pass("dedup");
            let mut summary = RunSummary::new();
            summary.add_result(&outcome);
            summary.add_result(&outcome);
            assert_equals(summary.total(), 1)?;
            Ok(())
        }),
        TestCase::new("until observes a timer-driven callback", move || {
            let fixture = body_fixture.clone();
            async move {
                assert(lock(&fixture)?.is_some())?;
                Ok(())
            }
        })
        .before(move || start_ticker(setup_fixture.clone(), timeout))
        .after(move || {
            let fixture = teardown_fixture.clone();
            async move {
                *lock(&fixture)? = None;
                Ok(())
            }
        }),
    ])
}

/// Run the self-check suite on a single-threaded runtime.
pub fn run_selftest(config: &RunConfig) -> CliResult<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::failure(format!("failed to create tokio runtime: {}", e)))?;

    let mut suite = selftest_suite(config);
    let sink = ConsoleSink::from_config(config);

    let summary = runtime
        .block_on(suite.run_with_sink(config.print_results, &sink))
        .map_err(|e| CliError::failure(e.to_string()))?;

    if !config.print_results {
        summary.print(&sink);
    }

    if summary.is_success() {
        Ok(())
    } else {
        // Outcomes are already on the console.
        Err(CliError::failure(""))
    }
}
