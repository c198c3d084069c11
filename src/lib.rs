#![forbid(unsafe_code)]
//! verdict: a minimal async test execution and aggregation harness.
//!
//! Define [`TestCase`]s with optional setup/teardown hooks, group them into a [`TestSet`], and run the set to get a
//! [`RunSummary`]. Each test ends in exactly one [`Outcome`]: pass, assertion failure, or unexpected error.
//! [`until::until`] turns a callback-driven completion into something a test body can await, with an optional
//! timeout.
//!
//! ```rust
//! use verdict::assert::{assert, assert_equals};
//! use verdict::{TestCase, TestSet};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut set = TestSet::new([
//!     TestCase::new("adds", || async {
//!         assert_equals(2 + 2, 4)?;
//!         Ok(())
//!     }),
//!     TestCase::new("is truthy", || async {
//!         assert("non-empty")?;
//!         Ok(())
//!     }),
//! ]);
//!
//! let summary = set.run(false).await.unwrap();
//! assert_eq!(summary.to_string(), "2 tests executed: All passed.");
//! # }
//! ```
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **Test bodies and hooks**: panics are caught and recorded as unexpected errors, never propagated out of
//!   [`TestCase::run`]. Set-level hooks are not guarded.

pub mod assert;
pub mod case;
pub mod cli;
pub mod config;
pub mod error;
pub mod outcome;
pub mod set;
pub mod sink;
pub mod summary;
pub mod until;

pub use verdict_core::{OutcomeKind, Tally};

pub use case::{Hook, TestCase, run_test};
pub use config::{ColorChoice, RunConfig};
pub use error::{Fallible, Failure, SetError};
pub use outcome::{Outcome, OutcomeId};
pub use set::TestSet;
pub use sink::{ConsoleSink, MemorySink, Sink, TracingSink};
pub use summary::RunSummary;
