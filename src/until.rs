//! Await-until: bridge callback-driven completion into a single awaited result.
//!
//! [`until`] hands the callee a [`Done`] and a [`Reject`] callback and waits for the first of:
//!
//! - `done()` → `Ok(())`
//! - `reject(e)` → `Err(e)`
//! - the callee's own future returning `Err` or panicking → `Err`
//! - the optional timeout elapsing → `Ok(())`
//!
//! The result slot is written once. Later signals are ignored.
//!
//! ```rust
//! use std::time::Duration;
//! use verdict::until::until;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let result = until(
//!     |done, _reject| async move {
//!         tokio::spawn(async move {
//!             tokio::time::sleep(Duration::from_millis(5)).await;
//!             done.done();
//!         });
//!         Ok(())
//!     },
//!     Some(Duration::from_secs(1)),
//! )
//! .await;
//! assert!(result.is_ok());
//! # }
//! ```

use std::future::{self, Future};
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures_util::FutureExt;
use tokio::sync::oneshot;

use crate::error::{Fallible, Failure};

/// Single-assignment result slot shared by the callbacks.
#[derive(Debug)]
struct Slot {
    tx: Mutex<Option<oneshot::Sender<Fallible>>>,
}

impl Slot {
    /// Write the result if nothing has been written yet. Returns whether this call won.
    fn settle(&self, result: Fallible) -> bool {
        let tx = match self.tx.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };

        match tx {
            Some(tx) => tx.send(result).is_ok(),
            None => false,
        }
    }
}

/// Completion callback: resolves the pending [`until`] call.
#[derive(Debug, Clone)]
pub struct Done(Arc<Slot>);

impl Done {
    /// Resolve with success. Returns `false` if the call had already settled.
    pub fn done(&self) -> bool {
        self.0.settle(Ok(()))
    }
}

/// Error callback: rejects the pending [`until`] call.
#[derive(Debug, Clone)]
pub struct Reject(Arc<Slot>);

impl Reject {
    /// Reject with `failure`. Returns `false` if the call had already settled.
    pub fn reject(&self, failure: Failure) -> bool {
        self.0.settle(Err(failure))
    }
}

/// Run `func` and wait until it signals completion through one of its callbacks, fails, or `timeout` elapses.
///
/// `func` is invoked immediately. Its returned future is spawned onto the runtime and keeps running after the call
/// settles, so work the callee does after `done()` is not lost. Finishing with `Ok` does not settle the call by
/// itself, since completion is signalled through [`Done`]. With `timeout` set to `None` no timer is armed and the
/// call waits indefinitely.
///
/// Must be called from within a tokio runtime.
///
/// ## Errors
/// - The failure passed to [`Reject::reject`], or returned / panicked by `func`, whichever comes first.
pub async fn until<F, Fut>(func: F, timeout: Option<Duration>) -> Fallible
where
    F: FnOnce(Done, Reject) -> Fut,
    Fut: Future<Output = Fallible> + Send + 'static,
{
    let (tx, mut rx) = oneshot::channel();
    let slot = Arc::new(Slot {
        tx: Mutex::new(Some(tx)),
    });

    let work = match panic::catch_unwind(AssertUnwindSafe(|| func(Done(slot.clone()), Reject(slot.clone())))) {
        Ok(work) => work,
        Err(payload) => return Err(Failure::from_panic(payload)),
    };

    let driver_slot = slot.clone();
    tokio::spawn(async move {
        let result = match AssertUnwindSafe(work).catch_unwind().await {
            Ok(result) => result,
            Err(payload) => Err(Failure::from_panic(payload)),
        };
        if let Err(failure) = result {
            driver_slot.settle(Err(failure));
        }
    });

    let timer = async {
        match timeout {
            Some(duration) => tokio::time::sleep(duration).await,
            None => future::pending::<()>().await,
        }
    };

    tokio::pin!(timer);

    // `slot` keeps the sender alive, so `rx` only resolves through `settle`.
    tokio::select! {
        biased;

        settled = &mut rx => settled.unwrap_or_else(|_| Err(Failure::unknown())),
        () = &mut timer => {
            tracing::trace!(?timeout, "until timed out, resolving");
            Ok(())
        }
    }
}

/// [`until`] with the timeout given in milliseconds.
pub async fn until_ms<F, Fut>(func: F, timeout_ms: Option<u64>) -> Fallible
where
    F: FnOnce(Done, Reject) -> Fut,
    Fut: Future<Output = Fallible> + Send + 'static,
{
    until(func, timeout_ms.map(Duration::from_millis)).await
}
