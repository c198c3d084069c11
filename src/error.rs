//! Failure taxonomy for hooks and test bodies.
//!
//! A hook or body reports a problem by returning `Err(Failure)`. The lifecycle in [`crate::case`] pattern-matches on
//! the variant to classify the outcome:
//!
//! - [`Failure::Assertion`] → `Fail` (only produced by the helpers in [`crate::assert`])
//! - [`Failure::Unexpected`] → `Error`
//!
//! Any `std::error::Error` converts into `Failure::Unexpected` through `?`. For that blanket conversion to be coherent,
//! `Failure` itself does not implement `std::error::Error`.

use std::any::Any;
use std::fmt;

use thiserror::Error;
use verdict_core::messages::UNKNOWN_ERROR_MSG;

/// A condition raised by a hook or test body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// Raised by an assertion helper.
    Assertion(String),
    /// Anything else. `None` when the condition carried no message.
    Unexpected(Option<String>),
}

impl Failure {
    /// Create an assertion failure with the given message.
    pub fn assertion(message: impl Into<String>) -> Self {
        Failure::Assertion(message.into())
    }

    /// Create an unexpected failure. An empty message counts as no message.
    pub fn unexpected(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            Failure::Unexpected(None)
        } else {
            Failure::Unexpected(Some(message))
        }
    }

    /// Create an unexpected failure that carries no message.
    pub fn unknown() -> Self {
        Failure::Unexpected(None)
    }

    /// Convert a caught panic payload.
    ///
    /// `panic!` payloads are either `&'static str` or `String`; anything else becomes an unknown failure.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        if let Some(s) = payload.downcast_ref::<&'static str>() {
            Failure::unexpected(*s)
        } else if let Some(s) = payload.downcast_ref::<String>() {
            Failure::unexpected(s.clone())
        } else {
            Failure::unknown()
        }
    }

    /// Consume the failure, returning its message if it carried one.
    pub fn into_message(self) -> Option<String> {
        match self {
            Failure::Assertion(msg) => Some(msg),
            Failure::Unexpected(msg) => msg,
        }
    }

    pub fn is_assertion(&self) -> bool {
        matches!(self, Failure::Assertion(_))
    }

    /// The message to record as an outcome cause, falling back to `"Unknown error"`.
    pub fn message(&self) -> &str {
        match self {
            Failure::Assertion(msg) => msg,
            Failure::Unexpected(Some(msg)) => msg,
            Failure::Unexpected(None) => UNKNOWN_ERROR_MSG,
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl<E> From<E> for Failure
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(err: E) -> Self {
        Failure::unexpected(err.to_string())
    }
}

/// Result type returned by hooks and test bodies.
pub type Fallible = Result<(), Failure>;

/// Failure of a set-level hook. Aborts the whole run.
#[derive(Debug, Error)]
pub enum SetError {
    #[error("test set setup failed: {0}")]
    Setup(Failure),

    #[error("test set teardown failed: {0}")]
    Teardown(Failure),
}

impl SetError {
    /// The underlying hook failure.
    pub fn failure(&self) -> &Failure {
        match self {
            SetError::Setup(f) | SetError::Teardown(f) => f,
        }
    }
}
