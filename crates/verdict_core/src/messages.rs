//! Canonical user-facing messages.
//!
//! These strings are part of the observable contract: assertion helpers, the test lifecycle and reporters all read
//! them from here so the text stays aligned.

/// Cause recorded when `assert` receives a falsy value.
pub const ASSERTION_FAILED_MSG: &str = "Assertion failed";

/// Cause recorded when `assert_equals` receives two different values.
pub const ASSERTION_NOT_SAME_MSG: &str = "Assertion failed, values are not the same";

/// Fallback cause for errors that carry no message.
pub const UNKNOWN_ERROR_MSG: &str = "Unknown error";

/// Summary line printed when a run recorded no outcomes.
pub const NO_TESTS_EXECUTED_MSG: &str = "No tests executed.";
