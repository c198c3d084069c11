//! Assertion helpers for test bodies.
//!
//! These return `Err(Failure::Assertion(..))` instead of panicking, so a body propagates them with `?` and the
//! lifecycle records the test as `Fail` rather than `Error`:
//!
//! ```rust
//! use verdict::assert::{assert, assert_equals};
//! use verdict::Fallible;
//!
//! fn body() -> Fallible {
//!     assert(!"window".is_empty())?;
//!     assert_equals(2 + 2, 4)?;
//!     Ok(())
//! }
//! # assert!(body().is_ok());
//! ```

use verdict_core::messages::{ASSERTION_FAILED_MSG, ASSERTION_NOT_SAME_MSG};

use crate::error::Failure;

/// Values with a truthiness.
///
/// Falsy values: `false`, `None`, zero, `NaN`, and empty strings.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl<T> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.is_some()
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

macro_rules! impl_truthy_int {
    ($($t:ty),*) => {
        $(
            impl Truthy for $t {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

/// Assert that `value` is truthy.
///
/// ## Errors
/// - `Failure::Assertion("Assertion failed")` if `value` is falsy.
pub fn assert<T: Truthy>(value: T) -> Result<bool, Failure> {
    if !value.is_truthy() {
        return Err(Failure::assertion(ASSERTION_FAILED_MSG));
    }
    Ok(true)
}

/// Assert that two values are equal.
///
/// Both sides must have the same type, so no coercion happens. Equality is whatever `T`'s `PartialEq` says: for
/// `Vec`s and derived structs that is a field-by-field comparison. To check that two references point at the same
/// object, compare them with [`std::ptr::eq`] and pass the result to [`assert`].
///
/// ## Errors
/// - `Failure::Assertion("Assertion failed, values are not the same")` if `left != right`.
pub fn assert_equals<T: PartialEq>(left: T, right: T) -> Result<bool, Failure> {
    if left != right {
        return Err(Failure::assertion(ASSERTION_NOT_SAME_MSG));
    }
    Ok(true)
}
