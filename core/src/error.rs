//! Errors reported by the dynamic API.
//!
//! The typed API never produces these: argument kinds are checked by the
//! compiler there, and a fallible callback's own error type is returned
//! untouched.

use alloc::boxed::Box;
use thiserror::Error;

/// Error raised by a dynamic callback. Kept boxed so the original type can be
/// recovered with `downcast_ref`.
pub type CallbackError = Box<dyn core::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum Error {
    /// The collection was not an array, or the transform was not a function.
    #[error("invalid argument `{argument}`: expected {expected}, found {found}")]
    InvalidArgument {
        argument: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// The callback failed. Display and `source()` are the callback error's
    /// own.
    #[error(transparent)]
    Callback(CallbackError),
}

impl Error {
    /// Recovers the callback's original error, if this is one.
    pub fn into_callback_error(self) -> Option<CallbackError> {
        match self {
            Error::Callback(err) => Some(err),
            Error::InvalidArgument { .. } => None,
        }
    }
}
