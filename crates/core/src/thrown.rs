//! Captured panic payloads.
//!
//! A panic is the Rust counterpart of a thrown value. [`Thrown`] owns the
//! payload caught by [`Result::wrap`](crate::Result::wrap) and
//! [`Result::wrap_async`](crate::Result::wrap_async).

use crate::result::BoxError;
use std::any::Any;
use std::fmt;

/// A panic payload captured while running a wrapped computation.
///
/// The unit payload `()` (raised with `std::panic::panic_any(())`) is the
/// null-equivalent throw and never becomes a `Thrown`.
///
/// The payload is only `Send`, so `Thrown` is not `Sync` and does not coerce
/// into [`BoxError`]; use [`Thrown::into_error`] to cross that boundary.
pub struct Thrown {
    payload: Box<dyn Any + Send>,
}

impl Thrown {
    /// Wrap a captured payload; returns `None` for the unit payload.
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Option<Self> {
        if payload.is::<()>() {
            None
        } else {
            Some(Self { payload })
        }
    }

    pub(crate) fn capture(payload: Box<dyn Any + Send>) -> Option<Self> {
        let thrown = Self::from_payload(payload);
        match &thrown {
            Some(thrown) => {
                tracing::debug!(panic_message = thrown.message(), "captured panic");
            },
            None => tracing::debug!("captured panic with a unit payload"),
        }
        thrown
    }

    /// The panic message, when the payload is a `&str` or a `String`.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.payload
            .downcast_ref::<&'static str>()
            .copied()
            .or_else(|| self.payload.downcast_ref::<String>().map(String::as_str))
    }

    /// Borrow the payload as `V`.
    #[must_use]
    pub fn downcast_ref<V: Any>(&self) -> Option<&V> {
        self.payload.downcast_ref::<V>()
    }

    /// Consume and return the raw payload.
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }

    /// Convert into the default error type, keeping only the rendered message.
    ///
    /// Non-string payloads are dropped.
    pub fn into_error(self) -> BoxError {
        BoxError::from(self.to_string())
    }

    /// Re-raise the panic on the current thread.
    pub fn resume(self) -> ! {
        std::panic::resume_unwind(self.payload)
    }
}

impl fmt::Debug for Thrown {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Thrown")
            .field("message", &self.message())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Thrown {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(formatter, "panicked: {message}"),
            None => formatter.write_str("panicked with a non-string payload"),
        }
    }
}

impl std::error::Error for Thrown {}
