//! The `Result` type: a success value or an error value.
//!
//! Inside this module the bare `Ok`/`Err` names still refer to the std
//! prelude; this crate's variants are always spelled `Self::Ok` or
//! `Result::Ok`.

use crate::option::Option;
use crate::thrown::Thrown;
use futures_util::FutureExt;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

/// Default error type of [`Result`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A success value of type `T`, or an error value of type `E`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Result<T, E = BoxError> {
    /// Success.
    Ok(T),
    /// Failure.
    Err(E),
}

/// Arms for [`Result::match_with`]. Both fields are mandatory.
#[derive(Debug, Clone, Copy)]
pub struct ResultArms<O, E> {
    /// Called with the success value.
    pub ok: O,
    /// Called with the error value.
    pub err: E,
}

impl<T> Result<T, Option<Thrown>> {
    /// Run `f`, converting a panic into an error.
    ///
    /// The error is `Some(thrown)` for an ordinary payload and `None` for
    /// the unit payload.
    pub fn wrap<F>(f: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(value) => Self::Ok(value),
            Err(payload) => Self::Err(Option::wrap(Thrown::capture(payload))),
        }
    }

    /// Await `future`, converting a panic during any poll into an error.
    pub async fn wrap_async<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = T>,
    {
        match AssertUnwindSafe(future).catch_unwind().await {
            Ok(value) => Self::Ok(value),
            Err(payload) => Self::Err(Option::wrap(Thrown::capture(payload))),
        }
    }
}

impl<T, E> Result<T, E> {
    /// Gather the success values of `results`, in order.
    ///
    /// Returns the first `Err` reached, untouched; elements after it are not
    /// pulled from the iterator.
    pub fn collect<I>(results: I) -> Result<Vec<T>, E>
    where
        I: IntoIterator<Item = Self>,
    {
        results.into_iter().collect()
    }

    /// Returns true for `Ok`.
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns true for `Err`.
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Borrow both channels.
    pub const fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Run exactly one of the arms and return its result.
    pub fn match_with<U, O, F>(self, arms: ResultArms<O, F>) -> U
    where
        O: FnOnce(T) -> U,
        F: FnOnce(E) -> U,
    {
        match self {
            Self::Ok(value) => (arms.ok)(value),
            Self::Err(error) => (arms.err)(error),
        }
    }

    /// Returns the success value or `default`.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the success value, or computes one from the error.
    pub fn unwrap_or_else<F>(self, default: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => default(error),
        }
    }

    /// Chain a fallible computation on the success value.
    pub fn and_then<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Returns `other` if `self` is `Ok`, otherwise the error of `self`.
    pub fn and<U>(self, other: Result<U, E>) -> Result<U, E> {
        match self {
            Self::Ok(_) => other,
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Async form of [`and_then`](Self::and_then).
    pub async fn and_then_async<U, F, Fut>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<U, E>>,
    {
        match self {
            Self::Ok(value) => f(value).await,
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Recover from an error; the fallback may change the error type.
    pub fn or_else<G, F>(self, f: F) -> Result<T, G>
    where
        F: FnOnce(E) -> Result<T, G>,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => f(error),
        }
    }

    /// Returns `self`'s success value, or `other` on error.
    pub fn or<G>(self, other: Result<T, G>) -> Result<T, G> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(_) => other,
        }
    }

    /// Async form of [`or_else`](Self::or_else).
    pub async fn or_else_async<G, F, Fut>(self, f: F) -> Result<T, G>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = Result<T, G>>,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => f(error).await,
        }
    }

    /// Transform the success value.
    pub fn map<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        self.and_then(|value| Result::Ok(f(value)))
    }

    /// Async form of [`map`](Self::map).
    pub async fn map_async<U, F, Fut>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Ok(value) => Result::Ok(f(value).await),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Transform the success value, falling back to `default` on error.
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(_) => default,
        }
    }

    /// Transform the error value.
    pub fn map_err<G, F>(self, f: F) -> Result<T, G>
    where
        F: FnOnce(E) -> G,
    {
        self.or_else(|error| Result::Err(f(error)))
    }

    /// Async form of [`map_err`](Self::map_err).
    pub async fn map_err_async<G, F, Fut>(self, f: F) -> Result<T, G>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = G>,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(f(error).await),
        }
    }

    /// Convert into the std `Result`.
    pub fn into_std(self) -> std::result::Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
