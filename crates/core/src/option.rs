//! The `Option` type: a value that may or may not be present.
//!
//! Inside this module the bare `Some`/`None` names still refer to the std
//! prelude; this crate's variants are always spelled `Self::Some` or
//! `Option::Some`.

use serde::{Deserialize, Serialize};
use std::future::Future;

/// A value of type `T`, or nothing.
///
/// Every combinator consumes `self`. Where no transformation happens the
/// receiver itself is handed back, never a rebuilt copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Option<T> {
    /// No value.
    None,
    /// Exactly one value.
    Some(T),
}

/// Arms for [`Option::match_with`]. Both fields are mandatory, so a call
/// site cannot forget the absent case.
#[derive(Debug, Clone, Copy)]
pub struct OptionArms<S, N> {
    /// Called with the contained value when the option is `Some`.
    pub some: S,
    /// Called when the option is `None`.
    pub none: N,
}

impl<T> Default for Option<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> Option<T> {
    /// Convert a nullable value into an `Option`.
    ///
    /// Rust's nullable shape is the std `Option`, so its `None` is the
    /// null-equivalent input.
    pub fn wrap(value: std::option::Option<T>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }

    /// Gather the contained values of `options`, in order.
    ///
    /// Returns `None` as soon as the first `None` is reached; elements after
    /// it are not pulled from the iterator.
    pub fn collect<I>(options: I) -> Option<Vec<T>>
    where
        I: IntoIterator<Item = Self>,
    {
        options.into_iter().collect()
    }

    /// Returns true if the option holds a value.
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns true if the option is empty.
    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Borrow the contained value.
    pub const fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Option::Some(value),
            Self::None => Option::None,
        }
    }

    /// Run exactly one of the arms and return its result.
    ///
    /// ```
    /// use option_result_core::prelude::*;
    /// use option_result_core::OptionArms;
    ///
    /// let greeting = Some("foo").match_with(OptionArms {
    ///     some: |value| format!("{value}baz"),
    ///     none: || "bar".to_owned(),
    /// });
    /// assert_eq!(greeting, "foobaz");
    /// ```
    pub fn match_with<U, S, N>(self, arms: OptionArms<S, N>) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        match self {
            Self::Some(value) => (arms.some)(value),
            Self::None => (arms.none)(),
        }
    }

    /// Returns the contained value or `default`.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the contained value, or the result of `default` when empty.
    /// `default` is only called on `None`.
    pub fn unwrap_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => default(),
        }
    }

    /// Chain a computation that may itself produce nothing.
    pub fn and_then<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Some(value) => f(value),
            Self::None => Option::None,
        }
    }

    /// Returns `other` if `self` is `Some`, otherwise `None`.
    pub fn and<U>(self, other: Option<U>) -> Option<U> {
        match self {
            Self::Some(_) => other,
            Self::None => Option::None,
        }
    }

    /// Async form of [`and_then`](Self::and_then). `f` is not called on `None`.
    pub async fn and_then_async<U, F, Fut>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Option<U>>,
    {
        match self {
            Self::Some(value) => f(value).await,
            Self::None => Option::None,
        }
    }

    /// Returns `self` if it holds a value, otherwise the result of `f`.
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        if self.is_some() { self } else { f() }
    }

    /// Returns `self` if it holds a value, otherwise `other`.
    pub fn or(self, other: Self) -> Self {
        if self.is_some() { self } else { other }
    }

    /// Async form of [`or_else`](Self::or_else). `f` is not called on `Some`.
    pub async fn or_else_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Self>,
    {
        if self.is_some() { self } else { f().await }
    }

    /// Returns whichever of `self` and `other` holds a value when exactly
    /// one does, otherwise `None`.
    pub fn xor(self, other: Self) -> Self {
        match (self.is_some(), other.is_some()) {
            (true, false) => self,
            (false, true) => other,
            _ => Self::None,
        }
    }

    /// Transform the contained value.
    pub fn map<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        self.and_then(|value| Option::Some(f(value)))
    }

    /// Async form of [`map`](Self::map).
    pub async fn map_async<U, F, Fut>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Some(value) => Option::Some(f(value).await),
            Self::None => Option::None,
        }
    }

    /// Transform the contained value, falling back to `default` when empty.
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        self.map(f).unwrap_or(default)
    }

    /// Keep `self` when `predicate` holds for the contained value.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        let keep = match &self {
            Self::Some(value) => predicate(value),
            Self::None => true,
        };
        if keep { self } else { Self::None }
    }

    /// Pair two options; `Some` only when both are.
    pub fn zip<U>(self, other: Option<U>) -> Option<(T, U)> {
        match (self, other) {
            (Self::Some(left), Option::Some(right)) => Option::Some((left, right)),
            _ => Option::None,
        }
    }

    /// Convert into the std `Option`.
    pub fn into_std(self) -> std::option::Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }
}

impl<T, U> Option<(T, U)> {
    /// Split an option of a pair into a pair of options.
    pub fn unzip(self) -> (Option<T>, Option<U>) {
        match self {
            Self::Some((left, right)) => (Option::Some(left), Option::Some(right)),
            Self::None => (Option::None, Option::None),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
