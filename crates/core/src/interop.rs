//! Conversions between [`Option`] and [`Result`], and to/from their std
//! counterparts.

use crate::option::Option;
use crate::result::Result;

impl<T> Option<T> {
    /// `Ok` with the contained value, or `Err(err())` when empty. `err` is
    /// only called on `None`.
    pub fn ok_or_else<E, F>(self, err: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Result::Ok(value),
            Self::None => Result::Err(err()),
        }
    }

    /// `Ok` with the contained value, or `Err(err)` when empty.
    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        self.ok_or_else(|| err)
    }
}

impl<T, E> Option<Result<T, E>> {
    /// `Option<Result<T, E>>` to `Result<Option<T>, E>`.
    pub fn transpose(self) -> Result<Option<T>, E> {
        match self {
            Self::Some(Result::Ok(value)) => Result::Ok(Option::Some(value)),
            Self::Some(Result::Err(error)) => Result::Err(error),
            Self::None => Result::Ok(Option::None),
        }
    }
}

impl<T, E> Result<T, E> {
    /// The success value, discarding any error.
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Option::Some(value),
            Self::Err(_) => Option::None,
        }
    }

    /// The error value, discarding any success.
    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => Option::None,
            Self::Err(error) => Option::Some(error),
        }
    }
}

impl<T, E> Result<Option<T>, E> {
    /// `Result<Option<T>, E>` to `Option<Result<T, E>>`.
    pub fn transpose(self) -> Option<Result<T, E>> {
        match self {
            Self::Ok(option) => option.map(Result::Ok),
            Self::Err(error) => Option::Some(Result::Err(error)),
        }
    }
}

impl<T> From<std::option::Option<T>> for Option<T> {
    fn from(value: std::option::Option<T>) -> Self {
        Self::wrap(value)
    }
}

impl<T> From<Option<T>> for std::option::Option<T> {
    fn from(value: Option<T>) -> Self {
        value.into_std()
    }
}

impl<T, E> From<std::result::Result<T, E>> for Result<T, E> {
    fn from(value: std::result::Result<T, E>) -> Self {
        match value {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for std::result::Result<T, E> {
    fn from(value: Result<T, E>) -> Self {
        value.into_std()
    }
}
