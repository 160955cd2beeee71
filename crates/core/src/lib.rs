//! # option-result-core
//!
//! `Option` and `Result` as immutable algebraic containers with a total,
//! panic-free combinator algebra and async (deferred) variants of the
//! transforming combinators.
//!
//! The two types are mutually convertible: [`Option::ok_or`] and
//! [`Option::ok_or_else`] build a [`Result`], [`Result::ok`] and
//! [`Result::err`] build an [`Option`], and both sides offer `transpose` to
//! swap the nesting order.
//!
//! ## Usage
//!
//! ```
//! use option_result_core::prelude::*;
//!
//! let length = Some("foo").map(str::len).unwrap_or(0);
//! assert_eq!(length, 3);
//!
//! let parsed: Result<Vec<u8>, &str> = Result::collect([Ok(1), Ok(2), Ok(3)]);
//! assert_eq!(parsed, Ok(vec![1, 2, 3]));
//!
//! let divided = Result::wrap(|| 10 / std::hint::black_box(0));
//! assert!(divided.is_err());
//! ```
//!
//! ## Design Principles
//!
//! 1. **No workspace dependencies** - This crate only depends on external crates
//! 2. **Ownership as identity** - Combinators that do not transform hand back
//!    the receiver itself
//! 3. **Serde-compatible** - Both types serialize externally tagged
//!
//! The only place a panic is caught is [`Result::wrap`] /
//! [`Result::wrap_async`]; panics raised by callbacks passed to any other
//! combinator propagate normally.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod interop;
pub mod iter;
pub mod option;
pub mod result;
pub mod thrown;

pub use option::{Option, OptionArms};
pub use result::{BoxError, Result, ResultArms};
pub use thrown::Thrown;

/// Glob-importable constructors: `Some`, `None`, `Ok`, `Err` and both types.
///
/// Importing the prelude shadows the std prelude names in that scope.
pub mod prelude {
    pub use crate::option::Option::{self, None, Some};
    pub use crate::result::Result::{self, Err, Ok};
}

/// Returns the core crate version.
#[must_use]
pub const fn core_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// =============================================================================
// TESTS
// =============================================================================
