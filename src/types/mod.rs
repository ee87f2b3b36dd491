//! Value types for composable fallible operations.
//!
//! - [`Outcome`] and [`Maybe`] are the two sum types every step produces.
//! - [`ComposableError`], [`ErrorContext`] and [`LazyContext`] carry the
//!   trail of what was happening when a step failed.
//! - [`DomainError`] replaces an error's message while keeping its cause.
//!
//! # Examples
//!
//! ```
//! use notify_rail::{ComposableError, ErrorContext, Outcome};
//!
//! let outcome: Outcome<u32, _> = Outcome::failure(
//!     ComposableError::new("timeout")
//!         .with_context(ErrorContext::tag("smtp"))
//!         .set_code(500),
//! );
//!
//! let message = outcome.fold(|e| e.error_chain(), |v| v.to_string());
//! assert_eq!(message, "[smtp] -> timeout (code: 500)");
//! ```
use smallvec::SmallVec;

pub mod composable_error;
pub mod domain_error;
pub mod error_context;
pub mod lazy_context;
pub mod maybe;
pub mod outcome;

pub use composable_error::ComposableError;
pub use domain_error::DomainError;
pub use error_context::ErrorContext;
pub use lazy_context::LazyContext;
pub use maybe::Maybe;
pub use outcome::Outcome;

/// SmallVec-backed collection used for accumulating contexts.
///
/// Most failures pick up a single context on their way out, so one slot
/// is kept inline.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// Outcome alias that wraps failures in [`ComposableError`].
pub type ComposableOutcome<T, E> = Outcome<T, ComposableError<E>>;
