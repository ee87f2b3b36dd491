//! Deferred context generation.
//!
//! [`LazyContext`] delays building a context message until a failure is
//! actually being reported, so the success path never formats strings.
//!
//! # Examples
//!
//! ```
//! use notify_rail::{ComposableError, LazyContext};
//!
//! let session = "abc123";
//! let err = ComposableError::new("lookup failed")
//!     .with_context(LazyContext::new(move || format!("session {}", session)));
//! assert_eq!(err.error_chain(), "session abc123 -> lookup failed");
//! ```
use crate::{traits::IntoErrorContext, types::error_context::ErrorContext};

/// A context message produced by a closure on first use.
#[repr(transparent)]
pub struct LazyContext<F> {
    generator: F,
}

impl<F> LazyContext<F> {
    /// Wraps a closure that is only invoked when the context is consumed.
    #[inline]
    pub fn new(generator: F) -> Self {
        Self { generator }
    }
}

impl<F> IntoErrorContext for LazyContext<F>
where
    F: FnOnce() -> String,
{
    #[inline]
    fn into_error_context(self) -> ErrorContext {
        ErrorContext::new((self.generator)())
    }
}
