//! Extension traits bridging `Result` and [`Outcome`].
//!
//! [`ResultExt`] lifts a plain `Result` into an [`Outcome`], optionally
//! wrapping the error with context. [`OutcomeExt`] attaches context to an
//! outcome that has already failed.
//!
//! # Examples
//!
//! ```
//! use notify_rail::traits::{OutcomeExt, ResultExt};
//!
//! let parsed = "25".parse::<u16>().into_outcome();
//! assert!(parsed.is_success());
//!
//! let failed = "smtp".parse::<u16>().ctx("parsing port");
//! let chain = failed.fold(|e| e.error_chain(), |_| String::new());
//! assert!(chain.starts_with("parsing port -> "));
//! ```

use crate::traits::IntoErrorContext;
use crate::types::{ComposableError, ComposableOutcome, LazyContext, Outcome};

/// Lifts `Result` values into outcomes.
pub trait ResultExt<T, E> {
    /// Converts into an [`Outcome`] without touching the error.
    fn into_outcome(self) -> Outcome<T, E>;

    /// Converts into an outcome whose failure carries `context`.
    fn ctx<C: IntoErrorContext>(self, context: C) -> ComposableOutcome<T, E>;

    /// Like [`ctx`](ResultExt::ctx), but `f` only runs on failure.
    fn ctx_with<F>(self, f: F) -> ComposableOutcome<T, E>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from_result(self)
    }

    #[inline]
    fn ctx<C: IntoErrorContext>(self, context: C) -> ComposableOutcome<T, E> {
        self.into_outcome().ctx(context)
    }

    #[inline]
    fn ctx_with<F>(self, f: F) -> ComposableOutcome<T, E>
    where
        F: FnOnce() -> String,
    {
        self.into_outcome().ctx(LazyContext::new(f))
    }
}

/// Attaches context to failed outcomes.
pub trait OutcomeExt<T, E> {
    /// Wraps a failure in [`ComposableError`] with `context`.
    fn ctx<C: IntoErrorContext>(self, context: C) -> ComposableOutcome<T, E>;

    /// Wraps a failure with a context produced on demand.
    fn with_ctx<F, C>(self, f: F) -> ComposableOutcome<T, E>
    where
        F: FnOnce() -> C,
        C: IntoErrorContext;
}

impl<T, E> OutcomeExt<T, E> for Outcome<T, E> {
    #[inline]
    fn ctx<C: IntoErrorContext>(self, context: C) -> ComposableOutcome<T, E> {
        self.map_err(|e| ComposableError::new(e).with_context(context))
    }

    #[inline]
    fn with_ctx<F, C>(self, f: F) -> ComposableOutcome<T, E>
    where
        F: FnOnce() -> C,
        C: IntoErrorContext,
    {
        self.map_err(|e| ComposableError::new(e).with_context(f()))
    }
}

/// Adds another context to an outcome that already carries a [`ComposableError`].
pub trait ComposableOutcomeExt<T, E> {
    fn ctx_more<C: IntoErrorContext>(self, context: C) -> Self;
}

impl<T, E> ComposableOutcomeExt<T, E> for ComposableOutcome<T, E> {
    #[inline]
    fn ctx_more<C: IntoErrorContext>(self, context: C) -> Self {
        self.map_err(|e| e.with_context(context))
    }
}
