//! Conversion of values into structured error context.
//!
//! Implemented for `&'static str`, `String`, `Cow<'static, str>` and
//! [`ErrorContext`] itself, so any of them can be handed to
//! `with_context` / `ctx`.
//!
//! # Examples
//!
//! ```
//! use notify_rail::{traits::IntoErrorContext, ErrorContext};
//!
//! assert_eq!("rendering email body".into_error_context().message(), "rendering email body");
//! assert_eq!(ErrorContext::tag("smtp").into_error_context().message(), "[smtp]");
//! ```
use std::borrow::Cow;

use crate::types::ErrorContext;

/// Converts a type into an [`ErrorContext`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as error context",
    label = "this type does not implement `IntoErrorContext`",
    note = "wrap it in `ErrorContext::new(...)` or `LazyContext::new(...)`"
)]
pub trait IntoErrorContext {
    fn into_error_context(self) -> ErrorContext;
}

impl IntoErrorContext for String {
    #[inline]
    fn into_error_context(self) -> ErrorContext {
        ErrorContext::new(self)
    }
}

impl IntoErrorContext for &'static str {
    #[inline]
    fn into_error_context(self) -> ErrorContext {
        ErrorContext::new(self)
    }
}

impl IntoErrorContext for Cow<'static, str> {
    #[inline]
    fn into_error_context(self) -> ErrorContext {
        ErrorContext::new(self)
    }
}

impl IntoErrorContext for ErrorContext {
    #[inline]
    fn into_error_context(self) -> ErrorContext {
        self
    }
}
