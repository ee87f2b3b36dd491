//! Failure wrapper with a context trail and an optional status code.
//!
//! [`ComposableError`] keeps the original error untouched and records, in
//! push order, what the pipeline was doing when it failed. The boundary
//! reads the code to decide how the failure is reported.

use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::IntoErrorContext;
use crate::types::{ErrorContext, ErrorVec};

/// Error wrapper that stores the original error plus contexts and a code.
///
/// # Examples
///
/// ```
/// use notify_rail::ComposableError;
///
/// let err = ComposableError::new("disk unavailable")
///     .with_context("reading email template")
///     .set_code(500);
///
/// assert_eq!(err.error_code(), Some(500));
/// assert_eq!(err.to_string(), "reading email template -> disk unavailable (code: 500)");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposableError<E> {
    core_error: E,
    context: ErrorVec<ErrorContext>,
    error_code: Option<u32>,
}

impl<E> ComposableError<E> {
    /// Creates a composable error without context or code.
    #[inline]
    pub fn new(error: E) -> Self {
        Self { core_error: error, context: ErrorVec::new(), error_code: None }
    }

    /// Creates a composable error with a pre-set code.
    #[inline]
    pub fn with_code(error: E, code: u32) -> Self {
        Self { core_error: error, context: ErrorVec::new(), error_code: Some(code) }
    }

    /// Pushes a context entry.
    #[inline]
    pub fn with_context<C>(mut self, ctx: C) -> Self
    where
        C: IntoErrorContext,
    {
        self.context.push(ctx.into_error_context());
        self
    }

    #[inline]
    pub fn core_error(&self) -> &E {
        &self.core_error
    }

    #[inline]
    pub fn into_core(self) -> E {
        self.core_error
    }

    /// Iterates contexts most recent first.
    #[inline]
    pub fn context_iter(&self) -> core::iter::Rev<core::slice::Iter<'_, ErrorContext>> {
        self.context.iter().rev()
    }

    #[inline]
    pub fn error_code(&self) -> Option<u32> {
        self.error_code
    }

    /// Sets (or overrides) the code.
    #[inline]
    pub fn set_code(mut self, code: u32) -> Self {
        self.error_code = Some(code);
        self
    }

    /// Maps the core error while keeping contexts and code.
    #[inline]
    pub fn map_core<F, T>(self, f: F) -> ComposableError<T>
    where
        F: FnOnce(E) -> T,
    {
        ComposableError {
            core_error: f(self.core_error),
            context: self.context,
            error_code: self.error_code,
        }
    }

    /// Formats `ctxN -> ... -> ctx1 -> core (code: N)`.
    pub fn error_chain(&self) -> String
    where
        E: Display,
    {
        let mut chain = String::new();
        for ctx in self.context_iter() {
            chain.push_str(&ctx.message());
            chain.push_str(" -> ");
        }
        chain.push_str(&self.core_error.to_string());
        if let Some(code) = self.error_code {
            chain.push_str(&format!(" (code: {})", code));
        }
        chain
    }
}

impl<E: Display> Display for ComposableError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return f.write_str(&self.error_chain());
        }

        write!(f, "Error: {}", self.core_error)?;
        if let Some(code) = self.error_code {
            write!(f, " (code: {})", code)?;
        }
        if !self.context.is_empty() {
            f.write_str("\nContext:\n")?;
            for ctx in self.context_iter() {
                writeln!(f, "  - {}", ctx)?;
            }
        }
        Ok(())
    }
}

impl<E> std::error::Error for ComposableError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.core_error)
    }
}

impl<E> From<E> for ComposableError<E> {
    #[inline]
    fn from(error: E) -> Self {
        Self::new(error)
    }
}
