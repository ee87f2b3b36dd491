//! Throw-to-outcome adapters.
//!
//! A fallible synchronous call (a function returning `Result`, or one that
//! may unwind) is run inside a guarded region and its result is turned into
//! an [`Outcome`]. These are the only places where a raw failure becomes a
//! `Failure`; everything downstream only sees outcomes.

use core::any::Any;
use core::fmt::{self, Display};
use core::future::{ready, Ready};
use std::borrow::Cow;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::types::{DomainError, Outcome};

/// Runs `f` and converts its `Result` into an [`Outcome`].
///
/// Arguments are passed by capturing them in the closure.
///
/// # Examples
///
/// ```
/// use notify_rail::async_ext::attempt;
/// use notify_rail::Outcome;
///
/// let port = attempt(|| "2525".parse::<u16>());
/// assert_eq!(port, Outcome::Success(2525));
/// ```
#[inline]
pub fn attempt<T, E, F>(f: F) -> Outcome<T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    Outcome::from_result(f())
}

/// Runs `f` now and returns its outcome as an already-resolved future.
///
/// Useful when a synchronous step has to sit next to asynchronous ones at
/// a join point.
#[inline]
pub fn attempt_ready<T, E, F>(f: F) -> Ready<Outcome<T, E>>
where
    F: FnOnce() -> Result<T, E>,
{
    ready(attempt(f))
}

/// Runs `f`, replacing the displayed message of any error with `message`.
///
/// The original error is kept as the [`DomainError`]'s cause.
///
/// # Examples
///
/// ```
/// use notify_rail::async_ext::attempt_with_message;
///
/// let outcome = attempt_with_message("Cannot read email template", || {
///     Err::<String, _>(std::io::Error::other("ENOENT"))
/// });
///
/// let err = outcome.failure_value().unwrap();
/// assert_eq!(err.to_string(), "Cannot read email template");
/// assert_eq!(err.cause().to_string(), "ENOENT");
/// ```
#[inline]
pub fn attempt_with_message<T, E, M, F>(message: M, f: F) -> Outcome<T, DomainError<E>>
where
    M: Into<Cow<'static, str>>,
    F: FnOnce() -> Result<T, E>,
{
    attempt(f).map_err(|cause| DomainError::new(message, cause))
}

/// Like [`attempt`], but an unwinding panic inside `f` becomes a failure too.
///
/// Panics compiled with `panic = "abort"` cannot be trapped.
///
/// # Examples
///
/// ```
/// use notify_rail::async_ext::{attempt_unwind, Panicked};
///
/// let outcome = attempt_unwind(|| -> Result<(), Panicked> { panic!("template exploded") });
/// assert_eq!(outcome.failure_value().unwrap().message(), "template exploded");
/// ```
pub fn attempt_unwind<T, E, F>(f: F) -> Outcome<T, E>
where
    E: From<Panicked>,
    F: FnOnce() -> Result<T, E>,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => Outcome::from_result(result),
        Err(payload) => Outcome::Failure(E::from(Panicked::from_payload(payload.as_ref()))),
    }
}

/// A panic trapped by [`attempt_unwind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panicked {
    message: Cow<'static, str>,
}

impl Panicked {
    /// The panic message, or a placeholder for non-string payloads.
    pub fn message(&self) -> &str {
        &self.message
    }

    fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(msg) = payload.downcast_ref::<&'static str>() {
            Cow::Borrowed(*msg)
        } else if let Some(msg) = payload.downcast_ref::<String>() {
            Cow::Owned(msg.clone())
        } else {
            Cow::Borrowed("non-string panic payload")
        };
        Self { message }
    }
}

impl Display for Panicked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panicked: {}", self.message)
    }
}

impl std::error::Error for Panicked {}
