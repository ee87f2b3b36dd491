//! Callback-to-outcome adapter.
//!
//! Many collaborators report completion through a callback instead of
//! returning a future. [`from_callback`] hands such a function a
//! [`Callback`] and returns a [`CallbackFuture`] that settles when the
//! callback is completed.

use core::fmt::{self, Display};
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project_lite::pin_project;
use tokio::sync::oneshot;

use crate::types::Outcome;

/// Completion handle passed to a callback-style function.
///
/// Completing consumes the handle, so it can fire at most once. Dropping it
/// without completing settles the paired future with [`CallbackDropped`].
#[must_use = "dropping a callback settles its future as a failure"]
#[derive(Debug)]
pub struct Callback<T, E> {
    tx: oneshot::Sender<Result<T, E>>,
}

impl<T, E> Callback<T, E> {
    /// Completes with an `(error, value)` pair expressed as a `Result`.
    pub fn resolve(self, result: Result<T, E>) {
        // The receiver is gone when the caller abandoned the future.
        if self.tx.send(result).is_err() {
            tracing::debug!("callback completed after its future was dropped");
        }
    }

    #[inline]
    pub fn succeed(self, value: T) {
        self.resolve(Ok(value));
    }

    #[inline]
    pub fn fail(self, error: E) {
        self.resolve(Err(error));
    }
}

/// Invokes `f` once with a fresh [`Callback`] and returns the future it settles.
///
/// `f` runs immediately. The returned future has no timeout of its own: a
/// function that keeps its callback alive without completing it leaves the
/// future pending. Apply [`with_deadline`](super::with_deadline) at the call
/// site when that matters.
///
/// # Examples
///
/// ```
/// use notify_rail::async_ext::{from_callback, Callback};
/// use notify_rail::{BoxError, Outcome};
///
/// fn read_file(path: &str, done: Callback<String, BoxError>) {
///     done.succeed(format!("contents of {}", path));
/// }
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let outcome = from_callback(|done| read_file("email.html", done)).await;
/// assert_eq!(outcome.success_value().as_deref(), Some("contents of email.html"));
/// # });
/// ```
pub fn from_callback<T, E, F>(f: F) -> CallbackFuture<T, E>
where
    F: FnOnce(Callback<T, E>),
{
    let (tx, rx) = oneshot::channel();
    f(Callback { tx });
    CallbackFuture { rx }
}

pin_project! {
    /// Future settled by a [`Callback`].
    #[must_use = "futures do nothing unless polled"]
    pub struct CallbackFuture<T, E> {
        #[pin]
        rx: oneshot::Receiver<Result<T, E>>,
    }
}

impl<T, E> Future for CallbackFuture<T, E>
where
    E: From<CallbackDropped>,
{
    type Output = Outcome<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().rx.poll(cx).map(|received| match received {
            Ok(Ok(value)) => Outcome::Success(value),
            Ok(Err(error)) => Outcome::Failure(error),
            Err(_) => Outcome::Failure(E::from(CallbackDropped)),
        })
    }
}

/// The callback was dropped without being completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallbackDropped;

impl Display for CallbackDropped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("callback dropped before completion")
    }
}

impl std::error::Error for CallbackDropped {}
