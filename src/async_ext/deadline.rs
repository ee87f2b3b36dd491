//! External deadlines for whole operations.
//!
//! None of the adapters time out on their own. A caller that needs a bound
//! wraps the future with [`with_deadline`], which requires a Tokio runtime
//! with the time driver enabled.
//!
//! Expiry drops the wrapped future. A side effect that was already handed
//! to a collaborator may still complete; nothing here prevents a caller
//! from dispatching the same work again.

use core::fmt::{self, Display};
use core::future::Future;
use core::time::Duration;

use crate::types::Outcome;

/// Result of racing an outcome-producing future against a deadline.
#[derive(Debug)]
pub enum Deadline<T, E> {
    /// The operation settled in time.
    Completed(Outcome<T, E>),
    /// The deadline passed first.
    Elapsed(Duration),
}

impl<T, E> Deadline<T, E> {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    pub fn is_elapsed(&self) -> bool {
        matches!(self, Self::Elapsed(_))
    }

    /// Folds expiry into the failure channel.
    pub fn into_outcome(self) -> Outcome<T, E>
    where
        E: From<DeadlineElapsed>,
    {
        match self {
            Self::Completed(outcome) => outcome,
            Self::Elapsed(after) => Outcome::Failure(E::from(DeadlineElapsed(after))),
        }
    }
}

/// Error produced when a deadline passes before the operation settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineElapsed(pub Duration);

impl Display for DeadlineElapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "operation timed out after {:?}", self.0)
    }
}

impl std::error::Error for DeadlineElapsed {}

/// Runs `future` until it settles or `duration` passes.
///
/// # Examples
///
/// ```rust,ignore
/// use notify_rail::async_ext::{with_deadline, Deadline};
/// use std::time::Duration;
///
/// match with_deadline(Duration::from_secs(5), pipeline_outcome).await {
///     Deadline::Completed(outcome) => report(outcome),
///     Deadline::Elapsed(after) => tracing::warn!(?after, "notification timed out"),
/// }
/// ```
pub async fn with_deadline<T, E, Fut>(duration: Duration, future: Fut) -> Deadline<T, E>
where
    Fut: Future<Output = Outcome<T, E>>,
{
    match tokio::time::timeout(duration, future).await {
        Ok(outcome) => Deadline::Completed(outcome),
        Err(_elapsed) => Deadline::Elapsed(duration),
    }
}
