//! Extension trait for `Future<Output = Outcome<T, E>>`.

use core::future::Future;

use crate::traits::IntoErrorContext;

use super::context_future::ContextFuture;

/// Context attachment for futures that settle to an [`Outcome`](crate::Outcome).
///
/// Mirrors [`OutcomeExt`](crate::traits::OutcomeExt) for values that are
/// still in flight. Context is evaluated only on failure.
///
/// # Examples
///
/// ```
/// use notify_rail::async_ext::FutureOutcomeExt;
/// use notify_rail::Outcome;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let outcome = async { Outcome::<u32, &str>::failure("refused") }
///     .ctx("connecting to smtp")
///     .await;
///
/// let chain = outcome.fold(|e| e.error_chain(), |v| v.to_string());
/// assert_eq!(chain, "connecting to smtp -> refused");
/// # });
/// ```
pub trait FutureOutcomeExt<T, E>: Future<Output = crate::Outcome<T, E>> + Sized {
    /// Attaches a static context to the failure.
    fn ctx<C>(self, context: C) -> ContextFuture<Self, impl FnOnce() -> C>
    where
        C: IntoErrorContext,
    {
        self.with_ctx(move || context)
    }

    /// Attaches a context produced by `f` on failure.
    fn with_ctx<F, C>(self, f: F) -> ContextFuture<Self, F>
    where
        F: FnOnce() -> C,
        C: IntoErrorContext;
}

impl<Fut, T, E> FutureOutcomeExt<T, E> for Fut
where
    Fut: Future<Output = crate::Outcome<T, E>>,
{
    #[inline]
    fn with_ctx<F, C>(self, f: F) -> ContextFuture<Self, F>
    where
        F: FnOnce() -> C,
        C: IntoErrorContext,
    {
        ContextFuture::new(self, f)
    }
}
