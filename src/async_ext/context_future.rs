//! Future wrapper for lazy context on failed outcomes.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::traits::IntoErrorContext;
use crate::types::{ComposableError, Outcome};

pin_project! {
    /// Attaches context to a future's failure when it settles.
    ///
    /// The context closure runs only if the inner future resolves to
    /// `Failure`. Cancel-safe whenever the inner future is.
    #[must_use = "futures do nothing unless polled"]
    pub struct ContextFuture<Fut, F> {
        #[pin]
        future: Fut,
        context_fn: Option<F>,
    }
}

impl<Fut, F> ContextFuture<Fut, F> {
    #[inline]
    pub fn new(future: Fut, context_fn: F) -> Self {
        Self { future, context_fn: Some(context_fn) }
    }
}

impl<Fut, F, C, T, E> Future for ContextFuture<Fut, F>
where
    Fut: Future<Output = Outcome<T, E>>,
    F: FnOnce() -> C,
    C: IntoErrorContext,
{
    type Output = Outcome<T, ComposableError<E>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|outcome| {
            outcome.map_err(|err| {
                let context_fn = this
                    .context_fn
                    .take()
                    .expect("ContextFuture polled after completion; this is a bug");
                ComposableError::new(err).with_context(context_fn())
            })
        })
    }
}

impl<Fut, F, C, T, E> FusedFuture for ContextFuture<Fut, F>
where
    Fut: FusedFuture<Output = Outcome<T, E>>,
    F: FnOnce() -> C,
    C: IntoErrorContext,
{
    fn is_terminated(&self) -> bool {
        self.context_fn.is_none() || self.future.is_terminated()
    }
}
