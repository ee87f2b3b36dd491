//! Tower integration.
//!
//! [`NotificationService`] exposes a [`NotificationPipeline`] as a
//! `tower::Service<Request>` whose response is the boundary's [`Next`]
//! signal.
//!
//! Collaborator futures carry no `Send` bound, so neither does
//! [`NotificationFuture`]. Drive the service on the calling task or on a
//! `tokio::task::LocalSet`; it cannot be handed to `tokio::spawn` or to a
//! router that requires `Send` futures.
//!
//! # Feature Flag
//!
//! Requires the `tower` feature (enabled by default).
//!
//! # Example
//!
//! ```rust,ignore
//! use notify_rail::tower::NotificationService;
//! use tower::ServiceExt;
//!
//! let service = NotificationService::new(pipeline);
//! let next = service.oneshot(request).await?;
//! ```

use core::convert::Infallible;
use core::future::Future;
use core::marker::PhantomData;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::sync::Arc;

use tower::Service;

use crate::attachments::Request;
use crate::boundary::Next;
use crate::collaborators::{
    ConfigAccessor, EmailService, RecipientLookup, Renderer, TemplateSource, Transport, TransportFactory,
};
use crate::error::PipelineError;
use crate::pipeline::NotificationPipeline;

/// Future returned by [`NotificationService`]. Not `Send`.
pub type NotificationFuture<I> = Pin<Box<dyn Future<Output = Result<Next<I, PipelineError>, Infallible>>>>;

/// A Tower [`Service`] running the notification pipeline per request.
///
/// Pipeline failures are reported as [`Next::Error`], never as the
/// service's own error, which is why `Error` is [`Infallible`].
///
/// `D`, `H` and `I` pin down the recipient, transport handle and delivery
/// info types the pipeline is run with.
pub struct NotificationService<L, S, R, C, F, D, H, I> {
    pipeline: Arc<NotificationPipeline<L, S, R, C, F>>,
    _types: PhantomData<fn() -> (D, H, I)>,
}

impl<L, S, R, C, F, D, H, I> NotificationService<L, S, R, C, F, D, H, I> {
    pub fn new(pipeline: NotificationPipeline<L, S, R, C, F>) -> Self {
        Self::from_shared(Arc::new(pipeline))
    }

    pub fn from_shared(pipeline: Arc<NotificationPipeline<L, S, R, C, F>>) -> Self {
        Self { pipeline, _types: PhantomData }
    }

    pub fn pipeline(&self) -> &NotificationPipeline<L, S, R, C, F> {
        &self.pipeline
    }
}

impl<L, S, R, C, F, D, H, I> Clone for NotificationService<L, S, R, C, F, D, H, I> {
    fn clone(&self) -> Self {
        Self { pipeline: Arc::clone(&self.pipeline), _types: PhantomData }
    }
}

impl<L, S, R, C, F, D, H, I> Service<Request> for NotificationService<L, S, R, C, F, D, H, I>
where
    L: RecipientLookup<D> + 'static,
    S: TemplateSource + 'static,
    R: Renderer<D> + 'static,
    C: ConfigAccessor<EmailService> + 'static,
    F: TransportFactory<H> + 'static,
    H: Transport<I> + 'static,
    D: 'static,
    I: 'static,
{
    type Response = Next<I, PipelineError>;
    type Error = Infallible;
    type Future = NotificationFuture<I>;

    #[inline]
    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request) -> Self::Future {
        let pipeline = Arc::clone(&self.pipeline);
        Box::pin(async move { Ok(pipeline.run::<D, H, I>(&request).await.into_next()) })
    }
}

impl<L, S, R, C, F> NotificationPipeline<L, S, R, C, F> {
    /// Wraps the pipeline in a [`NotificationService`].
    pub fn into_service<D, H, I>(self) -> NotificationService<L, S, R, C, F, D, H, I> {
        NotificationService::new(self)
    }
}
