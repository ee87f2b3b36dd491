//! Translation of pipeline results into request-handling control flow.
//!
//! This is the only module that knows how the surrounding framework wants
//! to be told what happened. Inner steps never produce a [`Next`].

use crate::attachments::{valid_files_on_request, Request};
use crate::collaborators::{
    ConfigAccessor, EmailService, RecipientLookup, Renderer, TemplateSource, Transport, TransportFactory,
};
use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::pipeline::{NotificationPipeline, Terminal};

/// What the surrounding framework should do after the handler ran.
#[must_use]
#[derive(Debug)]
pub enum Next<I, E> {
    /// Continue; the request was left untouched.
    Untouched,
    /// Continue; the request was handled and produced `I`.
    Handled(I),
    /// Continue with the error attached for an upstream reporting stage.
    Error(E),
}

impl<I, E> Next<I, E> {
    pub fn is_untouched(&self) -> bool {
        matches!(self, Self::Untouched)
    }

    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl<I> Next<I, PipelineError> {
    /// Status the reporting stage should answer with, if this is an error.
    pub fn status_code(&self) -> Option<u32> {
        match self {
            Self::Error(err) => err.error_code(),
            _ => None,
        }
    }
}

impl<I, E> Terminal<I, E> {
    /// The boundary signal for this terminal state.
    pub fn into_next(self) -> Next<I, E> {
        self.into()
    }
}

impl<I, E> From<Terminal<I, E>> for Next<I, E> {
    fn from(terminal: Terminal<I, E>) -> Self {
        match terminal {
            Terminal::Success(info) => Self::Handled(info),
            Terminal::Failure(error) => Self::Error(error),
            Terminal::PassThrough => Self::Untouched,
        }
    }
}

/// Runs `pipeline` for `request` and hands the result to `next` exactly once.
///
/// A request without a usable file list goes straight to `next` as
/// [`Next::Untouched`]; the pipeline is not invoked.
pub async fn send_notification<L, S, R, C, F, D, H, I, N, Ret>(
    pipeline: &NotificationPipeline<L, S, R, C, F>,
    request: &Request,
    next: N,
) -> Ret
where
    L: RecipientLookup<D>,
    S: TemplateSource,
    R: Renderer<D>,
    C: ConfigAccessor<EmailService>,
    F: TransportFactory<H>,
    H: Transport<I>,
    N: FnOnce(Next<I, PipelineError>) -> Ret,
{
    if !valid_files_on_request(request) {
        return next(Next::Untouched);
    }
    next(pipeline.run::<D, H, I>(request).await.into_next())
}

/// Entry point taking the five collaborators directly, with default settings.
#[allow(clippy::too_many_arguments)]
pub async fn send_email<L, S, R, C, F, D, H, I, N, Ret>(
    lookup: L,
    templates: S,
    renderer: R,
    settings: C,
    transports: F,
    request: &Request,
    next: N,
) -> Ret
where
    L: RecipientLookup<D>,
    S: TemplateSource,
    R: Renderer<D>,
    C: ConfigAccessor<EmailService>,
    F: TransportFactory<H>,
    H: Transport<I>,
    N: FnOnce(Next<I, PipelineError>) -> Ret,
{
    let pipeline = NotificationPipeline::new(PipelineConfig::default(), lookup, templates, renderer, settings, transports);
    send_notification(&pipeline, request, next).await
}
