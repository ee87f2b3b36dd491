//! The notification workflow, composed from fallible steps.
//!
//! ```text
//!   lookup(session) ─┐
//!   read(template)  ─┼─ join ─► render ─┐
//!   attachments     ─┘    fetch config ─┴─ join ─► send (once) ─► Terminal
//! ```
//!
//! A request without a usable file list never enters the workflow and
//! settles as [`Terminal::PassThrough`]. Otherwise the first failure along
//! any branch becomes the single [`Terminal::Failure`]; siblings that
//! failed later are dropped.

use core::future::ready;

use tracing::Instrument;

use crate::async_ext::{attempt_unwind, from_callback, join2, join3, FutureOutcomeExt};
use crate::attachments::{attachments_from_request, valid_files_on_request, AttachmentRecord, MissingSession, Request};
use crate::collaborators::{
    create_mail_options, create_transport, email_service, ConfigAccessor, EmailService, RecipientLookup, Renderer,
    TemplateData, TemplateSource, Transport, TransportFactory,
};
use crate::config::PipelineConfig;
use crate::error::{BoxError, NotifyError, PipelineError};
use crate::traits::OutcomeExt;
use crate::types::{ComposableError, Maybe, Outcome};

const STEP_LOOKUP: &str = "looking up recipient";
const STEP_TEMPLATE: &str = "reading email template";
const STEP_RENDER: &str = "rendering email body";
const STEP_SEND: &str = "sending email";

/// How one pipeline run ended.
#[must_use]
#[derive(Debug)]
pub enum Terminal<T, E> {
    /// The side effect ran and reported success.
    Success(T),
    /// Some step failed; this is the first failure.
    Failure(E),
    /// There was nothing to do. Not a failure.
    PassThrough,
}

impl<T, E> Terminal<T, E> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    pub fn is_pass_through(&self) -> bool {
        matches!(self, Self::PassThrough)
    }

    /// The outcome of the workflow, or `Absent` for a pass-through.
    pub fn into_outcome(self) -> Maybe<Outcome<T, E>> {
        match self {
            Self::Success(value) => Maybe::Present(Outcome::Success(value)),
            Self::Failure(error) => Maybe::Present(Outcome::Failure(error)),
            Self::PassThrough => Maybe::Absent,
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Terminal<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.fold(Self::Failure, Self::Success)
    }
}

/// The notification workflow with its collaborators injected.
///
/// Holds no mutable state: runs are independent and may overlap.
///
/// * `L` - recipient lookup
/// * `S` - template source
/// * `R` - renderer
/// * `C` - configuration accessor
/// * `F` - transport factory
#[derive(Debug, Clone)]
pub struct NotificationPipeline<L, S, R, C, F> {
    config: PipelineConfig,
    lookup: L,
    templates: S,
    renderer: R,
    settings: C,
    transports: F,
}

impl<L, S, R, C, F> NotificationPipeline<L, S, R, C, F> {
    pub fn new(config: PipelineConfig, lookup: L, templates: S, renderer: R, settings: C, transports: F) -> Self {
        Self { config, lookup, templates, renderer, settings, transports }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Runs the workflow for one request.
    ///
    /// `D` is the recipient record type, `H` the transport handle and `I`
    /// the transport's success payload, passed through untouched.
    pub async fn run<D, H, I>(&self, request: &Request) -> Terminal<I, PipelineError>
    where
        L: RecipientLookup<D>,
        S: TemplateSource,
        R: Renderer<D>,
        C: ConfigAccessor<EmailService>,
        F: TransportFactory<H>,
        H: Transport<I>,
    {
        if !valid_files_on_request(request) {
            tracing::debug!("request carries no files; passing through");
            return Terminal::PassThrough;
        }

        let files = request.files.as_ref().map_or(0, Vec::len);
        let span = tracing::info_span!("notification", files);

        let outcome = Outcome::from_result(self.deliver(request).instrument(span).await);
        outcome
            .inspect_failure(|err| {
                tracing::warn!(kind = err.core_error().kind(), error = %err, "notification failed");
            })
            .into()
    }

    async fn deliver<D, H, I>(&self, request: &Request) -> Result<I, PipelineError>
    where
        L: RecipientLookup<D>,
        S: TemplateSource,
        R: Renderer<D>,
        C: ConfigAccessor<EmailService>,
        F: TransportFactory<H>,
        H: Transport<I>,
    {
        let (recipient, template, attachments) = join3(
            self.recipient(request),
            self.template(),
            ready(Outcome::Success(attachments_from_request(request))),
        )
        .await
        .into_result()?;
        tracing::debug!(attachments = attachments.len(), "recipient and template ready");

        let data = TemplateData { recipient, attachments };
        let (html, service) = join2(
            ready(self.render(&template, &data)),
            ready(Outcome::Success(email_service(&self.settings, &self.config.service_key))),
        )
        .await
        .into_result()?;

        self.send(service, html, data.attachments).await.into_result()
    }

    async fn recipient<D>(&self, request: &Request) -> Outcome<D, PipelineError>
    where
        L: RecipientLookup<D>,
    {
        let looked_up = match request.session_id() {
            Maybe::Present(session_id) => self.lookup.lookup(session_id).await,
            Maybe::Absent => Outcome::Failure(Box::new(MissingSession) as BoxError),
        };
        looked_up.map_err(|cause| reported(NotifyError::recipient_read(cause), STEP_LOOKUP))
    }

    async fn template(&self) -> Outcome<String, PipelineError>
    where
        S: TemplateSource,
    {
        let path = &self.config.template_path;
        let encoding = &self.config.encoding;

        from_callback(|done| self.templates.read_file(path, encoding, done))
            .ctx(STEP_TEMPLATE)
            .await
            .map_err(|err| err.map_core(NotifyError::template_read).set_code(NotifyError::STATUS_CODE))
    }

    fn render<D>(&self, template: &str, data: &TemplateData<D>) -> Outcome<String, PipelineError>
    where
        R: Renderer<D>,
    {
        attempt_unwind(|| self.renderer.render(template, data).map_err(NotifyError::Render))
            .ctx(STEP_RENDER)
            .map_err(|err| err.set_code(NotifyError::STATUS_CODE))
    }

    async fn send<H, I>(
        &self,
        service: Maybe<EmailService>,
        html: String,
        attachments: Vec<AttachmentRecord>,
    ) -> Outcome<I, PipelineError>
    where
        F: TransportFactory<H>,
        H: Transport<I>,
    {
        let service = match service {
            Maybe::Present(service) => service,
            Maybe::Absent => {
                tracing::warn!(key = %self.config.service_key, "email service is not configured");
                return Outcome::Failure(reported(NotifyError::ServiceUnavailable, STEP_SEND));
            },
        };

        let transport_config = create_transport(service.host, service.port);
        let transport = self.transports.create_transport(transport_config.with_secure(self.config.secure));
        let options = create_mail_options(service.from, service.to, service.subject, html, attachments);

        tracing::debug!(attachments = options.attachments.len(), "handing email to transport");
        from_callback(|done| transport.send_mail(options, done))
            .await
            .map_err(|cause| reported(NotifyError::delivery(cause), STEP_SEND))
    }
}

fn reported(error: NotifyError, step: &'static str) -> PipelineError {
    ComposableError::new(error).with_context(step).set_code(NotifyError::STATUS_CODE)
}
