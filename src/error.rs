//! Failure taxonomy of the notification pipeline.
//!
//! Each step captures its failure at the origin and tags it with one of
//! the [`NotifyError`] kinds. The pipeline then wraps it in a
//! [`ComposableError`] naming the step, with status code
//! [`NotifyError::STATUS_CODE`].

use core::fmt::{self, Display};
use std::error::Error;

use crate::async_ext::{CallbackDropped, Panicked};
use crate::types::{ComposableError, DomainError};

/// Type-erased cause reported by a collaborator.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Failure reported to the boundary.
pub type PipelineError = ComposableError<NotifyError>;

pub const TEMPLATE_READ_MESSAGE: &str = "Cannot read email template";
pub const RECIPIENT_READ_MESSAGE: &str = "Cannot read recipient data";
pub const DELIVERY_MESSAGE: &str = "Email service unavailable";
pub const SERVICE_MISSING_MESSAGE: &str = "Email service not configured";

/// What went wrong, by kind.
#[derive(Debug)]
pub enum NotifyError {
    /// The template or the recipient data could not be read.
    SourceRead(DomainError<BoxError>),
    /// The renderer failed; the cause is kept as-is.
    Render(BoxError),
    /// No email service configuration was available for the send.
    ServiceUnavailable,
    /// The transport reported an error for the send.
    Delivery(DomainError<BoxError>),
}

impl NotifyError {
    /// Status code every pipeline failure is reported with.
    pub const STATUS_CODE: u32 = 500;

    pub fn template_read(cause: BoxError) -> Self {
        Self::SourceRead(DomainError::new(TEMPLATE_READ_MESSAGE, cause))
    }

    pub fn recipient_read(cause: BoxError) -> Self {
        Self::SourceRead(DomainError::new(RECIPIENT_READ_MESSAGE, cause))
    }

    pub fn delivery(cause: BoxError) -> Self {
        Self::Delivery(DomainError::new(DELIVERY_MESSAGE, cause))
    }

    pub fn is_source_read(&self) -> bool {
        matches!(self, Self::SourceRead(_))
    }

    pub fn is_render(&self) -> bool {
        matches!(self, Self::Render(_))
    }

    pub fn is_service_unavailable(&self) -> bool {
        matches!(self, Self::ServiceUnavailable)
    }

    pub fn is_delivery(&self) -> bool {
        matches!(self, Self::Delivery(_))
    }

    /// Short machine-friendly name, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SourceRead(_) => "source_read",
            Self::Render(_) => "render",
            Self::ServiceUnavailable => "service_unavailable",
            Self::Delivery(_) => "delivery",
        }
    }
}

impl Display for NotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceRead(err) | Self::Delivery(err) => Display::fmt(err, f),
            Self::Render(cause) => Display::fmt(cause, f),
            Self::ServiceUnavailable => f.write_str(SERVICE_MISSING_MESSAGE),
        }
    }
}

impl Error for NotifyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::SourceRead(err) | Self::Delivery(err) => Some(err.cause().as_ref()),
            Self::Render(cause) => cause.source(),
            Self::ServiceUnavailable => None,
        }
    }
}

impl From<Panicked> for NotifyError {
    fn from(panic: Panicked) -> Self {
        Self::Render(Box::new(panic))
    }
}

impl From<CallbackDropped> for NotifyError {
    fn from(dropped: CallbackDropped) -> Self {
        Self::delivery(Box::new(dropped))
    }
}
