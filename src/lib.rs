//! Composable fallible operations, and a notification workflow built from them.
//!
//! Every step that can fail is captured at its origin as an [`Outcome`],
//! steps are chained without nested branching, and the workflow reports
//! exactly one terminal result: a success, the first failure, or a
//! pass-through when there was nothing to do.
//!
//! # Examples
//!
//! ## Outcomes and context
//!
//! ```
//! use notify_rail::prelude::*;
//!
//! let port: Outcome<u16, _> = "smtp".parse::<u16>().ctx("parsing email service port");
//!
//! let message = port.fold(|e| e.error_chain(), |p| p.to_string());
//! assert!(message.starts_with("parsing email service port -> "));
//! ```
//!
//! ## Optional configuration
//!
//! ```
//! use notify_rail::collaborators::{email_service, EmailService, MapConfig};
//!
//! let config = MapConfig::<EmailService>::new();
//! assert!(email_service(&config, "emailService").is_absent());
//! ```
//!
//! ## Attachments
//!
//! ```
//! use notify_rail::attachments::{attachments_from_request, FileDescriptor, Request};
//!
//! let request = Request::new().with_files(vec![
//!     FileDescriptor::new("a.pdf", "/tmp/a").with_scan("clean"),
//!     FileDescriptor::new("b.exe", "/tmp/b").with_scan("infected"),
//! ]);
//!
//! let attachments = attachments_from_request(&request);
//! assert_eq!(attachments.len(), 1);
//! assert_eq!(attachments[0].filename, "a.pdf");
//! ```

/// Inbound request shape and attachment transforms
pub mod attachments;
/// Request-handling boundary signals
pub mod boundary;
/// Collaborator interfaces injected into the pipeline
pub mod collaborators;
/// Pipeline settings
pub mod config;
/// Failure taxonomy
pub mod error;
/// The composed notification workflow
pub mod pipeline;
/// Convenience re-exports
pub mod prelude;
/// Extension traits over outcomes
pub mod traits;
/// Outcome, Maybe and error context types
pub mod types;

/// Safe-wrap adapters, join points and deadlines
pub mod async_ext;

/// Tower integration (requires `tower` feature)
#[cfg(feature = "tower")]
pub mod tower;

pub use boundary::{send_email, send_notification, Next};
pub use config::PipelineConfig;
pub use error::{BoxError, NotifyError, PipelineError};
pub use pipeline::{NotificationPipeline, Terminal};
pub use traits::*;
pub use types::{ComposableError, ComposableOutcome, DomainError, ErrorContext, ErrorVec, LazyContext, Maybe, Outcome};
