//! Convenience re-exports for the common path.
//!
//! ```
//! use notify_rail::prelude::*;
//!
//! let outcome: Outcome<u8, &str> = Maybe::present(7).ok_or("missing");
//! assert_eq!(outcome.get_or_else(0), 7);
//! ```

pub use crate::async_ext::{
    attempt, attempt_ready, attempt_with_message, from_callback, join2, join3, Callback, FutureOutcomeExt,
};
pub use crate::boundary::Next;
pub use crate::error::{BoxError, NotifyError, PipelineError};
pub use crate::pipeline::{NotificationPipeline, Terminal};
pub use crate::traits::{ComposableOutcomeExt, IntoErrorContext, OutcomeExt, ResultExt};
pub use crate::types::{ComposableError, ComposableOutcome, ErrorContext, LazyContext, Maybe, Outcome};
pub use crate::PipelineConfig;
