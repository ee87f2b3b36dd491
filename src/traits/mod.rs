//! Traits for building and annotating outcomes.
//!
//! - [`IntoErrorContext`]: values usable as error context
//! - [`ResultExt`]: `Result` to [`Outcome`](crate::Outcome) lifting
//! - [`OutcomeExt`] / [`ComposableOutcomeExt`]: context on failed outcomes

pub mod into_error_context;
pub mod result_ext;

pub use into_error_context::IntoErrorContext;
pub use result_ext::{ComposableOutcomeExt, OutcomeExt, ResultExt};
