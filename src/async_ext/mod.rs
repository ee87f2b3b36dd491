//! Asynchronous adapters and join points.
//!
//! - [`attempt`], [`attempt_ready`], [`attempt_with_message`] and
//!   [`attempt_unwind`] turn fallible synchronous calls into outcomes.
//! - [`from_callback`] turns a callback-style call into a future of an
//!   outcome.
//! - [`FutureOutcomeExt`] attaches context to in-flight failures.
//! - [`join2`] / [`join3`] wait for concurrent branches and surface the
//!   first failure.
//! - [`with_deadline`] bounds an operation from the outside.
//!
//! # Examples
//!
//! ```
//! use notify_rail::async_ext::{attempt_ready, from_callback, join2};
//! use notify_rail::{BoxError, Outcome};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let joined = join2(
//!     from_callback(|done| done.succeed("template".to_string())),
//!     attempt_ready(|| Ok::<_, BoxError>(3_usize)),
//! )
//! .await;
//!
//! assert!(joined.is_success());
//! # });
//! ```

mod callback;
mod context_future;
mod deadline;
mod future_ext;
mod guard;
mod join;

pub use callback::{from_callback, Callback, CallbackDropped, CallbackFuture};
pub use context_future::ContextFuture;
pub use deadline::{with_deadline, Deadline, DeadlineElapsed};
pub use future_ext::FutureOutcomeExt;
pub use guard::{attempt, attempt_ready, attempt_unwind, attempt_with_message, Panicked};
pub use join::{join2, join3};
