use std::io;

use notify_rail::async_ext::{attempt, attempt_ready, attempt_unwind, attempt_with_message, Panicked};
use notify_rail::error::{NotifyError, TEMPLATE_READ_MESSAGE};
use notify_rail::Outcome;

#[test]
fn attempt_captures_errors_as_failures() {
    assert_eq!(attempt(|| "25".parse::<u16>()), Outcome::Success(25));
    assert!(attempt(|| "smtp".parse::<u16>()).is_failure());
}

#[tokio::test]
async fn attempt_ready_is_already_settled() {
    let outcome = attempt_ready(|| Ok::<_, &str>("ready")).await;
    assert_eq!(outcome, Outcome::Success("ready"));
}

#[test]
fn attempt_with_message_replaces_display_only() {
    let outcome = attempt_with_message(TEMPLATE_READ_MESSAGE, || Err::<(), _>(io::Error::other("ENOENT")));
    let err = outcome.failure_value().unwrap();

    assert_eq!(err.to_string(), "Cannot read email template");
    assert_eq!(err.cause().to_string(), "ENOENT");
}

#[test]
fn attempt_with_message_leaves_success_alone() {
    let outcome = attempt_with_message("unused", || Ok::<_, io::Error>(7));
    assert_eq!(outcome.success_value(), Some(7));
}

#[test]
fn attempt_unwind_traps_string_panics() {
    let outcome = attempt_unwind(|| -> Result<(), Panicked> { panic!("render blew up: {}", 42) });
    let err = outcome.failure_value().unwrap();

    assert_eq!(err.message(), "render blew up: 42");
    assert_eq!(err.to_string(), "panicked: render blew up: 42");
}

#[test]
fn attempt_unwind_maps_into_domain_errors() {
    let outcome = attempt_unwind(|| -> Result<(), NotifyError> { panic!("boom") });
    assert!(outcome.failure_value().unwrap().is_render());
}

#[test]
fn attempt_unwind_passes_through_returned_errors() {
    let outcome = attempt_unwind(|| Err::<(), _>(NotifyError::ServiceUnavailable));
    assert!(outcome.failure_value().unwrap().is_service_unavailable());
}
