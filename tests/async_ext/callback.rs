use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use notify_rail::async_ext::{from_callback, with_deadline, Callback, CallbackDropped};
use notify_rail::{BoxError, Outcome};

#[derive(Debug, PartialEq)]
enum ReadError {
    NotFound,
    Dropped,
}

impl From<CallbackDropped> for ReadError {
    fn from(_: CallbackDropped) -> Self {
        ReadError::Dropped
    }
}

#[tokio::test]
async fn succeed_settles_with_value() {
    let outcome = from_callback(|done: Callback<&str, ReadError>| done.succeed("<p>hi</p>")).await;
    assert_eq!(outcome, Outcome::Success("<p>hi</p>"));
}

#[tokio::test]
async fn fail_settles_with_error() {
    let outcome = from_callback(|done: Callback<(), ReadError>| done.fail(ReadError::NotFound)).await;
    assert_eq!(outcome, Outcome::Failure(ReadError::NotFound));
}

#[tokio::test]
async fn resolve_takes_a_result() {
    let outcome = from_callback(|done: Callback<u8, ReadError>| done.resolve(Ok(3))).await;
    assert_eq!(outcome, Outcome::Success(3));
}

#[tokio::test]
async fn dropped_callback_becomes_failure() {
    let outcome = from_callback(|done: Callback<(), ReadError>| drop(done)).await;
    assert_eq!(outcome, Outcome::Failure(ReadError::Dropped));
}

#[tokio::test]
async fn function_is_invoked_exactly_once() {
    let calls = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&calls);

    let outcome = from_callback(move |done: Callback<u32, ReadError>| {
        counter.fetch_add(1, Ordering::SeqCst);
        done.succeed(1);
    })
    .await;

    assert!(outcome.is_success());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn callback_completed_from_another_task() {
    let outcome = from_callback(|done: Callback<String, BoxError>| {
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(5)).await;
            done.succeed("late".to_owned());
        });
    })
    .await;

    assert_eq!(outcome.success_value().as_deref(), Some("late"));
}

#[tokio::test]
async fn callback_dropped_as_box_error() {
    let outcome = from_callback(|done: Callback<(), BoxError>| drop(done)).await;
    let err = outcome.failure_value().unwrap();
    assert_eq!(err.to_string(), "callback dropped before completion");
}

#[tokio::test(start_paused = true)]
async fn held_callback_stays_pending() {
    let mut parked = None;
    let future = from_callback(|done: Callback<(), ReadError>| parked = Some(done));

    let deadline = with_deadline(Duration::from_secs(30), future).await;
    assert!(deadline.is_elapsed());
    drop(parked);
}
