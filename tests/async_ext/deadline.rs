use std::time::Duration;

use notify_rail::async_ext::{with_deadline, Deadline, DeadlineElapsed};
use notify_rail::Outcome;

#[derive(Debug, PartialEq)]
enum SendError {
    TimedOut(Duration),
}

impl From<DeadlineElapsed> for SendError {
    fn from(elapsed: DeadlineElapsed) -> Self {
        SendError::TimedOut(elapsed.0)
    }
}

#[tokio::test(start_paused = true)]
async fn completes_before_deadline() {
    let deadline = with_deadline(Duration::from_secs(1), async { Outcome::<_, SendError>::success("sent") }).await;

    assert!(deadline.is_completed());
    assert_eq!(deadline.into_outcome(), Outcome::Success("sent"));
}

#[tokio::test(start_paused = true)]
async fn elapses_for_slow_operations() {
    let slow = async {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Outcome::<(), SendError>::success(())
    };

    let deadline = with_deadline(Duration::from_secs(5), slow).await;
    assert!(matches!(deadline, Deadline::Elapsed(after) if after == Duration::from_secs(5)));
    assert_eq!(deadline.into_outcome(), Outcome::Failure(SendError::TimedOut(Duration::from_secs(5))));
}

#[test]
fn elapsed_error_display() {
    assert_eq!(DeadlineElapsed(Duration::from_millis(250)).to_string(), "operation timed out after 250ms");
}
