use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use notify_rail::async_ext::{join2, join3};
use notify_rail::Outcome;

#[tokio::test]
async fn join2_pairs_successes() {
    let joined = join2(async { Outcome::<_, &str>::success(1) }, async { Outcome::success("two") }).await;
    assert_eq!(joined, Outcome::Success((1, "two")));
}

#[tokio::test]
async fn join3_reports_earliest_argument_failure() {
    let joined = join3(
        async { Outcome::<u8, &str>::success(1) },
        async { Outcome::<u8, &str>::failure("template") },
        async { Outcome::<u8, &str>::failure("attachments") },
    )
    .await;

    assert_eq!(joined, Outcome::Failure("template"));
}

#[tokio::test(start_paused = true)]
async fn argument_order_wins_over_completion_order() {
    let joined = join2(
        async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            Outcome::<(), &str>::failure("slow lookup")
        },
        async { Outcome::<(), &str>::failure("fast template") },
    )
    .await;

    assert_eq!(joined, Outcome::Failure("slow lookup"));
}

#[tokio::test]
async fn siblings_run_to_completion_after_a_failure() {
    let finished = AtomicU32::new(0);

    let joined = join3(
        async { Outcome::<(), &str>::failure("early") },
        async {
            tokio::task::yield_now().await;
            finished.fetch_add(1, Ordering::SeqCst);
            Outcome::<(), &str>::success(())
        },
        async {
            finished.fetch_add(1, Ordering::SeqCst);
            Outcome::<(), &str>::success(())
        },
    )
    .await;

    assert!(joined.is_failure());
    assert_eq!(finished.load(Ordering::SeqCst), 2);
}
