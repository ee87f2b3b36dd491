use std::cell::Cell;

use notify_rail::traits::{ComposableOutcomeExt, OutcomeExt, ResultExt};
use notify_rail::Outcome;

#[test]
fn into_outcome_keeps_both_variants() {
    assert_eq!(Ok::<_, &str>(1).into_outcome(), Outcome::Success(1));
    assert_eq!(Err::<i32, _>("bad").into_outcome(), Outcome::Failure("bad"));
}

#[test]
fn ctx_wraps_only_failures() {
    let ok = Ok::<_, &str>(42).ctx("should not appear");
    assert_eq!(ok.success_value(), Some(42));

    let err = Err::<i32, _>("original").ctx("context added").failure_value().unwrap();
    assert_eq!(err.error_chain(), "context added -> original");
}

#[test]
fn ctx_with_is_lazy() {
    let called = Cell::new(false);
    let _ = Ok::<(), &str>(()).ctx_with(|| {
        called.set(true);
        "never".to_owned()
    });
    assert!(!called.get());

    let err = Err::<(), _>("boom")
        .ctx_with(|| {
            called.set(true);
            format!("user {}", 42)
        })
        .failure_value()
        .unwrap();
    assert!(called.get());
    assert_eq!(err.error_chain(), "user 42 -> boom");
}

#[test]
fn outcome_ctx_and_ctx_more_stack_contexts() {
    let err = Outcome::<(), _>::failure("base")
        .ctx("inner")
        .ctx_more("outer")
        .failure_value()
        .unwrap();

    assert_eq!(err.error_chain(), "outer -> inner -> base");
}

#[test]
fn outcome_with_ctx_skips_success() {
    let called = Cell::new(false);
    let outcome = Outcome::<u8, &str>::success(1).with_ctx(|| {
        called.set(true);
        "unused"
    });

    assert!(outcome.is_success());
    assert!(!called.get());
}
