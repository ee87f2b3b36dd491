use std::cell::Cell;

use notify_rail::Outcome;

#[test]
fn map_transforms_success() {
    let outcome = Outcome::<i32, &str>::success(20).map(|v| v * 2);
    assert_eq!(outcome, Outcome::Success(40));
}

#[test]
fn map_never_invokes_function_on_failure() {
    let calls = Cell::new(0);
    let outcome = Outcome::<i32, &str>::failure("boom").map(|v| {
        calls.set(calls.get() + 1);
        v * 2
    });

    assert_eq!(outcome, Outcome::Failure("boom"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn get_or_else_returns_default_only_on_failure() {
    assert_eq!(Outcome::<&str, ()>::success("value").get_or_else("default"), "value");
    assert_eq!(Outcome::<&str, ()>::failure(()).get_or_else("default"), "default");
    assert_eq!(Outcome::<usize, &str>::failure("four").get_or_else_with(str::len), 4);
}

#[test]
fn fold_invokes_exactly_one_branch() {
    let failures = Cell::new(0);
    let successes = Cell::new(0);

    let label = Outcome::<u8, &str>::failure("nope").fold(
        |e| {
            failures.set(failures.get() + 1);
            format!("failed: {e}")
        },
        |v| {
            successes.set(successes.get() + 1);
            format!("ok: {v}")
        },
    );

    assert_eq!(label, "failed: nope");
    assert_eq!((failures.get(), successes.get()), (1, 0));
}

#[test]
fn and_then_short_circuits() {
    let calls = Cell::new(0);
    let step = |v: i32| {
        calls.set(calls.get() + 1);
        Outcome::<i32, &str>::success(v + 1)
    };

    assert_eq!(Outcome::success(1).and_then(step), Outcome::Success(2));
    assert_eq!(Outcome::failure("early").and_then(step), Outcome::Failure("early"));
    assert_eq!(calls.get(), 1);
}

#[test]
fn or_else_recovers_failures() {
    let recovered = Outcome::<i32, &str>::failure("missing").or_else(|_| Outcome::<i32, ()>::success(0));
    assert_eq!(recovered, Outcome::Success(0));
}

#[test]
fn zip_surfaces_left_failure_first() {
    let both = Outcome::<i32, &str>::failure("left").zip(Outcome::<i32, &str>::failure("right"));
    assert_eq!(both, Outcome::Failure("left"));

    let right_only = Outcome::<i32, &str>::success(1).zip(Outcome::<i32, &str>::failure("right"));
    assert_eq!(right_only, Outcome::Failure("right"));

    let ok = Outcome::<i32, &str>::success(1).zip(Outcome::success("two"));
    assert_eq!(ok, Outcome::Success((1, "two")));
}

#[test]
fn result_round_trip_preserves_variant() {
    let outcome: Outcome<i32, &str> = Err("bad").into();
    assert!(outcome.is_failure());

    let result: Result<i32, &str> = Outcome::success(3).into();
    assert_eq!(result, Ok(3));
}

#[test]
fn inspect_failure_sees_error_without_consuming_it() {
    let seen = Cell::new(false);
    let outcome = Outcome::<(), &str>::failure("x").inspect_failure(|_| seen.set(true));

    assert!(seen.get());
    assert_eq!(outcome.failure_value(), Some("x"));
}

#[cfg(feature = "serde")]
#[test]
fn serde_uses_variant_names() {
    let json = serde_json::to_value(Outcome::<u8, String>::failure("bad".into())).unwrap();
    assert_eq!(json, serde_json::json!({ "Failure": "bad" }));

    let back: Outcome<u8, String> = serde_json::from_value(serde_json::json!({ "Success": 7 })).unwrap();
    assert_eq!(back, Outcome::Success(7));
}
