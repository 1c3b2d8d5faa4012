use super::*;

#[test]
fn first_sample_starts_the_clock() {
    let mut tween = Tween::new(0.0, -300.0, TweenSpec::linear(300.0));

    let first = tween.sample(1_000.0);
    assert_eq!(first.value, 0.0);
    assert!(!first.finished);

    let half = tween.sample(1_150.0);
    assert!((half.value + 150.0).abs() < 1e-3, "got {}", half.value);
}

#[test]
fn lands_exactly_on_target() {
    let mut tween = Tween::starting_at(-120.0, -600.0, TweenSpec::default(), 0.0);

    let done = tween.sample(10_000.0);
    assert!(done.finished);
    assert_eq!(done.value, -600.0);
}

#[test]
fn delay_holds_the_start_value() {
    let spec = TweenSpec::linear(100.0).with_delay(50.0);
    let mut tween = Tween::starting_at(0.0, 10.0, spec, 0.0);

    assert_eq!(tween.sample(40.0).value, 0.0);
    let after = tween.sample(100.0);
    assert!((after.value - 5.0).abs() < 1e-3, "got {}", after.value);
}

#[test]
fn zero_duration_finishes_immediately() {
    let mut tween = Tween::starting_at(3.0, 7.0, TweenSpec::linear(0.0), 5.0);
    let sample = tween.sample(5.0);
    assert!(sample.finished);
    assert_eq!(sample.value, 7.0);
}

#[test]
fn clock_going_backwards_does_not_overshoot() {
    let mut tween = Tween::starting_at(0.0, 100.0, TweenSpec::linear(100.0), 50.0);
    let sample = tween.sample(10.0);
    assert_eq!(sample.value, 0.0);
    assert!(!sample.finished);
}
