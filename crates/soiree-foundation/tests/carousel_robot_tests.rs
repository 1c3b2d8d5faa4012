//! Scripted gestures against a full carousel: press, move, release, and
//! frames on a virtual clock.

use soiree_foundation::{CardGeometry, Carousel, CarouselConfig, CarouselPhase};
use soiree_testing::{assert_offset_near, assert_settled_at, GestureRobot};

/// 7 cards of 280px with 20px gaps, 3 visible: 5 slides, 300px step.
fn seven_cards() -> GestureRobot {
    let geometry = CardGeometry::new(280.0, 20.0, 7, 3);
    GestureRobot::new(Carousel::new(geometry, CarouselConfig::default()))
}

#[test]
fn slow_drag_past_a_step_and_a_half_lands_on_the_rounded_slide() {
    let mut robot = seven_cards();

    let target = robot.drag(-450.0, 4_500.0);
    assert_eq!(target, Some(2));

    robot.wait_for_idle();
    assert_settled_at(&robot, 2);
}

#[test]
fn short_fast_flick_advances_one_slide() {
    let mut robot = seven_cards();

    // 60px in 100ms is 0.6px/ms, well over the flick threshold.
    let target = robot.drag(-60.0, 100.0);
    assert_eq!(target, Some(1));

    robot.wait_for_idle();
    assert_settled_at(&robot, 1);
}

#[test]
fn holding_still_before_release_cancels_the_flick() {
    let mut robot = seven_cards();

    robot.press(500.0).move_by(-100.0, 100.0).hold(2_000.0);
    assert!(robot.carousel().drag_velocity().unwrap() < -0.9);

    assert_eq!(robot.release(), Some(0));
    robot.wait_for_idle();
    assert_settled_at(&robot, 0);
}

#[test]
fn flick_back_on_the_first_slide_stays_put() {
    let mut robot = seven_cards();

    assert_eq!(robot.drag(60.0, 100.0), Some(0));
    robot.wait_for_idle();
    assert_settled_at(&robot, 0);
}

#[test]
fn dragging_past_the_last_slide_meets_resistance() {
    let mut robot = seven_cards();
    robot.tap_dot(4);
    robot.wait_for_idle();
    assert_settled_at(&robot, 4);

    robot.press(500.0).move_by(-100.0, 1_000.0);
    assert_eq!(robot.carousel().phase(), CarouselPhase::Dragging);
    assert_offset_near(&robot, -1_230.0, 0.01);

    assert_eq!(robot.release(), Some(4));
    robot.wait_for_idle();
    assert_settled_at(&robot, 4);
}

#[test]
fn pressing_during_a_settle_freezes_the_track_in_place() {
    let mut robot = seven_cards();
    robot.tap_dot(3);
    let mid_flight = robot.advance(100.0);
    assert!(mid_flight < 0.0 && mid_flight > -900.0, "offset {mid_flight}");

    robot.press(400.0);
    assert_eq!(robot.carousel().phase(), CarouselPhase::Dragging);
    assert_eq!(robot.carousel().offset(), mid_flight);

    robot.advance(500.0);
    assert_eq!(robot.carousel().offset(), mid_flight);
}

#[test]
fn settle_runs_for_the_configured_duration() {
    let mut robot = seven_cards().with_frame_interval(8.0);
    robot.tap_dot(1);

    robot.advance(399.0);
    assert_eq!(robot.carousel().phase(), CarouselPhase::Settling);

    robot.advance(2.0);
    assert_settled_at(&robot, 1);
}

#[test]
fn wider_layout_after_resize_clamps_the_index() {
    let mut robot = seven_cards();
    robot.tap_dot(4);
    robot.wait_for_idle();

    // Four cards per view leaves only four slides.
    let offset = robot.resize(CardGeometry::new(200.0, 20.0, 7, 4));
    assert_eq!(offset, -660.0);
    assert_settled_at(&robot, 3);
    assert_eq!(robot.carousel().dot_count(), 4);
}

#[test]
fn each_dot_settles_on_its_own_boundary() {
    let mut robot = seven_cards();
    for index in [2, 0, 4, 1] {
        robot.tap_dot(index);
        robot.wait_for_idle();
        assert_settled_at(&robot, index);
    }
}
