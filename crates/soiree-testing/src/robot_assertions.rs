//! Assertions over a robot-driven carousel.

use crate::robot::GestureRobot;
use soiree_foundation::CarouselPhase;

/// Asserts the carousel is idle on `index` with the exact snapped offset.
pub fn assert_settled_at(robot: &GestureRobot, index: usize) {
    let carousel = robot.carousel();
    assert_eq!(
        carousel.phase(),
        CarouselPhase::Idle,
        "carousel not settled at t={}ms",
        robot.now()
    );
    assert_eq!(carousel.index(), index, "settled on the wrong slide");
    let expected = carousel.geometry().offset_for(index);
    assert_eq!(
        carousel.offset(),
        expected,
        "offset {} is off the boundary of slide {index}",
        carousel.offset()
    );
}

pub fn assert_offset_near(robot: &GestureRobot, expected: f32, tolerance: f32) {
    let actual = robot.carousel().offset();
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected offset ~{expected}, got {actual}"
    );
}
