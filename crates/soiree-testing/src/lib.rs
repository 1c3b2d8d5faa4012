//! Testing utilities for Soiree behaviours.
//!
//! The [`robot::GestureRobot`] scripts pointer gestures against a
//! [`Carousel`](soiree_foundation::Carousel) on a virtual clock, so tests read
//! like "drag 100px left in 200ms, let go, wait".

pub mod robot;
pub mod robot_assertions;

pub use robot::GestureRobot;
pub use robot_assertions::{assert_offset_near, assert_settled_at};
