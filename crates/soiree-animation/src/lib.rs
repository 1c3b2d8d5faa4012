//! Animation primitives for Soiree
//!
//! Easing curves and millisecond-based tweens. Nothing here touches the DOM;
//! callers feed timestamps (usually from `requestAnimationFrame`) and read
//! back interpolated values.

pub mod easing;
pub mod tween;

pub use easing::{CubicBezier, Easing};
pub use tween::{Tween, TweenSample, TweenSpec};

pub mod prelude {
    pub use crate::easing::Easing;
    pub use crate::tween::{Tween, TweenSample, TweenSpec};
}
