use serde::Deserialize;
use soiree_animation::{Easing, TweenSpec};

use crate::gesture_constants::{
    EDGE_RESISTANCE, FLICK_VELOCITY_THRESHOLD, RELEASE_VELOCITY_WINDOW_MS, RESIZE_DEBOUNCE_MS,
    SETTLE_DURATION_MS,
};

/// Tuning for one carousel instance.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Share of the overscroll applied past either edge.
    pub resistance: f32,
    /// Release speed (px/ms) that turns a drag into a flick.
    pub flick_threshold: f32,
    /// Pause (ms) after the last move beyond which the release is at rest.
    pub velocity_window_ms: f64,
    pub settle_duration_ms: f64,
    #[serde(skip)]
    pub settle_easing: Easing,
    pub resize_debounce_ms: f64,
}

impl CarouselConfig {
    pub fn with_resistance(mut self, resistance: f32) -> Self {
        self.resistance = resistance.clamp(0.0, 1.0);
        self
    }

    pub fn with_flick_threshold(mut self, px_per_ms: f32) -> Self {
        self.flick_threshold = px_per_ms.abs();
        self
    }

    pub fn with_velocity_window(mut self, window_ms: f64) -> Self {
        self.velocity_window_ms = window_ms.max(0.0);
        self
    }

    pub fn with_settle(mut self, duration_ms: f64, easing: Easing) -> Self {
        self.settle_duration_ms = duration_ms.max(0.0);
        self.settle_easing = easing;
        self
    }

    pub fn settle_spec(&self) -> TweenSpec {
        TweenSpec::new(self.settle_duration_ms, self.settle_easing)
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            resistance: EDGE_RESISTANCE,
            flick_threshold: FLICK_VELOCITY_THRESHOLD,
            velocity_window_ms: RELEASE_VELOCITY_WINDOW_MS,
            settle_duration_ms: SETTLE_DURATION_MS,
            settle_easing: Easing::EaseOut,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
        }
    }
}
