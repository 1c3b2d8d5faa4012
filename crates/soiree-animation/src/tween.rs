//! Time-based tweens.
//!
//! A [`Tween`] is a pure function of time: it is started lazily on the first
//! frame it sees and never schedules anything itself. Whoever owns the frame
//! loop keeps calling [`Tween::sample`] until `finished` comes back true.

use crate::easing::Easing;

/// Duration, easing and delay of a tween. Times are in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    pub duration_ms: f64,
    pub easing: Easing,
    pub delay_ms: f64,
}

impl TweenSpec {
    pub fn new(duration_ms: f64, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
            delay_ms: 0.0,
        }
    }

    pub fn linear(duration_ms: f64) -> Self {
        Self::new(duration_ms, Easing::Linear)
    }

    pub fn with_delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Linear progress in `[0, 1]` after `elapsed_ms`, delay included.
    pub fn linear_progress(&self, elapsed_ms: f64) -> f32 {
        let active = elapsed_ms - self.delay_ms;
        if active <= 0.0 {
            return 0.0;
        }
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (active / self.duration_ms).clamp(0.0, 1.0) as f32
    }
}

impl Default for TweenSpec {
    fn default() -> Self {
        Self::new(400.0, Easing::EaseOut)
    }
}

/// One frame's worth of tween output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSample {
    pub value: f32,
    pub finished: bool,
}

/// Interpolates between two values over a [`TweenSpec`].
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    spec: TweenSpec,
    started_at: Option<f64>,
}

impl Tween {
    pub fn new(from: f32, to: f32, spec: TweenSpec) -> Self {
        Self {
            from,
            to,
            spec,
            started_at: None,
        }
    }

    /// A tween that starts at an explicit timestamp instead of its first frame.
    pub fn starting_at(from: f32, to: f32, spec: TweenSpec, now_ms: f64) -> Self {
        Self {
            from,
            to,
            spec,
            started_at: Some(now_ms),
        }
    }

    pub fn from(&self) -> f32 {
        self.from
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn spec(&self) -> TweenSpec {
        self.spec
    }

    /// Value at `now_ms`. The final sample is exactly the target.
    pub fn sample(&mut self, now_ms: f64) -> TweenSample {
        let started = *self.started_at.get_or_insert(now_ms);
        let elapsed = (now_ms - started).max(0.0);
        let linear = self.spec.linear_progress(elapsed);

        if linear >= 1.0 {
            return TweenSample {
                value: self.to,
                finished: true,
            };
        }

        let eased = self.spec.easing.transform(linear);
        TweenSample {
            value: self.from + (self.to - self.from) * eased,
            finished: false,
        }
    }
}

#[cfg(test)]
#[path = "tests/tween_tests.rs"]
mod tests;
