//! Release-velocity sampling for drag gestures.
//!
//! The carousel only needs the speed of the last stretch of the drag, so this
//! keeps the two most recent samples instead of a history window.

/// A pointer position at a point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub time_ms: f64,
}

impl PointerSample {
    pub fn new(x: f32, time_ms: f64) -> Self {
        Self { x, time_ms }
    }
}

/// Instantaneous 1D velocity from consecutive samples, in px/ms.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VelocitySampler {
    last: Option<PointerSample>,
    velocity: f32,
}

impl VelocitySampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh gesture at `sample` with zero velocity.
    pub fn start(sample: PointerSample) -> Self {
        Self {
            last: Some(sample),
            velocity: 0.0,
        }
    }

    /// Records a sample and returns the updated velocity.
    ///
    /// Samples must arrive in time order. One that is older than the previous
    /// sample is dropped; one with the same timestamp moves the reference
    /// position but keeps the previous velocity.
    pub fn push(&mut self, sample: PointerSample) -> f32 {
        if let Some(previous) = self.last {
            let dt = sample.time_ms - previous.time_ms;
            if dt < 0.0 {
                log::trace!(
                    "ignoring pointer sample at {}ms, earlier than {}ms",
                    sample.time_ms,
                    previous.time_ms
                );
                return self.velocity;
            }
            if dt > 0.0 {
                self.velocity = (sample.x - previous.x) / dt as f32;
            }
        }
        self.last = Some(sample);
        self.velocity
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn last_sample(&self) -> Option<PointerSample> {
        self.last
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sampler_is_still() {
        let sampler = VelocitySampler::new();
        assert_eq!(sampler.velocity(), 0.0);
    }

    #[test]
    fn single_sample_has_no_velocity() {
        let sampler = VelocitySampler::start(PointerSample::new(100.0, 0.0));
        assert_eq!(sampler.velocity(), 0.0);
    }

    #[test]
    fn uses_only_the_latest_pair() {
        let mut sampler = VelocitySampler::start(PointerSample::new(0.0, 0.0));
        sampler.push(PointerSample::new(-100.0, 10.0));
        let velocity = sampler.push(PointerSample::new(-110.0, 20.0));
        assert_eq!(velocity, -1.0);
    }

    #[test]
    fn same_timestamp_keeps_previous_velocity() {
        let mut sampler = VelocitySampler::start(PointerSample::new(0.0, 0.0));
        sampler.push(PointerSample::new(10.0, 10.0));
        let velocity = sampler.push(PointerSample::new(50.0, 10.0));
        assert_eq!(velocity, 1.0);
        assert_eq!(sampler.last_sample(), Some(PointerSample::new(50.0, 10.0)));
    }

    #[test]
    fn late_sample_is_dropped() {
        let mut sampler = VelocitySampler::start(PointerSample::new(0.0, 50.0));
        sampler.push(PointerSample::new(20.0, 60.0));
        sampler.push(PointerSample::new(-500.0, 40.0));
        assert_eq!(sampler.velocity(), 2.0);
        assert_eq!(sampler.last_sample(), Some(PointerSample::new(20.0, 60.0)));
    }

    #[test]
    fn reset_clears_everything() {
        let mut sampler = VelocitySampler::start(PointerSample::new(0.0, 0.0));
        sampler.push(PointerSample::new(10.0, 5.0));
        sampler.reset();
        assert_eq!(sampler, VelocitySampler::new());
    }
}
