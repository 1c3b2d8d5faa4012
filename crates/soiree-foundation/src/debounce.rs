//! Trailing-edge debouncing on explicit timestamps.

/// Fires once after `delay_ms` has passed since the last trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Debouncer {
    delay_ms: f64,
    deadline: Option<f64>,
}

impl Debouncer {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms,
            deadline: None,
        }
    }

    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }

    /// Re-arms the debouncer; any earlier pending deadline is replaced.
    pub fn trigger(&mut self, now_ms: f64) {
        self.deadline = Some(now_ms + self.delay_ms);
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true exactly once when the quiet period has elapsed.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_after_quiet_period() {
        let mut debouncer = Debouncer::new(250.0);
        debouncer.trigger(0.0);
        assert!(!debouncer.poll(249.0));
        assert!(debouncer.poll(250.0));
        assert!(!debouncer.poll(600.0));
    }

    #[test]
    fn retrigger_pushes_deadline_out() {
        let mut debouncer = Debouncer::new(250.0);
        debouncer.trigger(0.0);
        debouncer.trigger(200.0);
        assert!(!debouncer.poll(300.0));
        assert!(debouncer.poll(450.0));
    }

    #[test]
    fn idle_debouncer_never_fires() {
        let mut debouncer = Debouncer::new(10.0);
        assert!(!debouncer.poll(1_000.0));
        debouncer.trigger(0.0);
        debouncer.cancel();
        assert!(!debouncer.is_pending());
        assert!(!debouncer.poll(1_000.0));
    }
}
