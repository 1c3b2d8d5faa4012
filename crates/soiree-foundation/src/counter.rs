//! Count-up animation for the "about" statistics.

use soiree_animation::TweenSpec;

pub const COUNT_DURATION_MS: f64 = 3_000.0;

/// Final text for a counter whose markup carries no display attributes.
///
/// The site's stats predate `data-suffix`/`data-final`: 1000 stands for a
/// million guests, and two totals are shown as open-ended.
pub fn legacy_label(target: u32) -> String {
    match target {
        1000 => "1M+".to_string(),
        897 | 40 => format!("{target}+"),
        _ => target.to_string(),
    }
}

/// One frame of a counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    pub finished: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatCounter {
    target: u32,
    final_label: String,
    spec: TweenSpec,
    started_at: Option<f64>,
}

impl StatCounter {
    pub fn new(target: u32, final_label: impl Into<String>) -> Self {
        Self {
            target,
            final_label: final_label.into(),
            spec: TweenSpec::linear(COUNT_DURATION_MS),
            started_at: None,
        }
    }

    /// Builds a counter from the element's `data-target`, `data-suffix` and
    /// `data-final` attributes. Returns `None` when the target is not a
    /// number.
    pub fn from_attributes(
        target: &str,
        suffix: Option<&str>,
        final_label: Option<&str>,
    ) -> Option<Self> {
        let value: u32 = target.trim().parse().ok()?;
        let label = match (final_label, suffix) {
            (Some(label), _) => label.to_string(),
            (None, Some(suffix)) => format!("{value}{suffix}"),
            (None, None) => legacy_label(value),
        };
        Some(Self::new(value, label))
    }

    pub fn with_duration(mut self, duration_ms: f64) -> Self {
        self.spec = TweenSpec::linear(duration_ms);
        self
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn final_label(&self) -> &str {
        &self.final_label
    }

    /// Text to show at `now_ms`; the clock starts on the first call.
    pub fn tick(&mut self, now_ms: f64) -> CounterFrame {
        let started = *self.started_at.get_or_insert(now_ms);
        let progress = self.spec.linear_progress(now_ms - started);
        if progress >= 1.0 {
            return CounterFrame {
                text: self.final_label.clone(),
                finished: true,
            };
        }
        let current = (self.target as f64 * progress as f64).floor() as u32;
        CounterFrame {
            text: current.to_string(),
            finished: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_labels() {
        assert_eq!(legacy_label(1000), "1M+");
        assert_eq!(legacy_label(897), "897+");
        assert_eq!(legacy_label(40), "40+");
        assert_eq!(legacy_label(12), "12");
    }

    #[test]
    fn attributes_take_precedence_over_legacy_rules() {
        let with_final = StatCounter::from_attributes("1000", Some("+"), Some("1 mil.")).unwrap();
        assert_eq!(with_final.final_label(), "1 mil.");

        let with_suffix = StatCounter::from_attributes("250", Some("%"), None).unwrap();
        assert_eq!(with_suffix.final_label(), "250%");

        let legacy = StatCounter::from_attributes(" 897 ", None, None).unwrap();
        assert_eq!(legacy.final_label(), "897+");
    }

    #[test]
    fn non_numeric_target_is_rejected() {
        assert!(StatCounter::from_attributes("lots", None, None).is_none());
        assert!(StatCounter::from_attributes("", None, None).is_none());
    }

    #[test]
    fn counts_up_then_shows_label() {
        let mut counter = StatCounter::new(1000, "1M+");
        assert_eq!(counter.tick(500.0).text, "0");
        assert_eq!(counter.tick(2_000.0).text, "500");

        let done = counter.tick(3_500.0);
        assert!(done.finished);
        assert_eq!(done.text, "1M+");
    }

    #[test]
    fn values_never_decrease() {
        let mut counter = StatCounter::new(897, "897+").with_duration(1_000.0);
        let mut previous = 0;
        let mut time = 0.0;
        loop {
            let frame = counter.tick(time);
            if frame.finished {
                break;
            }
            let value: u32 = frame.text.parse().unwrap();
            assert!(value >= previous && value < 897);
            previous = value;
            time += 16.0;
        }
    }
}
