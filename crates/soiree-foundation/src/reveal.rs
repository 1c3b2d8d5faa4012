//! One-shot reveal-on-scroll groups.
//!
//! A group watches one section and, the first time it intersects, hands back
//! a staggered schedule for its items. The DOM layer turns the schedule into
//! timeouts that add the `is-visible` class.

use serde::Deserialize;
use smallvec::SmallVec;

/// Observer options and stagger for a reveal group.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealSpec {
    /// Visible fraction of the section that triggers the reveal.
    pub threshold: f64,
    /// `IntersectionObserver` root margin, CSS syntax.
    pub root_margin: String,
    /// Delay between consecutive items; zero reveals them together.
    pub stagger_ms: u32,
    /// Stagger used when the browser has no `IntersectionObserver`. `None`
    /// reveals everything at once.
    pub fallback_stagger_ms: Option<u32>,
}

const BOTTOM_INSET: &str = "0px 0px -10% 0px";

impl RevealSpec {
    pub fn faq() -> Self {
        Self {
            threshold: 0.3,
            root_margin: BOTTOM_INSET.to_string(),
            stagger_ms: 150,
            fallback_stagger_ms: None,
        }
    }

    pub fn service_pills() -> Self {
        Self {
            threshold: 0.7,
            root_margin: BOTTOM_INSET.to_string(),
            stagger_ms: 0,
            fallback_stagger_ms: None,
        }
    }

    pub fn catering_features() -> Self {
        Self {
            threshold: 0.8,
            root_margin: BOTTOM_INSET.to_string(),
            stagger_ms: 200,
            fallback_stagger_ms: Some(150),
        }
    }

    pub fn about_image() -> Self {
        Self {
            threshold: 0.2,
            root_margin: "100px 0px 0px 0px".to_string(),
            stagger_ms: 0,
            fallback_stagger_ms: None,
        }
    }
}

impl Default for RevealSpec {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            root_margin: "0px".to_string(),
            stagger_ms: 0,
            fallback_stagger_ms: None,
        }
    }
}

/// Reveal item `index` after `delay_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStep {
    pub index: usize,
    pub delay_ms: u32,
}

pub type RevealSchedule = SmallVec<[RevealStep; 8]>;

fn staggered(item_count: usize, stagger_ms: u32) -> RevealSchedule {
    (0..item_count)
        .map(|index| RevealStep {
            index,
            delay_ms: stagger_ms.saturating_mul(index as u32),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealGroup {
    spec: RevealSpec,
    item_count: usize,
    revealed: bool,
}

impl RevealGroup {
    pub fn new(spec: RevealSpec, item_count: usize) -> Self {
        Self {
            spec,
            item_count,
            revealed: false,
        }
    }

    pub fn spec(&self) -> &RevealSpec {
        &self.spec
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feeds one observer entry. Returns the schedule on the first
    /// intersection; the caller should unobserve at that point.
    pub fn on_intersection(&mut self, is_intersecting: bool) -> Option<RevealSchedule> {
        if !is_intersecting || self.revealed {
            return None;
        }
        self.revealed = true;
        Some(staggered(self.item_count, self.spec.stagger_ms))
    }

    /// Schedule for browsers without `IntersectionObserver`.
    pub fn reveal_without_observer(&mut self) -> Option<RevealSchedule> {
        if self.revealed {
            return None;
        }
        self.revealed = true;
        Some(staggered(
            self.item_count,
            self.spec.fallback_stagger_ms.unwrap_or(0),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delays(schedule: &RevealSchedule) -> Vec<u32> {
        schedule.iter().map(|step| step.delay_ms).collect()
    }

    #[test]
    fn faq_items_stagger_by_150ms() {
        let mut group = RevealGroup::new(RevealSpec::faq(), 4);
        let schedule = group.on_intersection(true).unwrap();
        assert_eq!(delays(&schedule), vec![0, 150, 300, 450]);
    }

    #[test]
    fn reveal_happens_once() {
        let mut group = RevealGroup::new(RevealSpec::service_pills(), 3);
        assert!(group.on_intersection(false).is_none());
        assert!(group.on_intersection(true).is_some());
        assert!(group.on_intersection(true).is_none());
        assert!(group.reveal_without_observer().is_none());
    }

    #[test]
    fn pills_appear_together() {
        let mut group = RevealGroup::new(RevealSpec::service_pills(), 5);
        let schedule = group.on_intersection(true).unwrap();
        assert!(schedule.iter().all(|step| step.delay_ms == 0));
        assert_eq!(schedule.len(), 5);
    }

    #[test]
    fn catering_fallback_uses_its_own_stagger() {
        let mut observed = RevealGroup::new(RevealSpec::catering_features(), 3);
        assert_eq!(delays(&observed.on_intersection(true).unwrap()), vec![0, 200, 400]);

        let mut fallback = RevealGroup::new(RevealSpec::catering_features(), 3);
        assert_eq!(
            delays(&fallback.reveal_without_observer().unwrap()),
            vec![0, 150, 300]
        );
    }

    #[test]
    fn faq_fallback_is_immediate() {
        let mut group = RevealGroup::new(RevealSpec::faq(), 3);
        assert_eq!(delays(&group.reveal_without_observer().unwrap()), vec![0, 0, 0]);
    }

    #[test]
    fn spec_overrides_from_json() {
        let spec: RevealSpec =
            serde_json::from_str(r#"{ "threshold": 0.5, "stagger_ms": 90 }"#).unwrap();
        assert_eq!(spec.threshold, 0.5);
        assert_eq!(spec.stagger_ms, 90);
        assert_eq!(spec.root_margin, "0px");
    }
}
