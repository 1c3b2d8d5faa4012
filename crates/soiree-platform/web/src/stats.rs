//! Count-up statistics.

use serde::Deserialize;
use soiree_foundation::counter::COUNT_DURATION_MS;
use soiree_foundation::StatCounter;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

use crate::{dom, frame};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StatsMarkup {
    pub section: String,
    /// Elements carrying `data-target` (and optionally `data-suffix`,
    /// `data-final`).
    pub value: String,
    pub threshold: f64,
    pub root_margin: String,
    pub duration_ms: f64,
}

impl Default for StatsMarkup {
    fn default() -> Self {
        Self {
            section: ".about-stats".to_string(),
            value: ".stat-value".to_string(),
            threshold: 0.5,
            root_margin: "0px 0px -10% 0px".to_string(),
            duration_ms: COUNT_DURATION_MS,
        }
    }
}

fn counters(elements: Vec<Element>, duration_ms: f64) -> Vec<(Element, StatCounter)> {
    elements
        .into_iter()
        .filter_map(|element| {
            let target = element.get_attribute("data-target").unwrap_or_default();
            let suffix = element.get_attribute("data-suffix");
            let final_label = element.get_attribute("data-final");
            match StatCounter::from_attributes(&target, suffix.as_deref(), final_label.as_deref()) {
                Some(counter) => Some((element, counter.with_duration(duration_ms))),
                None => {
                    log::warn!("stat counter: data-target '{target}' is not a number, skipped");
                    None
                }
            }
        })
        .collect()
}

/// Starts every counter on one shared frame loop.
fn run(mut counters: Vec<(Element, StatCounter)>) {
    let started = frame::run_frames(move |timestamp| {
        let mut running = false;
        for (element, counter) in counters.iter_mut() {
            let frame = counter.tick(timestamp);
            element.set_text_content(Some(&frame.text));
            running |= !frame.finished;
        }
        running
    });
    if let Err(err) = started {
        log::warn!("stat counters: no animation frames: {err:?}");
    }
}

/// Counts the stats up the first time their section is half visible.
pub fn mount_stat_counters(
    window: &Window,
    document: &Document,
    markup: &StatsMarkup,
) -> Result<Option<()>, JsValue> {
    let values = dom::query_all(document, &markup.value)?;
    let Some(section) = document.query_selector(&markup.section)? else {
        log::debug!("stat counters: no {} on this page", markup.section);
        return Ok(None);
    };
    if values.is_empty() || !dom::supports_intersection_observer(window) {
        log::debug!("stat counters: nothing to animate, static values kept");
        return Ok(None);
    }

    let mut pending = Some(counters(values, markup.duration_ms));
    dom::observe_intersections(
        &section,
        markup.threshold,
        &markup.root_margin,
        move |entry, observer| {
            if !entry.is_intersecting() {
                return;
            }
            if let Some(counters) = pending.take() {
                observer.unobserve(&entry.target());
                run(counters);
            }
        },
    )?;
    Ok(Some(()))
}
