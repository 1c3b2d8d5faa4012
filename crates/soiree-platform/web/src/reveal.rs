//! Reveal-on-scroll groups and in-page scroll links.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Deserialize;
use soiree_foundation::{RevealGroup, RevealSchedule, RevealSpec};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, Window};

use crate::{dom, frame};

/// A section to watch and the items it reveals.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealTarget {
    pub section: String,
    pub items: String,
    pub visible_class: String,
    #[serde(flatten)]
    pub spec: RevealSpec,
}

impl RevealTarget {
    pub fn new(section: &str, items: &str, spec: RevealSpec) -> Self {
        Self {
            section: section.to_string(),
            items: items.to_string(),
            visible_class: "is-visible".to_string(),
            spec,
        }
    }

    pub fn faq() -> Self {
        Self::new(".faq", ".faq-item", RevealSpec::faq())
    }

    pub fn service_pills() -> Self {
        Self::new(".services", ".service-pill", RevealSpec::service_pills())
    }

    pub fn catering_features() -> Self {
        Self::new(
            ".catering-highlight",
            ".catering-feature",
            RevealSpec::catering_features(),
        )
    }

    pub fn about_image() -> Self {
        Self::new(".about", ".about-placeholder", RevealSpec::about_image())
    }

    /// The groups the site's pages use.
    pub fn site_defaults() -> Vec<Self> {
        vec![
            Self::faq(),
            Self::service_pills(),
            Self::catering_features(),
            Self::about_image(),
        ]
    }
}

impl Default for RevealTarget {
    fn default() -> Self {
        Self::new("", "", RevealSpec::default())
    }
}

fn play(items: &[Element], schedule: RevealSchedule, class: &str) {
    for step in schedule {
        let Some(item) = items.get(step.index).cloned() else {
            continue;
        };
        if step.delay_ms == 0 {
            dom::warn_on_err("reveal", dom::set_class(&item, class, true));
            continue;
        }
        let class = class.to_string();
        let scheduled = frame::set_timeout(
            move || dom::warn_on_err("reveal", dom::set_class(&item, &class, true)),
            step.delay_ms,
        );
        if let Err(err) = scheduled {
            log::warn!("reveal: timer failed: {err:?}");
        }
    }
}

/// Reveals `target.items` once `target.section` scrolls into view. Without
/// observer support (or without the section) items are revealed right away,
/// using the fallback stagger.
pub fn mount_reveal(
    window: &Window,
    document: &Document,
    target: &RevealTarget,
) -> Result<Option<()>, JsValue> {
    let items = dom::query_all(document, &target.items)?;
    if items.is_empty() {
        log::debug!("reveal: no {} on this page", target.items);
        return Ok(None);
    }

    let mut group = RevealGroup::new(target.spec.clone(), items.len());
    let section = document
        .query_selector(&target.section)?
        .filter(|_| dom::supports_intersection_observer(window));

    let Some(section) = section else {
        if let Some(schedule) = group.reveal_without_observer() {
            play(&items, schedule, &target.visible_class);
        }
        return Ok(Some(()));
    };

    let group = Rc::new(RefCell::new(group));
    let class = target.visible_class.clone();
    dom::observe_intersections(
        &section,
        target.spec.threshold,
        &target.spec.root_margin,
        move |entry, observer| {
            let schedule = group.borrow_mut().on_intersection(entry.is_intersecting());
            if let Some(schedule) = schedule {
                observer.unobserve(&entry.target());
                play(&items, schedule, &class);
            }
        },
    )?;
    Ok(Some(()))
}

/// Cards that scroll a section into view when clicked.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScrollLinkMarkup {
    pub triggers: String,
    pub target_id: String,
}

impl Default for ScrollLinkMarkup {
    fn default() -> Self {
        Self {
            triggers: ".service-main-card, .service-card".to_string(),
            target_id: "kontakt".to_string(),
        }
    }
}

pub fn mount_scroll_links(
    document: &Document,
    markup: &ScrollLinkMarkup,
) -> Result<Option<()>, JsValue> {
    let triggers = dom::query_all(document, &markup.triggers)?;
    if triggers.is_empty() {
        return Ok(None);
    }
    for trigger in triggers {
        let document = document.clone();
        let target_id = markup.target_id.clone();
        dom::listen(&trigger, "click", move |_event: MouseEvent| {
            let Some(section) = document.get_element_by_id(&target_id) else {
                log::debug!("scroll link: no #{target_id} on this page");
                return;
            };
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        })?;
    }
    Ok(Some(()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_target_reads_observer_options_inline() {
        let target: RevealTarget = serde_json::from_str(
            r#"{ "section": ".menu", "items": ".dish", "root_margin": "0px 0px -20% 0px" }"#,
        )
        .unwrap();

        assert_eq!(target.section, ".menu");
        assert_eq!(target.visible_class, "is-visible");
        assert_eq!(target.spec.root_margin, "0px 0px -20% 0px");
        assert_eq!(target.spec.stagger_ms, RevealSpec::default().stagger_ms);
    }

    #[test]
    fn site_defaults_cover_every_revealed_section() {
        let sections: Vec<_> = RevealTarget::site_defaults()
            .into_iter()
            .map(|target| target.section)
            .collect();
        assert_eq!(sections, [".faq", ".services", ".catering-highlight", ".about"]);
    }
}
