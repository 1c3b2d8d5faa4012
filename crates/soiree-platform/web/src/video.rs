//! Hero video that only plays while on screen.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Deserialize;
use soiree_foundation::playback::VISIBLE_THRESHOLD;
use soiree_foundation::{PlaybackCommand, PlaybackGate};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlVideoElement, Window};

use crate::dom;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct VideoMarkup {
    pub video_id: String,
    pub section: String,
    pub threshold: f64,
}

impl Default for VideoMarkup {
    fn default() -> Self {
        Self {
            video_id: "hero-video".to_string(),
            section: ".hero".to_string(),
            threshold: VISIBLE_THRESHOLD,
        }
    }
}

fn apply(video: &HtmlVideoElement, gate: &Rc<RefCell<PlaybackGate>>, command: PlaybackCommand) {
    match command {
        PlaybackCommand::Play => match video.play() {
            Ok(promise) => {
                let gate = gate.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(err) = JsFuture::from(promise).await {
                        // Autoplay policies reject silently-started media.
                        log::info!("video play prevented: {err:?}");
                        gate.borrow_mut().reset();
                    }
                });
            }
            Err(err) => {
                log::info!("video play prevented: {err:?}");
                gate.borrow_mut().reset();
            }
        },
        PlaybackCommand::Pause => {
            if let Err(err) = video.pause() {
                log::warn!("video pause failed: {err:?}");
            }
        }
    }
}

pub fn mount_hero_video(
    window: &Window,
    document: &Document,
    markup: &VideoMarkup,
) -> Result<Option<()>, JsValue> {
    let (Some(video), Some(section)) = (
        document.get_element_by_id(&markup.video_id),
        document.query_selector(&markup.section)?,
    ) else {
        log::debug!("hero video: not on this page");
        return Ok(None);
    };
    if !dom::supports_intersection_observer(window) {
        log::debug!("hero video: no IntersectionObserver, autoplay left to the browser");
        return Ok(None);
    }
    let video: HtmlVideoElement = video.dyn_into()?;

    let gate = Rc::new(RefCell::new(PlaybackGate::new()));
    let threshold = markup.threshold;
    dom::observe_intersections(&section, threshold, "0px", move |entry, _| {
        // Reported ratios can land just under the threshold that fired.
        let visible = entry.is_intersecting() && entry.intersection_ratio() + 1e-3 >= threshold;
        let command = gate.borrow_mut().on_visibility(visible);
        if let Some(command) = command {
            apply(&video, &gate, command);
        }
    })?;
    Ok(Some(()))
}
