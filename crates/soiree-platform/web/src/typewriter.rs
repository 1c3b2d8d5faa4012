//! Typewriter headlines.

use serde::Deserialize;
use soiree_foundation::{Typewriter, TypewriterConfig};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::{dom, frame};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypewriterMarkup {
    pub target: String,
    /// Attribute holding the phrases, joined by `separator`.
    pub phrases_attribute: String,
    pub separator: String,
    pub config: TypewriterConfig,
}

impl Default for TypewriterMarkup {
    fn default() -> Self {
        Self {
            target: "[data-typewriter]".to_string(),
            phrases_attribute: "data-phrases".to_string(),
            separator: "|".to_string(),
            config: TypewriterConfig::default(),
        }
    }
}

fn phrases(element: &Element, markup: &TypewriterMarkup) -> Vec<String> {
    let source = element
        .get_attribute(&markup.phrases_attribute)
        .or_else(|| element.text_content())
        .unwrap_or_default();
    source
        .split(markup.separator.as_str())
        .map(str::trim)
        .filter(|phrase| !phrase.is_empty())
        .map(str::to_string)
        .collect()
}

/// Starts a typewriter on every matching element. Returns how many started.
pub fn mount_typewriters(document: &Document, markup: &TypewriterMarkup) -> Result<usize, JsValue> {
    let mut started = 0;
    for element in dom::query_all(document, &markup.target)? {
        let phrases = phrases(&element, markup);
        if phrases.is_empty() {
            log::debug!("typewriter: element without phrases, skipped");
            continue;
        }
        // Screen readers get the full text instead of the animation.
        element.set_attribute("aria-label", &phrases.join(", "))?;
        element.set_text_content(Some(""));

        let mut typewriter = Typewriter::new(&phrases, markup.config);
        frame::run_frames(move |timestamp| {
            if let Some(text) = typewriter.tick(timestamp) {
                element.set_text_content(Some(&text));
            }
            !typewriter.is_done()
        })?;
        started += 1;
    }
    Ok(started)
}
