//! Gallery lightbox overlay.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Deserialize;
use soiree_foundation::Lightbox;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlImageElement, KeyboardEvent, MouseEvent};

use crate::dom;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LightboxMarkup {
    pub overlay_id: String,
    /// Clickable gallery tiles; each holds an `img`.
    pub items: String,
    pub close_button: String,
    pub open_class: String,
}

impl Default for LightboxMarkup {
    fn default() -> Self {
        Self {
            overlay_id: "gallery-lightbox".to_string(),
            items: ".gallery-item, .gallery-main-item".to_string(),
            close_button: ".lightbox-close".to_string(),
            open_class: "is-open".to_string(),
        }
    }
}

struct LightboxView {
    lightbox: Lightbox,
    overlay: Element,
    image: HtmlImageElement,
    open_class: String,
}

impl LightboxView {
    fn render(&self) -> Result<(), JsValue> {
        self.image.set_src(self.lightbox.src());
        self.image.set_alt(self.lightbox.alt());
        dom::set_class(&self.overlay, &self.open_class, self.lightbox.is_open())
    }
}

pub fn mount_lightbox(
    document: &Document,
    markup: &LightboxMarkup,
) -> Result<Option<()>, JsValue> {
    let Some(overlay) = document.get_element_by_id(&markup.overlay_id) else {
        log::debug!("lightbox: no #{} on this page", markup.overlay_id);
        return Ok(None);
    };
    let Some(image) = overlay.query_selector("img")? else {
        log::debug!("lightbox: overlay has no img, skipped");
        return Ok(None);
    };
    let image: HtmlImageElement = image.dyn_into()?;

    let view = Rc::new(RefCell::new(LightboxView {
        lightbox: Lightbox::new(),
        overlay: overlay.clone(),
        image,
        open_class: markup.open_class.clone(),
    }));

    // Delegated, so tiles added later (lazy gallery pages) work too.
    {
        let view = view.clone();
        let items = markup.items.clone();
        dom::listen(document, "click", move |event: MouseEvent| {
            let Some(item) = dom::closest(event.target(), &items) else {
                return;
            };
            let Some(tile) = item
                .query_selector("img")
                .ok()
                .flatten()
                .and_then(|img| img.dyn_into::<HtmlImageElement>().ok())
            else {
                return;
            };
            let alt = tile.alt();
            let mut view = view.borrow_mut();
            view.lightbox.open(tile.src(), Some(alt.as_str()));
            dom::warn_on_err("lightbox render", view.render());
        })?;
    }

    if let Some(close) = overlay.query_selector(&markup.close_button)? {
        let view = view.clone();
        dom::listen(&close, "click", move |_event: MouseEvent| {
            let mut view = view.borrow_mut();
            if view.lightbox.close() {
                dom::warn_on_err("lightbox render", view.render());
            }
        })?;
    }

    {
        let view = view.clone();
        let backdrop = overlay.clone();
        dom::listen(&overlay, "click", move |event: MouseEvent| {
            let hit_backdrop = dom::is_target(event.target(), &backdrop);
            let mut view = view.borrow_mut();
            if view.lightbox.on_overlay_click(hit_backdrop) {
                dom::warn_on_err("lightbox render", view.render());
            }
        })?;
    }

    {
        let view = view.clone();
        dom::listen(document, "keydown", move |event: KeyboardEvent| {
            let mut view = view.borrow_mut();
            if view.lightbox.on_key(&event.key()) {
                dom::warn_on_err("lightbox render", view.render());
            }
        })?;
    }

    Ok(Some(()))
}
