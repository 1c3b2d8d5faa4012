//! Sticky side panel.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Deserialize;
use soiree_foundation::{FrameThrottle, StickyConfig, StickyLayout, StickyPosition};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, Window};

use crate::{dom, frame};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StickyMarkup {
    pub container: String,
    pub panel: String,
    pub stuck_class: String,
    pub pinned_class: String,
    pub config: StickyConfig,
}

impl Default for StickyMarkup {
    fn default() -> Self {
        Self {
            container: "[data-sticky-container]".to_string(),
            panel: "[data-sticky-panel]".to_string(),
            stuck_class: "is-stuck".to_string(),
            pinned_class: "is-pinned".to_string(),
            config: StickyConfig::default(),
        }
    }
}

struct StickyView {
    window: Window,
    container: Element,
    panel: HtmlElement,
    markup: StickyMarkup,
    throttle: FrameThrottle,
    last: Option<StickyPosition>,
}

impl StickyView {
    fn layout(&self) -> Result<StickyLayout, JsValue> {
        let scroll_y = self.window.scroll_y()? as f32;
        let rect = self.container.get_bounding_client_rect();
        Ok(StickyLayout {
            scroll_y,
            viewport_width: dom::viewport_width(&self.window)?,
            container_top: rect.top() as f32 + scroll_y,
            container_height: rect.height() as f32,
            panel_height: self.panel.offset_height() as f32,
        })
    }

    fn update(&mut self) -> Result<(), JsValue> {
        let position = self.markup.config.position(self.layout()?);
        if self.last == Some(position) {
            return Ok(());
        }
        self.last = Some(position);

        let style = self.panel.style();
        let (stuck, pinned) = match position {
            StickyPosition::Static => {
                style.remove_property("top")?;
                (false, false)
            }
            StickyPosition::Stuck { top } => {
                style.set_property("top", &format!("{top}px"))?;
                (true, false)
            }
            StickyPosition::Pinned { offset } => {
                style.set_property("top", &format!("{offset}px"))?;
                (false, true)
            }
        };
        dom::set_class(&self.panel, &self.markup.stuck_class, stuck)?;
        dom::set_class(&self.panel, &self.markup.pinned_class, pinned)
    }
}

fn schedule(view: &Rc<RefCell<StickyView>>) {
    if !view.borrow_mut().throttle.request() {
        return;
    }
    let frame_view = view.clone();
    let requested = frame::request_frame_once(move |_timestamp: f64| {
        let mut view = frame_view.borrow_mut();
        if view.throttle.frame() {
            dom::warn_on_err("sticky panel update", view.update());
        }
    });
    if let Err(err) = requested {
        log::warn!("sticky panel: requestAnimationFrame failed: {err:?}");
        view.borrow_mut().throttle.frame();
    }
}

pub fn mount_sticky_panel(
    window: &Window,
    document: &Document,
    markup: &StickyMarkup,
) -> Result<Option<()>, JsValue> {
    let Some(container) = document.query_selector(&markup.container)? else {
        log::debug!("sticky panel: no {} on this page", markup.container);
        return Ok(None);
    };
    let Some(panel) = container.query_selector(&markup.panel)? else {
        log::debug!("sticky panel: container without {}", markup.panel);
        return Ok(None);
    };
    let panel: HtmlElement = panel.dyn_into()?;

    let view = Rc::new(RefCell::new(StickyView {
        window: window.clone(),
        container,
        panel,
        markup: markup.clone(),
        throttle: FrameThrottle::new(true),
        last: None,
    }));
    view.borrow_mut().update()?;

    for event in ["scroll", "resize"] {
        let view = view.clone();
        dom::listen_with_passive(window, event, true, move |_event: Event| schedule(&view))?;
    }
    Ok(Some(()))
}
