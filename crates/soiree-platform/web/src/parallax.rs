//! Scroll-linked text rows.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Deserialize;
use soiree_foundation::{FrameThrottle, ParallaxRows};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, Window};

use crate::{dom, frame};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParallaxMarkup {
    pub section: String,
    pub first_row: String,
    pub second_row: String,
    /// Start updating a little before the section enters the viewport.
    pub root_margin: String,
    pub rows: ParallaxRows,
}

impl Default for ParallaxMarkup {
    fn default() -> Self {
        Self {
            section: ".fancy-text-section".to_string(),
            first_row: ".fancy-text-row--first".to_string(),
            second_row: ".fancy-text-row--second".to_string(),
            root_margin: "100px 0px 100px 0px".to_string(),
            rows: ParallaxRows::default(),
        }
    }
}

struct ParallaxView {
    section: Element,
    first: HtmlElement,
    second: HtmlElement,
    rows: ParallaxRows,
    throttle: FrameThrottle,
    viewport_height: f32,
}

impl ParallaxView {
    fn update(&self) -> Result<(), JsValue> {
        if !self.throttle.in_viewport() {
            return Ok(());
        }
        let rect = self.section.get_bounding_client_rect();
        let progress =
            ParallaxRows::progress(self.viewport_height, rect.top() as f32, rect.height() as f32);
        let (first, second) = self.rows.offsets(progress);
        dom::translate_x(&self.first, first)?;
        dom::translate_x(&self.second, second)
    }
}

fn html(document: &Document, selector: &str) -> Result<Option<HtmlElement>, JsValue> {
    Ok(document
        .query_selector(selector)?
        .and_then(|element| element.dyn_into::<HtmlElement>().ok()))
}

pub fn mount_parallax(
    window: &Window,
    document: &Document,
    markup: &ParallaxMarkup,
) -> Result<Option<()>, JsValue> {
    let (Some(section), Some(first), Some(second)) = (
        document.query_selector(&markup.section)?,
        html(document, &markup.first_row)?,
        html(document, &markup.second_row)?,
    ) else {
        log::debug!("parallax: rows not on this page");
        return Ok(None);
    };

    let observed = dom::supports_intersection_observer(window);
    let view = Rc::new(RefCell::new(ParallaxView {
        section: section.clone(),
        first,
        second,
        rows: markup.rows,
        // Without an observer the rows are always live.
        throttle: FrameThrottle::new(!observed),
        viewport_height: dom::viewport_height(window)?,
    }));

    {
        let view = view.clone();
        let resized = window.clone();
        dom::listen_with_passive(window, "resize", true, move |_event: Event| {
            match dom::viewport_height(&resized) {
                Ok(height) => view.borrow_mut().viewport_height = height,
                Err(err) => log::warn!("parallax: viewport height unavailable: {err:?}"),
            }
        })?;
    }

    if observed {
        let view = view.clone();
        dom::observe_intersections(&section, 0.0, &markup.root_margin, move |entry, _| {
            let mut view = view.borrow_mut();
            view.throttle.set_in_viewport(entry.is_intersecting());
            dom::warn_on_err("parallax update", view.update());
        })?;
    }

    {
        let view = view.clone();
        dom::listen_with_passive(window, "scroll", true, move |_event: Event| {
            if !view.borrow_mut().throttle.request() {
                return;
            }
            let frame_view = view.clone();
            let requested = frame::request_frame_once(move |_timestamp: f64| {
                let mut view = frame_view.borrow_mut();
                if view.throttle.frame() {
                    dom::warn_on_err("parallax update", view.update());
                }
            });
            if let Err(err) = requested {
                log::warn!("parallax: requestAnimationFrame failed: {err:?}");
                view.borrow_mut().throttle.frame();
            }
        })?;
    }

    view.borrow().update()?;
    Ok(Some(()))
}
