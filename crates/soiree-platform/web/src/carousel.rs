//! DOM glue for [`Carousel`].
//!
//! The track is moved with an inline `translateX`; its CSS transition is
//! switched off because the settle animation runs frame by frame from the
//! state machine. The dragging class stays available for styling (cursor,
//! disabled text selection).

use std::cell::RefCell;
use std::rc::Rc;

use serde::Deserialize;
use soiree_foundation::{CardGeometry, Carousel, CarouselConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent, TouchEvent};

use crate::{dom, frame, WebPlatform};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CarouselMarkup {
    /// Clipping element whose width is the visible viewport.
    pub wrapper: String,
    /// Direct parent of the cards, inside the wrapper.
    pub track: String,
    /// Dots container, a sibling of the wrapper.
    pub dots: String,
    pub dot_class: String,
    pub active_class: String,
    pub dragging_class: String,
}

impl Default for CarouselMarkup {
    fn default() -> Self {
        Self {
            wrapper: ".carousel-wrapper".to_string(),
            track: ".carousel-track".to_string(),
            dots: ".carousel-dots".to_string(),
            dot_class: "carousel-dot".to_string(),
            active_class: "is-active".to_string(),
            dragging_class: "is-dragging".to_string(),
        }
    }
}

type SharedView = Rc<RefCell<CarouselView>>;

struct CarouselView {
    carousel: Carousel,
    platform: WebPlatform,
    document: Document,
    wrapper: Element,
    track: HtmlElement,
    dots: Element,
    markup: CarouselMarkup,
    rendered_dots: usize,
    animating: bool,
    resize_timer: Option<i32>,
}

/// Reads the live layout. Card widths change across breakpoints, so this
/// runs before every gesture decision rather than once.
fn measure(wrapper: &Element, track: &HtmlElement) -> Result<CardGeometry, JsValue> {
    let cards = dom::children(track);
    let card_width = cards
        .first()
        .map(|card| card.get_bounding_client_rect().width() as f32)
        .unwrap_or(0.0);
    let gap = match dom::window()?.get_computed_style(track)? {
        Some(style) => dom::parse_px(&style.get_property_value("column-gap")?),
        None => 0.0,
    };
    let viewport = wrapper.get_bounding_client_rect().width() as f32;
    Ok(CardGeometry::measure(viewport, card_width, gap, cards.len()))
}

impl CarouselView {
    fn remeasure(&mut self) {
        match measure(&self.wrapper, &self.track) {
            Ok(geometry) => self.carousel.set_geometry(geometry),
            Err(err) => log::warn!("carousel: measuring failed: {err:?}"),
        }
    }

    fn render(&self) -> Result<(), JsValue> {
        let offset = self.platform.snap(self.carousel.offset());
        dom::translate_x(&self.track, offset)?;
        dom::set_class(
            &self.track,
            &self.markup.dragging_class,
            self.carousel.is_dragging(),
        )?;
        self.sync_dots()
    }

    fn sync_dots(&self) -> Result<(), JsValue> {
        let current = self.carousel.index();
        for (index, dot) in dom::children(&self.dots).iter().enumerate() {
            let active = index == current;
            dom::set_class(dot, &self.markup.active_class, active)?;
            if active {
                dot.set_attribute("aria-current", "true")?;
            } else {
                dot.remove_attribute("aria-current")?;
            }
        }
        Ok(())
    }

    /// One dot per settled position.
    fn rebuild_dots(&mut self) -> Result<(), JsValue> {
        self.dots.set_inner_html("");
        let count = self.carousel.dot_count();
        for index in 0..count {
            let dot = self.document.create_element("button")?;
            dot.set_attribute("type", "button")?;
            dot.set_class_name(&self.markup.dot_class);
            dot.set_attribute("data-index", &index.to_string())?;
            dot.set_attribute("aria-label", &format!("Slide {}", index + 1))?;
            self.dots.append_child(&dot)?;
        }
        self.rendered_dots = count;
        Ok(())
    }
}

/// Mounts every carousel on the page. Returns how many were mounted.
pub fn mount_carousels(
    document: &Document,
    markup: &CarouselMarkup,
    config: CarouselConfig,
) -> Result<usize, JsValue> {
    let mut mounted = 0;
    for wrapper in dom::query_all(document, &markup.wrapper)? {
        if mount_carousel(document, wrapper, markup, config)?.is_some() {
            mounted += 1;
        }
    }
    Ok(mounted)
}

fn mount_carousel(
    document: &Document,
    wrapper: Element,
    markup: &CarouselMarkup,
    config: CarouselConfig,
) -> Result<Option<()>, JsValue> {
    let Some(track) = wrapper.query_selector(&markup.track)? else {
        log::debug!("carousel: no {} inside wrapper, skipped", markup.track);
        return Ok(None);
    };
    let track: HtmlElement = track.dyn_into()?;
    let dots = match wrapper.parent_element() {
        Some(parent) => parent.query_selector(&markup.dots)?,
        None => None,
    };
    let Some(dots) = dots else {
        log::debug!("carousel: no {} next to wrapper, skipped", markup.dots);
        return Ok(None);
    };

    let geometry = measure(&wrapper, &track)?;
    if geometry.is_empty() {
        log::debug!("carousel: track has no measurable cards, skipped");
        return Ok(None);
    }

    let window = dom::window()?;
    track.style().set_property("transition", "none")?;

    let view = Rc::new(RefCell::new(CarouselView {
        carousel: Carousel::new(geometry, config),
        platform: WebPlatform::from_window(&window),
        document: document.clone(),
        wrapper: wrapper.clone(),
        track: track.clone(),
        dots: dots.clone(),
        markup: markup.clone(),
        rendered_dots: 0,
        animating: false,
        resize_timer: None,
    }));
    {
        let mut view = view.borrow_mut();
        view.rebuild_dots()?;
        view.render()?;
    }

    // Mouse: press on the wrapper, follow and release on the window so a drag
    // that leaves the carousel still ends cleanly.
    {
        let view = view.clone();
        dom::listen(&wrapper, "mousedown", move |event: MouseEvent| {
            if event.button() != 0 {
                return;
            }
            event.prevent_default();
            let x = view.borrow().platform.pointer_x(f64::from(event.client_x()));
            press(&view, x, event.time_stamp());
        })?;
    }
    {
        let view = view.clone();
        dom::listen(&window, "mousemove", move |event: MouseEvent| {
            let x = view.borrow().platform.pointer_x(f64::from(event.client_x()));
            drag(&view, x, event.time_stamp());
        })?;
    }
    {
        let view = view.clone();
        dom::listen(&window, "mouseup", move |event: MouseEvent| {
            release(&view, event.time_stamp());
        })?;
    }

    // Touch: the move handler must be able to cancel page scrolling.
    {
        let view = view.clone();
        dom::listen_with_passive(&wrapper, "touchstart", true, move |event: TouchEvent| {
            let Some(x) = view.borrow().platform.touch_x(&event) else {
                return;
            };
            press(&view, x, event.time_stamp());
        })?;
    }
    {
        let view = view.clone();
        dom::listen_with_passive(&wrapper, "touchmove", false, move |event: TouchEvent| {
            if !view.borrow().carousel.is_dragging() {
                return;
            }
            event.prevent_default();
            let Some(x) = view.borrow().platform.touch_x(&event) else {
                return;
            };
            drag(&view, x, event.time_stamp());
        })?;
    }
    {
        let view = view.clone();
        dom::listen(&wrapper, "touchend", move |event: TouchEvent| {
            release(&view, event.time_stamp());
        })?;
    }
    {
        let view = view.clone();
        dom::listen(&wrapper, "touchcancel", move |event: TouchEvent| {
            {
                let mut view = view.borrow_mut();
                if view.carousel.pointer_cancel(event.time_stamp()).is_none() {
                    return;
                }
                dom::warn_on_err("carousel render", view.render());
            }
            start_settle(&view);
        })?;
    }

    // Dots are rebuilt on relayout, so clicks are delegated to the container.
    {
        let view = view.clone();
        let dot_selector = format!(".{}", markup.dot_class);
        dom::listen(&dots, "click", move |event: MouseEvent| {
            let Some(index) = dom::closest(event.target(), &dot_selector)
                .and_then(|dot| dot.get_attribute("data-index"))
                .and_then(|index| index.parse::<usize>().ok())
            else {
                return;
            };
            {
                let mut view = view.borrow_mut();
                view.remeasure();
                view.carousel.select(index, event.time_stamp());
                dom::warn_on_err("carousel render", view.render());
            }
            start_settle(&view);
        })?;
    }

    {
        let view = view.clone();
        dom::listen(&window, "resize", move |event: Event| {
            let due = {
                let mut view = view.borrow_mut();
                view.carousel.on_resize(event.time_stamp());
                if let Some(handle) = view.resize_timer.take() {
                    frame::clear_timeout(handle);
                }
                event.time_stamp() + view.carousel.resize_debounce_ms()
            };
            let delay = view.borrow().carousel.resize_debounce_ms();
            let pending = view.clone();
            match frame::set_timeout(move || relayout(&pending, due), delay.ceil() as u32) {
                Ok(handle) => view.borrow_mut().resize_timer = Some(handle),
                Err(err) => log::warn!("carousel: resize timer failed: {err:?}"),
            }
        })?;
    }

    log::debug!(
        "carousel mounted: {} cards, {} slides",
        geometry.card_count(),
        geometry.total_slides()
    );
    Ok(Some(()))
}

fn press(view: &SharedView, x: f32, time_ms: f64) {
    let mut view = view.borrow_mut();
    view.remeasure();
    view.carousel.pointer_down(x, time_ms);
    dom::warn_on_err("carousel render", view.render());
}

fn drag(view: &SharedView, x: f32, time_ms: f64) {
    let mut view = view.borrow_mut();
    if view.carousel.pointer_move(x, time_ms).is_some() {
        dom::warn_on_err("carousel render", view.render());
    }
}

fn release(view: &SharedView, time_ms: f64) {
    {
        let mut view = view.borrow_mut();
        if !view.carousel.is_dragging() {
            return;
        }
        view.remeasure();
        view.carousel.pointer_up(time_ms);
        dom::warn_on_err("carousel render", view.render());
    }
    start_settle(view);
}

/// Runs the settle tween on animation frames. A drag that interrupts the
/// settle stops the loop; the next release starts a new one.
fn start_settle(view: &SharedView) {
    {
        let mut state = view.borrow_mut();
        if state.animating || !state.carousel.is_settling() {
            return;
        }
        state.animating = true;
    }

    let frames = view.clone();
    let started = frame::run_frames(move |timestamp| {
        let mut view = frames.borrow_mut();
        let running = view.carousel.tick(timestamp).is_some() && view.carousel.is_settling();
        dom::warn_on_err("carousel render", view.render());
        if !running {
            view.animating = false;
        }
        running
    });

    if let Err(err) = started {
        log::warn!("carousel: no animation frames, snapping: {err:?}");
        let mut view = view.borrow_mut();
        view.animating = false;
        view.carousel.finish_settle();
        dom::warn_on_err("carousel render", view.render());
    }
}

fn relayout(view: &SharedView, due_ms: f64) {
    let mut view = view.borrow_mut();
    view.resize_timer = None;
    if !view.carousel.poll_relayout(due_ms) {
        return;
    }
    let geometry = match measure(&view.wrapper, &view.track) {
        Ok(geometry) => geometry,
        Err(err) => {
            log::warn!("carousel: measuring after resize failed: {err:?}");
            return;
        }
    };
    view.carousel.relayout(geometry);
    if view.carousel.dot_count() != view.rendered_dots {
        dom::warn_on_err("carousel dots", view.rebuild_dots());
    }
    dom::warn_on_err("carousel render", view.render());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_overrides_keep_the_other_selectors() {
        let markup: CarouselMarkup =
            serde_json::from_str(r#"{ "track": ".menu-track", "active_class": "current" }"#)
                .unwrap();

        assert_eq!(markup.track, ".menu-track");
        assert_eq!(markup.active_class, "current");
        assert_eq!(markup.wrapper, ".carousel-wrapper");
        assert_eq!(markup.dragging_class, "is-dragging");
    }
}
