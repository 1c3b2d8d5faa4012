//! Small DOM helpers shared by the behaviour mounts.

use js_sys::Reflect;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Document, Element, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, NodeList, Window,
};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window exists"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))
}

/// Element nodes of a `NodeList`, in document order.
pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    Ok(elements(&document.query_selector_all(selector)?))
}

pub fn children(element: &Element) -> Vec<Element> {
    let collection = element.children();
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .collect()
}

/// Nearest ancestor-or-self of an event target matching `selector`.
pub fn closest(target: Option<EventTarget>, selector: &str) -> Option<Element> {
    target?
        .dyn_into::<Element>()
        .ok()?
        .closest(selector)
        .ok()
        .flatten()
}

/// True when `target` is `element` itself rather than one of its children.
pub fn is_target(target: Option<EventTarget>, element: &Element) -> bool {
    target.is_some_and(|target| {
        let target: &JsValue = target.as_ref();
        let element: &JsValue = element.as_ref();
        target == element
    })
}

/// Registers `handler` for the lifetime of the page.
pub fn listen<E>(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Like [`listen`] with an explicit `passive` flag. Handlers that call
/// `preventDefault` on touch or wheel events must not be passive.
pub fn listen_with_passive<E>(
    target: &EventTarget,
    event: &str,
    passive: bool,
    handler: impl FnMut(E) + 'static,
) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

pub fn set_class(element: &Element, class: &str, on: bool) -> Result<(), JsValue> {
    element.class_list().toggle_with_force(class, on).map(|_| ())
}

pub fn translate_x(element: &HtmlElement, px: f32) -> Result<(), JsValue> {
    element
        .style()
        .set_property("transform", &format!("translateX({px}px)"))
}

pub fn viewport_width(window: &Window) -> Result<f32, JsValue> {
    Ok(window.inner_width()?.as_f64().unwrap_or(0.0) as f32)
}

pub fn viewport_height(window: &Window) -> Result<f32, JsValue> {
    Ok(window.inner_height()?.as_f64().unwrap_or(0.0) as f32)
}

/// Parses a computed length such as `"20px"`. Keywords like `normal` read
/// as zero.
pub fn parse_px(value: &str) -> f32 {
    let value = value.trim();
    value
        .strip_suffix("px")
        .unwrap_or(value)
        .trim()
        .parse()
        .unwrap_or(0.0)
}

pub fn supports_intersection_observer(window: &Window) -> bool {
    Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Observes `target` and feeds every entry to `handler` together with the
/// observer, so one-shot handlers can unobserve.
pub fn observe_intersections(
    target: &Element,
    threshold: f64,
    root_margin: &str,
    mut handler: impl FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
) -> Result<IntersectionObserver, JsValue> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    handler(&entry, &observer);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    options.set_root_margin(root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();
    observer.observe(target);
    Ok(observer)
}

/// Logs a failed DOM write. Event handlers have nowhere to propagate to.
pub fn warn_on_err(context: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::warn!("{context}: {err:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::parse_px;

    #[test]
    fn parses_computed_lengths() {
        assert_eq!(parse_px("20px"), 20.0);
        assert_eq!(parse_px(" 12.5px "), 12.5);
        assert_eq!(parse_px("0"), 0.0);
        assert_eq!(parse_px("normal"), 0.0);
        assert_eq!(parse_px(""), 0.0);
    }
}
