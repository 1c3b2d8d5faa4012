//! Animation frames and timers.
//!
//! Every timestamp handed to the state machines is an event `timeStamp` or a
//! `requestAnimationFrame` argument; both share the page's time origin.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::dom;

pub fn request_frame(callback: &Closure<dyn FnMut(f64)>) -> Result<i32, JsValue> {
    dom::window()?.request_animation_frame(callback.as_ref().unchecked_ref())
}

pub fn request_frame_once(callback: impl FnOnce(f64) + 'static) -> Result<i32, JsValue> {
    let callback = Closure::once_into_js(callback);
    dom::window()?.request_animation_frame(callback.unchecked_ref())
}

/// Calls `step` once per animation frame until it returns false.
pub fn run_frames(mut step: impl FnMut(f64) -> bool + 'static) -> Result<(), JsValue> {
    let frame_loop: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let frame_loop_clone = frame_loop.clone();

    *frame_loop.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        if !step(timestamp) {
            // Breaks the Rc cycle; the closure is freed once this call returns.
            let _ = frame_loop_clone.borrow_mut().take();
            return;
        }
        if let Some(callback) = frame_loop_clone.borrow().as_ref() {
            if let Err(err) = request_frame(callback) {
                log::warn!("requestAnimationFrame failed: {err:?}");
            }
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(callback) = frame_loop.borrow().as_ref() {
        request_frame(callback)?;
    }
    Ok(())
}

pub fn set_timeout(callback: impl FnOnce() + 'static, delay_ms: u32) -> Result<i32, JsValue> {
    let callback = Closure::once_into_js(callback);
    dom::window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay_ms.min(i32::MAX as u32) as i32,
    )
}

pub fn clear_timeout(handle: i32) {
    if let Some(window) = web_sys::window() {
        window.clear_timeout_with_handle(handle);
    }
}
