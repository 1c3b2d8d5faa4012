//! Mobile navigation drawer.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Deserialize;
use soiree_foundation::nav::DESKTOP_BREAKPOINT_PX;
use soiree_foundation::MobileNav;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, MouseEvent, Window};

use crate::dom;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavMarkup {
    pub toggle: String,
    pub menu: String,
    pub open_class: String,
    /// Added to `<body>` while the drawer is open to stop page scrolling.
    pub body_lock_class: String,
    pub breakpoint_px: f32,
}

impl Default for NavMarkup {
    fn default() -> Self {
        Self {
            toggle: ".nav-toggle".to_string(),
            menu: ".nav-menu".to_string(),
            open_class: "is-open".to_string(),
            body_lock_class: "nav-open".to_string(),
            breakpoint_px: DESKTOP_BREAKPOINT_PX,
        }
    }
}

struct NavView {
    nav: MobileNav,
    toggle: Element,
    menu: Element,
    body: Option<HtmlElement>,
    markup: NavMarkup,
}

impl NavView {
    fn render(&self) -> Result<(), JsValue> {
        let open = self.nav.is_open();
        self.toggle
            .set_attribute("aria-expanded", self.nav.aria_expanded())?;
        dom::set_class(&self.toggle, &self.markup.open_class, open)?;
        dom::set_class(&self.menu, &self.markup.open_class, open)?;
        if let Some(body) = &self.body {
            dom::set_class(body, &self.markup.body_lock_class, open)?;
        }
        Ok(())
    }
}

pub fn mount_mobile_nav(
    window: &Window,
    document: &Document,
    markup: &NavMarkup,
) -> Result<Option<()>, JsValue> {
    let (Some(toggle), Some(menu)) = (
        document.query_selector(&markup.toggle)?,
        document.query_selector(&markup.menu)?,
    ) else {
        log::debug!("mobile nav: no toggle/menu on this page");
        return Ok(None);
    };

    let view = Rc::new(RefCell::new(NavView {
        nav: MobileNav::new(markup.breakpoint_px),
        toggle: toggle.clone(),
        menu: menu.clone(),
        body: document.body(),
        markup: markup.clone(),
    }));
    view.borrow().render()?;

    {
        let view = view.clone();
        dom::listen(&toggle, "click", move |_event: MouseEvent| {
            let mut view = view.borrow_mut();
            view.nav.toggle();
            dom::warn_on_err("mobile nav render", view.render());
        })?;
    }

    {
        let view = view.clone();
        dom::listen(&menu, "click", move |event: MouseEvent| {
            if dom::closest(event.target(), "a").is_none() {
                return;
            }
            let mut view = view.borrow_mut();
            if view.nav.on_link_click() {
                dom::warn_on_err("mobile nav render", view.render());
            }
        })?;
    }

    {
        let view = view.clone();
        dom::listen(document, "keydown", move |event: KeyboardEvent| {
            let mut view = view.borrow_mut();
            if view.nav.on_key(&event.key()) {
                dom::warn_on_err("mobile nav render", view.render());
            }
        })?;
    }

    {
        let view = view.clone();
        let resized = window.clone();
        dom::listen_with_passive(window, "resize", true, move |_event: Event| {
            let Ok(width) = dom::viewport_width(&resized) else {
                return;
            };
            let mut view = view.borrow_mut();
            if view.nav.on_resize(width) {
                dom::warn_on_err("mobile nav render", view.render());
            }
        })?;
    }

    Ok(Some(()))
}
