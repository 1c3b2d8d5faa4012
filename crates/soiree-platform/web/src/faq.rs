//! FAQ accordion.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Deserialize;
use soiree_foundation::Accordion;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

use crate::dom;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AccordionMarkup {
    pub item: String,
    pub question: String,
    pub answer: String,
    pub open_class: String,
}

impl Default for AccordionMarkup {
    fn default() -> Self {
        Self {
            item: ".faq-item".to_string(),
            question: ".faq-question".to_string(),
            answer: ".faq-answer".to_string(),
            open_class: "is-open".to_string(),
        }
    }
}

struct AccordionItem {
    item: Element,
    answer: Option<HtmlElement>,
}

struct AccordionView {
    accordion: Accordion,
    items: Vec<AccordionItem>,
    open_class: String,
}

/// Opens an answer to its content height so the CSS `max-height`
/// transition has a target.
fn expand(answer: &HtmlElement) -> Result<(), JsValue> {
    answer
        .style()
        .set_property("max-height", &format!("{}px", answer.scroll_height()))
}

impl AccordionView {
    fn render(&self) -> Result<(), JsValue> {
        for (index, entry) in self.items.iter().enumerate() {
            let open = self.accordion.is_open(index);
            dom::set_class(&entry.item, &self.open_class, open)?;
            if let Some(answer) = &entry.answer {
                if open {
                    expand(answer)?;
                } else {
                    answer.style().remove_property("max-height")?;
                }
            }
        }
        Ok(())
    }
}

pub fn mount_accordion(
    document: &Document,
    markup: &AccordionMarkup,
) -> Result<Option<()>, JsValue> {
    let elements = dom::query_all(document, &markup.item)?;
    if elements.is_empty() {
        log::debug!("accordion: no {} on this page", markup.item);
        return Ok(None);
    }

    let mut items = Vec::with_capacity(elements.len());
    let mut questions = Vec::with_capacity(elements.len());
    for item in elements {
        let answer = item
            .query_selector(&markup.answer)?
            .and_then(|answer| answer.dyn_into::<HtmlElement>().ok());
        questions.push(item.query_selector(&markup.question)?);
        items.push(AccordionItem { item, answer });
    }

    let accordion = Accordion::new(
        items
            .iter()
            .map(|entry| entry.item.class_list().contains(&markup.open_class)),
    );
    for (index, entry) in items.iter().enumerate() {
        if let (true, Some(answer)) = (accordion.is_open(index), &entry.answer) {
            expand(answer)?;
        }
    }

    let view = Rc::new(RefCell::new(AccordionView {
        accordion,
        items,
        open_class: markup.open_class.clone(),
    }));

    for (index, question) in questions.into_iter().enumerate() {
        let Some(question) = question else {
            continue;
        };
        if view.borrow().items[index].answer.is_none() {
            continue;
        }
        let view = view.clone();
        dom::listen(&question, "click", move |_event: MouseEvent| {
            let mut view = view.borrow_mut();
            view.accordion.toggle(index);
            dom::warn_on_err("accordion render", view.render());
        })?;
    }

    Ok(Some(()))
}
