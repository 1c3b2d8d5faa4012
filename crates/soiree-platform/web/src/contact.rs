//! Contact form submission through the email API.

use std::rc::Rc;

use serde::Deserialize;
use soiree_foundation::contact::outcome;
use soiree_foundation::{ContactError, ContactMessages, ContactRequest, EmailRequest, EmailSettings};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Document, Element, Event, FormData, HtmlFormElement, Request, RequestInit, RequestMode,
    Response,
};

use crate::dom;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactMarkup {
    pub form: String,
    pub status: String,
    pub submit: String,
    pub success_class: String,
    pub error_class: String,
}

impl Default for ContactMarkup {
    fn default() -> Self {
        Self {
            form: "#contact-form".to_string(),
            status: ".form-status".to_string(),
            submit: "[type=submit]".to_string(),
            success_class: "is-success".to_string(),
            error_class: "is-error".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Banner {
    Pending,
    Success,
    Error,
}

struct ContactForm {
    form: HtmlFormElement,
    status: Option<Element>,
    submit: Option<Element>,
    markup: ContactMarkup,
    settings: EmailSettings,
    messages: ContactMessages,
}

impl ContactForm {
    fn read(&self) -> Result<ContactRequest, JsValue> {
        let data = FormData::new_with_form(&self.form)?;
        let field = |name: &str| data.get(name).as_string().unwrap_or_default();
        Ok(ContactRequest {
            name: field("name"),
            email: field("email"),
            phone: field("phone"),
            event_type: field("event_type"),
            date: field("date"),
            location: field("location"),
            guests: field("guests"),
        })
    }

    fn show(&self, banner: Banner, text: &str) {
        let Some(status) = &self.status else {
            return;
        };
        status.set_text_content(Some(text));
        let result = dom::set_class(status, &self.markup.success_class, banner == Banner::Success)
            .and_then(|_| dom::set_class(status, &self.markup.error_class, banner == Banner::Error));
        dom::warn_on_err("contact status", result);
    }

    fn set_busy(&self, busy: bool) {
        let Some(submit) = &self.submit else {
            return;
        };
        let result = if busy {
            submit.set_attribute("disabled", "")
        } else {
            submit.remove_attribute("disabled")
        };
        dom::warn_on_err("contact submit button", result);
    }
}

fn transport(err: JsValue) -> ContactError {
    ContactError::Transport {
        reason: format!("{err:?}"),
    }
}

/// POSTs `body` as JSON. One attempt; the visitor decides whether to retry.
async fn send(endpoint: &str, body: &str) -> Result<(), ContactError> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(endpoint, &opts).map_err(transport)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(transport)?;

    let window = web_sys::window().ok_or_else(|| ContactError::Transport {
        reason: "no window object".to_string(),
    })?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?
        .dyn_into()
        .map_err(|_| ContactError::Transport {
            reason: "response is not a Response object".to_string(),
        })?;

    let text = JsFuture::from(response.text().map_err(transport)?)
        .await
        .map_err(transport)?
        .as_string()
        .unwrap_or_default();
    outcome(response.status(), &text)
}

fn submit(form: Rc<ContactForm>) {
    let request = match form.read() {
        Ok(request) => request,
        Err(err) => {
            log::error!("contact form: reading fields failed: {err:?}");
            form.show(Banner::Error, &form.messages.failure);
            return;
        }
    };
    let body = match EmailRequest::new(&form.settings, &request) {
        Ok(email) => email.to_json(),
        Err(err) => {
            log::debug!("contact form: {err}");
            form.show(Banner::Error, form.messages.for_error(&err));
            return;
        }
    };

    form.show(Banner::Pending, &form.messages.sending);
    form.set_busy(true);
    wasm_bindgen_futures::spawn_local(async move {
        match send(&form.settings.endpoint, &body).await {
            Ok(()) => {
                log::info!("contact form: inquiry sent");
                form.form.reset();
                form.show(Banner::Success, &form.messages.success);
            }
            Err(err) => {
                log::error!("contact form: {err}");
                form.show(Banner::Error, form.messages.for_error(&err));
            }
        }
        form.set_busy(false);
    });
}

/// Takes over submission of the contact form. An unconfigured email service
/// leaves the form to its native `action`.
pub fn mount_contact_form(
    document: &Document,
    markup: &ContactMarkup,
    settings: &EmailSettings,
    messages: &ContactMessages,
) -> Result<Option<()>, JsValue> {
    let Some(form) = document.query_selector(&markup.form)? else {
        log::debug!("contact form: no {} on this page", markup.form);
        return Ok(None);
    };
    if !settings.is_configured() {
        log::warn!("contact form: email service is not configured");
        return Ok(None);
    }
    let form: HtmlFormElement = form.dyn_into()?;

    let contact = Rc::new(ContactForm {
        status: form.query_selector(&markup.status)?,
        submit: form.query_selector(&markup.submit)?,
        form: form.clone(),
        markup: markup.clone(),
        settings: settings.clone(),
        messages: messages.clone(),
    });

    dom::listen(&form, "submit", move |event: Event| {
        event.prevent_default();
        submit(contact.clone());
    })?;
    Ok(Some(()))
}
