//! Per-page logo and the footer year.

use serde::Deserialize;
use soiree_foundation::{LogoSet, PageKind};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlImageElement, Window};

use crate::dom;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogoMarkup {
    pub selector: String,
    /// `<body>` attribute naming the page; the URL path is the fallback.
    pub page_attribute: String,
    pub logos: LogoSet,
}

impl Default for LogoMarkup {
    fn default() -> Self {
        Self {
            selector: ".site-logo img".to_string(),
            page_attribute: "data-page".to_string(),
            logos: LogoSet::default(),
        }
    }
}

fn current_page(window: &Window, document: &Document, attribute: &str) -> Option<PageKind> {
    document
        .body()
        .and_then(|body| body.get_attribute(attribute))
        .and_then(|slug| PageKind::from_slug(&slug))
        .or_else(|| {
            let path = window.location().pathname().ok()?;
            PageKind::from_path(&path)
        })
}

/// Points every logo image at the current page's asset. Returns how many
/// images were found.
pub fn mount_logo(
    window: &Window,
    document: &Document,
    markup: &LogoMarkup,
) -> Result<usize, JsValue> {
    let logos = dom::query_all(document, &markup.selector)?;
    if logos.is_empty() {
        log::debug!("logo: no {} on this page", markup.selector);
        return Ok(0);
    }
    let count = logos.len();

    let page = current_page(window, document, &markup.page_attribute);
    let src = markup.logos.logo_for(page);
    for logo in logos {
        let Ok(image) = logo.dyn_into::<HtmlImageElement>() else {
            continue;
        };
        // Compare the attribute, not `src()`, which is always absolute.
        if image.get_attribute("src").as_deref() != Some(src) {
            image.set_src(src);
        }
    }
    log::debug!("logo: page {page:?} uses {src}");
    Ok(count)
}

/// Writes the current year into the footer.
pub fn set_footer_year(document: &Document, element_id: &str) -> Option<u32> {
    let element = document.get_element_by_id(element_id)?;
    let year = js_sys::Date::new_0().get_full_year();
    element.set_text_content(Some(&year.to_string()));
    Some(year)
}
