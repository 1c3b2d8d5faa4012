//! Per-page logo selection.

use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Home,
    Weddings,
    Business,
    Party,
    About,
    Gallery,
}

impl PageKind {
    /// Parses a `data-page` value or URL slug. Local-language slugs used in
    /// the site's URLs are accepted next to the English names.
    pub fn from_slug(slug: &str) -> Option<Self> {
        let slug = slug.trim().to_ascii_lowercase();
        let page = match slug.as_str() {
            "" | "index" | "home" | "pocetna" => PageKind::Home,
            "weddings" | "wedding" | "vjencanja" | "vencanja" => PageKind::Weddings,
            "business" | "poslovni" | "poslovno" => PageKind::Business,
            "party" | "parties" | "proslave" | "zabave" => PageKind::Party,
            "about" | "o-nama" | "onama" => PageKind::About,
            "gallery" | "galerija" => PageKind::Gallery,
            _ => return None,
        };
        Some(page)
    }

    /// Page kind from a URL path such as `/galerija.html` or `/weddings/`.
    pub fn from_path(path: &str) -> Option<Self> {
        let last = path
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default();
        let slug = last.strip_suffix(".html").unwrap_or(last);
        Self::from_slug(slug)
    }
}

/// Logo asset per page, with a fallback.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogoSet {
    pub default: String,
    pub pages: HashMap<PageKind, String>,
}

impl LogoSet {
    pub fn new(default: impl Into<String>) -> Self {
        Self {
            default: default.into(),
            pages: HashMap::new(),
        }
    }

    pub fn with_page(mut self, page: PageKind, src: impl Into<String>) -> Self {
        self.pages.insert(page, src.into());
        self
    }

    pub fn logo_for(&self, page: Option<PageKind>) -> &str {
        page.and_then(|page| self.pages.get(&page))
            .map(String::as_str)
            .unwrap_or(&self.default)
    }
}

impl Default for LogoSet {
    fn default() -> Self {
        Self::new("/assets/logo.svg")
            .with_page(PageKind::Weddings, "/assets/logo-weddings.svg")
            .with_page(PageKind::Business, "/assets/logo-business.svg")
            .with_page(PageKind::Party, "/assets/logo-party.svg")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_and_paths() {
        assert_eq!(PageKind::from_slug("Galerija"), Some(PageKind::Gallery));
        assert_eq!(PageKind::from_path("/"), Some(PageKind::Home));
        assert_eq!(PageKind::from_path("/index.html"), Some(PageKind::Home));
        assert_eq!(PageKind::from_path("/site/vjencanja.html"), Some(PageKind::Weddings));
        assert_eq!(PageKind::from_path("/party/"), Some(PageKind::Party));
        assert_eq!(PageKind::from_path("/blog/post.html"), None);
    }

    #[test]
    fn unknown_pages_use_default_logo() {
        let logos = LogoSet::default();
        assert_eq!(logos.logo_for(Some(PageKind::Party)), "/assets/logo-party.svg");
        assert_eq!(logos.logo_for(Some(PageKind::About)), "/assets/logo.svg");
        assert_eq!(logos.logo_for(None), "/assets/logo.svg");
    }

    #[test]
    fn logo_set_from_json() {
        let logos: LogoSet = serde_json::from_str(
            r#"{ "default": "/l.png", "pages": { "gallery": "/l-gallery.png" } }"#,
        )
        .unwrap();
        assert_eq!(logos.logo_for(Some(PageKind::Gallery)), "/l-gallery.png");
        assert_eq!(logos.logo_for(Some(PageKind::Home)), "/l.png");
    }
}
