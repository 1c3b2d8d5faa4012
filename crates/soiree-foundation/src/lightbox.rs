//! Gallery lightbox.

/// Alt text used when the clicked image has none.
pub const DEFAULT_ALT: &str = "Galerija";

/// What the lightbox is currently showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Lightbox {
    #[default]
    Closed,
    Open {
        src: String,
        alt: String,
    },
}

impl Lightbox {
    pub fn new() -> Self {
        Self::Closed
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Lightbox::Open { .. })
    }

    /// Shows `src`. An empty or missing alt falls back to [`DEFAULT_ALT`].
    pub fn open(&mut self, src: impl Into<String>, alt: Option<&str>) {
        let alt = alt
            .map(str::trim)
            .filter(|alt| !alt.is_empty())
            .unwrap_or(DEFAULT_ALT);
        *self = Lightbox::Open {
            src: src.into(),
            alt: alt.to_string(),
        };
    }

    /// Returns true if the lightbox was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        *self = Lightbox::Closed;
        was_open
    }

    /// A click inside the overlay closes it only when it lands on the
    /// backdrop, not on the image.
    pub fn on_overlay_click(&mut self, hit_backdrop: bool) -> bool {
        hit_backdrop && self.close()
    }

    pub fn on_key(&mut self, key: &str) -> bool {
        key == "Escape" && self.close()
    }

    /// Image source to render; empty while closed.
    pub fn src(&self) -> &str {
        match self {
            Lightbox::Open { src, .. } => src,
            Lightbox::Closed => "",
        }
    }

    pub fn alt(&self) -> &str {
        match self {
            Lightbox::Open { alt, .. } => alt,
            Lightbox::Closed => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_uses_default_alt() {
        let mut lightbox = Lightbox::new();
        lightbox.open("/img/hall.jpg", None);
        assert_eq!(lightbox.alt(), DEFAULT_ALT);

        lightbox.open("/img/hall.jpg", Some("  "));
        assert_eq!(lightbox.alt(), DEFAULT_ALT);

        lightbox.open("/img/terrace.jpg", Some("Terrace"));
        assert_eq!(lightbox.src(), "/img/terrace.jpg");
        assert_eq!(lightbox.alt(), "Terrace");
    }

    #[test]
    fn close_clears_source() {
        let mut lightbox = Lightbox::new();
        lightbox.open("/img/a.jpg", None);
        assert!(lightbox.close());
        assert_eq!(lightbox.src(), "");
        assert!(!lightbox.close());
    }

    #[test]
    fn only_backdrop_clicks_close() {
        let mut lightbox = Lightbox::new();
        lightbox.open("/img/a.jpg", None);
        assert!(!lightbox.on_overlay_click(false));
        assert!(lightbox.is_open());
        assert!(lightbox.on_overlay_click(true));
        assert!(!lightbox.is_open());
    }

    #[test]
    fn escape_closes() {
        let mut lightbox = Lightbox::new();
        lightbox.open("/img/a.jpg", None);
        assert!(!lightbox.on_key("Enter"));
        assert!(lightbox.on_key("Escape"));
        assert!(!lightbox.on_key("Escape"));
    }
}
