//! Page configuration.
//!
//! Every field has a default matching the site's markup, so a page only
//! needs a config block for what it changes:
//!
//! ```html
//! <script type="application/json" id="site-config">
//!   { "email": { "service_id": "svc", "template_id": "tpl", "public_key": "pk" },
//!     "disabled": ["typewriter"] }
//! </script>
//! ```

use serde::Deserialize;
use soiree_foundation::{CarouselConfig, ContactMessages, EmailSettings};
use soiree_platform_web::{
    AccordionMarkup, CarouselMarkup, ContactMarkup, LightboxMarkup, LogoMarkup, NavMarkup,
    ParallaxMarkup, RevealTarget, ScrollLinkMarkup, StatsMarkup, StickyMarkup, TypewriterMarkup,
    VideoMarkup,
};

/// Id of the `<script type="application/json">` block holding page settings.
pub const CONFIG_SCRIPT_ID: &str = "site-config";

/// A page behaviour that can be switched off per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Behaviour {
    Carousel,
    Lightbox,
    Accordion,
    Reveal,
    ScrollLinks,
    Stats,
    Parallax,
    Video,
    Typewriter,
    Nav,
    Sticky,
    Logo,
    FooterYear,
    Contact,
}

impl Behaviour {
    /// Mount order. Navigation and branding go first so a failure further
    /// down never leaves the header broken.
    pub const ALL: [Behaviour; 14] = [
        Behaviour::Nav,
        Behaviour::Logo,
        Behaviour::FooterYear,
        Behaviour::Sticky,
        Behaviour::Carousel,
        Behaviour::Lightbox,
        Behaviour::Accordion,
        Behaviour::Reveal,
        Behaviour::ScrollLinks,
        Behaviour::Stats,
        Behaviour::Parallax,
        Behaviour::Video,
        Behaviour::Typewriter,
        Behaviour::Contact,
    ];
}

/// Configuration for every behaviour on a page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub carousel: CarouselMarkup,
    pub carousel_config: CarouselConfig,
    pub lightbox: LightboxMarkup,
    pub accordion: AccordionMarkup,
    pub reveals: Vec<RevealTarget>,
    pub scroll_links: ScrollLinkMarkup,
    pub stats: StatsMarkup,
    pub parallax: ParallaxMarkup,
    pub video: VideoMarkup,
    pub typewriter: TypewriterMarkup,
    pub nav: NavMarkup,
    pub sticky: StickyMarkup,
    pub logo: LogoMarkup,
    pub footer_year_id: String,
    pub contact: ContactMarkup,
    pub email: EmailSettings,
    pub messages: ContactMessages,
    pub disabled: Vec<Behaviour>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            carousel: CarouselMarkup::default(),
            carousel_config: CarouselConfig::default(),
            lightbox: LightboxMarkup::default(),
            accordion: AccordionMarkup::default(),
            reveals: RevealTarget::site_defaults(),
            scroll_links: ScrollLinkMarkup::default(),
            stats: StatsMarkup::default(),
            parallax: ParallaxMarkup::default(),
            video: VideoMarkup::default(),
            typewriter: TypewriterMarkup::default(),
            nav: NavMarkup::default(),
            sticky: StickyMarkup::default(),
            logo: LogoMarkup::default(),
            footer_year_id: "year".to_string(),
            contact: ContactMarkup::default(),
            email: EmailSettings::default(),
            messages: ContactMessages::default(),
            disabled: Vec::new(),
        }
    }
}

impl SiteSettings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parses `json`, falling back to the defaults on malformed input. A
    /// broken config block must not take the whole page's behaviour down.
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("site config is not valid JSON ({err}), using defaults");
                Self::default()
            }
        }
    }

    pub fn is_enabled(&self, behaviour: Behaviour) -> bool {
        !self.disabled.contains(&behaviour)
    }

    pub fn enabled(&self) -> impl Iterator<Item = Behaviour> + '_ {
        Behaviour::ALL
            .into_iter()
            .filter(|behaviour| self.is_enabled(*behaviour))
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
