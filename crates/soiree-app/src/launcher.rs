//! Site launcher.
//!
//! `SiteLauncher` collects settings through a builder and mounts every
//! enabled behaviour on the current page.

use soiree_foundation::{CarouselConfig, ContactMessages, EmailSettings};
use soiree_platform_web::RevealTarget;
use wasm_bindgen::JsValue;

use crate::settings::{Behaviour, SiteSettings, CONFIG_SCRIPT_ID};

/// What happened to one behaviour during launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountOutcome {
    /// Wired to `count` elements or groups.
    Mounted(usize),
    /// Markup absent or behaviour disabled.
    Skipped,
    /// A DOM call failed; the other behaviours still mounted.
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MountReport {
    entries: Vec<(Behaviour, MountOutcome)>,
}

impl MountReport {
    pub fn record(&mut self, behaviour: Behaviour, outcome: MountOutcome) {
        self.entries.push((behaviour, outcome));
    }

    pub fn outcome(&self, behaviour: Behaviour) -> Option<MountOutcome> {
        self.entries
            .iter()
            .find(|(recorded, _)| *recorded == behaviour)
            .map(|(_, outcome)| *outcome)
    }

    pub fn mounted(&self) -> impl Iterator<Item = Behaviour> + '_ {
        self.entries
            .iter()
            .filter(|(_, outcome)| matches!(outcome, MountOutcome::Mounted(_)))
            .map(|(behaviour, _)| *behaviour)
    }

    pub fn failures(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, outcome)| *outcome == MountOutcome::Failed)
            .count()
    }

    pub fn entries(&self) -> &[(Behaviour, MountOutcome)] {
        &self.entries
    }
}

/// Builder for launching the site's behaviours.
///
/// # Example
///
/// ```no_run
/// use soiree_app::{Behaviour, SiteLauncher};
///
/// let report = SiteLauncher::new()
///     .with_config_script("site-config")
///     .without(Behaviour::Typewriter)
///     .run();
/// ```
pub struct SiteLauncher {
    settings: SiteSettings,
    config_script: Option<String>,
}

impl SiteLauncher {
    pub fn new() -> Self {
        Self {
            settings: SiteSettings::default(),
            config_script: None,
        }
    }

    pub fn with_settings(mut self, settings: SiteSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Lets a `<script type="application/json">` block with this id replace
    /// the builder's settings at launch.
    pub fn with_config_script(mut self, id: impl Into<String>) -> Self {
        self.config_script = Some(id.into());
        self
    }

    /// Reads the config block under [`CONFIG_SCRIPT_ID`].
    pub fn with_default_config_script(self) -> Self {
        self.with_config_script(CONFIG_SCRIPT_ID)
    }

    pub fn with_carousel_config(mut self, config: CarouselConfig) -> Self {
        self.settings.carousel_config = config;
        self
    }

    pub fn with_email(mut self, email: EmailSettings) -> Self {
        self.settings.email = email;
        self
    }

    pub fn with_messages(mut self, messages: ContactMessages) -> Self {
        self.settings.messages = messages;
        self
    }

    pub fn with_reveal(mut self, target: RevealTarget) -> Self {
        self.settings.reveals.push(target);
        self
    }

    pub fn without(mut self, behaviour: Behaviour) -> Self {
        if !self.settings.disabled.contains(&behaviour) {
            self.settings.disabled.push(behaviour);
        }
        self
    }

    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    /// Mounts every enabled behaviour on the current page.
    ///
    /// Fails only when there is no window or document at all; individual
    /// behaviours that fail are logged and reported.
    pub fn run(self) -> Result<MountReport, JsValue> {
        crate::web::run(self.settings, self.config_script.as_deref())
    }
}

impl Default for SiteLauncher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_accumulates_settings() {
        let launcher = SiteLauncher::new()
            .with_carousel_config(CarouselConfig::default().with_flick_threshold(0.5))
            .with_reveal(RevealTarget::faq())
            .without(Behaviour::Video)
            .without(Behaviour::Video);

        let settings = launcher.settings();
        assert_eq!(settings.carousel_config.flick_threshold, 0.5);
        assert_eq!(settings.reveals.len(), RevealTarget::site_defaults().len() + 1);
        assert_eq!(settings.disabled, vec![Behaviour::Video]);
        assert!(!settings.is_enabled(Behaviour::Video));
    }

    #[test]
    fn report_tracks_outcomes() {
        let mut report = MountReport::default();
        report.record(Behaviour::Nav, MountOutcome::Mounted(1));
        report.record(Behaviour::Carousel, MountOutcome::Mounted(2));
        report.record(Behaviour::Video, MountOutcome::Skipped);
        report.record(Behaviour::Contact, MountOutcome::Failed);

        assert_eq!(
            report.mounted().collect::<Vec<_>>(),
            vec![Behaviour::Nav, Behaviour::Carousel]
        );
        assert_eq!(report.failures(), 1);
        assert_eq!(report.outcome(Behaviour::Video), Some(MountOutcome::Skipped));
        assert_eq!(report.outcome(Behaviour::Lightbox), None);
    }
}
