//! High level entry point for the Soiree site: one launcher that reads the
//! page's settings and mounts every behaviour whose markup is present.

mod launcher;
mod settings;
mod web;

pub use launcher::{MountOutcome, MountReport, SiteLauncher};
pub use settings::{Behaviour, SiteSettings, CONFIG_SCRIPT_ID};
