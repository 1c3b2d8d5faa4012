//! Entry point of the site bundle.
//!
//! Every page loads the same module; the launcher mounts whatever the page's
//! markup supports and reads per-page overrides from the
//! `<script type="application/json" id="site-config">` block.

use soiree_app::SiteLauncher;

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn create_launcher() -> SiteLauncher {
    SiteLauncher::new().with_default_config_script()
}

#[cfg(target_arch = "wasm32")]
mod wasm_entry {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

        let report = super::create_launcher().run()?;
        if report.failures() > 0 {
            log::warn!("{} behaviour(s) failed to mount", report.failures());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::create_launcher;
    use soiree_app::Behaviour;

    #[test]
    fn launcher_starts_with_every_behaviour_enabled() {
        let launcher = create_launcher();
        assert!(Behaviour::ALL
            .iter()
            .all(|behaviour| launcher.settings().is_enabled(*behaviour)));
    }
}
