//! Browser side of [`SiteLauncher::run`](crate::SiteLauncher::run).

use soiree_platform_web::{
    dom, mount_accordion, mount_carousels, mount_contact_form, mount_hero_video, mount_lightbox,
    mount_logo, mount_mobile_nav, mount_parallax, mount_reveal, mount_scroll_links,
    mount_stat_counters, mount_sticky_panel, mount_typewriters, set_footer_year,
};
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};
use web_time::Instant;

use crate::launcher::{MountOutcome, MountReport};
use crate::settings::{Behaviour, SiteSettings};

fn settings_from_page(document: &Document, id: &str) -> Option<SiteSettings> {
    let script = document.get_element_by_id(id)?;
    let json = script.text_content().unwrap_or_default();
    if json.trim().is_empty() {
        return None;
    }
    Some(SiteSettings::from_json_or_default(&json))
}

fn single<T>(result: Result<Option<T>, JsValue>) -> Result<MountOutcome, JsValue> {
    Ok(match result? {
        Some(_) => MountOutcome::Mounted(1),
        None => MountOutcome::Skipped,
    })
}

fn counted(result: Result<usize, JsValue>) -> Result<MountOutcome, JsValue> {
    Ok(match result? {
        0 => MountOutcome::Skipped,
        count => MountOutcome::Mounted(count),
    })
}

fn mount(
    behaviour: Behaviour,
    window: &Window,
    document: &Document,
    settings: &SiteSettings,
) -> Result<MountOutcome, JsValue> {
    match behaviour {
        Behaviour::Carousel => counted(mount_carousels(
            document,
            &settings.carousel,
            settings.carousel_config,
        )),
        Behaviour::Lightbox => single(mount_lightbox(document, &settings.lightbox)),
        Behaviour::Accordion => single(mount_accordion(document, &settings.accordion)),
        Behaviour::Reveal => {
            let mut mounted = 0;
            for target in &settings.reveals {
                if mount_reveal(window, document, target)?.is_some() {
                    mounted += 1;
                }
            }
            counted(Ok(mounted))
        }
        Behaviour::ScrollLinks => single(mount_scroll_links(document, &settings.scroll_links)),
        Behaviour::Stats => single(mount_stat_counters(window, document, &settings.stats)),
        Behaviour::Parallax => single(mount_parallax(window, document, &settings.parallax)),
        Behaviour::Video => single(mount_hero_video(window, document, &settings.video)),
        Behaviour::Typewriter => counted(mount_typewriters(document, &settings.typewriter)),
        Behaviour::Nav => single(mount_mobile_nav(window, document, &settings.nav)),
        Behaviour::Sticky => single(mount_sticky_panel(window, document, &settings.sticky)),
        Behaviour::Logo => counted(mount_logo(window, document, &settings.logo)),
        Behaviour::FooterYear => Ok(match set_footer_year(document, &settings.footer_year_id) {
            Some(_) => MountOutcome::Mounted(1),
            None => MountOutcome::Skipped,
        }),
        Behaviour::Contact => single(mount_contact_form(
            document,
            &settings.contact,
            &settings.email,
            &settings.messages,
        )),
    }
}

pub(crate) fn run(
    settings: SiteSettings,
    config_script: Option<&str>,
) -> Result<MountReport, JsValue> {
    let started = Instant::now();
    let window = dom::window()?;
    let document = dom::document()?;

    let settings = config_script
        .and_then(|id| settings_from_page(&document, id))
        .unwrap_or(settings);

    let mut report = MountReport::default();
    for behaviour in Behaviour::ALL {
        if !settings.is_enabled(behaviour) {
            report.record(behaviour, MountOutcome::Skipped);
            continue;
        }
        let outcome = match mount(behaviour, &window, &document, &settings) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::warn!("{behaviour:?} failed to mount: {err:?}");
                MountOutcome::Failed
            }
        };
        report.record(behaviour, outcome);
    }

    log::info!(
        "site behaviours mounted in {:?}: {:?}",
        started.elapsed(),
        report.mounted().collect::<Vec<_>>()
    );
    Ok(report)
}
