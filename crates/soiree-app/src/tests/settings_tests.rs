use super::*;
use soiree_foundation::gesture_constants::EDGE_RESISTANCE;

#[test]
fn defaults_follow_the_site_markup() {
    let settings = SiteSettings::default();

    assert_eq!(settings.carousel.track, ".carousel-track");
    assert_eq!(settings.lightbox.overlay_id, "gallery-lightbox");
    assert_eq!(settings.accordion.item, ".faq-item");
    assert_eq!(settings.footer_year_id, "year");
    assert_eq!(settings.reveals.len(), 4);
    assert_eq!(settings.reveals[0].spec.stagger_ms, 150);
    assert!(!settings.email.is_configured());
    assert_eq!(settings.enabled().count(), Behaviour::ALL.len());
}

#[test]
fn partial_json_keeps_remaining_defaults() {
    let json = r#"{
        "email": { "service_id": "svc", "template_id": "tpl", "public_key": "pk" },
        "carousel_config": { "flick_threshold": 0.35 },
        "disabled": ["typewriter", "footer-year"]
    }"#;
    let settings = SiteSettings::from_json(json).unwrap();

    assert!(settings.email.is_configured());
    assert_eq!(settings.email.endpoint, EmailSettings::default().endpoint);
    assert_eq!(settings.carousel_config.flick_threshold, 0.35);
    assert_eq!(settings.carousel_config.resistance, EDGE_RESISTANCE);
    assert!(!settings.is_enabled(Behaviour::Typewriter));
    assert!(!settings.is_enabled(Behaviour::FooterYear));
    assert!(settings.is_enabled(Behaviour::Carousel));
    assert_eq!(settings.enabled().count(), Behaviour::ALL.len() - 2);
    assert_eq!(settings.carousel, CarouselMarkup::default());
}

#[test]
fn reveal_targets_read_their_observer_options_inline() {
    let json = r#"{
        "reveals": [
            { "section": ".team", "items": ".member", "threshold": 0.4, "stagger_ms": 100 }
        ]
    }"#;
    let settings = SiteSettings::from_json(json).unwrap();

    assert_eq!(settings.reveals.len(), 1);
    let team = &settings.reveals[0];
    assert_eq!(team.section, ".team");
    assert_eq!(team.items, ".member");
    assert_eq!(team.visible_class, "is-visible");
    assert_eq!(team.spec.threshold, 0.4);
    assert_eq!(team.spec.stagger_ms, 100);
    assert_eq!(team.spec.fallback_stagger_ms, None);
}

#[test]
fn malformed_json_falls_back_to_defaults() {
    let settings = SiteSettings::from_json_or_default("{ \"carousel\": ");
    assert_eq!(settings, SiteSettings::default());

    assert!(SiteSettings::from_json(r#"{ "disabled": ["teleport"] }"#).is_err());
}

#[test]
fn mount_order_starts_with_the_header() {
    assert_eq!(Behaviour::ALL[0], Behaviour::Nav);
    assert_eq!(Behaviour::ALL[1], Behaviour::Logo);
    let mut unique = Behaviour::ALL.to_vec();
    unique.sort_by_key(|behaviour| format!("{behaviour:?}"));
    unique.dedup();
    assert_eq!(unique.len(), Behaviour::ALL.len());
}
