//! Browser glue for Soiree behaviours.
//!
//! Each `mount_*` function looks up its markup, wires event listeners and
//! observers to one of the headless state machines in `soiree-foundation`,
//! and writes the machine's output back to the DOM. Missing markup is not an
//! error: the mount logs at `debug` and returns `Ok(None)`.

pub mod branding;
pub mod carousel;
pub mod contact;
pub mod dom;
pub mod faq;
pub mod frame;
pub mod gallery;
pub mod nav;
pub mod parallax;
pub mod reveal;
pub mod stats;
pub mod sticky;
pub mod typewriter;
pub mod video;

pub use branding::{mount_logo, set_footer_year, LogoMarkup};
pub use carousel::{mount_carousels, CarouselMarkup};
pub use contact::{mount_contact_form, ContactMarkup};
pub use faq::{mount_accordion, AccordionMarkup};
pub use gallery::{mount_lightbox, LightboxMarkup};
pub use nav::{mount_mobile_nav, NavMarkup};
pub use parallax::{mount_parallax, ParallaxMarkup};
pub use reveal::{mount_reveal, mount_scroll_links, RevealTarget, ScrollLinkMarkup};
pub use stats::{mount_stat_counters, StatsMarkup};
pub use sticky::{mount_sticky_panel, StickyMarkup};
pub use typewriter::{mount_typewriters, TypewriterMarkup};
pub use video::{mount_hero_video, VideoMarkup};

use web_sys::{TouchEvent, Window};

/// Pointer conversion and pixel snapping for the current display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WebPlatform {
    scale_factor: f64,
}

impl WebPlatform {
    pub fn new(scale_factor: f64) -> Self {
        Self {
            scale_factor: if scale_factor > 0.0 { scale_factor } else { 1.0 },
        }
    }

    pub fn from_window(window: &Window) -> Self {
        Self::new(window.device_pixel_ratio())
    }

    pub fn set_scale_factor(&mut self, factor: f64) {
        *self = Self::new(factor);
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// `clientX` is already in CSS pixels, the unit the carousel works in.
    pub fn pointer_x(&self, client_x: f64) -> f32 {
        client_x as f32
    }

    /// Horizontal position of the first active touch.
    pub fn touch_x(&self, event: &TouchEvent) -> Option<f32> {
        let touches = event.touches();
        let touch = touches.get(0).or_else(|| event.changed_touches().get(0))?;
        Some(self.pointer_x(f64::from(touch.client_x())))
    }

    /// Rounds a translation to whole device pixels so text on the track
    /// does not blur between frames.
    pub fn snap(&self, px: f32) -> f32 {
        let scale = self.scale_factor as f32;
        (px * scale).round() / scale
    }
}

impl Default for WebPlatform {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::WebPlatform;

    #[test]
    fn snaps_to_device_pixels() {
        let retina = WebPlatform::new(2.0);
        assert_eq!(retina.snap(-150.3), -150.5);
        assert_eq!(retina.snap(-150.2), -150.0);
        assert_eq!(WebPlatform::default().snap(-299.6), -300.0);
    }

    #[test]
    fn nonsense_scale_falls_back_to_one() {
        assert_eq!(WebPlatform::new(0.0).scale_factor(), 1.0);
        let mut platform = WebPlatform::default();
        platform.set_scale_factor(-3.0);
        assert_eq!(platform.scale_factor(), 1.0);
        assert_eq!(platform.pointer_x(42.0), 42.0);
    }
}
