//! Sticky side panel (booking summary next to long page content).
//!
//! The panel sticks below the header while its container scrolls past and
//! parks at the container's bottom edge instead of overlapping the footer.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct StickyConfig {
    /// Distance from the viewport top while stuck (header height).
    pub top_offset: f32,
    /// Below this viewport width the panel stays in normal flow.
    pub min_viewport_width: f32,
}

impl Default for StickyConfig {
    fn default() -> Self {
        Self {
            top_offset: 96.0,
            min_viewport_width: 1_024.0,
        }
    }
}

/// Layout snapshot in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickyLayout {
    pub scroll_y: f32,
    pub viewport_width: f32,
    pub container_top: f32,
    pub container_height: f32,
    pub panel_height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StickyPosition {
    /// Normal flow.
    Static,
    /// `position: fixed` at `top` px.
    Stuck { top: f32 },
    /// Absolutely positioned `offset` px below the container top.
    Pinned { offset: f32 },
}

impl StickyConfig {
    pub fn position(&self, layout: StickyLayout) -> StickyPosition {
        if layout.viewport_width < self.min_viewport_width
            || layout.panel_height >= layout.container_height
        {
            return StickyPosition::Static;
        }

        let stick_at = layout.container_top - self.top_offset;
        let park_at = stick_at + layout.container_height - layout.panel_height;

        if layout.scroll_y < stick_at {
            StickyPosition::Static
        } else if layout.scroll_y >= park_at {
            StickyPosition::Pinned {
                offset: layout.container_height - layout.panel_height,
            }
        } else {
            StickyPosition::Stuck {
                top: self.top_offset,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(scroll_y: f32) -> StickyLayout {
        StickyLayout {
            scroll_y,
            viewport_width: 1_280.0,
            container_top: 600.0,
            container_height: 2_000.0,
            panel_height: 500.0,
        }
    }

    #[test]
    fn follows_the_container() {
        let config = StickyConfig::default();
        assert_eq!(config.position(layout(0.0)), StickyPosition::Static);
        assert_eq!(
            config.position(layout(504.0)),
            StickyPosition::Stuck { top: 96.0 }
        );
        assert_eq!(
            config.position(layout(2_004.0)),
            StickyPosition::Pinned { offset: 1_500.0 }
        );
    }

    #[test]
    fn narrow_viewports_stay_static() {
        let config = StickyConfig::default();
        let narrow = StickyLayout {
            viewport_width: 768.0,
            ..layout(1_000.0)
        };
        assert_eq!(config.position(narrow), StickyPosition::Static);
    }

    #[test]
    fn panel_taller_than_container_stays_static() {
        let config = StickyConfig::default();
        let tall = StickyLayout {
            panel_height: 2_400.0,
            ..layout(1_000.0)
        };
        assert_eq!(config.position(tall), StickyPosition::Static);
    }
}
