//! Scroll-linked sliding text rows.

use serde::Deserialize;

/// Travel of the two rows, in px.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParallaxRows {
    /// The first row moves from 0 to `first_travel` (leftwards when negative).
    pub first_travel: f32,
    /// The second row starts here...
    pub second_start: f32,
    /// ...and moves this far as the section scrolls through.
    pub second_travel: f32,
}

impl Default for ParallaxRows {
    fn default() -> Self {
        Self {
            first_travel: -200.0,
            second_start: -400.0,
            second_travel: 200.0,
        }
    }
}

impl ParallaxRows {
    /// How far the section has travelled through the viewport, in `[0, 1]`.
    ///
    /// 0 when its top edge is at the bottom of the viewport, 1 when its
    /// bottom edge has left through the top.
    pub fn progress(viewport_height: f32, section_top: f32, section_height: f32) -> f32 {
        let span = viewport_height + section_height;
        if span <= 0.0 {
            return 0.0;
        }
        ((viewport_height - section_top) / span).clamp(0.0, 1.0)
    }

    /// `translateX` values for both rows at `progress`.
    pub fn offsets(&self, progress: f32) -> (f32, f32) {
        let progress = progress.clamp(0.0, 1.0);
        (
            progress * self.first_travel,
            self.second_start + progress * self.second_travel,
        )
    }
}

/// Coalesces scroll events into at most one update per animation frame, and
/// none while the section is off screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameThrottle {
    ticking: bool,
    in_viewport: bool,
}

impl FrameThrottle {
    pub fn new(in_viewport: bool) -> Self {
        Self {
            ticking: false,
            in_viewport,
        }
    }

    pub fn set_in_viewport(&mut self, in_viewport: bool) {
        self.in_viewport = in_viewport;
    }

    pub fn in_viewport(&self) -> bool {
        self.in_viewport
    }

    /// Scroll event: returns true if a frame should be requested.
    pub fn request(&mut self) -> bool {
        if self.ticking || !self.in_viewport {
            return false;
        }
        self.ticking = true;
        true
    }

    /// Frame callback: returns true if the update should run.
    pub fn frame(&mut self) -> bool {
        self.ticking = false;
        self.in_viewport
    }
}
