//! Mobile navigation drawer.

pub const DESKTOP_BREAKPOINT_PX: f32 = 900.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MobileNav {
    open: bool,
    breakpoint_px: f32,
}

impl MobileNav {
    pub fn new(breakpoint_px: f32) -> Self {
        Self {
            open: false,
            breakpoint_px,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Value for the toggle button's `aria-expanded`.
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Returns true if the drawer was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Following a link inside the drawer closes it.
    pub fn on_link_click(&mut self) -> bool {
        self.close()
    }

    pub fn on_key(&mut self, key: &str) -> bool {
        key == "Escape" && self.close()
    }

    /// Growing past the breakpoint shows the desktop menu; the drawer (and
    /// its scroll lock) must not linger.
    pub fn on_resize(&mut self, viewport_width: f32) -> bool {
        viewport_width >= self.breakpoint_px && self.close()
    }
}

impl Default for MobileNav {
    fn default() -> Self {
        Self::new(DESKTOP_BREAKPOINT_PX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_syncs_aria() {
        let mut nav = MobileNav::default();
        assert_eq!(nav.aria_expanded(), "false");
        assert!(nav.toggle());
        assert_eq!(nav.aria_expanded(), "true");
        assert!(!nav.toggle());
    }

    #[test]
    fn link_click_and_escape_close() {
        let mut nav = MobileNav::default();
        nav.toggle();
        assert!(nav.on_link_click());
        assert!(!nav.on_link_click());

        nav.toggle();
        assert!(!nav.on_key("Tab"));
        assert!(nav.on_key("Escape"));
        assert!(!nav.is_open());
    }

    #[test]
    fn widening_past_breakpoint_closes() {
        let mut nav = MobileNav::new(900.0);
        nav.toggle();
        assert!(!nav.on_resize(600.0));
        assert!(nav.is_open());
        assert!(nav.on_resize(1_024.0));
        assert!(!nav.is_open());
    }
}
