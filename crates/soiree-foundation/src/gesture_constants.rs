//! Shared gesture tuning for the carousel.
//!
//! These were tuned by feel against the site's card sizes. They are defaults
//! for [`CarouselConfig`](crate::carousel::CarouselConfig); pages that need a
//! different feel override them there rather than editing these values.

/// Fraction of the drag distance applied once the track is pushed past an
/// edge. Produces the rubber-band feel instead of a hard stop.
pub const EDGE_RESISTANCE: f32 = 0.3;

/// Release speed, in px/ms, above which a drag counts as a flick and the
/// carousel advances one extra card in the direction of travel.
pub const FLICK_VELOCITY_THRESHOLD: f32 = 0.2;

/// Duration of the animated snap back to a card boundary.
pub const SETTLE_DURATION_MS: f64 = 400.0;

/// Quiet period after the last window resize before the track is re-measured
/// and re-snapped.
pub const RESIZE_DEBOUNCE_MS: f64 = 250.0;

/// Longest pause between the last pointer move and the release for the
/// drag's speed to still count. A pointer held still longer releases at rest.
pub const RELEASE_VELOCITY_WINDOW_MS: f64 = 100.0;
