//! Robot-style driver for carousel gestures.
//!
//! # Example
//!
//! ```
//! use soiree_foundation::{CardGeometry, Carousel, CarouselConfig};
//! use soiree_testing::robot::GestureRobot;
//!
//! let carousel = Carousel::new(CardGeometry::new(280.0, 20.0, 7, 3), CarouselConfig::default());
//! let mut robot = GestureRobot::new(carousel);
//!
//! robot.drag(-450.0, 4_500.0);
//! robot.wait_for_idle();
//! assert_eq!(robot.carousel().index(), 2);
//! ```

use soiree_foundation::{CardGeometry, Carousel, CarouselPhase};

/// Default frame interval, one 60Hz display refresh.
pub const FRAME_MS: f64 = 16.0;

/// Upper bound for [`GestureRobot::wait_for_idle`].
const MAX_IDLE_FRAMES: usize = 10_000;

pub struct GestureRobot {
    carousel: Carousel,
    now_ms: f64,
    pointer_x: f32,
    frame_ms: f64,
}

impl GestureRobot {
    pub fn new(carousel: Carousel) -> Self {
        Self {
            carousel,
            now_ms: 0.0,
            pointer_x: 0.0,
            frame_ms: FRAME_MS,
        }
    }

    pub fn with_frame_interval(mut self, frame_ms: f64) -> Self {
        self.frame_ms = frame_ms.max(1.0);
        self
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    pub fn now(&self) -> f64 {
        self.now_ms
    }

    pub fn pointer_x(&self) -> f32 {
        self.pointer_x
    }

    /// Presses at `x` without advancing time.
    pub fn press(&mut self, x: f32) -> &mut Self {
        self.pointer_x = x;
        self.carousel.pointer_down(x, self.now_ms);
        self
    }

    /// Moves the pointer by `dx` at constant speed over `duration_ms`, one
    /// sample per frame.
    pub fn move_by(&mut self, dx: f32, duration_ms: f64) -> &mut Self {
        let frames = (duration_ms / self.frame_ms).ceil().max(1.0) as usize;
        let start_x = self.pointer_x;
        let start_ms = self.now_ms;
        for frame in 1..=frames {
            let fraction = frame as f64 / frames as f64;
            self.now_ms = start_ms + duration_ms * fraction;
            self.pointer_x = start_x + dx * fraction as f32;
            self.carousel.pointer_move(self.pointer_x, self.now_ms);
        }
        self
    }

    /// Keeps the pointer still; time passes but no move events fire.
    pub fn hold(&mut self, duration_ms: f64) -> &mut Self {
        self.now_ms += duration_ms;
        self
    }

    pub fn release(&mut self) -> Option<usize> {
        self.carousel.pointer_up(self.now_ms)
    }

    /// Press, move, release from the current pointer position.
    pub fn drag(&mut self, dx: f32, duration_ms: f64) -> Option<usize> {
        let x = self.pointer_x;
        self.press(x).move_by(dx, duration_ms);
        let target = self.release();
        log::trace!("robot drag {dx}px/{duration_ms}ms -> {target:?}");
        target
    }

    pub fn tap_dot(&mut self, index: usize) -> usize {
        self.carousel.select(index, self.now_ms)
    }

    /// Runs animation frames for `duration_ms`. Returns the last rendered
    /// offset.
    pub fn advance(&mut self, duration_ms: f64) -> f32 {
        let end = self.now_ms + duration_ms;
        while self.now_ms < end {
            self.now_ms = (self.now_ms + self.frame_ms).min(end);
            self.carousel.tick(self.now_ms);
        }
        self.carousel.offset()
    }

    /// Advances frame by frame until the carousel is idle.
    pub fn wait_for_idle(&mut self) {
        for _ in 0..MAX_IDLE_FRAMES {
            if self.carousel.phase() != CarouselPhase::Settling {
                return;
            }
            self.advance(self.frame_ms);
        }
        panic!("carousel still settling after {MAX_IDLE_FRAMES} frames");
    }

    /// Simulates a window resize to `geometry`: the resize event fires now,
    /// the new layout is applied once the debounce elapses.
    pub fn resize(&mut self, geometry: CardGeometry) -> f32 {
        self.carousel.on_resize(self.now_ms);
        let delay = self.carousel.resize_debounce_ms();
        self.advance(delay);
        if self.carousel.poll_relayout(self.now_ms) {
            self.carousel.relayout(geometry);
        }
        self.carousel.offset()
    }
}
