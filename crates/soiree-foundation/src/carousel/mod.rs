//! Draggable card carousel.
//!
//! A fixed strip of cards shows `cards_per_view` at a time and advances one
//! card per slide. The carousel is a three-state machine:
//!
//! - `Idle`: the offset sits exactly on a slide boundary.
//! - `Dragging`: the offset follows the pointer, with resistance past the ends.
//! - `Settling`: a tween carries the offset to the chosen slide.
//!
//! Every input is a method taking an explicit timestamp, so the same type
//! drives the DOM glue and the headless tests.

mod config;
mod geometry;

pub use config::CarouselConfig;
pub use geometry::CardGeometry;

use soiree_animation::Tween;

use crate::debounce::Debouncer;
use crate::velocity::{PointerSample, VelocitySampler};

/// Observable phase of a [`Carousel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselPhase {
    Idle,
    Dragging,
    Settling,
}

/// Transient record of one drag, pointer-down to pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragGesture {
    start_x: f32,
    start_offset: f32,
    sampler: VelocitySampler,
}

#[derive(Debug, Clone, PartialEq)]
enum Motion {
    Idle,
    Dragging(DragGesture),
    Settling(Tween),
}

pub struct Carousel {
    config: CarouselConfig,
    geometry: CardGeometry,
    index: usize,
    offset: f32,
    motion: Motion,
    resize: Debouncer,
}

impl Carousel {
    pub fn new(geometry: CardGeometry, config: CarouselConfig) -> Self {
        Self {
            resize: Debouncer::new(config.resize_debounce_ms),
            config,
            geometry,
            index: 0,
            offset: 0.0,
            motion: Motion::Idle,
        }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn geometry(&self) -> CardGeometry {
        self.geometry
    }

    /// The settled (or settling-to) slide.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Live track translation in px.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn phase(&self) -> CarouselPhase {
        match self.motion {
            Motion::Idle => CarouselPhase::Idle,
            Motion::Dragging(_) => CarouselPhase::Dragging,
            Motion::Settling(_) => CarouselPhase::Settling,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.motion, Motion::Dragging(_))
    }

    pub fn is_settling(&self) -> bool {
        matches!(self.motion, Motion::Settling(_))
    }

    /// Current drag velocity in px/ms, if a drag is active.
    pub fn drag_velocity(&self) -> Option<f32> {
        match &self.motion {
            Motion::Dragging(gesture) => Some(gesture.sampler.velocity()),
            _ => None,
        }
    }

    /// One pagination dot per settled position.
    pub fn dot_count(&self) -> usize {
        self.geometry.total_slides()
    }

    /// Replaces the measured geometry without moving the track.
    ///
    /// The index is clamped when the new layout has fewer slides.
    pub fn set_geometry(&mut self, geometry: CardGeometry) {
        self.geometry = geometry;
        self.index = self.index.min(geometry.last_index());
    }

    /// Begins a drag. Any settle in flight is abandoned where it stands.
    pub fn pointer_down(&mut self, x: f32, time_ms: f64) {
        if matches!(self.motion, Motion::Settling(_)) {
            log::trace!("drag interrupts settle at offset {}", self.offset);
        }
        self.motion = Motion::Dragging(DragGesture {
            start_x: x,
            start_offset: self.offset,
            sampler: VelocitySampler::start(PointerSample::new(x, time_ms)),
        });
    }

    /// Follows the pointer. Returns the new offset, or `None` when no drag is
    /// active.
    pub fn pointer_move(&mut self, x: f32, time_ms: f64) -> Option<f32> {
        let Motion::Dragging(gesture) = &mut self.motion else {
            return None;
        };
        gesture.sampler.push(PointerSample::new(x, time_ms));
        let candidate = gesture.start_offset + (x - gesture.start_x);
        self.offset = self.resist(candidate);
        Some(self.offset)
    }

    /// Ends the drag and starts settling. Returns the target slide.
    pub fn pointer_up(&mut self, time_ms: f64) -> Option<usize> {
        let Motion::Dragging(gesture) = &self.motion else {
            return None;
        };
        let velocity = self.release_velocity(gesture, time_ms);
        let target = self.release_target(self.offset, velocity);
        log::debug!(
            "carousel release at {:.1}px, {:.3}px/ms -> slide {}",
            self.offset,
            velocity,
            target
        );
        self.settle_to(target, time_ms);
        Some(target)
    }

    /// Aborted gesture (e.g. `touchcancel`): settle on the nearest slide and
    /// ignore the momentum.
    pub fn pointer_cancel(&mut self, time_ms: f64) -> Option<usize> {
        if !self.is_dragging() {
            return None;
        }
        let target = self.geometry.nearest_index(self.offset);
        self.settle_to(target, time_ms);
        Some(target)
    }

    /// Pagination dot click: jump to `index` from any state.
    pub fn select(&mut self, index: usize, time_ms: f64) -> usize {
        let target = index.min(self.geometry.last_index());
        self.settle_to(target, time_ms);
        target
    }

    /// Advances a settle. Returns the offset to render, or `None` when
    /// nothing is animating.
    pub fn tick(&mut self, now_ms: f64) -> Option<f32> {
        let Motion::Settling(tween) = &mut self.motion else {
            return None;
        };
        let sample = tween.sample(now_ms);
        self.offset = sample.value;
        if sample.finished {
            self.motion = Motion::Idle;
        }
        Some(self.offset)
    }

    /// Completes a settle immediately, e.g. on `transitionend`.
    pub fn finish_settle(&mut self) {
        if let Motion::Settling(tween) = &self.motion {
            self.offset = tween.target();
            self.motion = Motion::Idle;
        }
    }

    /// Records a viewport resize; the re-snap waits for the debounce.
    pub fn on_resize(&mut self, now_ms: f64) {
        self.resize.trigger(now_ms);
    }

    pub fn resize_pending(&self) -> bool {
        self.resize.is_pending()
    }

    pub fn resize_debounce_ms(&self) -> f64 {
        self.resize.delay_ms()
    }

    /// True once the resize quiet period is over; the caller should then
    /// re-measure and call [`Carousel::relayout`].
    pub fn poll_relayout(&mut self, now_ms: f64) -> bool {
        self.resize.poll(now_ms)
    }

    /// Applies a fresh geometry and snaps the track to the current slide.
    ///
    /// A drag in progress keeps tracking the pointer; it will settle against
    /// the new geometry on release.
    pub fn relayout(&mut self, geometry: CardGeometry) -> f32 {
        self.set_geometry(geometry);
        if !self.is_dragging() {
            self.offset = self.geometry.offset_for(self.index);
            self.motion = Motion::Idle;
        }
        self.offset
    }

    fn resist(&self, candidate: f32) -> f32 {
        let max = 0.0;
        let min = self.geometry.min_offset();
        if candidate > max {
            max + (candidate - max) * self.config.resistance
        } else if candidate < min {
            min + (candidate - min) * self.config.resistance
        } else {
            candidate
        }
    }

    /// Speed at release. A pointer that has not moved within the velocity
    /// window is at rest, whatever its last recorded speed was.
    fn release_velocity(&self, gesture: &DragGesture, time_ms: f64) -> f32 {
        match gesture.sampler.last_sample() {
            Some(last) if time_ms - last.time_ms > self.config.velocity_window_ms => {
                log::trace!(
                    "pointer still for {:.0}ms before release, momentum dropped",
                    time_ms - last.time_ms
                );
                0.0
            }
            _ => gesture.sampler.velocity(),
        }
    }

    fn release_target(&self, offset: f32, velocity: f32) -> usize {
        let nearest = self.geometry.nearest_index(offset);
        if velocity.abs() <= self.config.flick_threshold {
            return nearest;
        }
        // Dragging left moves the track negative and reveals later cards.
        if velocity < 0.0 && nearest < self.geometry.last_index() {
            nearest + 1
        } else if velocity > 0.0 && nearest > 0 {
            nearest - 1
        } else {
            nearest
        }
    }

    fn settle_to(&mut self, index: usize, now_ms: f64) {
        self.index = index;
        let target = self.geometry.offset_for(index);
        if (self.offset - target).abs() < f32::EPSILON {
            self.offset = target;
            self.motion = Motion::Idle;
            return;
        }
        self.motion = Motion::Settling(Tween::starting_at(
            self.offset,
            target,
            self.config.settle_spec(),
            now_ms,
        ));
    }
}

#[cfg(test)]
#[path = "../tests/carousel_tests.rs"]
mod tests;
