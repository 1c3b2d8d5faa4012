/// Card layout measured from the page.
///
/// Widths change across responsive breakpoints, so a geometry is a snapshot:
/// the owner re-measures and replaces it rather than caching it forever.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardGeometry {
    card_width: f32,
    gap: f32,
    card_count: usize,
    cards_per_view: usize,
}

impl CardGeometry {
    /// `cards_per_view` is clamped to `[1, card_count]`.
    pub fn new(card_width: f32, gap: f32, card_count: usize, cards_per_view: usize) -> Self {
        Self {
            card_width: card_width.max(0.0),
            gap: gap.max(0.0),
            card_count,
            cards_per_view: cards_per_view.clamp(1, card_count.max(1)),
        }
    }

    /// Derives how many cards fit in `viewport_width`.
    ///
    /// The last card has no trailing gap, hence the `+ gap`. Rounding absorbs
    /// the sub-pixel widths browsers report for fractional layouts.
    pub fn measure(viewport_width: f32, card_width: f32, gap: f32, card_count: usize) -> Self {
        let step = card_width + gap;
        let cards_per_view = if step > 0.0 {
            ((viewport_width + gap) / step).round().max(1.0) as usize
        } else {
            1
        };
        Self::new(card_width, gap, card_count, cards_per_view)
    }

    pub fn card_width(&self) -> f32 {
        self.card_width
    }

    pub fn gap(&self) -> f32 {
        self.gap
    }

    pub fn card_count(&self) -> usize {
        self.card_count
    }

    pub fn cards_per_view(&self) -> usize {
        self.cards_per_view
    }

    /// Card-step: the distance of one slide advance.
    pub fn step(&self) -> f32 {
        self.card_width + self.gap
    }

    /// Number of settled positions, one card at a time.
    pub fn total_slides(&self) -> usize {
        if self.card_count == 0 {
            return 0;
        }
        self.card_count.saturating_sub(self.cards_per_view) + 1
    }

    pub fn last_index(&self) -> usize {
        self.total_slides().saturating_sub(1)
    }

    /// Offset of the last slide; the track never rests further left.
    pub fn min_offset(&self) -> f32 {
        -(self.step() * self.last_index() as f32)
    }

    pub fn offset_for(&self, index: usize) -> f32 {
        -(self.step() * index.min(self.last_index()) as f32)
    }

    /// Nearest slide to `offset`.
    ///
    /// Ties round to even, so an exact half step from slide 0 stays on 0
    /// while a step and a half lands on 2.
    pub fn nearest_index(&self, offset: f32) -> usize {
        let step = self.step();
        if step <= 0.0 {
            return 0;
        }
        let raw = (-offset / step).round_ties_even();
        if raw <= 0.0 {
            0
        } else {
            (raw as usize).min(self.last_index())
        }
    }

    /// True when there is nothing to slide.
    pub fn is_empty(&self) -> bool {
        self.card_count == 0 || self.step() <= 0.0
    }
}
