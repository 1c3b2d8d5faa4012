//! Easing curves.
//!
//! The named curves mirror the CSS keywords the site stylesheet uses, so a
//! settle driven from Rust looks the same as one driven by a CSS transition.

/// A CSS-style `cubic-bezier(x1, y1, x2, y2)` timing function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Maps a linear time fraction to eased progress.
    pub fn solve(&self, fraction: f32) -> f32 {
        if fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }

        let (ax, bx, cx) = coefficients(self.x1, self.x2);
        let (ay, by, cy) = coefficients(self.y1, self.y2);

        let t = solve_parameter(ax, bx, cx, fraction);
        polynomial(ay, by, cy, t)
    }
}

/// Polynomial coefficients for one axis of a bezier anchored at 0 and 1.
fn coefficients(p1: f32, p2: f32) -> (f32, f32, f32) {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    (a, b, c)
}

fn polynomial(a: f32, b: f32, c: f32, t: f32) -> f32 {
    ((a * t + b) * t + c) * t
}

fn derivative(a: f32, b: f32, c: f32, t: f32) -> f32 {
    (3.0 * a * t + 2.0 * b) * t + c
}

/// Finds the curve parameter whose x equals `x`.
///
/// Newton-Raphson first; bisection when the slope flattens out.
fn solve_parameter(a: f32, b: f32, c: f32, x: f32) -> f32 {
    const EPSILON: f32 = 1e-6;

    let mut t = x;
    for _ in 0..8 {
        let error = polynomial(a, b, c, t) - x;
        if error.abs() < EPSILON {
            return t;
        }
        let slope = derivative(a, b, c, t);
        if slope.abs() < EPSILON {
            break;
        }
        t = (t - error / slope).clamp(0.0, 1.0);
    }

    let (mut low, mut high) = (0.0f32, 1.0f32);
    t = x;
    for _ in 0..20 {
        let error = polynomial(a, b, c, t) - x;
        if error.abs() < EPSILON {
            break;
        }
        if error > 0.0 {
            high = t;
        } else {
            low = t;
        }
        t = 0.5 * (low + high);
    }
    t
}

/// Named easing curves.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
    /// Material "standard" curve, `cubic-bezier(0.4, 0, 0.2, 1)`.
    Standard,
    Custom(CubicBezier),
}

impl Easing {
    pub const EASE_IN: CubicBezier = CubicBezier::new(0.42, 0.0, 1.0, 1.0);
    pub const EASE_OUT: CubicBezier = CubicBezier::new(0.0, 0.0, 0.58, 1.0);
    pub const EASE_IN_OUT: CubicBezier = CubicBezier::new(0.42, 0.0, 0.58, 1.0);
    pub const STANDARD: CubicBezier = CubicBezier::new(0.4, 0.0, 0.2, 1.0);

    /// Apply the easing function to a linear fraction in `[0, 1]`.
    pub fn transform(&self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        match self {
            Easing::Linear => fraction,
            Easing::EaseIn => Self::EASE_IN.solve(fraction),
            Easing::EaseOut => Self::EASE_OUT.solve(fraction),
            Easing::EaseInOut => Self::EASE_IN_OUT.solve(fraction),
            Easing::Standard => Self::STANDARD.solve(fraction),
            Easing::Custom(curve) => curve.solve(fraction),
        }
    }

    /// The CSS `transition-timing-function` value for this curve.
    pub fn css(&self) -> String {
        let curve = match self {
            Easing::Linear => return "linear".to_string(),
            Easing::EaseIn => Self::EASE_IN,
            Easing::EaseOut => Self::EASE_OUT,
            Easing::EaseInOut => Self::EASE_IN_OUT,
            Easing::Standard => Self::STANDARD,
            Easing::Custom(curve) => *curve,
        };
        format!(
            "cubic-bezier({}, {}, {}, {})",
            curve.x1, curve.y1, curve.x2, curve.y2
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::Standard,
        ] {
            assert_eq!(easing.transform(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.transform(1.0), 1.0, "{easing:?}");
        }
    }

    #[test]
    fn ease_out_runs_ahead_of_linear() {
        let eased = Easing::EaseOut.transform(0.3);
        assert!(eased > 0.3, "expected ease-out ahead of linear, got {eased}");
    }

    #[test]
    fn ease_in_lags_behind_linear() {
        let eased = Easing::EaseIn.transform(0.3);
        assert!(eased < 0.3, "expected ease-in behind linear, got {eased}");
    }

    #[test]
    fn curves_are_monotonic() {
        let mut previous = 0.0;
        for step in 1..=100 {
            let value = Easing::Standard.transform(step as f32 / 100.0);
            assert!(value >= previous - 1e-4);
            previous = value;
        }
    }

    #[test]
    fn out_of_range_fractions_are_clamped() {
        assert_eq!(Easing::EaseInOut.transform(-0.5), 0.0);
        assert_eq!(Easing::EaseInOut.transform(1.5), 1.0);
    }

    #[test]
    fn css_names() {
        assert_eq!(Easing::Linear.css(), "linear");
        assert_eq!(Easing::Standard.css(), "cubic-bezier(0.4, 0, 0.2, 1)");
    }
}
