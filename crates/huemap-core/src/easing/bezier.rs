//! Cubic-Bézier easing evaluation and sampling-based inversion.
//!
//! Curves are CSS-style timing functions: the endpoints are pinned at
//! (0,0) and (1,1) and only the two interior control points vary.
//! Written in the one-dimensional polynomial form, each component is
//! ```text
//! B(t) = ((A·t + B)·t + C)·t
//!   C = 3·p1
//!   B = 3·p2 − 6·p1
//!   A = 1 − C − B
//! ```
//! where `p1`/`p2` are the interior control values for that component.
//!
//! # Complexity
//! - Evaluate: O(1) — a fixed 4-iteration Newton–Raphson solve plus one
//!   polynomial evaluation.
//! - Invert: O(1) — a fixed 1001-point uniform scan.

use serde::{Deserialize, Serialize};

/// Number of uniform steps used by [`CubicBezier::invert`].
///
/// 1000 steps over `[0,1]` inclusive bounds the inversion error at one
/// sampling step for monotonic curves while staying far below a
/// display-frame budget, so inversion can run on every drag update.
pub const INVERT_SAMPLES: u32 = 1000;

/// Fixed Newton–Raphson iteration budget for the horizontal solve.
///
/// Practical easing curves converge within four iterations; there is no
/// convergence check beyond the zero-slope guard.
pub const NEWTON_ITERATIONS: u32 = 4;

/// A cubic Bézier timing curve defined by its two interior control points.
///
/// Control points are typically inside `[0,1]` but this is not enforced.
/// The value is immutable once constructed; evaluation is pure and safe
/// to call from any thread.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    /// First control point, horizontal.
    pub x1: f32,
    /// First control point, vertical.
    pub y1: f32,
    /// Second control point, horizontal.
    pub x2: f32,
    /// Second control point, vertical.
    pub y2: f32,
}

impl CubicBezier {
    /// Construct a curve from its four control-point coordinates.
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// The linear curve. Equivalent to any curve where `x1 == y1 && x2 == y2`.
    pub const LINEAR: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    /// True when both control points sit on the diagonal, making the
    /// curve the identity function.
    pub fn is_identity(&self) -> bool {
        self.x1 == self.y1 && self.x2 == self.y2
    }

    /// Evaluate the curve as a function of its horizontal coordinate:
    /// returns the vertical value at the parameter where the horizontal
    /// component equals `x`.
    ///
    /// `x` is expected in `[0,1]` but is not clamped; out-of-domain input
    /// yields a mathematically defined (possibly out-of-range) output
    /// that callers must clamp before use in a color channel.
    ///
    /// Identity curves short-circuit to `x` exactly — the general path
    /// would accumulate floating error near the diagonal.
    pub fn evaluate(&self, x: f32) -> f32 {
        if self.is_identity() {
            return x;
        }
        component(self.t_for_x(x), self.y1, self.y2)
    }

    /// Solve `evaluate(t) ≈ value` by uniform sampling.
    ///
    /// Scans `t` at [`INVERT_SAMPLES`] steps over `[0,1]` inclusive and
    /// returns the first sampled `t` whose evaluated output has minimal
    /// absolute difference from `value`. First-wins tie-breaking is
    /// stable for the monotonic curves easing is built from; a
    /// non-monotonic curve yields a deterministic but arbitrary branch.
    pub fn invert(&self, value: f32) -> f32 {
        let mut best_diff = f32::INFINITY;
        let mut best_t = 0.0;
        for i in 0..=INVERT_SAMPLES {
            let t = i as f32 / INVERT_SAMPLES as f32;
            let diff = (self.evaluate(t) - value).abs();
            if diff < best_diff {
                best_diff = diff;
                best_t = t;
            }
        }
        best_t
    }

    /// Newton–Raphson solve for the parameter whose horizontal component
    /// equals `x`. Fixed iteration count; a slope of exactly zero
    /// terminates early rather than dividing by zero.
    fn t_for_x(&self, x: f32) -> f32 {
        let mut guess = x;
        for _ in 0..NEWTON_ITERATIONS {
            let current_slope = slope(guess, self.x1, self.x2);
            if current_slope == 0.0 {
                return guess;
            }
            guess -= (component(guess, self.x1, self.x2) - x) / current_slope;
        }
        guess
    }
}

/// Polynomial coefficients for one component with endpoints pinned at 0 and 1.
fn coefficients(p1: f32, p2: f32) -> (f32, f32, f32) {
    let c = 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let a = 1.0 - c - b;
    (a, b, c)
}

/// One Bézier component at parameter `t` — x(t) given `x1,x2`, or y(t)
/// given `y1,y2`.
fn component(t: f32, p1: f32, p2: f32) -> f32 {
    let (a, b, c) = coefficients(p1, p2);
    ((a * t + b) * t + c) * t
}

/// Derivative of one component with respect to `t`.
fn slope(t: f32, p1: f32, p2: f32) -> f32 {
    let (a, b, c) = coefficients(p1, p2);
    (3.0 * a * t + 2.0 * b) * t + c
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Default value-axis curve shipped by the picker surface.
    const DEFAULT: CubicBezier = CubicBezier::new(0.6, 0.96, 0.61, 1.0);

    #[test]
    fn test_identity_curve_is_exact_passthrough() {
        let curve = CubicBezier::new(0.25, 0.25, 0.75, 0.75);
        for i in 0..=100 {
            let t = i as f32 / 100.0;
            assert_eq!(curve.evaluate(t), t, "identity must not drift at t={t}");
        }
    }

    #[test]
    fn test_linear_constant_is_identity() {
        assert!(CubicBezier::LINEAR.is_identity());
        assert_eq!(CubicBezier::LINEAR.evaluate(0.37), 0.37);
    }

    #[test]
    fn test_default_curve_endpoints() {
        assert!(DEFAULT.evaluate(0.0).abs() < 1e-6);
        assert!((DEFAULT.evaluate(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_default_curve_is_monotonic_over_samples() {
        let mut prev = DEFAULT.evaluate(0.0);
        for i in 1..=1000 {
            let y = DEFAULT.evaluate(i as f32 / 1000.0);
            assert!(
                y >= prev - 1e-6,
                "expected monotonic output, step {i}: {y} < {prev}"
            );
            prev = y;
        }
    }

    #[test]
    fn test_invert_half_lands_within_sampling_step() {
        let t = DEFAULT.invert(0.5);
        let y = DEFAULT.evaluate(t);
        assert!(
            (y - 0.5).abs() <= 1.0 / INVERT_SAMPLES as f32,
            "evaluate(invert(0.5)) = {y}"
        );
    }

    #[test]
    fn test_inversion_error_bounded_across_targets() {
        for i in 0..=50 {
            let target = i as f32 / 50.0;
            let y = DEFAULT.evaluate(DEFAULT.invert(target));
            assert!(
                (y - target).abs() <= 1.0 / INVERT_SAMPLES as f32,
                "target {target}: got {y}"
            );
        }
    }

    #[test]
    fn test_invert_is_deterministic_for_non_monotonic_curve() {
        // Overshooting vertical control points make the output
        // non-monotonic; the scan must still pick one sample and pick
        // the same one every time.
        let curve = CubicBezier::new(1.0 / 3.0, 1.5, 2.0 / 3.0, -0.5);
        let first = curve.invert(0.5);
        assert_eq!(first, curve.invert(0.5));
        assert!((0.0..=1.0).contains(&first));
    }

    #[test]
    fn test_out_of_domain_input_stays_finite() {
        assert!(DEFAULT.evaluate(-0.5).is_finite());
        assert!(DEFAULT.evaluate(1.5).is_finite());
    }

    #[test]
    fn test_curve_serde_round_trip() {
        let json = serde_json::to_string(&DEFAULT).unwrap();
        let back: CubicBezier = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DEFAULT);
    }
}
