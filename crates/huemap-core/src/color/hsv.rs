//! HSV color value type and HSV ⇄ RGB conversion.

use serde::{Deserialize, Serialize};

use crate::color::rgb::Rgb;

/// A hue/saturation/value color.
///
/// Each component is conceptually in `[0,1]`; hue wraps (`1.0 ≡ 0.0`).
/// Construction performs no validation — UI callers clamp before they
/// get here, and out-of-range components give numerically well-defined
/// (if visually odd) results.
///
/// Equality is exact component-wise comparison. Change detection in the
/// picker state relies on this: "did the color actually change" must
/// never be answered with an epsilon.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HsvColor {
    /// Hue as a wrapped fraction of the full circle.
    pub h: f32,
    /// Saturation.
    pub s: f32,
    /// Value (brightness).
    pub v: f32,
}

impl HsvColor {
    /// Construct from components. No validation.
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Convert to RGB using the standard sector decomposition.
    ///
    /// Hue is wrapped into `[0,1)` first, so `h = 1.0` lands in the red
    /// sector exactly like `h = 0.0`.
    pub fn to_rgb(self) -> Rgb {
        let h = self.h.rem_euclid(1.0) * 6.0;
        let c = self.v * self.s;
        let x = c * (1.0 - ((h % 2.0) - 1.0).abs());
        let m = self.v - c;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Rgb::new(r + m, g + m, b + m)
    }

    /// Convert from RGB.
    ///
    /// Hue is undefined at zero chroma (gray): `prior_hue` is kept in
    /// that case rather than inventing one, so a picker that drags down
    /// to black and back does not lose its hue.
    pub fn from_rgb(rgb: Rgb, prior_hue: f32) -> Self {
        let max = rgb.r.max(rgb.g).max(rgb.b);
        let min = rgb.r.min(rgb.g).min(rgb.b);
        let delta = max - min;

        let h = if delta == 0.0 {
            prior_hue
        } else if max == rgb.r {
            ((rgb.g - rgb.b) / delta).rem_euclid(6.0) / 6.0
        } else if max == rgb.g {
            ((rgb.b - rgb.r) / delta + 2.0) / 6.0
        } else {
            ((rgb.r - rgb.g) / delta + 4.0) / 6.0
        };

        let s = if max == 0.0 { 0.0 } else { delta / max };

        Self { h, s, v: max }
    }
}
