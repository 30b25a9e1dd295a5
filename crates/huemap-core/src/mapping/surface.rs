//! 2-D surface mapping: marker position ⇄ saturation/value pair.
//!
//! The picker surface runs saturation along the horizontal axis (left
//! to right) and value along the vertical axis, inverted so that "up"
//! means "brighter". Hue is owned by a separate slider and passes
//! through this mapping untouched.

use serde::{Deserialize, Serialize};

use crate::color::HsvColor;
use crate::easing::CubicBezier;
use crate::geometry::{Point, Size};
use crate::mapping::axis::AxisMapping;

/// Default easing for the value axis.
///
/// Biases the surface toward bright colors so the useful part of the
/// gradient occupies more vertical travel. Tuned by eye; kept as the
/// documented default.
pub const DEFAULT_VALUE_CURVE: CubicBezier = CubicBezier::new(0.6, 0.96, 0.61, 1.0);

/// Bidirectional mapping between a surface point and an HSV color's
/// saturation/value pair, with an independent [`AxisMapping`] per axis.
///
/// All operations are pure; defaults are explicit configuration rather
/// than process-wide state, so two pickers can carry different curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceMapping {
    /// Horizontal axis → saturation.
    pub saturation: AxisMapping,
    /// Vertical axis (inverted) → value.
    pub value: AxisMapping,
}

impl Default for SurfaceMapping {
    /// Linear saturation, [`DEFAULT_VALUE_CURVE`] on the value axis.
    fn default() -> Self {
        Self {
            saturation: AxisMapping::LINEAR,
            value: AxisMapping::with_curve(DEFAULT_VALUE_CURVE),
        }
    }
}

impl SurfaceMapping {
    /// Mapping with no curve on either axis.
    pub const fn linear() -> Self {
        Self {
            saturation: AxisMapping::LINEAR,
            value: AxisMapping::LINEAR,
        }
    }

    /// Map a surface point (already clamped to the surface bounds by
    /// the caller) to an HSV color. `hue` passes through unchanged.
    ///
    /// An empty `size` — the widget has not been laid out — returns the
    /// neutral `(hue, 0, 0)` rather than dividing by zero, and any
    /// non-finite result from a degenerate input is replaced the same way.
    pub fn color_at(&self, point: Point, size: Size, hue: f32) -> HsvColor {
        if size.is_empty() {
            return HsvColor::new(hue, 0.0, 0.0);
        }

        let s = self.saturation.apply(point.x / size.width);
        // Low on screen means dark, so the vertical axis is inverted.
        let v = self.value.apply(1.0 - point.y / size.height);

        if s.is_finite() && v.is_finite() {
            HsvColor::new(hue, s, v)
        } else {
            HsvColor::new(hue, 0.0, 0.0)
        }
    }

    /// Inverse of [`color_at`](Self::color_at): the surface point whose
    /// mapped color matches `color`, up to the curve inversion's
    /// sampling resolution.
    pub fn point_for(&self, color: HsvColor, size: Size) -> Point {
        if size.is_empty() {
            return Point::ZERO;
        }

        let point = Point::new(
            self.saturation.invert(color.s) * size.width,
            (1.0 - self.value.invert(color.v)) * size.height,
        );

        if point.is_finite() { point } else { Point::ZERO }
    }
}
