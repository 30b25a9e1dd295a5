//! 1-D mapping for slider-style controls (hue, brightness).

use serde::{Deserialize, Serialize};

use crate::mapping::axis::AxisMapping;

/// Mapping between a horizontal slider position and a single channel
/// value, optionally shaped through an axis curve.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SliderMapping {
    /// The channel axis. Linear by default.
    pub axis: AxisMapping,
}

impl SliderMapping {
    /// Linear slider.
    pub const LINEAR: Self = Self {
        axis: AxisMapping::LINEAR,
    };

    /// Slider shaped through `axis`.
    pub const fn with_axis(axis: AxisMapping) -> Self {
        Self { axis }
    }

    /// Channel value for a position in `[0, width]`.
    ///
    /// Zero (or negative) width returns `0.0` — never NaN — matching
    /// the not-yet-laid-out fallback of the 2-D surface.
    pub fn value_at(&self, x: f32, width: f32) -> f32 {
        if width <= 0.0 {
            return 0.0;
        }
        let value = self.axis.apply(x / width);
        if value.is_finite() { value } else { 0.0 }
    }

    /// Position in `[0, width]` for a channel value.
    pub fn position_for(&self, value: f32, width: f32) -> f32 {
        if width <= 0.0 {
            return 0.0;
        }
        let x = self.axis.invert(value) * width;
        if x.is_finite() { x } else { 0.0 }
    }
}

/// Hue for a slider position. Hue sliders are linear in every observed
/// configuration, but the operation is named so a curve can be attached
/// later without changing call sites.
pub fn hue_at(x: f32, width: f32) -> f32 {
    SliderMapping::LINEAR.value_at(x, width)
}

/// Slider position for a hue. Inverse of [`hue_at`].
pub fn position_for_hue(hue: f32, width: f32) -> f32 {
    SliderMapping::LINEAR.position_for(hue, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::CubicBezier;

    #[test]
    fn test_hue_slider_is_linear() {
        assert_eq!(hue_at(70.0, 280.0), 0.25);
        assert_eq!(position_for_hue(0.25, 280.0), 70.0);
    }

    #[test]
    fn test_zero_width_is_safe() {
        assert_eq!(hue_at(50.0, 0.0), 0.0);
        assert_eq!(position_for_hue(0.5, 0.0), 0.0);
        assert!(SliderMapping::LINEAR.value_at(50.0, 0.0).is_finite());
    }

    #[test]
    fn test_curved_slider_round_trip() {
        let slider =
            SliderMapping::with_axis(AxisMapping::with_curve(CubicBezier::new(0.6, 0.96, 0.61, 1.0)));
        let x = slider.position_for(0.5, 100.0);
        let back = slider.value_at(x, 100.0);
        assert!((back - 0.5).abs() <= 0.002, "got {back}");
    }
}
