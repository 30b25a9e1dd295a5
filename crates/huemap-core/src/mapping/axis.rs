//! Single-axis mapping between a normalized coordinate and an HSV channel.

use serde::{Deserialize, Serialize};

use crate::easing::CubicBezier;

/// Relationship between a normalized scalar coordinate and one HSV
/// channel, optionally shaped through a [`CubicBezier`]. Without a
/// curve the mapping is the identity.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisMapping {
    /// Optional easing curve. `None` means linear.
    pub curve: Option<CubicBezier>,
}

impl AxisMapping {
    /// The identity mapping.
    pub const LINEAR: Self = Self { curve: None };

    /// Mapping shaped through `curve`.
    pub const fn with_curve(curve: CubicBezier) -> Self {
        Self { curve: Some(curve) }
    }

    /// Forward direction: normalized coordinate → channel value.
    pub fn apply(&self, t: f32) -> f32 {
        match self.curve {
            Some(curve) => curve.evaluate(t),
            None => t,
        }
    }

    /// Inverse direction: channel value → normalized coordinate, by
    /// sampling inversion of the curve.
    pub fn invert(&self, value: f32) -> f32 {
        match self.curve {
            Some(curve) => curve.invert(value),
            None => value,
        }
    }
}
