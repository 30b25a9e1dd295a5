//! Live state of 1-D slider controls (hue, brightness).

use huemap_core::SliderMapping;
use huemap_core::mapping::{hue_at, position_for_hue};

use crate::surface::DragPhase;

/// State of a horizontal hue slider. Linear mapping throughout.
#[derive(Debug, Clone)]
pub struct HueSlider {
    hue: f32,
    editing: bool,
}

impl HueSlider {
    /// Create a slider at `hue`.
    pub fn new(hue: f32) -> Self {
        Self {
            hue,
            editing: false,
        }
    }

    /// Current hue.
    pub fn hue(&self) -> f32 {
        self.hue
    }

    /// True while a drag gesture is live.
    pub fn editing(&self) -> bool {
        self.editing
    }

    /// Marker position for a track of `width`.
    pub fn position(&self, width: f32) -> f32 {
        position_for_hue(self.hue, width)
    }

    /// Drag to `x` on a track of `width`. Returns true when the hue
    /// actually changed (exact comparison).
    pub fn drag_to(&mut self, x: f32, width: f32, phase: DragPhase) -> bool {
        self.editing = phase != DragPhase::Ended;
        self.set_hue(hue_at(x, width))
    }

    /// Assign a hue directly (e.g. from a color assignment upstream).
    pub fn set_hue(&mut self, hue: f32) -> bool {
        if hue == self.hue {
            return false;
        }
        self.hue = hue;
        tracing::trace!(hue, "hue slider changed");
        true
    }
}

/// State of a horizontal brightness slider, optionally eased.
#[derive(Debug, Clone)]
pub struct BrightnessSlider {
    mapping: SliderMapping,
    value: f32,
    editing: bool,
}

impl BrightnessSlider {
    /// Create a slider at `value` with the given mapping.
    pub fn new(mapping: SliderMapping, value: f32) -> Self {
        Self {
            mapping,
            value,
            editing: false,
        }
    }

    /// Current brightness value.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// True while a drag gesture is live.
    pub fn editing(&self) -> bool {
        self.editing
    }

    /// Marker position for a track of `width`.
    pub fn position(&self, width: f32) -> f32 {
        self.mapping.position_for(self.value, width)
    }

    /// Drag to `x` on a track of `width`. Returns true when the value
    /// actually changed (exact comparison).
    pub fn drag_to(&mut self, x: f32, width: f32, phase: DragPhase) -> bool {
        self.editing = phase != DragPhase::Ended;
        self.set_value(self.mapping.value_at(x, width))
    }

    /// Assign a value directly.
    pub fn set_value(&mut self, value: f32) -> bool {
        if value == self.value {
            return false;
        }
        self.value = value;
        tracing::trace!(value, "brightness slider changed");
        true
    }
}
