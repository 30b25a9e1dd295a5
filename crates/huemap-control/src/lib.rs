//! Huemap Control — framework-free state for picker widgets.
//!
//! Wraps the pure mapping math from `huemap-core` in the live state a
//! widget owns: the picker surface, the hue and brightness sliders, and
//! the recently-used color list. Transitions report what changed; the
//! host owns all notification and redraw plumbing.

pub mod recent;
pub mod slider;
pub mod surface;

// Re-exports for convenience.
pub use recent::RecentColors;
pub use slider::{BrightnessSlider, HueSlider};
pub use surface::{DragPhase, PickerChange, SurfacePicker};
