//! Huemap Core — mapping math for touch-driven color pickers.
//!
//! This crate contains the cubic-Bézier easing evaluator, the HSV/RGB
//! color model, and the bidirectional transform between normalized
//! surface coordinates and HSV channel values. No I/O, no logging,
//! no framework dependencies.

pub mod color;
pub mod easing;
pub mod geometry;
pub mod mapping;

// Re-exports for convenience.
pub use color::{HsvColor, ParseHexError, Rgb};
pub use easing::CubicBezier;
pub use geometry::{Point, Size};
pub use mapping::{AxisMapping, SliderMapping, SurfaceMapping};
