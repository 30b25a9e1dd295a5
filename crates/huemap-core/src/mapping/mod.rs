//! Mapping — surface coordinates ⇄ HSV channels, optionally shaped
//! through per-axis easing curves.

pub mod axis;
pub mod lut;
pub mod slider;
pub mod surface;

pub use axis::AxisMapping;
pub use lut::bake_axis_lut;
pub use slider::{SliderMapping, hue_at, position_for_hue};
pub use surface::{DEFAULT_VALUE_CURVE, SurfaceMapping};
