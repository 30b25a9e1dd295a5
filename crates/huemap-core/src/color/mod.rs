//! Color model — HSV and RGB value types and the conversions between them.

pub mod hsv;
pub mod rgb;

pub use hsv::HsvColor;
pub use rgb::{ParseHexError, Rgb};
