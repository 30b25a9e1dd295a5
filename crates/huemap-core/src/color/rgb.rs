//! RGB value type and hex-string parsing/formatting.

use serde::{Deserialize, Serialize};

/// Error from parsing a hex color string.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseHexError {
    /// Wrong number of characters (after trimming whitespace).
    #[error("expected 6 hex digits with an optional '#' prefix, got {0} characters")]
    Length(usize),
    /// A character was not a hex digit.
    #[error("invalid hex digit: {0}")]
    Digit(#[from] std::num::ParseIntError),
}

/// An RGB color with each channel in `[0,1]`.
///
/// Like [`HsvColor`](crate::color::HsvColor), equality is exact
/// component-wise comparison; the recent-colors store deduplicates on it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
}

impl Rgb {
    /// Construct from channels. No validation.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse `"#rrggbb"` or `"rrggbb"` (case-insensitive, surrounding
    /// whitespace ignored) into 8-bit-quantized channels.
    pub fn from_hex(input: &str) -> Result<Self, ParseHexError> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 {
            return Err(ParseHexError::Length(trimmed.len()));
        }

        let packed = u32::from_str_radix(digits, 16)?;
        Ok(Self {
            r: ((packed >> 16) & 0xff) as f32 / 255.0,
            g: ((packed >> 8) & 0xff) as f32 / 255.0,
            b: (packed & 0xff) as f32 / 255.0,
        })
    }

    /// Format as lowercase `"#rrggbb"`. Channels are clamped to `[0,1]`
    /// and rounded to 8 bits.
    pub fn to_hex(self) -> String {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        format!(
            "#{:06x}",
            quantize(self.r) << 16 | quantize(self.g) << 8 | quantize(self.b)
        )
    }
}
