//! Easing — cubic-Bézier timing functions and their inversion.

pub mod bezier;

pub use bezier::{CubicBezier, INVERT_SAMPLES, NEWTON_ITERATIONS};
