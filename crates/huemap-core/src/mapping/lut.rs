//! Baking an axis mapping into a 1D LUT.
//!
//! Hosts rendering a gradient backdrop for the picker surface evaluate
//! the same eased axes the mapping uses. Baking the axis once per
//! redraw keeps the easing solve out of the per-pixel loop.

use crate::mapping::axis::AxisMapping;

/// Bake `mapping` into a LUT of `size` entries over uniform inputs in
/// `[0,1]` inclusive.
///
/// Returns a `Vec<f32>` of length `size`. Sizes 0 and 1 are handled
/// without dividing by zero; a single-entry LUT holds the mapping at 0.
pub fn bake_axis_lut(mapping: &AxisMapping, size: usize) -> Vec<f32> {
    (0..size)
        .map(|i| {
            let t = i as f32 / (size - 1).max(1) as f32;
            mapping.apply(t)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::CubicBezier;

    #[test]
    fn test_linear_lut_endpoints() {
        let lut = bake_axis_lut(&AxisMapping::LINEAR, 256);
        assert_eq!(lut.len(), 256);
        assert_eq!(lut[0], 0.0);
        assert_eq!(lut[255], 1.0);
    }

    #[test]
    fn test_curved_lut_is_monotonic() {
        let axis = AxisMapping::with_curve(CubicBezier::new(0.6, 0.96, 0.61, 1.0));
        let lut = bake_axis_lut(&axis, 64);
        for pair in lut.windows(2) {
            assert!(pair[1] >= pair[0] - 1e-6, "{} then {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_degenerate_sizes() {
        assert!(bake_axis_lut(&AxisMapping::LINEAR, 0).is_empty());
        let single = bake_axis_lut(&AxisMapping::LINEAR, 1);
        assert_eq!(single, vec![0.0]);
    }
}
