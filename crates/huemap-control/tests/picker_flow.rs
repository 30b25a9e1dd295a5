//! End-to-end flows a host widget drives: hue slider feeding the
//! surface, hex input assigning a color, recent colors recording picks.

use huemap_control::{DragPhase, HueSlider, RecentColors, SurfacePicker};
use huemap_core::{HsvColor, Point, Rgb, Size, SurfaceMapping};

#[test]
fn hue_slider_drives_surface_backdrop_without_value_changed() {
    let mut surface = SurfacePicker::new(SurfaceMapping::default(), HsvColor::new(0.0, 0.5, 0.5));
    surface.set_size(Size::new(200.0, 200.0));
    let mut slider = HueSlider::new(surface.color().h);

    assert!(slider.drag_to(140.0, 280.0, DragPhase::Moved));
    let change = surface.set_hue(slider.hue());

    assert!(change.backdrop_dirty);
    assert!(!change.color_changed, "hue alone never fires value-changed");
    assert_eq!(surface.color(), HsvColor::new(0.5, 0.5, 0.5));
}

#[test]
fn hex_input_assigns_color_and_round_trips() {
    let mut surface = SurfacePicker::new(SurfaceMapping::default(), HsvColor::default());
    surface.set_size(Size::new(200.0, 200.0));

    let rgb = Rgb::from_hex("#cc6633").unwrap();
    let hsv = HsvColor::from_rgb(rgb, surface.color().h);
    let change = surface.assign_color(hsv);
    assert!(change.any());
    assert!(change.color_changed);

    // Dragging back onto the marker the assignment placed must not
    // move the color beyond the inversion's sampling resolution.
    let marker = surface.marker();
    surface.drag_to(marker, DragPhase::Ended);
    assert_eq!(surface.color().h, hsv.h);
    assert!((surface.color().s - hsv.s).abs() <= 0.002);
    assert!((surface.color().v - hsv.v).abs() <= 0.002);
}

#[test]
fn committed_picks_land_in_recent_colors() {
    let mut surface = SurfacePicker::new(SurfaceMapping::linear(), HsvColor::new(0.0, 0.0, 1.0));
    surface.set_size(Size::new(200.0, 200.0));
    let mut recent = RecentColors::new();

    for x in [40.0, 120.0, 40.0] {
        let change = surface.drag_to(Point::new(x, 0.0), DragPhase::Ended);
        if change.color_changed {
            recent.touch(surface.color().to_rgb());
        }
    }

    // Third drag revisits the first position: dedup keeps two entries,
    // most recent first.
    assert_eq!(recent.len(), 2);
    let newest = *recent.iter().next().unwrap();
    assert_eq!(newest, HsvColor::new(0.0, 0.2, 1.0).to_rgb());
}
