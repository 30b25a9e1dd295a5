//! Live state of one picker surface.

use huemap_core::{HsvColor, Point, Size, SurfaceMapping};

/// Phase of a drag gesture as reported by the host's gesture recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    /// Finger went down.
    Began,
    /// Finger moved while down.
    Moved,
    /// Finger lifted.
    Ended,
}

/// What a state transition changed. The host owns the plumbing: it
/// fires its value-changed notification when `color_changed` is set and
/// regenerates the gradient backdrop when `backdrop_dirty` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PickerChange {
    /// The selected color differs (exact component comparison) from
    /// before the transition.
    pub color_changed: bool,
    /// The hue backdrop no longer matches the state and must be redrawn.
    pub backdrop_dirty: bool,
}

impl PickerChange {
    /// Nothing changed.
    pub const NONE: Self = Self {
        color_changed: false,
        backdrop_dirty: false,
    };

    /// True when the host has anything to do.
    pub fn any(self) -> bool {
        self.color_changed || self.backdrop_dirty
    }
}

/// State of a rectangular saturation/value picker surface.
///
/// Owned exclusively by one widget instance and mutated only through
/// the transitions below. Pointer coordinates arrive already clamped to
/// the surface bounds by the UI layer; this type performs the
/// normalization and mapping.
#[derive(Debug, Clone)]
pub struct SurfacePicker {
    mapping: SurfaceMapping,
    size: Size,
    hsv: HsvColor,
    marker: Point,
    editing: bool,
}

impl SurfacePicker {
    /// Create a picker showing `color`. The surface size starts empty;
    /// the marker position becomes meaningful once [`set_size`](Self::set_size)
    /// delivers the first layout.
    pub fn new(mapping: SurfaceMapping, color: HsvColor) -> Self {
        Self {
            mapping,
            size: Size::default(),
            hsv: color,
            marker: Point::ZERO,
            editing: false,
        }
    }

    /// Currently selected color.
    pub fn color(&self) -> HsvColor {
        self.hsv
    }

    /// Current marker position in surface coordinates.
    pub fn marker(&self) -> Point {
        self.marker
    }

    /// True while a drag gesture is live. Presentation only — the
    /// marker draws enlarged while editing; the mapping math ignores it.
    pub fn editing(&self) -> bool {
        self.editing
    }

    /// Current surface size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The mapping configuration this surface was built with.
    pub fn mapping(&self) -> &SurfaceMapping {
        &self.mapping
    }

    /// Layout update. Re-derives the marker from the current color so
    /// the marker tracks the color across resizes, and requests a
    /// backdrop redraw at the new size.
    pub fn set_size(&mut self, size: Size) -> PickerChange {
        if size == self.size {
            return PickerChange::NONE;
        }
        self.size = size;
        self.marker = self.mapping.point_for(self.hsv, size);
        tracing::trace!(
            width = size.width,
            height = size.height,
            "picker surface resized"
        );
        PickerChange {
            color_changed: false,
            backdrop_dirty: true,
        }
    }

    /// A drag touched `point` (already clamped to the surface by the
    /// host). Forward-maps the point to a color, keeping the current
    /// hue. Reports a color change only when the mapped HSV differs
    /// from the previous one by exact comparison, so repeated drags to
    /// the same effective cell stay silent.
    pub fn drag_to(&mut self, point: Point, phase: DragPhase) -> PickerChange {
        self.editing = phase != DragPhase::Ended;
        self.marker = point;
        let next = self.mapping.color_at(point, self.size, self.hsv.h);
        self.commit(next)
    }

    /// A color was assigned programmatically (hex field, recent-colors
    /// tap). Inverse-maps it to place the marker. Does not mark the
    /// picker as editing. A hue difference additionally dirties the
    /// backdrop.
    pub fn assign_color(&mut self, color: HsvColor) -> PickerChange {
        self.marker = self.mapping.point_for(color, self.size);
        let hue_changed = color.h != self.hsv.h;
        let mut change = self.commit(color);
        change.backdrop_dirty |= hue_changed;
        change
    }

    /// The hue slider moved. Saturation and value are untouched, so no
    /// value-changed notification; the backdrop must be regenerated
    /// with the new hue.
    pub fn set_hue(&mut self, hue: f32) -> PickerChange {
        if hue == self.hsv.h {
            return PickerChange::NONE;
        }
        self.hsv = HsvColor::new(hue, self.hsv.s, self.hsv.v);
        tracing::trace!(hue, "picker hue updated");
        PickerChange {
            color_changed: false,
            backdrop_dirty: true,
        }
    }

    fn commit(&mut self, next: HsvColor) -> PickerChange {
        let changed = next != self.hsv;
        self.hsv = next;
        if changed {
            tracing::trace!(h = next.h, s = next.s, v = next.v, "picker color changed");
        }
        PickerChange {
            color_changed: changed,
            backdrop_dirty: false,
        }
    }
}
