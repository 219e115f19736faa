//! Framing: compute the viewport transform that frames one element or the
//! whole scene.
//!
//! Both calculators are pure: they take geometry in, return a `FrameTarget`
//! out, and the caller applies it to the viewport. Zoom-to-element and
//! zoom-to-fit share the same fit-and-center math and differ only in their
//! zoom clamp ranges, so framing one element either way centers it on the
//! same pan target.

#[cfg(test)]
#[path = "framing_test.rs"]
mod framing_test;

use crate::consts::{
    FRAME_ELEMENT_MAX_ZOOM, FRAME_ELEMENT_MIN_ZOOM, FRAME_FIT_MAX_ZOOM, FRAME_FIT_MIN_ZOOM,
    FRAME_PADDING,
};
use crate::element::FloorPlanElement;
use crate::viewport::{Size, Viewport};

/// A zoom/pan pair the caller applies to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTarget {
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

impl FrameTarget {
    /// Apply this target to a viewport.
    pub fn apply(self, viewport: &mut Viewport) {
        viewport.zoom = self.zoom;
        viewport.pan_x = self.pan_x;
        viewport.pan_y = self.pan_y;
    }
}

/// Axis-aligned bounding box in scene units.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    fn of(element: &FloorPlanElement) -> Self {
        Self {
            min_x: element.x,
            min_y: element.y,
            max_x: element.x + element.width,
            max_y: element.y + element.height,
        }
    }

    fn union(self, other: Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    fn width(self) -> f64 {
        self.max_x - self.min_x
    }

    fn height(self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Frame a single element in the container, with the standard padding and
/// the element zoom clamp of `[0.5, 2.0]`.
#[must_use]
pub fn zoom_to_element(element: &FloorPlanElement, viewport: &Viewport, container: Size) -> FrameTarget {
    fit_bounds(
        Bounds::of(element),
        viewport,
        container,
        FRAME_PADDING,
        FRAME_ELEMENT_MIN_ZOOM,
        FRAME_ELEMENT_MAX_ZOOM,
    )
}

/// Frame the union bounding box of `elements`, with caller-chosen padding
/// and the fit zoom clamp of `[0.3, 1.5]`.
///
/// Returns `None` for an empty element list — there is nothing to frame.
#[must_use]
pub fn zoom_to_fit(
    elements: &[FloorPlanElement],
    viewport: &Viewport,
    container: Size,
    padding: f64,
) -> Option<FrameTarget> {
    let mut iter = elements.iter();
    let first = Bounds::of(iter.next()?);
    let bounds = iter.fold(first, |acc, e| acc.union(Bounds::of(e)));
    Some(fit_bounds(
        bounds,
        viewport,
        container,
        padding,
        FRAME_FIT_MIN_ZOOM,
        FRAME_FIT_MAX_ZOOM,
    ))
}

/// Fit `bounds` inside `container` minus padding, clamp the zoom, then pan
/// so the bounds' center lands on the container center.
fn fit_bounds(
    bounds: Bounds,
    viewport: &Viewport,
    container: Size,
    padding: f64,
    min_zoom: f64,
    max_zoom: f64,
) -> FrameTarget {
    let avail_w = (container.width - padding * 2.0).max(1.0);
    let avail_h = (container.height - padding * 2.0).max(1.0);

    let fit_w = avail_w / bounds.width().max(1.0);
    let fit_h = avail_h / bounds.height().max(1.0);
    let zoom = fit_w.min(fit_h).clamp(min_zoom, max_zoom);

    // The render transform places scene center at pan (0, 0); pan moves the
    // bounds' center onto the container center.
    let center_x = bounds.min_x + bounds.width() / 2.0;
    let center_y = bounds.min_y + bounds.height() / 2.0;
    FrameTarget {
        zoom,
        pan_x: -(center_x - viewport.scene_width / 2.0) * zoom,
        pan_y: -(center_y - viewport.scene_height / 2.0) * zoom,
    }
}
