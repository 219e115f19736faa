//! Transform gestures: 8-handle resize and free rotation of one element.
//!
//! Like the drag engine, gestures are captured into explicit context values
//! at pointer-down and applied as pure functions on pointer-move. Resize
//! results snap to the grid and floor at one grid unit; handles on the
//! leading (north/west) edges shift the origin by the snapped size change so
//! the opposite corner stays fixed. Rotation tracks the pointer-to-center
//! angle and normalizes into `[0, 360)`.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use crate::element::{ElementId, FloorPlanElement, normalize_degrees, snap_size};
use crate::viewport::Point;

/// One of the eight resize handles around an element's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeHandle {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl ResizeHandle {
    /// Whether this handle moves the west (leading-x) edge.
    #[must_use]
    pub fn affects_west(self) -> bool {
        matches!(self, Self::Nw | Self::W | Self::Sw)
    }

    /// Whether this handle moves the east edge.
    #[must_use]
    pub fn affects_east(self) -> bool {
        matches!(self, Self::Ne | Self::E | Self::Se)
    }

    /// Whether this handle moves the north (leading-y) edge.
    #[must_use]
    pub fn affects_north(self) -> bool {
        matches!(self, Self::Nw | Self::N | Self::Ne)
    }

    /// Whether this handle moves the south edge.
    #[must_use]
    pub fn affects_south(self) -> bool {
        matches!(self, Self::Sw | Self::S | Self::Se)
    }
}

/// Captured state for an active resize gesture.
#[derive(Debug, Clone)]
pub struct ResizeContext {
    pub element_id: ElementId,
    handle: ResizeHandle,
    pointer_start: Point,
    orig_x: f64,
    orig_y: f64,
    orig_width: f64,
    orig_height: f64,
}

/// Captured state for an active rotate gesture.
#[derive(Debug, Clone)]
pub struct RotateContext {
    pub element_id: ElementId,
    /// Rotation pivot: the element's center at gesture start.
    center: Point,
    /// Pointer-to-center angle at gesture start, in degrees.
    start_angle: f64,
    orig_rotation: f64,
}

/// New geometry produced by a resize step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeResult {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Capture a resize gesture on `element` from `handle` at `pointer`.
#[must_use]
pub fn start_resize(element: &FloorPlanElement, handle: ResizeHandle, pointer: Point) -> ResizeContext {
    ResizeContext {
        element_id: element.id,
        handle,
        pointer_start: pointer,
        orig_x: element.x,
        orig_y: element.y,
        orig_width: element.width,
        orig_height: element.height,
    }
}

/// Compute the element's new geometry for the current pointer position.
///
/// Sizes snap to the grid and never fall below one grid unit. For leading
/// edges the origin shifts by the snapped size change, keeping the opposite
/// corner fixed regardless of where the raw pointer delta landed.
#[must_use]
pub fn apply_resize(ctx: &ResizeContext, pointer: Point) -> ResizeResult {
    let dx = pointer.x - ctx.pointer_start.x;
    let dy = pointer.y - ctx.pointer_start.y;

    let mut result = ResizeResult {
        x: ctx.orig_x,
        y: ctx.orig_y,
        width: ctx.orig_width,
        height: ctx.orig_height,
    };

    if ctx.handle.affects_east() {
        result.width = snap_size(ctx.orig_width + dx);
    } else if ctx.handle.affects_west() {
        result.width = snap_size(ctx.orig_width - dx);
        result.x = ctx.orig_x + (ctx.orig_width - result.width);
    }

    if ctx.handle.affects_south() {
        result.height = snap_size(ctx.orig_height + dy);
    } else if ctx.handle.affects_north() {
        result.height = snap_size(ctx.orig_height - dy);
        result.y = ctx.orig_y + (ctx.orig_height - result.height);
    }

    result
}

/// Capture a rotate gesture on `element` at `pointer`.
#[must_use]
pub fn start_rotate(element: &FloorPlanElement, pointer: Point) -> RotateContext {
    let center = element.center();
    RotateContext {
        element_id: element.id,
        center,
        start_angle: pointer_angle(center, pointer),
        orig_rotation: element.rotation,
    }
}

/// Compute the element's new rotation for the current pointer position,
/// normalized into `[0, 360)`.
#[must_use]
pub fn apply_rotate(ctx: &RotateContext, pointer: Point) -> f64 {
    let angle = pointer_angle(ctx.center, pointer);
    normalize_degrees(ctx.orig_rotation + (angle - ctx.start_angle))
}

/// Angle from `center` to `pointer` in degrees.
fn pointer_angle(center: Point, pointer: Point) -> f64 {
    (pointer.y - center.y).atan2(pointer.x - center.x).to_degrees()
}
