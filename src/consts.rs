//! Shared numeric constants for the floor-plan editor core.

// ── Grid ────────────────────────────────────────────────────────

/// One grid unit in scene coordinates. All committed positions and sizes
/// snap to multiples of this, and no element may shrink below it.
pub const GRID_UNIT: f64 = 20.0;

// ── Viewport zoom ───────────────────────────────────────────────

/// Lowest zoom factor the viewport accepts.
pub const MIN_ZOOM: f64 = 0.1;

/// Highest zoom factor the viewport accepts.
pub const MAX_ZOOM: f64 = 5.0;

/// Zoom multiplier for one wheel notch toward the scene.
pub const ZOOM_STEP_IN: f64 = 1.1;

/// Zoom multiplier for one wheel notch away from the scene.
pub const ZOOM_STEP_OUT: f64 = 0.9;

/// Default logical scene width in scene units.
pub const SCENE_WIDTH: f64 = 1200.0;

/// Default logical scene height in scene units.
pub const SCENE_HEIGHT: f64 = 800.0;

// ── Framing ─────────────────────────────────────────────────────

/// Padding around a framed element, in scene units.
pub const FRAME_PADDING: f64 = 100.0;

/// Zoom clamp when framing a single element.
pub const FRAME_ELEMENT_MIN_ZOOM: f64 = 0.5;
pub const FRAME_ELEMENT_MAX_ZOOM: f64 = 2.0;

/// Zoom clamp when framing the whole scene.
pub const FRAME_FIT_MIN_ZOOM: f64 = 0.3;
pub const FRAME_FIT_MAX_ZOOM: f64 = 1.5;

// ── History / persistence ───────────────────────────────────────

/// Maximum number of undo snapshots retained.
pub const HISTORY_CAPACITY: usize = 50;

/// Default auto-save debounce interval in milliseconds.
pub const AUTOSAVE_DEBOUNCE_MS: u64 = 2000;
