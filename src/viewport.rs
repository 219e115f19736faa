//! Viewport: pan/zoom state and screen↔scene coordinate conversion.
//!
//! The viewport owns the zoom factor and pan offset plus the geometry needed
//! to convert between spaces: where the editor container sits on screen, how
//! big it is, and the logical scene size. `ViewState` carries the per-session
//! display toggles that travel with the viewport but never persist.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::consts::{MAX_ZOOM, MIN_ZOOM, SCENE_HEIGHT, SCENE_WIDTH, ZOOM_STEP_IN, ZOOM_STEP_OUT};

/// A point in either screen or scene space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in screen units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Display density of the rendered plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Density {
    #[default]
    Comfortable,
    Compact,
}

/// Visibility toggles and density mode for the editor session.
///
/// Owned by the session, never persisted with the scene.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy)]
pub struct ViewState {
    pub show_tables: bool,
    pub show_zones: bool,
    pub show_bars: bool,
    pub show_grid: bool,
    pub density: Density,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            show_tables: true,
            show_zones: true,
            show_bars: true,
            show_grid: true,
            density: Density::Comfortable,
        }
    }
}

/// Pan/zoom state and container geometry for the floor-plan viewport.
///
/// `pan_x` / `pan_y` are in screen units and unbounded. `zoom` is a scale
/// factor clamped to `[min_zoom, max_zoom]`.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
    /// On-screen origin of the editor container.
    pub container_x: f64,
    pub container_y: f64,
    /// On-screen size of the editor container.
    pub container_width: f64,
    pub container_height: f64,
    /// Logical scene size in scene units.
    pub scene_width: f64,
    pub scene_height: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            container_x: 0.0,
            container_y: 0.0,
            container_width: 0.0,
            container_height: 0.0,
            scene_width: SCENE_WIDTH,
            scene_height: SCENE_HEIGHT,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
        }
    }
}

impl Viewport {
    /// Update the container's on-screen origin and size, e.g. after a
    /// window resize.
    pub fn set_container(&mut self, origin: Point, size: Size) {
        self.container_x = origin.x;
        self.container_y = origin.y;
        self.container_width = size.width;
        self.container_height = size.height;
    }

    /// Convert a screen-space point to scene coordinates.
    ///
    /// Walks back through the render transform: remove the container origin
    /// and centering, remove pan, unscale by zoom, then shift by half the
    /// logical scene size so scene (0, 0) is the plan's top-left corner.
    #[must_use]
    pub fn screen_to_scene(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.container_x - self.container_width / 2.0 - self.pan_x) / self.zoom
                + self.scene_width / 2.0,
            y: (screen.y - self.container_y - self.container_height / 2.0 - self.pan_y) / self.zoom
                + self.scene_height / 2.0,
        }
    }

    /// Convert a scene-space point to screen coordinates. Exact inverse of
    /// [`Self::screen_to_scene`].
    #[must_use]
    pub fn scene_to_screen(&self, scene: Point) -> Point {
        Point {
            x: (scene.x - self.scene_width / 2.0) * self.zoom
                + self.pan_x
                + self.container_width / 2.0
                + self.container_x,
            y: (scene.y - self.scene_height / 2.0) * self.zoom
                + self.pan_y
                + self.container_height / 2.0
                + self.container_y,
        }
    }

    /// Convert a screen-space distance to scene units.
    #[must_use]
    pub fn screen_dist_to_scene(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }

    /// Set the zoom factor, clamped to the configured range.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Apply one wheel notch: positive `notches` zoom in, negative zoom out.
    pub fn apply_wheel(&mut self, notches: i32) {
        let step = if notches >= 0 { ZOOM_STEP_IN } else { ZOOM_STEP_OUT };
        let mut zoom = self.zoom;
        for _ in 0..notches.unsigned_abs() {
            zoom *= step;
        }
        self.set_zoom(zoom);
    }

    /// One button-step zoom in.
    pub fn zoom_in(&mut self) {
        self.apply_wheel(1);
    }

    /// One button-step zoom out.
    pub fn zoom_out(&mut self) {
        self.apply_wheel(-1);
    }

    /// Shift the pan offset by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Reset zoom and pan to the identity view.
    pub fn reset_view(&mut self) {
        self.zoom = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }
}
