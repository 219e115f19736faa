//! Element model: floor-plan elements, their kind payloads, and the scene store.
//!
//! This module defines the core data types that describe what is on the floor
//! plan (`FloorPlanElement`, `ElementKind`), the closed shape and table-kind
//! vocabularies (`Shape`, `TableKind`), and the runtime store that owns all
//! live elements (`Scene`).
//!
//! Kind-specific fields live inside `ElementKind` so that invalid
//! combinations are unrepresentable: only a table can carry a `zone_id`, only
//! a zone a description, and so on. Data flows into this layer from the
//! persistence contract (`crate::store`) and from the gesture engines
//! (mutations); the containment engine reads and rewrites `zone_id` links.

#[cfg(test)]
#[path = "element_test.rs"]
mod element_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::GRID_UNIT;
use crate::viewport::Point;

/// Unique identifier for a floor-plan element.
pub type ElementId = Uuid;

/// The drawn outline of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Rectangle,
    Circle,
    Triangle,
    Square,
    /// Free outline given by `polygon_points`.
    Polygon,
}

/// Sub-kind of a table element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    Table,
    Bar,
    Counter,
}

/// A vertex of a polygon outline, in element-local scene units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolygonPoint {
    pub x: f64,
    pub y: f64,
}

/// Kind-specific payload of a floor-plan element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ElementKind {
    /// A bookable table, bar, or counter.
    Table {
        /// Number of seats at this table.
        seats: u32,
        /// Free-text staff notes.
        notes: String,
        /// Table, bar, or counter.
        table_kind: TableKind,
        /// Zone this table currently sits in, maintained by the containment
        /// engine. `None` when the table's center is outside every zone.
        zone_id: Option<ElementId>,
        /// Minimum spend for a reservation, if the venue prices this table.
        min_spend: Option<f64>,
        /// Hourly rate, if the venue prices this table by time.
        hourly_rate: Option<f64>,
    },
    /// A named region that tables can belong to.
    Zone {
        /// Free-text description shown to staff.
        description: String,
        /// Open purpose tag, e.g. `"dining"` or `"terrace"`.
        purpose: String,
    },
    /// A fixed area such as an entrance, restroom, or kitchen.
    #[serde(rename_all = "camelCase")]
    SpecialArea {
        /// Open area tag, e.g. `"entrance"`.
        area_type: String,
        /// Icon reference used by the renderer.
        icon: String,
    },
}

/// A floor-plan element as stored in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorPlanElement {
    /// Unique identifier; immutable for the element's lifetime and the join
    /// key for containment, selection, and history.
    pub id: ElementId,
    /// Display name.
    pub name: String,
    /// Left edge of the bounding box in scene units.
    pub x: f64,
    /// Top edge of the bounding box in scene units.
    pub y: f64,
    /// Width of the bounding box in scene units; never below one grid unit.
    pub width: f64,
    /// Height of the bounding box in scene units; never below one grid unit.
    pub height: f64,
    /// Clockwise rotation in degrees, kept in `[0, 360)`.
    pub rotation: f64,
    /// Drawn outline.
    pub shape: Shape,
    /// Vertices for `Shape::Polygon`; ignored for other shapes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polygon_points: Option<Vec<PolygonPoint>>,
    /// Fill color as a CSS color string.
    pub color: String,
    /// Kind-specific payload.
    #[serde(flatten)]
    pub kind: ElementKind,
}

/// Default position for newly added elements, in scene units.
const DEFAULT_ORIGIN: f64 = 100.0;

/// Default bounding-box side for a new table, in scene units.
const DEFAULT_TABLE_SIZE: f64 = 80.0;

/// Default bounding-box side for a new zone, in scene units.
const DEFAULT_ZONE_SIZE: f64 = 200.0;

impl FloorPlanElement {
    /// New table with a fresh id at the default scene position.
    #[must_use]
    pub fn new_table(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            x: DEFAULT_ORIGIN,
            y: DEFAULT_ORIGIN,
            width: DEFAULT_TABLE_SIZE,
            height: DEFAULT_TABLE_SIZE,
            rotation: 0.0,
            shape: Shape::Rectangle,
            polygon_points: None,
            color: "#8B5A2B".to_owned(),
            kind: ElementKind::Table {
                seats: 4,
                notes: String::new(),
                table_kind: TableKind::Table,
                zone_id: None,
                min_spend: None,
                hourly_rate: None,
            },
        }
    }

    /// New zone with a fresh id at the default scene position.
    #[must_use]
    pub fn new_zone(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            x: DEFAULT_ORIGIN,
            y: DEFAULT_ORIGIN,
            width: DEFAULT_ZONE_SIZE,
            height: DEFAULT_ZONE_SIZE,
            rotation: 0.0,
            shape: Shape::Rectangle,
            polygon_points: None,
            color: "#DDE7F0".to_owned(),
            kind: ElementKind::Zone { description: String::new(), purpose: String::new() },
        }
    }

    /// New special area with a fresh id at the default scene position.
    #[must_use]
    pub fn new_special_area(name: impl Into<String>, area_type: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            x: DEFAULT_ORIGIN,
            y: DEFAULT_ORIGIN,
            width: DEFAULT_TABLE_SIZE,
            height: DEFAULT_TABLE_SIZE,
            rotation: 0.0,
            shape: Shape::Square,
            polygon_points: None,
            color: "#9AA7B5".to_owned(),
            kind: ElementKind::SpecialArea { area_type: area_type.into(), icon: String::new() },
        }
    }

    /// Center of the bounding box in scene units.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether this element is a zone.
    #[must_use]
    pub fn is_zone(&self) -> bool {
        matches!(self.kind, ElementKind::Zone { .. })
    }

    /// Whether this element is a table (of any sub-kind).
    #[must_use]
    pub fn is_table(&self) -> bool {
        matches!(self.kind, ElementKind::Table { .. })
    }

    /// The containing zone id, for tables. Always `None` for other kinds.
    #[must_use]
    pub fn zone_id(&self) -> Option<ElementId> {
        match self.kind {
            ElementKind::Table { zone_id, .. } => zone_id,
            _ => None,
        }
    }

    /// Set or clear the containing zone id. No-op for non-tables.
    pub fn set_zone_id(&mut self, new_zone: Option<ElementId>) {
        if let ElementKind::Table { ref mut zone_id, .. } = self.kind {
            *zone_id = new_zone;
        }
    }

    /// Whether `point` falls inside this element's axis-aligned bounding box.
    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// Round a scene coordinate to the nearest grid-unit multiple.
#[must_use]
pub fn snap_to_grid(value: f64) -> f64 {
    (value / GRID_UNIT).round() * GRID_UNIT
}

/// Snap a size to the grid and floor it at one grid unit.
#[must_use]
pub fn snap_size(value: f64) -> f64 {
    snap_to_grid(value).max(GRID_UNIT)
}

/// Normalize an angle in degrees into `[0, 360)`.
#[must_use]
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle % 360.0;
    if wrapped < 0.0 { wrapped + 360.0 } else { wrapped }
}

/// In-memory store of floor-plan elements.
///
/// Insertion order is preserved: it is the draw order and the tie-break
/// order when overlapping zones compete for the same table.
pub struct Scene {
    elements: Vec<FloorPlanElement>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self { elements: Vec::new() }
    }

    /// Append an element. The caller is responsible for id freshness.
    pub fn insert(&mut self, element: FloorPlanElement) {
        self.elements.push(element);
    }

    /// Remove an element by id, returning it if it was present.
    ///
    /// If the removed element is a zone, every table that pointed at it has
    /// its `zone_id` cleared before removal so no dangling reference
    /// survives into the next snapshot.
    pub fn remove(&mut self, id: &ElementId) -> Option<FloorPlanElement> {
        let index = self.elements.iter().position(|e| e.id == *id)?;
        if self.elements[index].is_zone() {
            for element in &mut self.elements {
                if element.zone_id() == Some(*id) {
                    element.set_zone_id(None);
                }
            }
        }
        Some(self.elements.remove(index))
    }

    /// Return a reference to an element by id.
    #[must_use]
    pub fn get(&self, id: &ElementId) -> Option<&FloorPlanElement> {
        self.elements.iter().find(|e| e.id == *id)
    }

    /// Return a mutable reference to an element by id.
    pub fn get_mut(&mut self, id: &ElementId) -> Option<&mut FloorPlanElement> {
        self.elements.iter_mut().find(|e| e.id == *id)
    }

    /// Replace all elements with a full snapshot.
    pub fn load(&mut self, elements: Vec<FloorPlanElement>) {
        self.elements = elements;
    }

    /// All elements in insertion order.
    #[must_use]
    pub fn elements(&self) -> &[FloorPlanElement] {
        &self.elements
    }

    /// Deep clone of the element array, used for history snapshots.
    #[must_use]
    pub fn snapshot(&self) -> Vec<FloorPlanElement> {
        self.elements.clone()
    }

    /// Number of elements currently in the scene.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the scene contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
