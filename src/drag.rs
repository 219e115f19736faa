//! Drag gesture: grid-snapped movement of the selection and zone members.
//!
//! `start_drag` captures everything the gesture needs into a `DragContext`
//! value — pointer origin, per-id start positions, and for zone members that
//! were not directly selected, their offset from the owning zone's origin.
//! `apply_drag` is then a pure function of the context, the pointer, and the
//! current element array. The caller commits one history entry at drag end;
//! intermediate frames are never recorded.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use std::collections::{BTreeSet, HashMap};

use crate::element::{ElementId, FloorPlanElement, snap_to_grid};
use crate::viewport::Point;

/// Captured state for an active drag gesture.
#[derive(Debug, Clone)]
pub struct DragContext {
    /// Scene-space pointer position at pointer-down.
    pointer_start: Point,
    /// Start position of every element that will move.
    start_positions: HashMap<ElementId, Point>,
    /// For zone members moving rigidly with their zone: `(owner zone,
    /// offset of the member from the zone's origin at drag start)`.
    zone_offsets: HashMap<ElementId, (ElementId, Point)>,
}

impl DragContext {
    /// Whether `id` moves with this gesture.
    #[must_use]
    pub fn moves(&self, id: &ElementId) -> bool {
        self.start_positions.contains_key(id)
    }
}

/// Capture a drag gesture starting at `pointer` over `selected_ids`.
///
/// The moving set is the selection plus every table contained by a selected
/// zone. Members that are themselves selected follow the pointer directly;
/// unselected members follow their zone.
#[must_use]
pub fn start_drag(
    pointer: Point,
    selected_ids: &BTreeSet<ElementId>,
    elements: &[FloorPlanElement],
) -> DragContext {
    let mut start_positions = HashMap::new();
    let mut zone_offsets = HashMap::new();

    for element in elements {
        if selected_ids.contains(&element.id) {
            start_positions.insert(element.id, Point::new(element.x, element.y));
        }
    }

    for element in elements {
        if start_positions.contains_key(&element.id) {
            continue;
        }
        let Some(owner) = element.zone_id() else {
            continue;
        };
        if !selected_ids.contains(&owner) {
            continue;
        }
        let Some(zone) = elements.iter().find(|e| e.id == owner) else {
            continue;
        };
        start_positions.insert(element.id, Point::new(element.x, element.y));
        zone_offsets.insert(
            element.id,
            (owner, Point::new(element.x - zone.x, element.y - zone.y)),
        );
    }

    DragContext { pointer_start: pointer, start_positions, zone_offsets }
}

/// Reposition the moving set for the current pointer position.
///
/// Directly selected elements land on `snap(start + delta)`; zone members
/// land on their owner zone's new origin plus the captured offset, so a
/// zone and its tables move as one rigid body. Returns a new array.
#[must_use]
pub fn apply_drag(
    ctx: &DragContext,
    pointer: Point,
    elements: &[FloorPlanElement],
) -> Vec<FloorPlanElement> {
    let dx = pointer.x - ctx.pointer_start.x;
    let dy = pointer.y - ctx.pointer_start.y;

    // Zone origins are resolved first so members follow the snapped zone
    // position, not the raw pointer delta.
    let mut zone_origins: HashMap<ElementId, Point> = HashMap::new();
    for (id, start) in &ctx.start_positions {
        if ctx.zone_offsets.contains_key(id) {
            continue;
        }
        zone_origins.insert(*id, Point::new(snap_to_grid(start.x + dx), snap_to_grid(start.y + dy)));
    }

    elements
        .iter()
        .map(|element| {
            let Some(start) = ctx.start_positions.get(&element.id) else {
                return element.clone();
            };
            let mut moved = element.clone();
            if let Some((owner, offset)) = ctx.zone_offsets.get(&element.id) {
                if let Some(origin) = zone_origins.get(owner) {
                    moved.x = origin.x + offset.x;
                    moved.y = origin.y + offset.y;
                }
            } else {
                moved.x = snap_to_grid(start.x + dx);
                moved.y = snap_to_grid(start.y + dy);
            }
            moved
        })
        .collect()
}
