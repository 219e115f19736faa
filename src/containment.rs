//! Zone containment: which table belongs to which zone.
//!
//! Containment is derived, never stored independently: a table belongs to
//! the first zone (in array order) whose bounding box contains the table's
//! center point. The pass is pure and is re-run after every structural
//! change — load, add, drag-end, resize-end, delete, undo — so `zone_id`
//! links are always fresh before the next gesture or save.

#[cfg(test)]
#[path = "containment_test.rs"]
mod containment_test;

use crate::element::{ElementId, FloorPlanElement};

/// Derived view of the zone structure: per-zone member lists plus the
/// elements contained by no zone. Pure function of the element array.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementHierarchy {
    /// One entry per zone, in array order.
    pub zones: Vec<ZoneGroup>,
    /// Tables contained by no zone, in array order.
    pub unzoned: Vec<ElementId>,
}

/// A zone and the tables currently inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneGroup {
    pub zone_id: ElementId,
    /// Member table ids, in array order.
    pub members: Vec<ElementId>,
}

/// Recompute every table's `zone_id` from geometry.
///
/// A table is assigned to the first zone in array order whose axis-aligned
/// bounding box contains the table's center, or cleared when no zone does.
/// Zones and special areas are never assigned. Returns a new array; the
/// input is untouched.
#[must_use]
pub fn assign_zones(elements: &[FloorPlanElement]) -> Vec<FloorPlanElement> {
    let zones: Vec<&FloorPlanElement> = elements.iter().filter(|e| e.is_zone()).collect();

    elements
        .iter()
        .map(|element| {
            if !element.is_table() {
                return element.clone();
            }
            let center = element.center();
            let owner = zones
                .iter()
                .find(|zone| zone.contains_point(center))
                .map(|zone| zone.id);
            let mut updated = element.clone();
            updated.set_zone_id(owner);
            updated
        })
        .collect()
}

/// Derive the zone hierarchy from an already-assigned element array.
#[must_use]
pub fn build_hierarchy(elements: &[FloorPlanElement]) -> ElementHierarchy {
    let mut hierarchy = ElementHierarchy {
        zones: elements
            .iter()
            .filter(|e| e.is_zone())
            .map(|zone| ZoneGroup { zone_id: zone.id, members: Vec::new() })
            .collect(),
        unzoned: Vec::new(),
    };

    for element in elements.iter().filter(|e| e.is_table()) {
        match element.zone_id() {
            Some(owner) => {
                if let Some(group) = hierarchy.zones.iter_mut().find(|g| g.zone_id == owner) {
                    group.members.push(element.id);
                } else {
                    // Stale link not yet re-derived; treat as unzoned.
                    hierarchy.unzoned.push(element.id);
                }
            }
            None => hierarchy.unzoned.push(element.id),
        }
    }

    hierarchy
}

/// Ids of every table currently assigned to `zone_id`.
#[must_use]
pub fn zone_members(elements: &[FloorPlanElement], zone_id: &ElementId) -> Vec<ElementId> {
    elements
        .iter()
        .filter(|e| e.zone_id() == Some(*zone_id))
        .map(|e| e.id)
        .collect()
}
