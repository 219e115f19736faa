#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use uuid::Uuid;

use super::*;
use crate::element::FloorPlanElement;

// =============================================================
// Helpers
// =============================================================

fn table_at(x: f64, y: f64, w: f64, h: f64) -> FloorPlanElement {
    let mut t = FloorPlanElement::new_table("T");
    t.x = x;
    t.y = y;
    t.width = w;
    t.height = h;
    t
}

fn zone_at(x: f64, y: f64, w: f64, h: f64) -> FloorPlanElement {
    let mut z = FloorPlanElement::new_zone("Z");
    z.x = x;
    z.y = y;
    z.width = w;
    z.height = h;
    z
}

fn area_at(x: f64, y: f64) -> FloorPlanElement {
    let mut a = FloorPlanElement::new_special_area("A", "entrance");
    a.x = x;
    a.y = y;
    a
}

// =============================================================
// assign_zones
// =============================================================

#[test]
fn table_inside_zone_is_assigned() {
    let zone = zone_at(0.0, 0.0, 200.0, 200.0);
    let zone_id = zone.id;
    let table = table_at(50.0, 50.0, 80.0, 80.0);
    let table_id = table.id;

    let assigned = assign_zones(&[zone, table]);

    let table = assigned.iter().find(|e| e.id == table_id).unwrap();
    assert_eq!(table.zone_id(), Some(zone_id));
}

#[test]
fn table_outside_every_zone_is_cleared() {
    let zone = zone_at(0.0, 0.0, 200.0, 200.0);
    let zone_id = zone.id;
    let mut table = table_at(500.0, 500.0, 80.0, 80.0);
    table.set_zone_id(Some(zone_id)); // stale link from a previous layout
    let table_id = table.id;

    let assigned = assign_zones(&[zone, table]);

    let table = assigned.iter().find(|e| e.id == table_id).unwrap();
    assert!(table.zone_id().is_none());
}

#[test]
fn containment_uses_center_not_corner() {
    let zone = zone_at(0.0, 0.0, 100.0, 100.0);
    let zone_id = zone.id;
    // Corner overlaps the zone but the center (130, 130) is outside.
    let overlap = table_at(90.0, 90.0, 80.0, 80.0);
    // Corner pokes out but the center (80, 80) is inside.
    let inside = table_at(40.0, 40.0, 80.0, 80.0);
    let overlap_id = overlap.id;
    let inside_id = inside.id;

    let assigned = assign_zones(&[zone, overlap, inside]);

    assert!(assigned.iter().find(|e| e.id == overlap_id).unwrap().zone_id().is_none());
    assert_eq!(
        assigned.iter().find(|e| e.id == inside_id).unwrap().zone_id(),
        Some(zone_id)
    );
}

#[test]
fn overlapping_zones_first_in_array_order_wins() {
    let first = zone_at(0.0, 0.0, 200.0, 200.0);
    let second = zone_at(0.0, 0.0, 200.0, 200.0);
    let first_id = first.id;
    let table = table_at(50.0, 50.0, 80.0, 80.0);
    let table_id = table.id;

    let assigned = assign_zones(&[first, second, table]);

    let table = assigned.iter().find(|e| e.id == table_id).unwrap();
    assert_eq!(table.zone_id(), Some(first_id));
}

#[test]
fn zones_are_never_assigned_to_zones() {
    let outer = zone_at(0.0, 0.0, 400.0, 400.0);
    let inner = zone_at(100.0, 100.0, 100.0, 100.0);
    let inner_id = inner.id;

    let assigned = assign_zones(&[outer, inner]);

    assert!(assigned.iter().find(|e| e.id == inner_id).unwrap().zone_id().is_none());
}

#[test]
fn special_areas_are_never_assigned() {
    let zone = zone_at(0.0, 0.0, 400.0, 400.0);
    let area = area_at(100.0, 100.0);
    let area_id = area.id;

    let assigned = assign_zones(&[zone, area]);

    assert!(assigned.iter().find(|e| e.id == area_id).unwrap().zone_id().is_none());
}

#[test]
fn assign_zones_is_pure() {
    let zone = zone_at(0.0, 0.0, 200.0, 200.0);
    let table = table_at(50.0, 50.0, 80.0, 80.0);
    let table_id = table.id;
    let input = vec![zone, table];

    let _ = assign_zones(&input);

    // Input untouched: the stale (empty) link is still there.
    assert!(input.iter().find(|e| e.id == table_id).unwrap().zone_id().is_none());
}

#[test]
fn assign_zones_preserves_order_and_count() {
    let elements = vec![
        zone_at(0.0, 0.0, 200.0, 200.0),
        table_at(50.0, 50.0, 80.0, 80.0),
        area_at(300.0, 300.0),
    ];
    let ids: Vec<_> = elements.iter().map(|e| e.id).collect();

    let assigned = assign_zones(&elements);

    assert_eq!(assigned.iter().map(|e| e.id).collect::<Vec<_>>(), ids);
}

#[test]
fn assign_zones_with_no_zones_clears_all() {
    let mut table = table_at(50.0, 50.0, 80.0, 80.0);
    table.set_zone_id(Some(Uuid::new_v4()));
    let table_id = table.id;

    let assigned = assign_zones(&[table]);

    assert!(assigned.iter().find(|e| e.id == table_id).unwrap().zone_id().is_none());
}

#[test]
fn assign_zones_empty_input() {
    assert!(assign_zones(&[]).is_empty());
}

#[test]
fn assign_zones_is_idempotent() {
    let elements = vec![
        zone_at(0.0, 0.0, 200.0, 200.0),
        table_at(50.0, 50.0, 80.0, 80.0),
        table_at(500.0, 500.0, 80.0, 80.0),
    ];
    let once = assign_zones(&elements);
    let twice = assign_zones(&once);
    assert_eq!(once, twice);
}

// =============================================================
// build_hierarchy
// =============================================================

#[test]
fn hierarchy_groups_members_under_zones() {
    let zone = zone_at(0.0, 0.0, 200.0, 200.0);
    let zone_id = zone.id;
    let a = table_at(10.0, 10.0, 80.0, 80.0);
    let b = table_at(100.0, 100.0, 80.0, 80.0);
    let id_a = a.id;
    let id_b = b.id;

    let assigned = assign_zones(&[zone, a, b]);
    let hierarchy = build_hierarchy(&assigned);

    assert_eq!(hierarchy.zones.len(), 1);
    assert_eq!(hierarchy.zones[0].zone_id, zone_id);
    assert_eq!(hierarchy.zones[0].members, vec![id_a, id_b]);
    assert!(hierarchy.unzoned.is_empty());
}

#[test]
fn hierarchy_lists_unzoned_tables() {
    let zone = zone_at(0.0, 0.0, 100.0, 100.0);
    let outside = table_at(500.0, 500.0, 80.0, 80.0);
    let outside_id = outside.id;

    let assigned = assign_zones(&[zone, outside]);
    let hierarchy = build_hierarchy(&assigned);

    assert_eq!(hierarchy.unzoned, vec![outside_id]);
}

#[test]
fn hierarchy_includes_empty_zones() {
    let zone = zone_at(0.0, 0.0, 100.0, 100.0);
    let zone_id = zone.id;

    let hierarchy = build_hierarchy(&assign_zones(&[zone]));

    assert_eq!(hierarchy.zones.len(), 1);
    assert_eq!(hierarchy.zones[0].zone_id, zone_id);
    assert!(hierarchy.zones[0].members.is_empty());
}

#[test]
fn hierarchy_treats_stale_link_as_unzoned() {
    let mut table = table_at(50.0, 50.0, 80.0, 80.0);
    table.set_zone_id(Some(Uuid::new_v4())); // zone not in the array
    let table_id = table.id;

    let hierarchy = build_hierarchy(&[table]);

    assert_eq!(hierarchy.unzoned, vec![table_id]);
}

#[test]
fn hierarchy_zone_order_matches_array_order() {
    let z1 = zone_at(0.0, 0.0, 100.0, 100.0);
    let z2 = zone_at(200.0, 0.0, 100.0, 100.0);
    let id1 = z1.id;
    let id2 = z2.id;

    let hierarchy = build_hierarchy(&[z1, z2]);

    assert_eq!(hierarchy.zones[0].zone_id, id1);
    assert_eq!(hierarchy.zones[1].zone_id, id2);
}

#[test]
fn hierarchy_of_empty_scene() {
    let hierarchy = build_hierarchy(&[]);
    assert!(hierarchy.zones.is_empty());
    assert!(hierarchy.unzoned.is_empty());
}

// =============================================================
// zone_members
// =============================================================

#[test]
fn zone_members_filters_by_zone() {
    let z1 = zone_at(0.0, 0.0, 200.0, 200.0);
    let z2 = zone_at(400.0, 0.0, 200.0, 200.0);
    let id1 = z1.id;
    let id2 = z2.id;
    let in_first = table_at(50.0, 50.0, 80.0, 80.0);
    let in_second = table_at(450.0, 50.0, 80.0, 80.0);
    let in_first_id = in_first.id;
    let in_second_id = in_second.id;

    let assigned = assign_zones(&[z1, z2, in_first, in_second]);

    assert_eq!(zone_members(&assigned, &id1), vec![in_first_id]);
    assert_eq!(zone_members(&assigned, &id2), vec![in_second_id]);
}

#[test]
fn zone_members_empty_for_unknown_zone() {
    let zone = zone_at(0.0, 0.0, 200.0, 200.0);
    let table = table_at(50.0, 50.0, 80.0, 80.0);
    let assigned = assign_zones(&[zone, table]);

    assert!(zone_members(&assigned, &Uuid::new_v4()).is_empty());
}
