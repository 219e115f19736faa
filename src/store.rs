//! Persistence contract: wire records, the storage trait, and the
//! element-array ↔ record-list conversions.
//!
//! The storage collaborator moves three parallel lists keyed by a venue id;
//! full-replace semantics on save are its responsibility, not this crate's.
//! `merge_records` builds the unified element array (zones first, so the
//! containment tie-break order is stable across load/save cycles); callers
//! run [`crate::containment::assign_zones`] immediately after load so
//! elements moved externally since the last save are re-linked before the
//! first render.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::element::{ElementId, ElementKind, FloorPlanElement, PolygonPoint, Shape, TableKind};

/// Identifier of the venue a floor plan belongs to.
pub type VenueId = Uuid;

/// Error from the storage collaborator.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no floor plan stored for venue {venue}")]
    NotFound { venue: VenueId },
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// A table on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRecord {
    pub id: ElementId,
    pub name: String,
    pub seats: u32,
    pub notes: String,
    pub table_kind: TableKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub shape: Shape,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<ElementId>,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_spend: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
}

/// A zone on the wire. Zones carry no rotation in the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRecord {
    pub id: ElementId,
    pub name: String,
    pub color: String,
    pub description: String,
    pub purpose: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub shape: Shape,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polygon_points: Option<Vec<PolygonPoint>>,
}

/// A special area on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialAreaRecord {
    pub id: ElementId,
    pub name: String,
    pub area_type: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub shape: Shape,
    pub color: String,
    pub icon: String,
}

/// The three parallel lists the storage collaborator moves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorPlanRecords {
    pub tables: Vec<TableRecord>,
    pub zones: Vec<ZoneRecord>,
    pub special_areas: Vec<SpecialAreaRecord>,
}

/// Storage collaborator for floor plans, keyed by venue.
#[async_trait]
pub trait FloorPlanStore: Send + Sync {
    /// Load the stored floor plan for `venue`.
    async fn load(&self, venue: VenueId) -> Result<FloorPlanRecords, StoreError>;

    /// Replace the stored floor plan for `venue` with `records`.
    async fn save(&self, venue: VenueId, records: &FloorPlanRecords) -> Result<(), StoreError>;
}

/// Build the unified element array from wire records.
///
/// Order is zones, then tables, then special areas, so zone array order —
/// the overlapping-zone tie-break — survives a round trip.
#[must_use]
pub fn merge_records(records: &FloorPlanRecords) -> Vec<FloorPlanElement> {
    let mut elements = Vec::with_capacity(
        records.zones.len() + records.tables.len() + records.special_areas.len(),
    );

    for zone in &records.zones {
        elements.push(FloorPlanElement {
            id: zone.id,
            name: zone.name.clone(),
            x: zone.x,
            y: zone.y,
            width: zone.width,
            height: zone.height,
            rotation: 0.0,
            shape: zone.shape,
            polygon_points: zone.polygon_points.clone(),
            color: zone.color.clone(),
            kind: ElementKind::Zone {
                description: zone.description.clone(),
                purpose: zone.purpose.clone(),
            },
        });
    }

    for table in &records.tables {
        elements.push(FloorPlanElement {
            id: table.id,
            name: table.name.clone(),
            x: table.x,
            y: table.y,
            width: table.width,
            height: table.height,
            rotation: table.rotation,
            shape: table.shape,
            polygon_points: None,
            color: table.color.clone(),
            kind: ElementKind::Table {
                seats: table.seats,
                notes: table.notes.clone(),
                table_kind: table.table_kind,
                zone_id: table.zone_id,
                min_spend: table.min_spend,
                hourly_rate: table.hourly_rate,
            },
        });
    }

    for area in &records.special_areas {
        elements.push(FloorPlanElement {
            id: area.id,
            name: area.name.clone(),
            x: area.x,
            y: area.y,
            width: area.width,
            height: area.height,
            rotation: area.rotation,
            shape: area.shape,
            polygon_points: None,
            color: area.color.clone(),
            kind: ElementKind::SpecialArea {
                area_type: area.area_type.clone(),
                icon: area.icon.clone(),
            },
        });
    }

    elements
}

/// Partition the unified element array back into the three wire lists.
#[must_use]
pub fn partition_elements(elements: &[FloorPlanElement]) -> FloorPlanRecords {
    let mut records = FloorPlanRecords::default();

    for element in elements {
        match &element.kind {
            ElementKind::Table {
                seats,
                notes,
                table_kind,
                zone_id,
                min_spend,
                hourly_rate,
            } => records.tables.push(TableRecord {
                id: element.id,
                name: element.name.clone(),
                seats: *seats,
                notes: notes.clone(),
                table_kind: *table_kind,
                x: element.x,
                y: element.y,
                width: element.width,
                height: element.height,
                rotation: element.rotation,
                shape: element.shape,
                zone_id: *zone_id,
                color: element.color.clone(),
                min_spend: *min_spend,
                hourly_rate: *hourly_rate,
            }),
            ElementKind::Zone { description, purpose } => records.zones.push(ZoneRecord {
                id: element.id,
                name: element.name.clone(),
                color: element.color.clone(),
                description: description.clone(),
                purpose: purpose.clone(),
                x: element.x,
                y: element.y,
                width: element.width,
                height: element.height,
                shape: element.shape,
                polygon_points: element.polygon_points.clone(),
            }),
            ElementKind::SpecialArea { area_type, icon } => {
                records.special_areas.push(SpecialAreaRecord {
                    id: element.id,
                    name: element.name.clone(),
                    area_type: area_type.clone(),
                    x: element.x,
                    y: element.y,
                    width: element.width,
                    height: element.height,
                    rotation: element.rotation,
                    shape: element.shape,
                    color: element.color.clone(),
                    icon: icon.clone(),
                });
            }
        }
    }

    records
}
