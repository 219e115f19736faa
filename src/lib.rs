//! Floor-plan spatial editor core.
//!
//! This crate owns the geometry and state transitions of a venue floor-plan
//! editor: a 2-D scene of movable, resizable, rotatable elements (tables,
//! zones, special areas) with zone containment, grid snapping, bounded
//! undo/redo, and debounced persistence. Rendering and storage backends are
//! the host's job: the host feeds pointer events into an
//! [`session::EditorSession`], draws from its state, and wires the
//! [`store::FloorPlanStore`] collaborator into an
//! [`autosave::AutosaveScheduler`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`session`] | Top-level [`session::EditorSession`] and gesture guard |
//! | [`element`] | Floor-plan element types and the in-memory scene store |
//! | [`viewport`] | Pan/zoom viewport and coordinate conversions |
//! | [`containment`] | Zone containment derivation |
//! | [`selection`] | Single/multi selection |
//! | [`drag`] | Drag gesture context and grid-snapped movement |
//! | [`transform`] | 8-handle resize and rotate gestures |
//! | [`history`] | Bounded snapshot undo/redo |
//! | [`autosave`] | Debounced, cancellable save scheduler |
//! | [`framing`] | Zoom-to-element / zoom-to-fit calculators |
//! | [`store`] | Persistence wire records and storage trait |
//! | [`consts`] | Shared numeric constants (grid unit, zoom limits, etc.) |

pub mod autosave;
pub mod consts;
pub mod containment;
pub mod drag;
pub mod element;
pub mod framing;
pub mod history;
pub mod selection;
pub mod session;
pub mod store;
pub mod transform;
pub mod viewport;
