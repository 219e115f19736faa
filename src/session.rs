//! Editor session: owns the scene, view, selection, history, and the
//! active gesture.
//!
//! All geometry mutation happens synchronously inside the pointer-event
//! methods: `start_*` opens a gesture (rejected while another is active),
//! `update_*` recomputes intermediate geometry, `end_*` commits. A commit
//! re-derives zone containment, pushes exactly one history snapshot, and
//! returns [`Action::SaveNeeded`] so the host hands the new snapshot to the
//! auto-save scheduler. Intermediate gesture frames are never recorded.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use tracing::debug;

use crate::consts::GRID_UNIT;
use crate::containment::{ElementHierarchy, assign_zones, build_hierarchy};
use crate::drag::{DragContext, apply_drag, start_drag};
use crate::element::{ElementId, FloorPlanElement, Scene};
use crate::framing::{zoom_to_element, zoom_to_fit};
use crate::history::History;
use crate::selection::Selection;
use crate::transform::{
    ResizeContext, ResizeHandle, RotateContext, apply_resize, apply_rotate, start_resize,
    start_rotate,
};
use crate::viewport::{Point, Size, ViewState, Viewport};

/// What the host should do after a session call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing changed.
    None,
    /// Redraw; the scene was not committed.
    RenderNeeded,
    /// A mutation was committed to history; schedule a save and redraw.
    SaveNeeded,
}

/// The active gesture, if any. At most one gesture runs at a time.
#[derive(Debug, Clone, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging(DragContext),
    Resizing(ResizeContext),
    Rotating(RotateContext),
}

impl Gesture {
    /// Whether a gesture is currently in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// One editing session over a venue's floor plan.
pub struct EditorSession {
    scene: Scene,
    viewport: Viewport,
    view_state: ViewState,
    selection: Selection,
    history: History,
    gesture: Gesture,
}

impl EditorSession {
    /// Empty session with default view state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            viewport: Viewport::default(),
            view_state: ViewState::default(),
            selection: Selection::new(),
            history: History::new(),
            gesture: Gesture::Idle,
        }
    }

    /// Hydrate the session from loaded elements.
    ///
    /// Containment is derived once before first render, so elements moved
    /// externally since the last save are re-linked. The result becomes the
    /// history baseline; selection and any stale gesture are dropped.
    pub fn load(&mut self, elements: Vec<FloorPlanElement>) {
        self.scene.load(assign_zones(&elements));
        self.selection.clear();
        self.gesture = Gesture::Idle;
        self.history = History::new();
        self.history.push(self.scene.snapshot());
    }

    // --- Queries ---

    /// All elements in array order.
    #[must_use]
    pub fn elements(&self) -> &[FloorPlanElement] {
        self.scene.elements()
    }

    /// Look up an element by id.
    #[must_use]
    pub fn element(&self, id: &ElementId) -> Option<&FloorPlanElement> {
        self.scene.get(id)
    }

    /// Deep clone of the element array, e.g. for the save scheduler.
    #[must_use]
    pub fn snapshot(&self) -> Vec<FloorPlanElement> {
        self.scene.snapshot()
    }

    /// Derived zone hierarchy for the current scene.
    #[must_use]
    pub fn hierarchy(&self) -> ElementHierarchy {
        build_hierarchy(self.scene.elements())
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Mutable viewport, for pan/zoom input.
    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// Current display toggles.
    #[must_use]
    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    /// Mutable display toggles.
    pub fn view_state_mut(&mut self) -> &mut ViewState {
        &mut self.view_state
    }

    /// Current selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Whether a gesture is in progress.
    #[must_use]
    pub fn gesture_active(&self) -> bool {
        self.gesture.is_active()
    }

    /// Whether an undo step is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a redo step is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // --- Selection ---

    /// Replace the selection with one element, or clear it with `None`.
    pub fn select_element(&mut self, id: Option<ElementId>) -> Action {
        self.selection.select(id);
        Action::RenderNeeded
    }

    /// Toggle `id` in the selection; `multi` false replaces instead.
    pub fn toggle_selection(&mut self, id: ElementId, multi: bool) -> Action {
        self.selection.toggle(id, multi);
        Action::RenderNeeded
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) -> Action {
        self.selection.clear();
        Action::RenderNeeded
    }

    // --- Structural edits ---

    /// Add an element to the scene and commit.
    pub fn add_element(&mut self, element: FloorPlanElement) -> Action {
        self.scene.insert(element);
        self.commit()
    }

    /// Delete an element and commit. Tables pointing at a deleted zone have
    /// their `zone_id` cleared before the deletion lands in history.
    pub fn delete_element(&mut self, id: &ElementId) -> Action {
        if self.scene.remove(id).is_none() {
            return Action::None;
        }
        self.selection.retain(|sel| sel != id);
        self.commit()
    }

    /// Duplicate an element with a fresh id, offset by one grid unit.
    /// Returns the new id alongside the commit action.
    pub fn duplicate_element(&mut self, id: &ElementId) -> Option<(ElementId, Action)> {
        let mut copy = self.scene.get(id)?.clone();
        copy.id = ElementId::new_v4();
        copy.x += GRID_UNIT;
        copy.y += GRID_UNIT;
        self.scene.insert(copy.clone());
        Some((copy.id, self.commit()))
    }

    /// Apply an edit to an element's fields and commit. The element's id is
    /// immutable and survives the edit regardless of what `edit` does.
    pub fn update_element<F>(&mut self, id: &ElementId, edit: F) -> Action
    where
        F: FnOnce(&mut FloorPlanElement),
    {
        let Some(element) = self.scene.get_mut(id) else {
            return Action::None;
        };
        let kept_id = element.id;
        edit(element);
        element.id = kept_id;
        self.commit()
    }

    // --- Drag gesture ---

    /// Begin dragging the current selection from `pointer` (scene space).
    /// Rejected while another gesture is active or nothing is selected.
    pub fn begin_drag(&mut self, pointer: Point) -> Action {
        if self.gesture.is_active() {
            debug!("drag start rejected: gesture already active");
            return Action::None;
        }
        if self.selection.is_empty() {
            return Action::None;
        }
        let ctx = start_drag(pointer, self.selection.ids(), self.scene.elements());
        self.gesture = Gesture::Dragging(ctx);
        Action::RenderNeeded
    }

    /// Update element positions for the current pointer position.
    pub fn update_drag(&mut self, pointer: Point) -> Action {
        let Gesture::Dragging(ref ctx) = self.gesture else {
            return Action::None;
        };
        let moved = apply_drag(ctx, pointer, self.scene.elements());
        self.scene.load(moved);
        Action::RenderNeeded
    }

    /// Finish the drag: re-derive containment and commit one history entry.
    pub fn end_drag(&mut self) -> Action {
        let Gesture::Dragging(_) = self.gesture else {
            return Action::None;
        };
        self.gesture = Gesture::Idle;
        self.commit()
    }

    // --- Resize gesture ---

    /// Begin resizing `id` from `handle`. Rejected while another gesture is
    /// active or the element does not exist.
    pub fn begin_resize(&mut self, id: &ElementId, handle: ResizeHandle, pointer: Point) -> Action {
        if self.gesture.is_active() {
            debug!("resize start rejected: gesture already active");
            return Action::None;
        }
        let Some(element) = self.scene.get(id) else {
            return Action::None;
        };
        self.gesture = Gesture::Resizing(start_resize(element, handle, pointer));
        Action::RenderNeeded
    }

    /// Update the resized element's geometry for the current pointer.
    pub fn update_resize(&mut self, pointer: Point) -> Action {
        let Gesture::Resizing(ref ctx) = self.gesture else {
            return Action::None;
        };
        let result = apply_resize(ctx, pointer);
        let id = ctx.element_id;
        let Some(element) = self.scene.get_mut(&id) else {
            return Action::None;
        };
        element.x = result.x;
        element.y = result.y;
        element.width = result.width;
        element.height = result.height;
        Action::RenderNeeded
    }

    /// Finish the resize: re-derive containment and commit.
    pub fn end_resize(&mut self) -> Action {
        let Gesture::Resizing(_) = self.gesture else {
            return Action::None;
        };
        self.gesture = Gesture::Idle;
        self.commit()
    }

    // --- Rotate gesture ---

    /// Begin rotating `id`. Rejected while another gesture is active or the
    /// element does not exist.
    pub fn begin_rotate(&mut self, id: &ElementId, pointer: Point) -> Action {
        if self.gesture.is_active() {
            debug!("rotate start rejected: gesture already active");
            return Action::None;
        }
        let Some(element) = self.scene.get(id) else {
            return Action::None;
        };
        self.gesture = Gesture::Rotating(start_rotate(element, pointer));
        Action::RenderNeeded
    }

    /// Update the rotated element's angle for the current pointer.
    pub fn update_rotate(&mut self, pointer: Point) -> Action {
        let Gesture::Rotating(ref ctx) = self.gesture else {
            return Action::None;
        };
        let rotation = apply_rotate(ctx, pointer);
        let id = ctx.element_id;
        let Some(element) = self.scene.get_mut(&id) else {
            return Action::None;
        };
        element.rotation = rotation;
        Action::RenderNeeded
    }

    /// Finish the rotate: commit one history entry.
    pub fn end_rotate(&mut self) -> Action {
        let Gesture::Rotating(_) = self.gesture else {
            return Action::None;
        };
        self.gesture = Gesture::Idle;
        self.commit()
    }

    // --- History ---

    /// Restore the previous snapshot. No-op at the bottom of the stack.
    pub fn undo(&mut self) -> Action {
        let Some(snapshot) = self.history.undo().map(<[FloorPlanElement]>::to_vec) else {
            return Action::None;
        };
        self.restore(snapshot)
    }

    /// Restore the next snapshot. No-op at the top of the stack.
    pub fn redo(&mut self) -> Action {
        let Some(snapshot) = self.history.redo().map(<[FloorPlanElement]>::to_vec) else {
            return Action::None;
        };
        self.restore(snapshot)
    }

    // --- Framing ---

    /// Frame one element in the container and apply the result to the
    /// viewport.
    pub fn frame_element(&mut self, id: &ElementId, container: Size) -> Action {
        let Some(element) = self.scene.get(id) else {
            return Action::None;
        };
        zoom_to_element(element, &self.viewport, container).apply(&mut self.viewport);
        Action::RenderNeeded
    }

    /// Frame the whole scene in the container and apply the result to the
    /// viewport.
    pub fn frame_all(&mut self, container: Size, padding: f64) -> Action {
        let Some(target) = zoom_to_fit(self.scene.elements(), &self.viewport, container, padding)
        else {
            return Action::None;
        };
        target.apply(&mut self.viewport);
        Action::RenderNeeded
    }

    // --- Internals ---

    /// Re-derive containment, push one history snapshot, request a save.
    fn commit(&mut self) -> Action {
        let assigned = assign_zones(self.scene.elements());
        self.scene.load(assigned);
        self.history.push(self.scene.snapshot());
        Action::SaveNeeded
    }

    /// Swap in a history snapshot, drop stale selection ids, request a save.
    fn restore(&mut self, snapshot: Vec<FloorPlanElement>) -> Action {
        self.scene.load(assign_zones(&snapshot));
        let scene = &self.scene;
        self.selection.retain(|id| scene.get(id).is_some());
        self.gesture = Gesture::Idle;
        Action::SaveNeeded
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
