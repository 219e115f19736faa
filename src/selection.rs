//! Selection: tracks single and multi selection over the element set.
//!
//! Two representations are kept in lockstep: `primary` holds the id when
//! exactly one element is selected, and `ids` holds the full set. The
//! invariant is that `primary` is `Some` iff the set has exactly one member.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use std::collections::BTreeSet;

use crate::element::ElementId;

/// Current selection state.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    primary: Option<ElementId>,
    ids: BTreeSet<ElementId>,
}

impl Selection {
    /// Empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection wholesale with one element, or clear it.
    pub fn select(&mut self, id: Option<ElementId>) {
        self.ids.clear();
        if let Some(id) = id {
            self.ids.insert(id);
        }
        self.sync_primary();
    }

    /// Toggle membership of `id`.
    ///
    /// With `multi` false the selection is replaced by `id` alone. With
    /// `multi` true, `id` is flipped in or out of the current set; when the
    /// set shrinks to one member it demotes to a single selection.
    pub fn toggle(&mut self, id: ElementId, multi: bool) {
        if multi {
            if !self.ids.remove(&id) {
                self.ids.insert(id);
            }
        } else {
            self.ids.clear();
            self.ids.insert(id);
        }
        self.sync_primary();
    }

    /// Empty the selection.
    pub fn clear(&mut self) {
        self.ids.clear();
        self.primary = None;
    }

    /// Drop any selected ids not accepted by `keep`. Used after deletes and
    /// undo/redo so the selection never points at a missing element.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: Fn(&ElementId) -> bool,
    {
        self.ids.retain(keep);
        self.sync_primary();
    }

    /// The single selected id, when exactly one element is selected.
    #[must_use]
    pub fn primary(&self) -> Option<ElementId> {
        self.primary
    }

    /// All selected ids.
    #[must_use]
    pub fn ids(&self) -> &BTreeSet<ElementId> {
        &self.ids
    }

    /// Whether `id` is in the selection.
    #[must_use]
    pub fn is_selected(&self, id: &ElementId) -> bool {
        self.ids.contains(id)
    }

    /// Number of selected elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    fn sync_primary(&mut self) {
        self.primary = if self.ids.len() == 1 {
            self.ids.iter().next().copied()
        } else {
            None
        };
    }
}
