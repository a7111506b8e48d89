//! The element store resource: canvas content, selection and edit history.

use bevy::prelude::*;
use std::collections::HashSet;
use std::time::Duration;

use crate::canvas::{ArtboardDimensions, Element, ElementId, ElementKind};

use super::batch::{BatchKind, BatchWindow};
use super::history::HistoryStack;

/// Single source of truth for canvas content within one editing session.
///
/// Every committed mutation records the collection as it was beforehand, so
/// undo restores exact values. Continuous edits (move, resize, corner radius)
/// share one history entry while they keep arriving within the batch window.
#[derive(Resource, Debug, Default)]
pub struct ElementStore {
    elements: Vec<Element>,
    history: HistoryStack,
    batch: BatchWindow,
    /// Last id handed out
    next_id: u64,
    /// Bumped on every change to the live collection
    revision: u64,
}

impl ElementStore {
    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Elements in draw order (last is on top)
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn index_of(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|e| e.id == id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn selected(&self) -> Option<&Element> {
        self.elements.iter().find(|e| e.selected)
    }

    pub fn selected_id(&self) -> Option<ElementId> {
        self.selected().map(|e| e.id)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_count(&self) -> usize {
        self.history.undo_count()
    }

    pub fn redo_count(&self) -> usize {
        self.history.redo_count()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn batch_kind(&self) -> Option<BatchKind> {
        self.batch.kind()
    }

    // ------------------------------------------------------------------
    // Element lifecycle
    // ------------------------------------------------------------------

    /// Append a new element with default geometry centered on the artboard
    /// and make it the only selected element.
    pub fn add_element(&mut self, kind: ElementKind, artboard: &ArtboardDimensions) -> ElementId {
        self.next_id += 1;
        let id = ElementId(self.next_id);

        let mut element = Element::with_defaults(id, kind, artboard.size());
        element.selected = true;

        self.commit(|elements| {
            for existing in elements.iter_mut() {
                existing.selected = false;
            }
            elements.push(element);
        });

        debug!("Added {} {}", kind.display_name(), id);
        id
    }

    pub fn delete_element(&mut self, id: ElementId) -> bool {
        if !self.contains(id) {
            return false;
        }

        self.commit(|elements| {
            elements.retain(|e| e.id != id);
            for element in elements.iter_mut() {
                element.selected = false;
            }
        });

        debug!("Deleted element {}", id);
        true
    }

    /// Move the element at `old_index` to `new_index` (splice, not swap).
    ///
    /// Out-of-range indices are rejected without touching history.
    pub fn reorder_element(&mut self, old_index: usize, new_index: usize) -> bool {
        let len = self.elements.len();
        if old_index >= len || new_index >= len {
            warn!(
                "Ignoring reorder {} -> {} on {} elements",
                old_index, new_index, len
            );
            return false;
        }

        self.commit(|elements| {
            let element = elements.remove(old_index);
            elements.insert(new_index, element);
        });
        true
    }

    /// Remove every element. The empty canvas is itself undoable.
    pub fn reset_canvas(&mut self) {
        self.commit(|elements| elements.clear());
        info!("Canvas reset");
    }

    /// Install a loaded collection as a fresh session.
    ///
    /// History is discarded. Duplicate ids are reassigned, geometry is
    /// re-validated and at most one element stays selected.
    pub fn replace_all(&mut self, elements: Vec<Element>) {
        let mut next_id = elements.iter().map(|e| e.id.0).max().unwrap_or(0);
        let mut seen = HashSet::new();
        let mut has_selection = false;

        self.elements = elements
            .into_iter()
            .map(|mut element| {
                if !seen.insert(element.id) {
                    next_id += 1;
                    warn!("Duplicate element id {}, reassigned to #{}", element.id, next_id);
                    element.id = ElementId(next_id);
                    seen.insert(element.id);
                }
                element.set_size(element.width, element.height);
                if !element.supports_corner_radius() {
                    element.corner_radius = None;
                }
                if element.selected && has_selection {
                    element.selected = false;
                }
                has_selection |= element.selected;
                element
            })
            .collect();

        self.next_id = next_id;
        self.history.clear();
        self.batch.close();
        self.revision += 1;
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Select exactly one element. Suppressed while the canvas is being
    /// panned; never recorded in history.
    pub fn select_element(&mut self, id: ElementId, pan_mode: bool) -> bool {
        if pan_mode || !self.contains(id) {
            return false;
        }

        for element in &mut self.elements {
            element.selected = element.id == id;
        }
        self.revision += 1;
        true
    }

    /// Deselect everything. Recorded in history like any other edit.
    pub fn clear_selection(&mut self) {
        self.commit(|elements| {
            for element in elements.iter_mut() {
                element.selected = false;
            }
        });
    }

    // ------------------------------------------------------------------
    // Continuous edits (batched)
    // ------------------------------------------------------------------

    pub fn move_element(&mut self, id: ElementId, dx: f32, dy: f32, now: Duration) -> bool {
        self.commit_batched(BatchKind::Move, id, now, |element| {
            element.x += dx;
            element.y += dy;
        })
    }

    /// Resize, keeping any corner radius within the new bounds
    pub fn resize_element(&mut self, id: ElementId, width: f32, height: f32, now: Duration) -> bool {
        self.commit_batched(BatchKind::Resize, id, now, |element| {
            element.set_size(width, height);
        })
    }

    /// Set a rectangle's corner radius, clamped to `[0, min(w, h) / 2]`
    pub fn update_corner_radius(&mut self, id: ElementId, radius: f32, now: Duration) -> bool {
        if !self.get(id).is_some_and(Element::supports_corner_radius) {
            return false;
        }

        self.commit_batched(BatchKind::CornerRadius, id, now, |element| {
            element.set_corner_radius(radius);
        })
    }

    /// Close the batch window if it has been idle long enough
    pub fn expire_batch(&mut self, now: Duration) -> bool {
        self.batch.expire(now)
    }

    // ------------------------------------------------------------------
    // Discrete edits
    // ------------------------------------------------------------------

    pub fn update_text_content(&mut self, id: ElementId, text: &str) -> bool {
        if !self.get(id).is_some_and(|e| e.kind == ElementKind::Text) {
            return false;
        }
        self.commit_element(id, |element| element.content = Some(text.to_string()))
    }

    pub fn update_fill_color(&mut self, id: ElementId, color: &str) -> bool {
        self.commit_element(id, |element| element.fill_color = color.to_string())
    }

    pub fn update_border_width(&mut self, id: ElementId, width: f32) -> bool {
        self.commit_element(id, |element| element.border_width = Some(width.max(0.0)))
    }

    pub fn update_border_color(&mut self, id: ElementId, color: &str) -> bool {
        self.commit_element(id, |element| element.border_color = Some(color.to_string()))
    }

    pub fn update_shadow_blur(&mut self, id: ElementId, blur: f32) -> bool {
        self.commit_element(id, |element| element.shadow_blur = Some(blur.max(0.0)))
    }

    pub fn update_shadow_color(&mut self, id: ElementId, color: &str) -> bool {
        self.commit_element(id, |element| element.shadow_color = Some(color.to_string()))
    }

    pub fn update_name(&mut self, id: ElementId, name: &str) -> bool {
        self.commit_element(id, |element| element.name = name.to_string())
    }

    // ------------------------------------------------------------------
    // History
    // ------------------------------------------------------------------

    pub fn undo(&mut self) -> bool {
        if !self.history.undo(&mut self.elements) {
            return false;
        }
        self.batch.close();
        self.revision += 1;
        debug!("Undo ({} left)", self.history.undo_count());
        true
    }

    pub fn redo(&mut self) -> bool {
        if !self.history.redo(&mut self.elements) {
            return false;
        }
        self.batch.close();
        self.revision += 1;
        debug!("Redo ({} left)", self.history.redo_count());
        true
    }

    // ------------------------------------------------------------------
    // Commit helpers
    // ------------------------------------------------------------------

    /// Snapshot, apply, and record one history entry. Discrete edits end any
    /// in-flight batch.
    fn commit(&mut self, apply: impl FnOnce(&mut Vec<Element>)) {
        let snapshot = self.elements.clone();
        apply(&mut self.elements);
        self.history.push(snapshot);
        self.batch.close();
        self.revision += 1;
    }

    fn commit_element(&mut self, id: ElementId, apply: impl FnOnce(&mut Element)) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.commit(|elements| apply(&mut elements[index]));
        true
    }

    /// Apply a continuous edit, pushing history only when it opens a batch
    fn commit_batched(
        &mut self,
        kind: BatchKind,
        id: ElementId,
        now: Duration,
        apply: impl FnOnce(&mut Element),
    ) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };

        if self.batch.touch(kind, now) {
            self.history.push(self.elements.clone());
        }
        apply(&mut self.elements[index]);
        self.revision += 1;
        true
    }
}
