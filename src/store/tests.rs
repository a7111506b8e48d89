//! Unit tests for the element store.

use std::time::Duration;

use crate::canvas::{ArtboardDimensions, ElementId, ElementKind};

use super::history::HistoryStack;
use super::{BatchKind, ElementStore, MAX_HISTORY_SIZE};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn artboard() -> ArtboardDimensions {
    ArtboardDimensions::new(800.0, 600.0)
}

fn store_with_rect() -> (ElementStore, ElementId) {
    let mut store = ElementStore::default();
    let id = store.add_element(ElementKind::Rectangle, &artboard());
    (store, id)
}

// HistoryStack tests
#[test]
fn test_history_push_clears_future() {
    let mut history = HistoryStack::default();
    let mut live = Vec::new();

    history.push(Vec::new());
    history.push(Vec::new());
    assert!(history.undo(&mut live));
    assert!(history.can_redo());

    history.push(Vec::new());
    assert!(!history.can_redo());
}

#[test]
fn test_history_max_size() {
    let mut history = HistoryStack::default();
    for _ in 0..150 {
        history.push(Vec::new());
    }
    assert_eq!(history.undo_count(), MAX_HISTORY_SIZE);
}

#[test]
fn test_history_undo_empty_leaves_live_untouched() {
    let (store, _) = store_with_rect();
    let mut history = HistoryStack::default();
    let mut live = store.elements().to_vec();

    assert!(!history.undo(&mut live));
    assert!(!history.redo(&mut live));
    assert_eq!(live, store.elements());
}

// Add / select
#[test]
fn test_add_element_selects_only_new_element() {
    let mut store = ElementStore::default();
    let first = store.add_element(ElementKind::Rectangle, &artboard());
    let second = store.add_element(ElementKind::Text, &artboard());

    assert_ne!(first, second);
    assert_eq!(store.len(), 2);
    assert_eq!(store.selected_id(), Some(second));
    assert!(!store.get(first).unwrap().selected);
    assert_eq!(store.undo_count(), 2);
}

#[test]
fn test_add_rectangle_centered_on_current_artboard() {
    let mut store = ElementStore::default();
    let id = store.add_element(ElementKind::Rectangle, &ArtboardDimensions::new(400.0, 200.0));
    let element = store.get(id).unwrap();
    assert_eq!((element.x, element.y), (150.0, 50.0));
    assert_eq!((element.width, element.height), (100.0, 100.0));
}

#[test]
fn test_select_element_does_not_push_history() {
    let mut store = ElementStore::default();
    let first = store.add_element(ElementKind::Rectangle, &artboard());
    store.add_element(ElementKind::Rectangle, &artboard());
    let before = store.undo_count();

    assert!(store.select_element(first, false));
    assert_eq!(store.selected_id(), Some(first));
    assert_eq!(store.elements().iter().filter(|e| e.selected).count(), 1);
    assert_eq!(store.undo_count(), before);
}

#[test]
fn test_select_element_suppressed_in_pan_mode() {
    let mut store = ElementStore::default();
    let first = store.add_element(ElementKind::Rectangle, &artboard());
    let second = store.add_element(ElementKind::Rectangle, &artboard());

    assert!(!store.select_element(first, true));
    assert_eq!(store.selected_id(), Some(second));
}

#[test]
fn test_select_unknown_id_is_noop() {
    let (mut store, id) = store_with_rect();
    assert!(!store.select_element(ElementId(999), false));
    assert_eq!(store.selected_id(), Some(id));
}

// Undo / redo properties
#[test]
fn test_undo_restores_exact_pre_operation_value() {
    let (mut store, id) = store_with_rect();
    let text_id = store.add_element(ElementKind::Text, &artboard());
    let ops: Vec<Box<dyn Fn(&mut ElementStore)>> = vec![
        Box::new(move |s: &mut ElementStore| {
            s.update_fill_color(id, "#ff0000");
        }),
        Box::new(move |s: &mut ElementStore| {
            s.update_border_width(id, 4.0);
        }),
        Box::new(move |s: &mut ElementStore| {
            s.update_border_color(id, "#000000");
        }),
        Box::new(move |s: &mut ElementStore| {
            s.update_shadow_blur(id, 8.0);
        }),
        Box::new(move |s: &mut ElementStore| {
            s.update_shadow_color(id, "#333333");
        }),
        Box::new(move |s: &mut ElementStore| {
            s.update_name(id, "Hero");
        }),
        Box::new(move |s: &mut ElementStore| {
            s.update_text_content(text_id, "Headline");
        }),
        Box::new(|s: &mut ElementStore| {
            s.add_element(ElementKind::Rectangle, &artboard());
        }),
        Box::new(|s: &mut ElementStore| {
            s.reorder_element(0, 1);
        }),
        Box::new(move |s: &mut ElementStore| {
            s.delete_element(text_id);
        }),
        Box::new(|s: &mut ElementStore| s.clear_selection()),
        Box::new(|s: &mut ElementStore| s.reset_canvas()),
    ];

    for op in ops {
        let before = store.elements().to_vec();
        op(&mut store);
        assert_ne!(store.elements(), before.as_slice());
        assert!(store.undo());
        assert_eq!(store.elements(), before.as_slice());
    }
}

#[test]
fn test_undo_then_redo_is_identity() {
    let (mut store, id) = store_with_rect();
    store.update_fill_color(id, "#123456");
    let after = store.elements().to_vec();

    assert!(store.undo());
    assert!(store.redo());
    assert_eq!(store.elements(), after.as_slice());
}

#[test]
fn test_new_edit_after_undo_discards_redo() {
    let (mut store, id) = store_with_rect();
    store.update_name(id, "One");
    store.update_name(id, "Two");

    store.undo();
    store.undo();
    assert_eq!(store.redo_count(), 2);

    store.update_fill_color(id, "#abcdef");
    assert!(!store.can_redo());
    assert!(!store.redo());
}

#[test]
fn test_undo_and_redo_on_empty_history_are_noops() {
    let mut store = ElementStore::default();
    let revision = store.revision();
    assert!(!store.undo());
    assert!(!store.redo());
    assert_eq!(store.revision(), revision);
}

#[test]
fn test_undo_first_add_empties_canvas() {
    let (mut store, _) = store_with_rect();
    assert!(store.undo());
    assert!(store.is_empty());
}

// Batching
#[test]
fn test_consecutive_moves_share_one_history_entry() {
    let (mut store, id) = store_with_rect();
    let before = store.undo_count();

    for step in 0..10 {
        assert!(store.move_element(id, 1.0, 2.0, ms(step * 50)));
    }

    assert_eq!(store.undo_count(), before + 1);
    let element = store.get(id).unwrap();
    assert_eq!((element.x, element.y), (360.0, 270.0));
}

#[test]
fn test_pause_in_moves_starts_second_entry() {
    let (mut store, id) = store_with_rect();
    let before = store.undo_count();

    store.move_element(id, 1.0, 0.0, ms(0));
    store.move_element(id, 1.0, 0.0, ms(100));
    store.move_element(id, 1.0, 0.0, ms(200));
    // Gap >= 300ms after the third call
    store.move_element(id, 1.0, 0.0, ms(500));
    store.move_element(id, 1.0, 0.0, ms(600));

    assert_eq!(store.undo_count(), before + 2);
}

#[test]
fn test_undo_batched_drag_restores_position_before_drag() {
    let (mut store, id) = store_with_rect();
    let start = store.elements().to_vec();

    for step in 0..5 {
        store.move_element(id, 10.0, 10.0, ms(step * 16));
    }

    assert!(store.undo());
    assert_eq!(store.elements(), start.as_slice());
}

#[test]
fn test_expired_batch_starts_new_entry() {
    let (mut store, id) = store_with_rect();
    let before = store.undo_count();

    store.move_element(id, 1.0, 0.0, ms(0));
    assert_eq!(store.batch_kind(), Some(BatchKind::Move));
    assert!(store.expire_batch(ms(300)));
    assert_eq!(store.batch_kind(), None);
    store.move_element(id, 1.0, 0.0, ms(310));

    assert_eq!(store.undo_count(), before + 2);
}

#[test]
fn test_switching_batch_kind_pushes_history() {
    let (mut store, id) = store_with_rect();
    let before = store.undo_count();

    store.move_element(id, 5.0, 0.0, ms(0));
    store.resize_element(id, 120.0, 120.0, ms(10));
    store.move_element(id, 5.0, 0.0, ms(20));

    assert_eq!(store.undo_count(), before + 3);
}

#[test]
fn test_discrete_edit_ends_batch() {
    let (mut store, id) = store_with_rect();
    let before = store.undo_count();

    store.move_element(id, 1.0, 0.0, ms(0));
    store.update_fill_color(id, "#000000");
    store.move_element(id, 1.0, 0.0, ms(10));

    assert_eq!(store.undo_count(), before + 3);
}

#[test]
fn test_move_after_undo_starts_new_entry() {
    let (mut store, id) = store_with_rect();
    store.move_element(id, 1.0, 0.0, ms(0));
    store.undo();
    let before = store.undo_count();

    store.move_element(id, 1.0, 0.0, ms(10));
    assert_eq!(store.undo_count(), before + 1);
}

#[test]
fn test_move_unknown_id_leaves_history_untouched() {
    let (mut store, _) = store_with_rect();
    let before = store.undo_count();
    assert!(!store.move_element(ElementId(42), 1.0, 1.0, ms(0)));
    assert_eq!(store.undo_count(), before);
    assert_eq!(store.batch_kind(), None);
}

// Corner radius
#[test]
fn test_corner_radius_clamped_to_half_min_side() {
    let (mut store, id) = store_with_rect();
    store.resize_element(id, 100.0, 60.0, ms(0));
    store.update_corner_radius(id, 500.0, ms(1000));
    assert_eq!(store.get(id).unwrap().corner_radius, Some(30.0));
}

#[test]
fn test_corner_radius_never_negative() {
    let (mut store, id) = store_with_rect();
    store.update_corner_radius(id, -5.0, ms(0));
    assert_eq!(store.get(id).unwrap().corner_radius, Some(0.0));
}

#[test]
fn test_corner_radius_ignored_for_text() {
    let mut store = ElementStore::default();
    let id = store.add_element(ElementKind::Text, &artboard());
    let before = store.undo_count();

    assert!(!store.update_corner_radius(id, 5.0, ms(0)));
    assert_eq!(store.get(id).unwrap().corner_radius, None);
    assert_eq!(store.undo_count(), before);
}

#[test]
fn test_resize_reclamps_existing_corner_radius() {
    let (mut store, id) = store_with_rect();
    store.update_corner_radius(id, 30.0, ms(0));
    assert_eq!(store.get(id).unwrap().corner_radius, Some(30.0));

    store.resize_element(id, 40.0, 40.0, ms(1000));
    assert_eq!(store.get(id).unwrap().corner_radius, Some(20.0));
}

#[test]
fn test_shrinking_resizes_keep_radius_in_bounds() {
    let (mut store, id) = store_with_rect();
    store.update_corner_radius(id, 50.0, ms(0));

    for (step, size) in [(90.0, 80.0), (50.0, 70.0), (12.0, 30.0), (3.0, 3.0)]
        .into_iter()
        .enumerate()
    {
        store.resize_element(id, size.0, size.1, ms(1000 + step as u64 * 10));
        let element = store.get(id).unwrap();
        assert!(element.corner_radius.unwrap() <= element.width.min(element.height) / 2.0);
    }
}

#[test]
fn test_resize_without_radius_keeps_none() {
    let (mut store, id) = store_with_rect();
    store.resize_element(id, 10.0, 10.0, ms(0));
    assert_eq!(store.get(id).unwrap().corner_radius, None);
}

// Discrete edits
#[test]
fn test_each_discrete_edit_pushes_one_entry() {
    let (mut store, id) = store_with_rect();
    let before = store.undo_count();

    store.update_fill_color(id, "#111111");
    store.update_fill_color(id, "#222222");
    store.update_name(id, "Box");

    assert_eq!(store.undo_count(), before + 3);
}

#[test]
fn test_text_content_only_for_text_elements() {
    let mut store = ElementStore::default();
    let rect = store.add_element(ElementKind::Rectangle, &artboard());
    let text = store.add_element(ElementKind::Text, &artboard());

    assert!(!store.update_text_content(rect, "nope"));
    assert!(store.get(rect).unwrap().content.is_none());

    assert!(store.update_text_content(text, "Hello"));
    assert_eq!(store.get(text).unwrap().content.as_deref(), Some("Hello"));
}

#[test]
fn test_discrete_edit_on_unknown_id_is_noop() {
    let (mut store, _) = store_with_rect();
    let before = store.undo_count();
    assert!(!store.update_fill_color(ElementId(77), "#000000"));
    assert!(!store.update_name(ElementId(77), "ghost"));
    assert!(!store.delete_element(ElementId(77)));
    assert_eq!(store.undo_count(), before);
}

#[test]
fn test_border_width_not_negative() {
    let (mut store, id) = store_with_rect();
    store.update_border_width(id, -2.0);
    assert_eq!(store.get(id).unwrap().border_width, Some(0.0));
}

// Delete / reset / clear selection
#[test]
fn test_delete_then_undo_restores_identical_element() {
    let (mut store, id) = store_with_rect();
    store.update_name(id, "A");
    let original = store.get(id).unwrap().clone();

    assert!(store.delete_element(id));
    assert!(store.get(id).is_none());
    assert_eq!(store.selected_id(), None);

    assert!(store.undo());
    assert_eq!(store.get(id), Some(&original));
}

#[test]
fn test_delete_clears_selection_of_others() {
    let mut store = ElementStore::default();
    let first = store.add_element(ElementKind::Rectangle, &artboard());
    let second = store.add_element(ElementKind::Rectangle, &artboard());
    store.select_element(first, false);

    store.delete_element(second);
    assert_eq!(store.selected_id(), None);
}

#[test]
fn test_reset_canvas_is_undoable() {
    let mut store = ElementStore::default();
    store.add_element(ElementKind::Rectangle, &artboard());
    store.add_element(ElementKind::Text, &artboard());
    let before = store.elements().to_vec();

    store.reset_canvas();
    assert!(store.is_empty());
    assert_eq!(store.selected_id(), None);

    store.undo();
    assert_eq!(store.elements(), before.as_slice());
}

#[test]
fn test_clear_selection_without_selection_still_pushes_history() {
    let (mut store, _) = store_with_rect();
    store.clear_selection();
    let unselected = store.elements().to_vec();
    let before = store.undo_count();

    store.clear_selection();
    assert_eq!(store.undo_count(), before + 1);
    assert_eq!(store.elements(), unselected.as_slice());

    store.undo();
    assert_eq!(store.elements(), unselected.as_slice());
}

// Reorder
#[test]
fn test_reorder_moves_rectangle_on_top() {
    let mut store = ElementStore::default();
    let rect = store.add_element(ElementKind::Rectangle, &artboard());
    let text = store.add_element(ElementKind::Text, &artboard());

    assert!(store.reorder_element(0, 1));
    assert_eq!(store.elements()[0].id, text);
    assert_eq!(store.elements()[1].id, rect);
}

#[test]
fn test_reorder_is_splice_not_swap() {
    let mut store = ElementStore::default();
    let ids: Vec<_> = (0..4)
        .map(|_| store.add_element(ElementKind::Rectangle, &artboard()))
        .collect();

    store.reorder_element(0, 3);
    let order: Vec<_> = store.elements().iter().map(|e| e.id).collect();
    assert_eq!(order, vec![ids[1], ids[2], ids[3], ids[0]]);

    store.reorder_element(3, 1);
    let order: Vec<_> = store.elements().iter().map(|e| e.id).collect();
    assert_eq!(order, vec![ids[1], ids[0], ids[2], ids[3]]);
}

#[test]
fn test_reorder_out_of_range_rejected() {
    let (mut store, _) = store_with_rect();
    let before = store.undo_count();
    let elements = store.elements().to_vec();

    assert!(!store.reorder_element(0, 1));
    assert!(!store.reorder_element(5, 0));
    assert_eq!(store.undo_count(), before);
    assert_eq!(store.elements(), elements.as_slice());
}

#[test]
fn test_reorder_undo_restores_order() {
    let mut store = ElementStore::default();
    store.add_element(ElementKind::Rectangle, &artboard());
    store.add_element(ElementKind::Text, &artboard());
    let before = store.elements().to_vec();

    store.reorder_element(1, 0);
    store.undo();
    assert_eq!(store.elements(), before.as_slice());
}

// replace_all
#[test]
fn test_replace_all_clears_history_and_continues_ids() {
    let (mut source, _) = store_with_rect();
    source.add_element(ElementKind::Text, &artboard());
    let loaded = source.elements().to_vec();

    let mut store = ElementStore::default();
    store.add_element(ElementKind::Rectangle, &artboard());
    store.replace_all(loaded.clone());

    assert_eq!(store.elements(), loaded.as_slice());
    assert!(!store.can_undo());
    assert!(!store.can_redo());

    let new_id = store.add_element(ElementKind::Rectangle, &artboard());
    assert!(loaded.iter().all(|e| e.id != new_id));
}

#[test]
fn test_replace_all_repairs_duplicates_and_selection() {
    let (source, id) = store_with_rect();
    let mut twin = source.get(id).unwrap().clone();
    twin.width = 10.0;
    twin.height = 10.0;
    twin.corner_radius = Some(40.0);
    let elements = vec![source.get(id).unwrap().clone(), twin];

    let mut store = ElementStore::default();
    store.replace_all(elements);

    let ids: Vec<_> = store.elements().iter().map(|e| e.id).collect();
    assert_ne!(ids[0], ids[1]);
    assert_eq!(store.elements().iter().filter(|e| e.selected).count(), 1);
    assert_eq!(store.elements()[1].corner_radius, Some(5.0));
}

#[test]
fn test_revision_tracks_changes() {
    let (mut store, id) = store_with_rect();
    let revision = store.revision();

    store.move_element(id, 1.0, 0.0, ms(0));
    assert!(store.revision() > revision);

    let revision = store.revision();
    store.reorder_element(4, 0);
    assert_eq!(store.revision(), revision);
}
