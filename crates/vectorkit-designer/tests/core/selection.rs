use vectorkit_core::{Bounds, Point};
use vectorkit_designer::{hit_test, Editor, Selection, SelectionManager, ShapeMap};

fn ids(list: &[&str]) -> Selection {
    Selection::Multi(list.iter().map(|s| s.to_string()).collect())
}

#[test]
fn test_plain_click_replaces() {
    let mut manager = SelectionManager::new();
    manager.click("a");
    manager.click("b");
    assert_eq!(manager.selection(), &Selection::Single("b".into()));
}

#[test]
fn test_multi_toggle_never_collapses_to_single() {
    let mut manager = SelectionManager::new();
    manager.shift_click("a");
    manager.shift_click("b");
    manager.shift_click("c");
    assert_eq!(manager.selection(), &ids(&["a", "b", "c"]));

    manager.shift_click("b");
    manager.shift_click("c");
    assert_eq!(manager.selection(), &ids(&["a"]));

    manager.shift_click("a");
    assert_eq!(manager.selection(), &Selection::None);
}

#[test]
fn test_marquee_edge_touch_is_not_selected() {
    let mut editor = Editor::default();
    let rect = editor.add_rect(100.0, 100.0, 50.0, 50.0, None).unwrap();

    // Shares the rect's left edge only.
    let touching = Bounds::new(0.0, 0.0, 100.0, 300.0);
    assert_eq!(editor.marquee(touching), &Selection::None);

    let overlapping = Bounds::new(0.0, 0.0, 100.5, 300.0);
    assert_eq!(editor.marquee(overlapping), &Selection::Single(rect));
}

#[test]
fn test_marquee_scopes_to_active_frame() {
    let mut editor = Editor::default();
    let frame = editor.add_frame(0.0, 0.0).unwrap();
    let inside_a = editor.add_rect(10.0, 10.0, 20.0, 20.0, Some(&frame)).unwrap();
    let inside_b = editor.add_rect(50.0, 10.0, 20.0, 20.0, Some(&frame)).unwrap();
    let outside = editor.add_rect(10.0, 10.0, 20.0, 20.0, None).unwrap();

    editor.set_active_frame(Some(&frame)).unwrap();
    let selected = editor.marquee(Bounds::new(0.0, 0.0, 100.0, 100.0)).clone();
    assert_eq!(selected, ids(&[inside_a.as_str(), inside_b.as_str()]));
    assert!(!selected.contains(&outside));

    editor.set_active_frame(None).unwrap();
    let selected = editor.marquee(Bounds::new(0.0, 0.0, 100.0, 100.0)).clone();
    assert_eq!(selected, ids(&[frame.as_str(), outside.as_str()]));
}

#[test]
fn test_marquee_skips_hidden() {
    let mut editor = Editor::default();
    let rect = editor.add_rect(0.0, 0.0, 20.0, 20.0, None).unwrap();
    editor.set_visible(&rect, false).unwrap();
    assert_eq!(editor.marquee(Bounds::new(0.0, 0.0, 50.0, 50.0)), &Selection::None);
}

#[test]
fn test_hit_test_prefers_children_and_topmost() {
    let mut editor = Editor::default();
    let frame = editor.add_frame(0.0, 0.0).unwrap();
    let lower = editor.add_rect(10.0, 10.0, 100.0, 100.0, Some(&frame)).unwrap();
    let upper = editor.add_rect(50.0, 50.0, 100.0, 100.0, Some(&frame)).unwrap();

    let shapes = editor.store().shapes();
    assert_eq!(hit_test(shapes, Point::new(60.0, 60.0), 0.0), Some(upper));
    assert_eq!(hit_test(shapes, Point::new(20.0, 20.0), 0.0), Some(lower));
    assert_eq!(hit_test(shapes, Point::new(700.0, 500.0), 0.0), Some(frame));
    assert_eq!(hit_test(shapes, Point::new(900.0, 900.0), 0.0), None);
}

#[test]
fn test_hit_test_ellipse_corner_misses() {
    let mut editor = Editor::default();
    let ellipse = editor.add_ellipse(0.0, 0.0, 100.0, 100.0, None).unwrap();
    let shapes = editor.store().shapes();
    assert_eq!(hit_test(shapes, Point::new(50.0, 50.0), 0.0), Some(ellipse));
    assert_eq!(hit_test(shapes, Point::new(2.0, 2.0), 0.0), None);
}

#[test]
fn test_hit_test_skips_locked() {
    let mut editor = Editor::default();
    let rect = editor.add_rect(0.0, 0.0, 10.0, 10.0, None).unwrap();
    editor.set_locked(&rect, true).unwrap();
    assert_eq!(hit_test(editor.store().shapes(), Point::new(5.0, 5.0), 0.0), None);
}

#[test]
fn test_click_at_empty_space_clears() {
    let mut editor = Editor::default();
    let rect = editor.add_rect(0.0, 0.0, 10.0, 10.0, None).unwrap();
    assert_eq!(editor.click_at(Point::new(5.0, 5.0), false), Some(rect));
    assert!(!editor.selection().is_empty());
    assert_eq!(editor.click_at(Point::new(500.0, 500.0), false), None);
    assert!(editor.selection().is_empty());
}

#[test]
fn test_click_tracks_active_frame() {
    let mut editor = Editor::default();
    let frame = editor.add_frame(0.0, 0.0).unwrap();
    let rect = editor.add_rect(10.0, 10.0, 10.0, 10.0, Some(&frame)).unwrap();
    editor.set_active_frame(None).unwrap();

    editor.click(&rect).unwrap();
    assert_eq!(editor.active_frame(), Some(frame.as_str()));
}

#[test]
fn test_opacity_keys_apply_to_selection() {
    let mut editor = Editor::default();
    let a = editor.add_rect(0.0, 0.0, 10.0, 10.0, None).unwrap();
    let b = editor.add_rect(20.0, 0.0, 10.0, 10.0, None).unwrap();
    editor.click(&a).unwrap();
    editor.shift_click(&b).unwrap();
    assert_eq!(editor.selection().len(), 2);

    assert_eq!(editor.handle_opacity_key('3', 0).unwrap(), Some(0.3));
    assert_eq!(editor.shapes()[&a].opacity, 0.3);
    assert_eq!(editor.shapes()[&b].opacity, 0.3);

    assert_eq!(editor.handle_opacity_key('0', 1000).unwrap(), Some(1.0));
    assert_eq!(editor.handle_opacity_key('0', 1100).unwrap(), Some(0.0));
    assert_eq!(editor.shapes()[&a].opacity, 0.0);

    // One undo step per key press.
    assert!(editor.undo());
    assert_eq!(editor.shapes()[&a].opacity, 1.0);
}

#[test]
fn test_selection_survives_undo_of_creation_cleanly() {
    let mut editor = Editor::default();
    let rect = editor.add_rect(0.0, 0.0, 10.0, 10.0, None).unwrap();
    assert!(editor.selection().contains(&rect));
    editor.undo();
    assert!(editor.selection().is_empty());
    let empty = ShapeMap::new();
    assert_eq!(editor.shapes(), &empty);
}

#[test]
fn test_shift_click_from_nothing_tracks_active_frame() {
    let mut editor = Editor::default();
    let frame = editor.add_frame(0.0, 0.0).unwrap();
    let rect = editor.add_rect(10.0, 10.0, 10.0, 10.0, Some(&frame)).unwrap();
    let other = editor.add_rect(2000.0, 2000.0, 10.0, 10.0, None).unwrap();
    editor.set_active_frame(None).unwrap();
    editor.clear_selection();

    editor.shift_click(&rect).unwrap();
    assert_eq!(editor.active_frame(), Some(frame.as_str()));

    // Extending a selection leaves the active frame alone.
    editor.shift_click(&other).unwrap();
    assert_eq!(editor.active_frame(), Some(frame.as_str()));
    assert_eq!(editor.selection().ids(), vec![rect.clone(), other]);

    editor.clear_selection();
    editor.set_active_frame(None).unwrap();
    assert_eq!(editor.click_at(Point::new(15.0, 15.0), true), Some(rect));
    assert_eq!(editor.active_frame(), Some(frame.as_str()));
}
