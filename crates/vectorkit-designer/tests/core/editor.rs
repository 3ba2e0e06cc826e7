use std::cell::RefCell;
use std::rc::Rc;

use vectorkit_core::Point;
use vectorkit_designer::{
    DocumentSnapshot, Editor, RenderSink, ResizeHandle, RowRect, Selection, ShapeGraph, ShapeMap,
};
use vectorkit_settings::Config;

#[derive(Clone, Default)]
struct CountingSink {
    calls: Rc<RefCell<Vec<usize>>>,
}

impl RenderSink for CountingSink {
    fn document_changed(&mut self, shapes: &ShapeMap) {
        self.calls.borrow_mut().push(shapes.len());
    }
}

fn editor_with_sink() -> (Editor, Rc<RefCell<Vec<usize>>>) {
    let mut editor = Editor::default();
    let sink = CountingSink::default();
    let calls = sink.calls.clone();
    editor.add_render_sink(Box::new(sink));
    (editor, calls)
}

#[test]
fn test_sink_sees_every_change() {
    let (mut editor, calls) = editor_with_sink();
    assert_eq!(*calls.borrow(), vec![0]);

    editor.add_rect(0.0, 0.0, 10.0, 10.0, None).unwrap();
    editor.add_rect(20.0, 0.0, 10.0, 10.0, None).unwrap();
    editor.undo();
    editor.redo();

    assert_eq!(*calls.borrow(), vec![0, 1, 2, 1, 2]);
}

#[test]
fn test_rejected_edit_is_silent() {
    let (mut editor, calls) = editor_with_sink();
    let rect = editor.add_rect(0.0, 0.0, 10.0, 10.0, None).unwrap();
    let seen = calls.borrow().len();

    assert!(editor.nest_into(&rect, &rect).is_err());
    assert!(editor.rename("missing", "x").is_err());
    assert!(editor.rename(&rect, "").is_err());
    assert!(!editor.redo());

    assert_eq!(calls.borrow().len(), seen);
}

#[test]
fn test_sink_follows_gesture_working_copy() {
    let (mut editor, calls) = editor_with_sink();
    let frame = editor.add_frame(0.0, 0.0).unwrap();
    let before = calls.borrow().len();

    editor
        .begin_artboard_drag(&frame, ResizeHandle::BODY, Point::new(0.0, 0.0))
        .unwrap();
    editor.update_artboard_drag(Point::new(10.0, 0.0));
    editor.update_artboard_drag(Point::new(20.0, 0.0));
    editor.finish_artboard_drag().unwrap();

    assert_eq!(calls.borrow().len(), before + 3);
}

#[test]
fn test_missing_ids_are_reported() {
    let mut editor = Editor::default();
    let err = editor.set_opacity("rect-99", 0.5).unwrap_err();
    assert!(err.is_missing_reference());
    assert!(editor.click("rect-99").is_err());
    assert!(!editor.can_undo());
}

#[test]
fn test_modified_flag() {
    let mut editor = Editor::default();
    assert!(!editor.is_modified);
    editor.add_rect(0.0, 0.0, 10.0, 10.0, None).unwrap();
    assert!(editor.is_modified);

    editor.open_snapshot(DocumentSnapshot::default());
    assert!(!editor.is_modified);
    assert!(!editor.can_undo());
    assert!(editor.shapes().is_empty());
}

#[test]
fn test_escape_unwinds_one_level() {
    let mut editor = Editor::default();
    let frame = editor.add_frame(0.0, 0.0).unwrap();
    let rect = editor.add_rect(500.0, 0.0, 10.0, 10.0, None).unwrap();
    let row = RowRect {
        x: 0.0,
        y: 0.0,
        width: 100.0,
        height: 20.0,
    };

    editor.begin_drag(&rect).unwrap();
    editor.hover_drag(&frame, Point::new(90.0, 10.0), &row);
    editor
        .begin_artboard_drag(&frame, ResizeHandle::EAST, Point::new(0.0, 0.0))
        .unwrap();

    editor.escape();
    assert!(!editor.is_artboard_dragging());
    assert!(editor.drag_indicator().is_some());

    editor.escape();
    assert!(editor.drag_indicator().is_none());
    assert_eq!(editor.selection(), &Selection::Single(rect));

    editor.escape();
    assert!(editor.selection().is_empty());
}

#[test]
fn test_delete_selected_removes_each_subtree() {
    let mut editor = Editor::default();
    let frame = editor.add_frame(0.0, 0.0).unwrap();
    let child = editor.add_rect(10.0, 10.0, 10.0, 10.0, Some(&frame)).unwrap();
    let loose = editor.add_rect(500.0, 0.0, 10.0, 10.0, None).unwrap();
    let keep = editor.add_rect(600.0, 0.0, 10.0, 10.0, None).unwrap();

    editor.click(&frame).unwrap();
    editor.shift_click(&loose).unwrap();
    let removed = editor.delete_selected().unwrap();

    assert_eq!(removed.len(), 3);
    assert!(removed.contains(&child));
    assert_eq!(editor.shapes().sibling_ids(None), vec![keep]);
    assert!(editor.selection().is_empty());
    assert!(editor.undo());
    assert_eq!(editor.shapes().len(), 4);
}

#[test]
fn test_filters_and_effects_round_trip_through_history() {
    use vectorkit_designer::{EffectType, FilterType};

    let mut editor = Editor::default();
    let rect = editor.add_rect(0.0, 0.0, 10.0, 10.0, None).unwrap();
    let filter = editor.add_filter(&rect, FilterType::Blur).unwrap();
    editor
        .set_filter_param(&rect, &filter, "radius", serde_json::json!(12.0))
        .unwrap();
    editor.toggle_filter(&rect, &filter).unwrap();
    editor.add_effect(&rect, EffectType::DropShadow).unwrap();

    let record = &editor.shapes()[&rect];
    assert_eq!(record.filters.len(), 1);
    assert!(!record.filters[0].enabled);
    assert_eq!(record.filters[0].param_f64("radius"), Some(12.0));
    assert_eq!(record.effects.len(), 1);

    assert!(editor.remove_filter(&rect, "filter-999").is_err());
    assert!(editor.remove_effect(&rect, 3).is_err());

    editor.undo();
    editor.undo();
    editor.undo();
    assert!(!editor.shapes()[&rect].filters.is_empty());
    editor.undo();
    assert!(editor.shapes()[&rect].filters.is_empty());
}

#[test]
fn test_configured_minimum_frame_size() {
    let mut config = Config::default();
    config.canvas.min_frame_size = 50.0;
    let mut editor = Editor::new(config);
    let frame = editor.add_frame(0.0, 0.0).unwrap();

    editor.set_geometry(&frame, 0.0, 0.0, 10.0, 80.0).unwrap();
    let record = &editor.shapes()[&frame];
    assert_eq!((record.width, record.height), (50.0, 80.0));
}
