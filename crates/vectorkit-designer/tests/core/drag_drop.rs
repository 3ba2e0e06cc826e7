use vectorkit_core::Point;
use vectorkit_designer::{
    decide_drop, DragSession, DropIndicator, DropPosition, Editor, Placement, RowRect, ShapeGraph,
};

const ROW: RowRect = RowRect {
    x: 10.0,
    y: 100.0,
    width: 200.0,
    height: 24.0,
};

fn at(fraction_x: f64, fraction_y: f64) -> Point {
    Point::new(
        ROW.x + ROW.width * fraction_x,
        ROW.y + ROW.height * fraction_y,
    )
}

#[test]
fn test_container_right_zone_nests_at_any_height() {
    for fy in [0.05, 0.5, 0.95] {
        assert_eq!(
            decide_drop(0, 3, true, at(0.7, fy), &ROW, 0.4),
            DropPosition::Inside
        );
    }
}

#[test]
fn test_container_left_zone_reorders_by_half() {
    assert_eq!(decide_drop(0, 3, true, at(0.2, 0.1), &ROW, 0.4), DropPosition::Before);
    assert_eq!(decide_drop(0, 3, true, at(0.2, 0.9), &ROW, 0.4), DropPosition::After);
}

#[test]
fn test_leaf_row_ignores_pointer() {
    assert_eq!(decide_drop(4, 1, false, at(0.9, 0.9), &ROW, 0.4), DropPosition::Before);
    assert_eq!(decide_drop(1, 4, false, at(0.0, 0.0), &ROW, 0.4), DropPosition::After);
}

#[test]
fn test_session_indicator_follows_hover() {
    let mut editor = Editor::default();
    let frame = editor.add_frame(0.0, 0.0).unwrap();
    let rect = editor.add_rect(500.0, 0.0, 10.0, 10.0, None).unwrap();
    let rows = editor.hierarchy_rows();

    let mut session = DragSession::start(rect.as_str());
    assert_eq!(session.indicator(), None);

    session.hover(&frame, at(0.7, 0.5), &ROW, &rows);
    assert_eq!(session.indicator(), Some(DropIndicator::Outline));

    session.hover(&frame, at(0.1, 0.1), &ROW, &rows);
    assert_eq!(session.indicator(), Some(DropIndicator::Line(Placement::Before)));
    assert_eq!(session.target(), Some((frame.as_str(), DropPosition::Before)));

    session.leave();
    assert_eq!(session.indicator(), None);
    assert!(session.finish().is_none());
}

#[test]
fn test_hovering_self_clears_target() {
    let mut editor = Editor::default();
    let a = editor.add_rect(0.0, 0.0, 10.0, 10.0, None).unwrap();
    let b = editor.add_rect(20.0, 0.0, 10.0, 10.0, None).unwrap();
    let rows = editor.hierarchy_rows();

    let mut session = DragSession::start(a.as_str());
    assert!(session.hover(&b, at(0.5, 0.5), &ROW, &rows).is_some());
    assert!(session.hover(&a, at(0.5, 0.5), &ROW, &rows).is_none());
    assert!(session.finish().is_none());
}

#[test]
fn test_editor_drop_nests_into_frame() {
    let mut editor = Editor::default();
    let frame = editor.add_frame(0.0, 0.0).unwrap();
    let rect = editor.add_rect(20.0, 20.0, 10.0, 10.0, None).unwrap();

    editor.begin_drag(&rect).unwrap();
    assert_eq!(
        editor.hover_drag(&frame, at(0.7, 0.5), &ROW),
        Some(DropPosition::Inside)
    );
    assert_eq!(editor.drag_indicator(), Some(DropIndicator::Outline));
    editor.drop_drag().unwrap();

    let shapes = editor.shapes();
    assert_eq!(shapes[&rect].parent_id.as_deref(), Some(frame.as_str()));
    assert_eq!(shapes[&frame].children, vec![rect]);
    assert!(shapes.violations().is_empty());
    assert!(editor.can_undo());
}

#[test]
fn test_editor_drop_reorders_top_level() {
    let mut editor = Editor::default();
    let a = editor.add_rect(0.0, 0.0, 10.0, 10.0, None).unwrap();
    let b = editor.add_rect(20.0, 0.0, 10.0, 10.0, None).unwrap();
    let c = editor.add_rect(40.0, 0.0, 10.0, 10.0, None).unwrap();

    editor.begin_drag(&c).unwrap();
    assert_eq!(editor.hover_drag(&a, at(0.5, 0.5), &ROW), Some(DropPosition::Before));
    editor.drop_drag().unwrap();

    assert_eq!(editor.shapes().sibling_ids(None), vec![c, a, b]);
}

#[test]
fn test_drop_out_of_frame_before_top_level_row() {
    let mut editor = Editor::default();
    let head = editor.add_rect(0.0, 0.0, 10.0, 10.0, None).unwrap();
    let frame = editor.add_frame(100.0, 0.0).unwrap();
    let child = editor.add_rect(120.0, 20.0, 10.0, 10.0, Some(&frame)).unwrap();

    editor.begin_drag(&child).unwrap();
    editor.hover_drag(&head, at(0.5, 0.5), &ROW);
    editor.drop_drag().unwrap();

    let shapes = editor.shapes();
    assert_eq!(shapes[&child].parent_id, None);
    assert!(shapes[&frame].children.is_empty());
    assert_eq!(shapes.sibling_ids(None), vec![child, head, frame]);
}

#[test]
fn test_drop_without_target_changes_nothing() {
    let mut editor = Editor::default();
    let a = editor.add_rect(0.0, 0.0, 10.0, 10.0, None).unwrap();
    let before = editor.shapes().clone();

    assert!(editor.drop_drag().is_err());

    editor.begin_drag(&a).unwrap();
    editor.hover_drag(&a, at(0.5, 0.5), &ROW);
    assert!(editor.drop_drag().is_err());
    assert_eq!(editor.shapes(), &before);
}

#[test]
fn test_frame_cannot_be_dropped_into_its_descendant() {
    let mut editor = Editor::default();
    let outer = editor.add_frame(0.0, 0.0).unwrap();
    let inner = editor.add_frame(10.0, 10.0).unwrap();
    editor.nest_into(&inner, &outer).unwrap();
    let before = editor.shapes().clone();

    editor.begin_drag(&outer).unwrap();
    assert_eq!(editor.hover_drag(&inner, at(0.9, 0.5), &ROW), Some(DropPosition::Inside));
    assert!(editor.drop_drag().is_err());
    assert_eq!(editor.shapes(), &before);
}

#[test]
fn test_cancel_drag_clears_indicator() {
    let mut editor = Editor::default();
    let a = editor.add_rect(0.0, 0.0, 10.0, 10.0, None).unwrap();
    let b = editor.add_rect(20.0, 0.0, 10.0, 10.0, None).unwrap();

    editor.begin_drag(&a).unwrap();
    editor.hover_drag(&b, at(0.5, 0.5), &ROW);
    assert!(editor.drag_indicator().is_some());
    editor.cancel_drag();
    assert_eq!(editor.drag_indicator(), None);
    assert_eq!(editor.shapes().sibling_ids(None), vec![a, b]);
}
