use vectorkit_designer::{
    compute_outline, polygon_area, BooleanOperation, Editor, Fill, Outliner, ShapeGraph, ShapeKind,
    ShapeMap,
};
use vectorkit_core::Point;

const TOLERANCE: f64 = 1e-3;

fn two_squares(editor: &mut Editor) -> (String, String) {
    let a = editor.add_rect(0.0, 0.0, 10.0, 10.0, None).unwrap();
    let b = editor.add_rect(5.0, 0.0, 10.0, 10.0, None).unwrap();
    (a, b)
}

fn compound_area(shapes: &ShapeMap, id: &str) -> f64 {
    let meta = shapes[id].compound_meta().unwrap();
    polygon_area(&compute_outline(meta, &Outliner::default()).unwrap())
}

fn path_area(shapes: &ShapeMap, id: &str) -> f64 {
    match &shapes[id].kind {
        ShapeKind::Path { outline } => polygon_area(outline),
        other => panic!("expected a path, got {:?}", other),
    }
}

#[test]
fn test_unite_then_expand_keeps_union_area() {
    let mut editor = Editor::default();
    let (a, b) = two_squares(&mut editor);

    let compound = editor.combine(&[a.clone(), b.clone()], BooleanOperation::Unite).unwrap();
    assert!((compound_area(editor.shapes(), &compound) - 150.0).abs() < TOLERANCE);

    let path = editor.expand(&compound).unwrap();
    let shapes = editor.shapes();
    assert!((path_area(shapes, &path) - 150.0).abs() < TOLERANCE);
    for gone in [&compound, &a, &b] {
        assert!(!shapes.contains_key(gone));
    }
    assert_eq!(shapes.sibling_ids(None), vec![path.clone()]);
    assert_eq!((shapes[&path].x, shapes[&path].width), (0.0, 15.0));
}

#[test]
fn test_operation_areas() {
    let cases = [
        (BooleanOperation::Subtract, 50.0),
        (BooleanOperation::Intersect, 50.0),
        (BooleanOperation::Exclude, 100.0),
    ];
    for (operation, expected) in cases {
        let mut editor = Editor::default();
        let (a, b) = two_squares(&mut editor);
        let compound = editor.combine(&[a, b], operation).unwrap();
        let area = compound_area(editor.shapes(), &compound);
        assert!(
            (area - expected).abs() < TOLERANCE,
            "{:?} gave {}",
            operation,
            area
        );
    }
}

#[test]
fn test_operations_fold_left_to_right() {
    let mut editor = Editor::default();
    let base = editor.add_rect(0.0, 0.0, 30.0, 10.0, None).unwrap();
    let cut1 = editor.add_rect(0.0, 0.0, 10.0, 10.0, None).unwrap();
    let cut2 = editor.add_rect(20.0, 0.0, 10.0, 10.0, None).unwrap();

    let compound = editor
        .combine(&[base, cut1, cut2], BooleanOperation::Subtract)
        .unwrap();
    assert!((compound_area(editor.shapes(), &compound) - 100.0).abs() < TOLERANCE);
}

#[test]
fn test_expand_empty_subtract_aborts() {
    let mut editor = Editor::default();
    let inner = editor.add_rect(10.0, 10.0, 5.0, 5.0, None).unwrap();
    let cover = editor.add_rect(0.0, 0.0, 50.0, 50.0, None).unwrap();
    let compound = editor.combine(&[inner, cover], BooleanOperation::Subtract).unwrap();
    let before = editor.shapes().clone();

    let err = editor.expand(&compound).unwrap_err();
    assert!(err.is_geometry_failure());
    assert!(err.is_recoverable());
    assert_eq!(editor.shapes(), &before);
}

#[test]
fn test_expand_disjoint_intersect_aborts() {
    let mut editor = Editor::default();
    let a = editor.add_rect(0.0, 0.0, 10.0, 10.0, None).unwrap();
    let b = editor.add_rect(20.0, 0.0, 10.0, 10.0, None).unwrap();
    let compound = editor.combine(&[a, b], BooleanOperation::Intersect).unwrap();
    let before = editor.shapes().clone();

    assert!(editor.expand(&compound).is_err());
    assert_eq!(editor.shapes(), &before);
}

#[test]
fn test_disjoint_subtract_keeps_first_shape() {
    let mut editor = Editor::default();
    let a = editor.add_rect(0.0, 0.0, 10.0, 10.0, None).unwrap();
    let b = editor.add_rect(20.0, 0.0, 10.0, 10.0, None).unwrap();
    let compound = editor.combine(&[a, b], BooleanOperation::Subtract).unwrap();

    let path = editor.expand(&compound).unwrap();
    assert!((path_area(editor.shapes(), &path) - 100.0).abs() < TOLERANCE);
}

#[test]
fn test_combine_needs_two_shapes() {
    let mut editor = Editor::default();
    let a = editor.add_rect(0.0, 0.0, 10.0, 10.0, None).unwrap();
    let before = editor.shapes().clone();

    assert!(editor.combine(&[a.clone()], BooleanOperation::Unite).is_err());
    assert!(editor.combine(&[a.clone(), a], BooleanOperation::Unite).is_err());
    assert_eq!(editor.shapes(), &before);
}

#[test]
fn test_frames_cannot_be_combined() {
    let mut editor = Editor::default();
    let frame = editor.add_frame(0.0, 0.0).unwrap();
    let rect = editor.add_rect(0.0, 0.0, 10.0, 10.0, None).unwrap();
    assert!(editor.combine(&[rect, frame], BooleanOperation::Unite).is_err());
}

#[test]
fn test_combine_in_frame_takes_first_position() {
    let mut editor = Editor::default();
    let frame = editor.add_frame(0.0, 0.0).unwrap();
    let head = editor.add_rect(0.0, 0.0, 10.0, 10.0, Some(&frame)).unwrap();
    let a = editor.add_rect(20.0, 0.0, 10.0, 10.0, Some(&frame)).unwrap();
    let tail = editor.add_rect(40.0, 0.0, 10.0, 10.0, Some(&frame)).unwrap();
    let b = editor.add_rect(25.0, 0.0, 10.0, 10.0, Some(&frame)).unwrap();

    let compound = editor.combine(&[a.clone(), b.clone()], BooleanOperation::Unite).unwrap();
    let shapes = editor.shapes();
    assert_eq!(shapes[&frame].children, vec![head, compound.clone(), tail]);
    assert_eq!(shapes[&compound].parent_id.as_deref(), Some(frame.as_str()));
    assert_eq!(shapes[&compound].children, vec![a.clone(), b.clone()]);
    assert!(!shapes[&a].visible && !shapes[&b].visible);
    assert!(shapes.violations().is_empty());
    assert_eq!(editor.selection().primary(), Some(&compound));
}

#[test]
fn test_expand_takes_first_member_color() {
    let mut editor = Editor::default();
    let (a, b) = two_squares(&mut editor);
    editor.set_fill(&a, Fill::solid("#ff0000")).unwrap();
    editor.set_fill(&b, Fill::solid("#00ff00")).unwrap();

    let compound = editor.combine(&[a, b], BooleanOperation::Unite).unwrap();
    editor.set_opacity(&compound, 0.5).unwrap();
    let path = editor.expand(&compound).unwrap();

    let record = &editor.shapes()[&path];
    assert_eq!(record.fill.primary_color(), Some("#ff0000"));
    assert_eq!(record.opacity, 0.5);
}

#[test]
fn test_combine_selected_follows_click_order() {
    let mut editor = Editor::default();
    let mut ids = Vec::new();
    for i in 0..10 {
        let id = match i {
            1 => editor.add_rect(0.0, 0.0, 100.0, 100.0, None),
            9 => editor.add_rect(10.0, 10.0, 10.0, 10.0, None),
            _ => editor.add_rect(500.0 + 20.0 * i as f64, 0.0, 10.0, 10.0, None),
        };
        ids.push(id.unwrap());
    }
    let (big, small) = (ids[1].clone(), ids[9].clone());
    // Sorting these ids as text would put the later click first.
    assert!(small < big);
    editor.set_fill(&big, Fill::solid("#ff0000")).unwrap();
    editor.set_fill(&small, Fill::solid("#00ff00")).unwrap();

    editor.click(&big).unwrap();
    editor.shift_click(&small).unwrap();
    let compound = editor.combine_selected(BooleanOperation::Subtract).unwrap();

    let shapes = editor.shapes();
    assert_eq!(shapes[&compound].children, vec![big.clone(), small.clone()]);
    assert_eq!(shapes.sibling_ids(None)[1], compound);

    let path = editor.expand(&compound).unwrap();
    assert!((path_area(editor.shapes(), &path) - 9900.0).abs() < TOLERANCE);
    assert_eq!(editor.shapes()[&path].fill.primary_color(), Some("#ff0000"));
}

#[test]
fn test_compounds_can_be_combined() {
    let mut editor = Editor::default();
    let (a, b) = two_squares(&mut editor);
    let inner = editor.combine(&[a, b], BooleanOperation::Unite).unwrap();
    let c = editor.add_rect(0.0, 20.0, 10.0, 10.0, None).unwrap();

    let outer = editor.combine(&[inner.clone(), c], BooleanOperation::Unite).unwrap();
    assert!((compound_area(editor.shapes(), &outer) - 250.0).abs() < TOLERANCE);
    assert_eq!(editor.shapes()[&inner].parent_id.as_deref(), Some(outer.as_str()));
}

#[test]
fn test_members_of_a_compound_cannot_be_recombined() {
    let mut editor = Editor::default();
    let (a, b) = two_squares(&mut editor);
    editor.combine(&[a.clone(), b], BooleanOperation::Unite).unwrap();
    let c = editor.add_rect(0.0, 20.0, 10.0, 10.0, None).unwrap();
    assert!(editor.combine(&[a, c], BooleanOperation::Unite).is_err());
}

#[test]
fn test_ungroup_restores_members_in_place() {
    let mut editor = Editor::default();
    let head = editor.add_rect(100.0, 0.0, 10.0, 10.0, None).unwrap();
    let (a, b) = two_squares(&mut editor);
    let compound = editor.combine(&[a.clone(), b.clone()], BooleanOperation::Exclude).unwrap();

    let members = editor.ungroup(&compound).unwrap();
    assert_eq!(members, vec![a.clone(), b.clone()]);
    let shapes = editor.shapes();
    assert_eq!(shapes.sibling_ids(None), vec![head, a.clone(), b.clone()]);
    assert!(shapes[&a].visible && shapes[&b].visible);
    assert!(shapes.violations().is_empty());
    assert_eq!(editor.selection().len(), 2);
}

#[test]
fn test_polygon_area_of_triangle() {
    use vectorkit_designer::OutlinePolygon;
    let triangle = vec![OutlinePolygon::new(vec![
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(0.0, 3.0),
    ])];
    assert!((polygon_area(&triangle) - 6.0).abs() < TOLERANCE);
}

#[test]
fn test_shape_cannot_combine_with_its_ancestor() {
    let mut editor = Editor::default();
    let (a, b) = two_squares(&mut editor);
    let compound = editor.combine(&[a, b], BooleanOperation::Unite).unwrap();
    let frame = editor.add_frame(0.0, 0.0).unwrap();
    let inner = editor.add_rect(5.0, 5.0, 10.0, 10.0, Some(&frame)).unwrap();
    editor.nest_into(&frame, &compound).unwrap();
    let before = editor.shapes().clone();

    assert!(editor.combine(&[inner, compound], BooleanOperation::Unite).is_err());
    assert_eq!(editor.shapes(), &before);
}
