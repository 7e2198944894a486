use super::*;
use crate::draw::{Point, color};
use crate::input::events::PointerInput;
use crate::input::tracker::SurfaceRect;
use crate::input::tool::Tool;

fn create_test_state() -> SketchState {
    let mut state = SketchState::with_defaults(
        Tool::Pen,
        color::INDIGO,
        3.0, // width
        color::WHITE,
    );
    state.mount(640, 480);
    state
}

fn rect() -> SurfaceRect {
    SurfaceRect::at_origin(640.0, 480.0)
}

fn drag(state: &mut SketchState, points: &[(f64, f64)]) {
    let rect = rect();
    let (x0, y0) = points[0];
    state.on_pointer_press(&PointerInput::mouse(x0, y0), &rect);
    for &(x, y) in &points[1..] {
        state.on_pointer_motion(&PointerInput::mouse(x, y), &rect);
    }
    state.on_pointer_release();
}

#[test]
fn completed_gestures_commit_in_order() {
    let mut state = create_test_state();

    drag(&mut state, &[(0.0, 0.0), (10.0, 10.0)]);
    drag(&mut state, &[(20.0, 0.0), (30.0, 10.0)]);
    drag(&mut state, &[(40.0, 0.0), (50.0, 10.0)]);

    assert_eq!(state.board.len(), 3);
    let first_xs: Vec<f64> = state
        .board
        .strokes()
        .iter()
        .map(|s| s.points()[0].x)
        .collect();
    assert_eq!(first_xs, vec![0.0, 20.0, 40.0]);
}

#[test]
fn three_point_drag_produces_one_connected_stroke() {
    let mut state = create_test_state();

    drag(&mut state, &[(10.0, 10.0), (20.0, 10.0), (20.0, 20.0)]);

    assert_eq!(state.board.len(), 1);
    let stroke = &state.board.strokes()[0];
    let points: Vec<(f64, f64)> = stroke.points().iter().map(|p| (p.x, p.y)).collect();
    assert_eq!(points, vec![(10.0, 10.0), (20.0, 10.0), (20.0, 20.0)]);
}

#[test]
fn press_release_without_motion_commits_one_point_stroke() {
    let mut state = create_test_state();

    state.on_pointer_press(&PointerInput::mouse(15.0, 15.0), &rect());
    state.on_pointer_release();

    assert_eq!(state.board.len(), 1);
    assert_eq!(state.board.strokes()[0].len(), 1);
    assert_eq!(state.board.strokes()[0].points()[0], Point::new(15.0, 15.0));
}

#[test]
fn release_without_gesture_is_noop() {
    let mut state = create_test_state();
    state.on_pointer_release();
    assert!(state.board.is_empty());
    assert_eq!(state.board.undo_depth(), 0);
}

#[test]
fn motion_without_gesture_is_ignored() {
    let mut state = create_test_state();
    state.on_pointer_motion(&PointerInput::mouse(5.0, 5.0), &rect());
    assert!(state.live_stroke().is_none());
    assert!(state.board.is_empty());
}

#[test]
fn pointer_leave_commits_partial_stroke() {
    let mut state = create_test_state();

    state.on_pointer_press(&PointerInput::mouse(10.0, 10.0), &rect());
    state.on_pointer_motion(&PointerInput::mouse(30.0, 30.0), &rect());
    state.on_pointer_leave();

    assert_eq!(state.board.len(), 1);
    assert_eq!(state.board.strokes()[0].len(), 2);
    assert!(matches!(state.state, GestureState::Idle));
}

#[test]
fn undo_after_commit_restores_previous_store() {
    let mut state = create_test_state();

    drag(&mut state, &[(0.0, 0.0), (10.0, 0.0)]); // stroke A
    drag(&mut state, &[(0.0, 20.0), (10.0, 20.0)]); // stroke B
    assert_eq!(state.board.len(), 2);

    assert!(state.undo());
    assert_eq!(state.board.len(), 1);
    assert_eq!(state.board.strokes()[0].points()[0].y, 0.0);

    assert!(state.undo());
    assert!(state.board.is_empty());
    assert!(!state.undo());
}

#[test]
fn clear_is_undoable_and_drops_live_stroke() {
    let mut state = create_test_state();
    drag(&mut state, &[(0.0, 0.0), (10.0, 0.0)]);

    state.on_pointer_press(&PointerInput::mouse(50.0, 50.0), &rect());
    assert!(state.live_stroke().is_some());

    state.clear_board();
    assert!(state.board.is_empty());
    assert!(state.live_stroke().is_none());

    assert!(state.undo());
    assert_eq!(state.board.len(), 1);
}

#[test]
fn clear_on_empty_board_then_undo_stays_empty() {
    let mut state = create_test_state();

    state.clear_board();
    assert!(state.board.is_empty());

    assert!(state.undo());
    assert!(state.board.is_empty());
    assert!(!state.undo());
}

#[test]
fn live_controls_do_not_affect_active_stroke() {
    let mut state = create_test_state();
    let rect = rect();

    state.on_pointer_press(&PointerInput::mouse(10.0, 10.0), &rect);
    state.set_tool(Tool::Eraser);
    state.set_color(color::RED);
    state.set_width(9.0);
    state.on_pointer_motion(&PointerInput::mouse(20.0, 20.0), &rect);
    state.on_pointer_release();

    let stroke = &state.board.strokes()[0];
    assert_eq!(stroke.tool(), Tool::Pen);
    assert_eq!(stroke.color(), color::INDIGO);
    assert_eq!(stroke.width(), 3.0);

    // The next gesture picks up the new live settings
    drag(&mut state, &[(30.0, 30.0), (40.0, 40.0)]);
    let stroke = &state.board.strokes()[1];
    assert_eq!(stroke.tool(), Tool::Eraser);
    assert_eq!(stroke.color(), color::RED);
    assert_eq!(stroke.width(), 9.0);
}

#[test]
fn press_during_active_gesture_is_ignored() {
    let mut state = create_test_state();
    let rect = rect();

    state.on_pointer_press(&PointerInput::mouse(10.0, 10.0), &rect);
    state.on_pointer_press(&PointerInput::mouse(99.0, 99.0), &rect);

    let stroke = state.live_stroke().expect("gesture active");
    assert_eq!(stroke.len(), 1);
    assert_eq!(stroke.points()[0], Point::new(10.0, 10.0));
}

#[test]
fn width_is_clamped_to_valid_range() {
    let mut state = create_test_state();
    state.set_width(0.2);
    assert_eq!(state.current_width, MIN_STROKE_WIDTH);
    state.set_width(100.0);
    assert_eq!(state.current_width, MAX_STROKE_WIDTH);
}

#[test]
fn mount_dimensions_are_fixed_at_first_layout() {
    let mut state = SketchState::with_defaults(Tool::Pen, color::INDIGO, 3.0, color::WHITE);
    assert!(!state.is_mounted());
    assert!(state.render_to_image().unwrap().is_none());

    state.mount(320, 240);
    state.mount(1000, 1000);
    assert_eq!(state.surface_size(), Some((320, 240)));
}

#[test]
fn control_changes_request_redraw() {
    let mut state = create_test_state();
    state.needs_redraw = false;

    state.set_color(color::CYAN);
    assert!(state.needs_redraw);

    state.needs_redraw = false;
    state.set_tool(Tool::Eraser);
    assert!(state.needs_redraw);

    state.needs_redraw = false;
    state.set_width(7.0);
    assert!(state.needs_redraw);

    // Setting an unchanged value does not
    state.needs_redraw = false;
    state.set_width(7.0);
    assert!(!state.needs_redraw);
}

#[test]
fn render_to_image_includes_live_stroke() {
    let mut state = create_test_state();
    state.on_pointer_press(&PointerInput::mouse(100.0, 100.0), &rect());
    state.on_pointer_motion(&PointerInput::mouse(120.0, 100.0), &rect());

    let surface = state
        .render_to_image()
        .expect("render succeeds")
        .expect("surface mounted");
    assert_eq!(surface.width(), 640);
    assert_eq!(surface.height(), 480);
}
