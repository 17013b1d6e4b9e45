use ratatui::layout::Rect;
use term_desk::geometry::{
    MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, ResizeEdge, WindowRect,
};
use term_desk::window::WindowInstance;

const WORKSPACE: Rect = Rect {
    x: 0,
    y: 0,
    width: 500,
    height: 400,
};

fn instance() -> WindowInstance {
    WindowInstance::new(WindowRect::new(100, 100, 62, 18))
}

#[test]
fn header_drag_translates_the_frame() {
    let mut window = instance();
    assert!(window.begin_drag(110, 105));
    assert!(window.pointer_moved(160, 85, WORKSPACE));
    assert!(window.end_interaction());
    assert_eq!(window.rect(), WindowRect::new(150, 80, 62, 18));
}

#[test]
fn drag_tracks_the_latest_pointer_not_the_path() {
    let mut window = instance();
    assert!(window.begin_drag(110, 105));
    // A wild detour must not accumulate; only the latest pointer counts.
    window.pointer_moved(400, 300, WORKSPACE);
    window.pointer_moved(160, 85, WORKSPACE);
    window.end_interaction();
    assert_eq!(window.rect(), WindowRect::new(150, 80, 62, 18));
}

#[test]
fn bottom_right_resize_clamps_to_the_minimum_size() {
    let mut window = instance();
    assert!(window.begin_resize(ResizeEdge::BottomRight, 161, 117));
    // Dragging the corner far past the origin shrinks to the floor but
    // never inverts the frame.
    window.pointer_moved(20, 20, WORKSPACE);
    window.end_interaction();
    assert_eq!(
        window.rect(),
        WindowRect::new(100, 100, MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)
    );
}

#[test]
fn left_edge_resize_keeps_the_right_edge_anchored() {
    let mut window = instance();
    let right_before = window.rect().right();

    assert!(window.begin_resize(ResizeEdge::Left, 100, 110));
    window.pointer_moved(160, 110, WORKSPACE);
    window.end_interaction();

    let rect = window.rect();
    assert_eq!(rect.width, MIN_WINDOW_WIDTH);
    assert_eq!(rect.right(), right_before);
}

#[test]
fn top_edge_resize_moves_the_title_row() {
    let mut window = instance();
    let bottom_before = window.rect().bottom();

    assert!(window.begin_resize(ResizeEdge::Top, 110, 100));
    window.pointer_moved(110, 94, WORKSPACE);
    window.end_interaction();

    let rect = window.rect();
    assert_eq!(rect.y, 94);
    assert_eq!(rect.height, 24);
    assert_eq!(rect.bottom(), bottom_before);
}

#[test]
fn maximize_overlays_without_losing_the_frame() {
    let mut window = instance();
    let floating = window.rect();

    assert!(window.toggle_maximized());
    assert!(window.is_maximized());
    assert_eq!(window.effective_rect(WORKSPACE), WindowRect::from_rect(WORKSPACE));
    // The floating frame survives underneath.
    assert_eq!(window.rect(), floating);

    assert!(window.toggle_maximized());
    assert_eq!(window.effective_rect(WORKSPACE), floating);
}

#[test]
fn maximized_windows_refuse_gestures() {
    let mut window = instance();
    window.toggle_maximized();
    assert!(!window.begin_drag(10, 0));
    assert!(!window.begin_resize(ResizeEdge::Right, 499, 50));
    assert!(!window.pointer_moved(60, 60, WORKSPACE));
}

#[test]
fn a_gesture_blocks_maximize_until_released() {
    let mut window = instance();
    assert!(window.begin_drag(110, 105));
    assert!(!window.toggle_maximized());
    window.end_interaction();
    assert!(window.toggle_maximized());
}
