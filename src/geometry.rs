//! Pure window-geometry math.
//!
//! Everything here is a total function from a starting frame plus a pointer
//! delta to the next frame. Interaction state (which window, which gesture)
//! lives in `window::instance`; rendering clips frames that extend past the
//! viewport, so origins are signed.

use ratatui::layout::Rect;

use crate::constants::MIN_VISIBLE_MARGIN;

/// Smallest width a window may reach, in columns. Leaves room for the
/// title, the three chrome buttons, and a usable content strip.
pub const MIN_WINDOW_WIDTH: u16 = 24;
/// Smallest height a window may reach, in rows.
pub const MIN_WINDOW_HEIGHT: u16 = 8;

/// Size given to a window each time it is opened.
pub const DEFAULT_WINDOW_WIDTH: u16 = 62;
pub const DEFAULT_WINDOW_HEIGHT: u16 = 18;

/// A window frame in terminal cells. The origin is signed so a window can
/// hang partially off the left or top of the workspace while being dragged
/// or resized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl WindowRect {
    pub fn new(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self {
            x: rect.x as i32,
            y: rect.y as i32,
            width: rect.width,
            height: rect.height,
        }
    }

    /// One past the rightmost column.
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// One past the bottom row.
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        let column = column as i32;
        let row = row as i32;
        column >= self.x && column < self.right() && row >= self.y && row < self.bottom()
    }

    /// The frame in its own coordinate space, for offscreen surfaces.
    pub fn local(&self) -> Rect {
        Rect {
            x: 0,
            y: 0,
            width: self.width,
            height: self.height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeEdge {
    pub fn affects_left(self) -> bool {
        matches!(
            self,
            ResizeEdge::Left | ResizeEdge::TopLeft | ResizeEdge::BottomLeft
        )
    }

    pub fn affects_right(self) -> bool {
        matches!(
            self,
            ResizeEdge::Right | ResizeEdge::TopRight | ResizeEdge::BottomRight
        )
    }

    pub fn affects_top(self) -> bool {
        matches!(
            self,
            ResizeEdge::Top | ResizeEdge::TopLeft | ResizeEdge::TopRight
        )
    }

    pub fn affects_bottom(self) -> bool {
        matches!(
            self,
            ResizeEdge::Bottom | ResizeEdge::BottomLeft | ResizeEdge::BottomRight
        )
    }
}

/// Move a frame by a pointer delta. Size is untouched.
pub fn apply_drag(start: WindowRect, dx: i32, dy: i32) -> WindowRect {
    WindowRect {
        x: start.x + dx,
        y: start.y + dy,
        ..start
    }
}

/// Resize a frame by a pointer delta along one edge or corner.
///
/// Dragging an edge keeps the opposite edge anchored: a left-edge resize
/// shifts `x` by `dx` so the right edge stays put, and when the minimum
/// size clamps the shrink, `x` is pulled back so the anchor still holds.
/// Corners compose the two axis rules independently.
pub fn apply_resize(start: WindowRect, edge: ResizeEdge, dx: i32, dy: i32) -> WindowRect {
    let mut x = start.x;
    let mut y = start.y;
    let mut width = start.width as i32;
    let mut height = start.height as i32;

    if edge.affects_left() {
        x += dx;
        width -= dx;
    }
    if edge.affects_right() {
        width += dx;
    }
    if edge.affects_top() {
        y += dy;
        height -= dy;
    }
    if edge.affects_bottom() {
        height += dy;
    }

    let min_w = MIN_WINDOW_WIDTH as i32;
    let min_h = MIN_WINDOW_HEIGHT as i32;
    if width < min_w {
        if edge.affects_left() {
            x -= min_w - width;
        }
        width = min_w;
    }
    if height < min_h {
        if edge.affects_top() {
            y -= min_h - height;
        }
        height = min_h;
    }

    WindowRect {
        x,
        y,
        width: width.min(u16::MAX as i32) as u16,
        height: height.min(u16::MAX as i32) as u16,
    }
}

/// Default frame for a newly opened window: default size, centered in the
/// workspace, shrunk to fit small terminals but never below the minimum.
pub fn centered(workspace: Rect) -> WindowRect {
    let width = DEFAULT_WINDOW_WIDTH
        .min(workspace.width.max(MIN_WINDOW_WIDTH))
        .max(MIN_WINDOW_WIDTH);
    let height = DEFAULT_WINDOW_HEIGHT
        .min(workspace.height.max(MIN_WINDOW_HEIGHT))
        .max(MIN_WINDOW_HEIGHT);
    WindowRect {
        x: workspace.x as i32 + (workspace.width as i32 - width as i32) / 2,
        y: workspace.y as i32 + (workspace.height as i32 - height as i32) / 2,
        width,
        height,
    }
}

/// Constrain a dragged frame so its title row stays inside the workspace
/// vertically and at least `MIN_VISIBLE_MARGIN` columns remain reachable
/// horizontally.
pub fn clamp_drag(rect: WindowRect, workspace: Rect) -> WindowRect {
    let mut out = rect;
    let ws_left = workspace.x as i32;
    let ws_top = workspace.y as i32;
    let ws_right = ws_left + workspace.width as i32;
    let ws_bottom = ws_top + workspace.height as i32;
    let margin = MIN_VISIBLE_MARGIN as i32;

    out.y = out.y.clamp(ws_top, (ws_bottom - 1).max(ws_top));

    let max_x = ws_right - margin;
    let min_x = ws_left + margin - out.width as i32;
    out.x = out.x.clamp(min_x.min(max_x), max_x);
    out
}

/// Constrain a resized frame so its title row cannot leave the top of the
/// workspace. Overshoot folds into the height, keeping the bottom edge
/// anchored.
pub fn clamp_resize(rect: WindowRect, workspace: Rect) -> WindowRect {
    let mut out = rect;
    let ws_top = workspace.y as i32;
    if out.y < ws_top {
        let diff = ws_top - out.y;
        out.y = ws_top;
        out.height = (out.height as i32 - diff).max(MIN_WINDOW_HEIGHT as i32) as u16;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> WindowRect {
        WindowRect::new(20, 10, 40, 12)
    }

    #[test]
    fn drag_moves_without_resizing() {
        let moved = apply_drag(start(), 15, -4);
        assert_eq!(moved, WindowRect::new(35, 6, 40, 12));
    }

    #[test]
    fn resize_right_grows_width_only() {
        let resized = apply_resize(start(), ResizeEdge::Right, 7, 99);
        assert_eq!(resized, WindowRect::new(20, 10, 47, 12));
    }

    #[test]
    fn resize_left_shifts_origin_and_keeps_right_edge() {
        let before = start();
        let resized = apply_resize(before, ResizeEdge::Left, 5, 0);
        assert_eq!(resized.x, before.x + 5);
        assert_eq!(resized.width, before.width - 5);
        assert_eq!(resized.right(), before.right());
    }

    #[test]
    fn resize_left_clamp_keeps_right_edge_anchored() {
        let before = start();
        // Shrink far past the minimum; the right edge must not move.
        let resized = apply_resize(before, ResizeEdge::Left, 200, 0);
        assert_eq!(resized.width, MIN_WINDOW_WIDTH);
        assert_eq!(resized.right(), before.right());
    }

    #[test]
    fn resize_top_drag_up_grows_and_keeps_bottom_edge() {
        let before = start();
        let resized = apply_resize(before, ResizeEdge::Top, 0, -3);
        assert_eq!(resized.y, before.y - 3);
        assert_eq!(resized.height, before.height + 3);
        assert_eq!(resized.bottom(), before.bottom());
    }

    #[test]
    fn resize_top_clamp_keeps_bottom_edge_anchored() {
        let before = start();
        let resized = apply_resize(before, ResizeEdge::Top, 0, 200);
        assert_eq!(resized.height, MIN_WINDOW_HEIGHT);
        assert_eq!(resized.bottom(), before.bottom());
    }

    #[test]
    fn resize_corner_composes_both_axes() {
        let resized = apply_resize(start(), ResizeEdge::BottomRight, 6, 3);
        assert_eq!(resized, WindowRect::new(20, 10, 46, 15));
    }

    #[test]
    fn resize_bottom_right_clamps_at_minimum() {
        let at_min = WindowRect::new(5, 5, MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
        let resized = apply_resize(at_min, ResizeEdge::BottomRight, -200, -100);
        assert_eq!(resized.width, MIN_WINDOW_WIDTH);
        assert_eq!(resized.height, MIN_WINDOW_HEIGHT);
        assert_eq!(resized.x, at_min.x);
        assert_eq!(resized.y, at_min.y);
    }

    #[test]
    fn resize_left_offscreen_preserves_negative_origin() {
        let resized = apply_resize(WindowRect::new(2, 4, 30, 10), ResizeEdge::Left, -8, 0);
        assert_eq!(resized.x, -6);
        assert_eq!(resized.width, 38);
    }

    #[test]
    fn centered_fits_inside_workspace() {
        let ws = Rect::new(0, 1, 100, 30);
        let rect = centered(ws);
        assert_eq!(rect.width, DEFAULT_WINDOW_WIDTH);
        assert_eq!(rect.height, DEFAULT_WINDOW_HEIGHT);
        assert_eq!(rect.x, (100 - DEFAULT_WINDOW_WIDTH as i32) / 2);
        assert!(rect.y >= 1);
        assert!(rect.bottom() <= 31);
    }

    #[test]
    fn centered_shrinks_for_small_terminals() {
        let rect = centered(Rect::new(0, 1, 30, 9));
        assert_eq!(rect.width, 30);
        assert_eq!(rect.height, 9);
    }

    #[test]
    fn clamp_drag_keeps_title_row_reachable() {
        let ws = Rect::new(0, 1, 80, 22);
        // Dragged above the workspace and far off the right edge.
        let wild = WindowRect::new(100, -5, 40, 12);
        let clamped = clamp_drag(wild, ws);
        assert_eq!(clamped.y, 1);
        assert_eq!(clamped.x, 80 - MIN_VISIBLE_MARGIN as i32);

        // Far off the left edge: a sliver of the right side must remain.
        let left = clamp_drag(WindowRect::new(-100, 5, 40, 12), ws);
        assert_eq!(left.right(), MIN_VISIBLE_MARGIN as i32);
    }

    #[test]
    fn clamp_resize_folds_top_overshoot_into_height() {
        let ws = Rect::new(0, 1, 80, 22);
        let grown = WindowRect::new(10, -3, 40, 20);
        let clamped = clamp_resize(grown, ws);
        assert_eq!(clamped.y, 1);
        assert_eq!(clamped.height, 16);
        assert_eq!(clamped.bottom(), grown.bottom());
    }
}
