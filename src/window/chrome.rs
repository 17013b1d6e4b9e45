//! Window chrome: what each cell of a window's border means to the mouse,
//! and how the frame decoration is painted.
//!
//! The border doubles as the resize surface: corner cells resize on two
//! axes, the remaining top-row cells form the drag header (minus the three
//! buttons on the right), and the side and bottom cells resize on one axis.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType};

use crate::geometry::{ResizeEdge, WindowRect};
use crate::theme;
use crate::ui::{UiFrame, safe_set_string};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowButton {
    Minimize,
    Maximize,
    Close,
}

/// What a pointer-down inside a window's effective frame landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeHit {
    Header,
    Button(WindowButton),
    Edge(ResizeEdge),
    Content,
}

/// Local top-row columns of the minimize, maximize, and close buttons.
/// `None` when the window is too narrow to show them.
pub fn button_columns(width: u16) -> Option<[u16; 3]> {
    if width < 10 {
        return None;
    }
    Some([width - 7, width - 5, width - 3])
}

pub fn hit_test(rect: WindowRect, column: u16, row: u16) -> Option<ChromeHit> {
    if !rect.contains(column, row) {
        return None;
    }
    let lx = column as i32 - rect.x;
    let ly = row as i32 - rect.y;
    let w = rect.width as i32;
    let h = rect.height as i32;

    if ly == 0 {
        if lx == 0 {
            return Some(ChromeHit::Edge(ResizeEdge::TopLeft));
        }
        if lx == w - 1 {
            return Some(ChromeHit::Edge(ResizeEdge::TopRight));
        }
        if let Some([min_col, max_col, close_col]) = button_columns(rect.width) {
            if lx == min_col as i32 {
                return Some(ChromeHit::Button(WindowButton::Minimize));
            }
            if lx == max_col as i32 {
                return Some(ChromeHit::Button(WindowButton::Maximize));
            }
            if lx == close_col as i32 {
                return Some(ChromeHit::Button(WindowButton::Close));
            }
        }
        return Some(ChromeHit::Header);
    }
    if ly == h - 1 {
        if lx == 0 {
            return Some(ChromeHit::Edge(ResizeEdge::BottomLeft));
        }
        if lx == w - 1 {
            return Some(ChromeHit::Edge(ResizeEdge::BottomRight));
        }
        return Some(ChromeHit::Edge(ResizeEdge::Bottom));
    }
    if lx == 0 {
        return Some(ChromeHit::Edge(ResizeEdge::Left));
    }
    if lx == w - 1 {
        return Some(ChromeHit::Edge(ResizeEdge::Right));
    }
    Some(ChromeHit::Content)
}

/// The region an app view renders into, in the window's local coordinates.
pub fn content_area(local: ratatui::layout::Rect) -> ratatui::layout::Rect {
    ratatui::layout::Rect {
        x: local.x + 1,
        y: local.y + 1,
        width: local.width.saturating_sub(2),
        height: local.height.saturating_sub(2),
    }
}

/// Paints a window frame into its local surface. Implementations draw the
/// border, title, and buttons; the content area is left to the hosted app.
pub trait WindowDecorator {
    fn render_window(
        &self,
        frame: &mut UiFrame<'_>,
        title: &str,
        glyph: char,
        focused: bool,
        maximized: bool,
    );
}

/// Default look: rounded border, dimmed when unfocused, title on the left
/// of the top border and the three buttons on the right.
#[derive(Debug, Default)]
pub struct GlassDecorator;

impl WindowDecorator for GlassDecorator {
    fn render_window(
        &self,
        frame: &mut UiFrame<'_>,
        title: &str,
        glyph: char,
        focused: bool,
        maximized: bool,
    ) {
        let area = frame.area();
        let border_fg = if focused {
            theme::border_focused_fg()
        } else {
            theme::border_fg()
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_fg))
            .style(Style::default().bg(theme::window_bg()).fg(theme::window_fg()));
        frame.render_widget(block, area);

        let mut title_style = Style::default().fg(if focused {
            theme::title_focused_fg()
        } else {
            theme::title_fg()
        });
        if focused {
            title_style = title_style.add_modifier(Modifier::BOLD);
        }
        title_style = title_style.bg(theme::window_bg());
        let label = format!(" {glyph} {title} ");
        let buffer = frame.buffer_mut();
        safe_set_string(buffer, area, area.x + 2, area.y, &label, title_style);

        if let Some([min_col, max_col, close_col]) = button_columns(area.width) {
            let button_style = Style::default()
                .fg(theme::button_fg())
                .bg(theme::window_bg());
            let close_style = Style::default()
                .fg(theme::close_button_fg())
                .bg(theme::window_bg());
            safe_set_string(buffer, area, area.x + min_col, area.y, "-", button_style);
            let max_glyph = if maximized { "▣" } else { "□" };
            safe_set_string(buffer, area, area.x + max_col, area.y, max_glyph, button_style);
            safe_set_string(buffer, area, area.x + close_col, area.y, "x", close_style);
        }
    }
}
