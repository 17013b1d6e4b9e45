//! Bottom launcher bar.
//!
//! The dock lists every app the operator may launch: required catalog
//! entries plus anything whose title is in the owned set. Locked apps are
//! simply absent. Each entry shows an open indicator that tracks registry
//! state only, never stacking order, so a buried or minimized window still
//! reads as open.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::catalog::{AppId, CATALOG};
use crate::entitlement;
use crate::layout::{RegionMap, rect_contains};
use crate::registry::WindowRegistry;
use crate::session::Session;
use crate::theme;
use crate::ui::{UiFrame, safe_set_string};

const MOUSE_LABEL_ON: &str = "[ mouse ]";
const MOUSE_LABEL_OFF: &str = "[ -m- ]";

#[derive(Default)]
pub struct Dock {
    hits: RegionMap<AppId>,
    mouse_rect: Option<Rect>,
}

impl Dock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget last frame's hit regions. Call before `render`.
    pub fn begin_frame(&mut self) {
        self.hits.clear();
        self.mouse_rect = None;
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<AppId> {
        self.hits.hit_test(column, row)
    }

    /// Where an app's entry was drawn in the last frame, if it was shown.
    pub fn entry_rect(&self, id: AppId) -> Option<Rect> {
        self.hits.get(id)
    }

    pub fn hit_test_mouse_capture(&self, column: u16, row: u16) -> bool {
        self.mouse_rect
            .is_some_and(|rect| rect_contains(rect, column, row))
    }

    pub fn render(
        &mut self,
        frame: &mut UiFrame<'_>,
        area: Rect,
        registry: &WindowRegistry,
        session: &Session,
    ) {
        if area.height == 0 {
            return;
        }
        frame.render_widget(
            Block::default().style(Style::default().bg(theme::bar_bg())),
            area,
        );

        // Mouse capture indicator pinned to the right edge. Capture off is
        // worth noticing, so it gets the warning color.
        let (mouse_label, mouse_style) = if session.mouse_capture_enabled() {
            (MOUSE_LABEL_ON, Style::default().fg(theme::muted_fg()))
        } else {
            (MOUSE_LABEL_OFF, Style::default().fg(theme::warning_fg()))
        };
        let mouse_width = mouse_label.len() as u16;
        if area.width > mouse_width + 1 {
            let x = area.right() - mouse_width - 1;
            let rect = Rect::new(x, area.y, mouse_width, 1);
            safe_set_string(frame.buffer_mut(), area, x, area.y, mouse_label, mouse_style);
            self.mouse_rect = Some(rect);
        }
        let entries_right = self.mouse_rect.map(|rect| rect.x).unwrap_or(area.right());

        let mut x = area.x;
        for entry in CATALOG {
            if !entitlement::unlocked(&entry, session.owned()) {
                continue;
            }
            let open = registry.is_open(entry.id);
            let indicator = if open { '•' } else { ' ' };
            let label = format!(" {} {} {indicator}", entry.glyph, entry.title);
            let width = label.chars().count() as u16;
            if x + width > entries_right {
                break;
            }
            let mut style = Style::default().fg(if open {
                theme::dock_open_fg()
            } else {
                theme::dock_entry_fg()
            });
            if open {
                style = style.add_modifier(Modifier::BOLD);
            }
            safe_set_string(frame.buffer_mut(), area, x, area.y, &label, style);
            self.hits.set(entry.id, Rect::new(x, area.y, width, 1));
            x += width + 1;
        }
    }
}
