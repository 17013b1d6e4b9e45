//! Scrollable read-only text, used for mail previews and lesson articles.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Paragraph, Wrap};

use crate::ui::UiFrame;

const PAGE_ROWS: i32 = 6;

#[derive(Default)]
pub struct TextPane {
    lines: Vec<String>,
    scroll: u16,
}

impl TextPane {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, text: &str) {
        self.lines = text.lines().map(|line| line.to_string()).collect();
        self.scroll = 0;
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let max = self.lines.len().saturating_sub(1) as i32;
        self.scroll = (self.scroll as i32 + delta).clamp(0, max) as u16;
    }

    /// PageUp/PageDown scrolling; other keys are left for the caller.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::PageUp => self.scroll_by(-PAGE_ROWS),
            KeyCode::PageDown => self.scroll_by(PAGE_ROWS),
            _ => return false,
        }
        true
    }

    pub fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, style: Style) {
        let paragraph = Paragraph::new(self.lines.join("\n"))
            .style(style)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_clamps_to_content() {
        let mut pane = TextPane::new();
        pane.set_text("one\ntwo\nthree");
        pane.scroll_by(10);
        assert_eq!(pane.scroll(), 2);
        pane.scroll_by(-10);
        assert_eq!(pane.scroll(), 0);
    }

    #[test]
    fn set_text_resets_scroll() {
        let mut pane = TextPane::new();
        pane.set_text("a\nb\nc\nd");
        pane.scroll_by(3);
        pane.set_text("fresh");
        assert_eq!(pane.scroll(), 0);
    }
}
