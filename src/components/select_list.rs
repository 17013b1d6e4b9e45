//! Keyboard-driven selectable list, the workhorse of most app views.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{List, ListItem, ListState};

use crate::theme;
use crate::ui::UiFrame;

const PAGE_STEP: isize = 8;

pub struct SelectList {
    items: Vec<String>,
    state: ListState,
}

impl Default for SelectList {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectList {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            state: ListState::default(),
        }
    }

    pub fn with_items(items: Vec<String>) -> Self {
        let mut list = Self::new();
        list.set_items(items);
        list
    }

    /// Replace the rows, keeping the selection clamped in range. Views that
    /// derive rows from live state call this every render.
    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
        if self.items.is_empty() {
            self.state.select(None);
        } else {
            let selected = self.state.selected().unwrap_or(0);
            self.state.select(Some(selected.min(self.items.len() - 1)));
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn set_selected(&mut self, index: usize) {
        if !self.items.is_empty() {
            self.state.select(Some(index.min(self.items.len() - 1)));
        }
    }

    pub fn move_selection(&mut self, delta: isize) {
        if self.items.is_empty() {
            return;
        }
        let current = self.state.selected().unwrap_or(0) as isize;
        let last = self.items.len() as isize - 1;
        self.state.select(Some(current.saturating_add(delta).clamp(0, last) as usize));
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::PageUp => self.move_selection(-PAGE_STEP),
            KeyCode::PageDown => self.move_selection(PAGE_STEP),
            KeyCode::Home => self.set_selected(0),
            KeyCode::End => self.set_selected(self.items.len().saturating_sub(1)),
            _ => return false,
        }
        true
    }

    pub fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, focused: bool) {
        let mut highlight = Style::default()
            .bg(theme::selected_bg())
            .fg(theme::selected_fg());
        if focused {
            highlight = highlight.add_modifier(Modifier::BOLD);
        }
        let list = List::new(
            self.items
                .iter()
                .map(|item| ListItem::new(item.clone()))
                .collect::<Vec<_>>(),
        )
        .highlight_style(highlight)
        .highlight_symbol("> ");
        frame.render_stateful_widget(list, area, &mut self.state);
    }
}
