//! Read-only file browser over a canned home directory.

use crossterm::event::Event;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::apps::{AppView, ViewContext};
use crate::components::SelectList;
use crate::session::Session;
use crate::theme;
use crate::ui::UiFrame;

const HOME: &str = "/home/operator";

/// name, kind, size
const ENTRIES: &[(&str, &str, &str)] = &[
    ("builds/", "dir", "-"),
    ("documents/", "dir", "-"),
    ("photos/", "dir", "-"),
    ("contacts.vcf", "file", "2.1K"),
    ("ledger.csv", "file", "14K"),
    ("notes.txt", "file", "812B"),
    ("readme.md", "file", "1.3K"),
    ("wordlist.gz", "file", "41M"),
];

pub struct FilesView {
    list: SelectList,
}

impl FilesView {
    pub fn new() -> Self {
        let rows = ENTRIES
            .iter()
            .map(|(name, kind, size)| format!("{name:<22} {kind:<5} {size:>6}"))
            .collect();
        Self {
            list: SelectList::with_items(rows),
        }
    }
}

impl AppView for FilesView {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ViewContext<'_>) {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);
        frame.render_widget(
            Paragraph::new(HOME).style(
                Style::default()
                    .fg(theme::accent())
                    .add_modifier(Modifier::BOLD),
            ),
            header,
        );
        self.list.render(frame, body, ctx.focused());
        frame.render_widget(
            Paragraph::new(format!("{} items", ENTRIES.len()))
                .style(Style::default().fg(theme::muted_fg())),
            footer,
        );
    }

    fn handle_event(&mut self, event: &Event, _session: &mut Session) -> bool {
        let Event::Key(key) = event else {
            return false;
        };
        self.list.handle_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn arrow_keys_drive_selection() {
        let mut view = FilesView::new();
        let mut session = Session::new(0);
        assert_eq!(view.list.selected(), Some(0));
        let down = Event::Key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        assert!(view.handle_event(&down, &mut session));
        assert_eq!(view.list.selected(), Some(1));
    }
}
