//! Desktop preferences. Two toggles for now, both stored on the session.

use crossterm::event::{Event, KeyCode};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Paragraph;

use crate::apps::{AppView, ViewContext};
use crate::components::SelectList;
use crate::session::Session;
use crate::theme;
use crate::ui::UiFrame;

const ROW_RAISE_ON_RESTORE: usize = 0;
const ROW_MOUSE_CAPTURE: usize = 1;

fn mark(enabled: bool) -> char {
    if enabled { 'x' } else { ' ' }
}

pub struct SettingsView {
    list: SelectList,
}

impl SettingsView {
    pub fn new() -> Self {
        Self {
            list: SelectList::new(),
        }
    }

    fn rows(session: &Session) -> Vec<String> {
        vec![
            format!(
                "[{}] Raise windows when restored",
                mark(session.settings().raise_on_restore)
            ),
            format!("[{}] Mouse capture", mark(session.mouse_capture_enabled())),
        ]
    }
}

impl AppView for SettingsView {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ViewContext<'_>) {
        self.list.set_items(Self::rows(ctx.session()));
        let [body, hint] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        self.list.render(frame, body, ctx.focused());
        frame.render_widget(
            Paragraph::new("space toggles").style(Style::default().fg(theme::muted_fg())),
            hint,
        );
    }

    fn handle_event(&mut self, event: &Event, session: &mut Session) -> bool {
        let Event::Key(key) = event else {
            return false;
        };
        if self.list.handle_key(key) {
            return true;
        }
        if !matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
            return false;
        }
        match self.list.selected() {
            Some(ROW_RAISE_ON_RESTORE) => {
                let settings = session.settings_mut();
                settings.raise_on_restore = !settings.raise_on_restore;
                true
            }
            Some(ROW_MOUSE_CAPTURE) => {
                session.set_mouse_capture_enabled(!session.mouse_capture_enabled());
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn space_toggles_selected_row() {
        let mut view = SettingsView::new();
        let mut session = Session::new(0);
        view.list.set_items(SettingsView::rows(&session));

        assert!(!session.settings().raise_on_restore);
        assert!(view.handle_event(&key(KeyCode::Char(' ')), &mut session));
        assert!(session.settings().raise_on_restore);

        assert!(view.handle_event(&key(KeyCode::Down), &mut session));
        assert!(view.handle_event(&key(KeyCode::Enter), &mut session));
        assert!(!session.mouse_capture_enabled());
        assert_eq!(session.take_mouse_capture_change(), Some(false));
    }
}
