//! Day planner checklist. State lives in the view, so closing the window
//! resets it like every other app.

use crossterm::event::{Event, KeyCode};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Paragraph;

use crate::apps::{AppView, ViewContext};
use crate::components::SelectList;
use crate::session::Session;
use crate::theme;
use crate::ui::UiFrame;

const TASKS: &[&str] = &[
    "Rotate workstation password",
    "Review bank statement",
    "Reply to IT desk ticket",
    "Clear mail backlog",
    "Back up documents folder",
];

pub struct TaskView {
    list: SelectList,
    done: Vec<bool>,
}

impl TaskView {
    pub fn new() -> Self {
        Self {
            list: SelectList::new(),
            done: vec![false; TASKS.len()],
        }
    }

    fn rows(&self) -> Vec<String> {
        TASKS
            .iter()
            .zip(&self.done)
            .map(|(task, done)| format!("[{}] {task}", if *done { 'x' } else { ' ' }))
            .collect()
    }

    fn remaining(&self) -> usize {
        self.done.iter().filter(|done| !**done).count()
    }
}

impl AppView for TaskView {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ViewContext<'_>) {
        self.list.set_items(self.rows());
        let [body, footer] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        self.list.render(frame, body, ctx.focused());
        frame.render_widget(
            Paragraph::new(format!("{} open · space toggles", self.remaining()))
                .style(Style::default().fg(theme::muted_fg())),
            footer,
        );
    }

    fn handle_event(&mut self, event: &Event, _session: &mut Session) -> bool {
        let Event::Key(key) = event else {
            return false;
        };
        if self.list.handle_key(key) {
            return true;
        }
        if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter)
            && let Some(index) = self.list.selected()
        {
            self.done[index] = !self.done[index];
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    #[test]
    fn toggling_flips_one_entry() {
        let mut view = TaskView::new();
        let mut session = Session::new(0);
        view.list.set_items(view.rows());
        assert_eq!(view.remaining(), TASKS.len());
        let space = Event::Key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE));
        assert!(view.handle_event(&space, &mut session));
        assert_eq!(view.remaining(), TASKS.len() - 1);
        assert!(view.done[0]);
        assert!(view.handle_event(&space, &mut session));
        assert_eq!(view.remaining(), TASKS.len());
    }
}
