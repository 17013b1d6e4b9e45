//! Inbox with a message list and a scrollable preview pane.

use crossterm::event::Event;
use indoc::indoc;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;

use crate::apps::{AppView, ViewContext};
use crate::components::{SelectList, TextPane};
use crate::session::Session;
use crate::theme;
use crate::ui::UiFrame;

/// from, subject, body
const MESSAGES: &[(&str, &str, &str)] = &[
    (
        "it-desk@aster.net",
        "Password rotation overdue",
        indoc! {"
            Your workstation password is 62 days old.

            Policy requires rotation every 60 days. Accounts left
            unrotated past 70 days are suspended automatically.

            - IT Desk
        "},
    ),
    (
        "receipts@nexus.store",
        "Receipt for your recent order",
        indoc! {"
            Thanks for shopping at the Nexus Store.

            Your order has been delivered to this terminal and is
            ready to use. Receipts are kept for 90 days.
        "},
    ),
    (
        "statements@aster.bank",
        "Your statement is ready",
        indoc! {"
            A new statement is available for account ****2241.

            Open the Bank app on this desk to review your balance
            and the most recent transactions.
        "},
    ),
    (
        "h4vok@unknown",
        "quiet work, good pay",
        indoc! {"
            heard you know your way around a terminal.

            there's a cracker kit on the store. buy it, run the jobs,
            keep whatever they pay out. nobody checks.

            delete this.
        "},
    ),
];

pub struct MailView {
    list: SelectList,
    preview: TextPane,
    shown: Option<usize>,
}

impl MailView {
    pub fn new() -> Self {
        let rows = MESSAGES
            .iter()
            .map(|(from, subject, _)| format!("{from:<24} {subject}"))
            .collect();
        Self {
            list: SelectList::with_items(rows),
            preview: TextPane::new(),
            shown: None,
        }
    }
}

impl AppView for MailView {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ViewContext<'_>) {
        // Refresh the preview only when the selection actually moved so the
        // pane keeps its scroll position otherwise.
        if self.list.selected() != self.shown {
            self.shown = self.list.selected();
            if let Some(index) = self.shown {
                let (from, subject, body) = MESSAGES[index];
                self.preview
                    .set_text(&format!("From: {from}\nSubject: {subject}\n\n{body}"));
            }
        }
        let rows = MESSAGES.len() as u16 + 1;
        let [inbox, body] =
            Layout::vertical([Constraint::Length(rows), Constraint::Min(0)]).areas(area);
        self.list.render(frame, inbox, ctx.focused());
        self.preview
            .render(frame, body, Style::default().fg(theme::window_fg()));
    }

    fn handle_event(&mut self, event: &Event, _session: &mut Session) -> bool {
        let Event::Key(key) = event else {
            return false;
        };
        self.list.handle_key(key) || self.preview.handle_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inbox_rows_match_messages() {
        let view = MailView::new();
        assert_eq!(view.list.items().len(), MESSAGES.len());
        assert!(view.list.items()[0].contains("Password rotation"));
    }
}
