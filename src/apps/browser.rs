//! Offline browser over a handful of canned mesh pages.

use crossterm::event::Event;
use indoc::indoc;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::apps::{AppView, ViewContext};
use crate::components::{SelectList, TextPane};
use crate::session::Session;
use crate::theme;
use crate::ui::UiFrame;

/// address, page text
const PAGES: &[(&str, &str)] = &[
    (
        "home.mesh",
        indoc! {"
            THE MESH
            Your gateway to the local network.

            Bookmarks are listed on the left. The mesh is read
            only from this terminal.
        "},
    ),
    (
        "news.mesh",
        indoc! {"
            MESH NEWS · evening edition

            Grid maintenance window moved to Sunday 02:00.

            Aster Bank reports a wave of credential-stuffing
            attempts against dormant accounts. Customers are
            urged to rotate passwords.
        "},
    ),
    (
        "wiki.mesh/passwords",
        indoc! {"
            WIKI: Password hygiene

            Length beats complexity. A four-word passphrase
            outlasts an eight-character jumble.

            Never reuse a password across services. Crackers
            test leaked pairs everywhere within hours.
        "},
    ),
    (
        "market.mesh",
        indoc! {"
            MESH MARKET (mirror)

            This unofficial mirror lists goods the Nexus Store
            will not carry. Transactions are out of band and
            entirely at your own risk.

            [listing removed by moderator]
        "},
    ),
];

pub struct BrowserView {
    bookmarks: SelectList,
    page: TextPane,
    shown: Option<usize>,
}

impl BrowserView {
    pub fn new() -> Self {
        let rows = PAGES.iter().map(|(address, _)| address.to_string()).collect();
        Self {
            bookmarks: SelectList::with_items(rows),
            page: TextPane::new(),
            shown: None,
        }
    }
}

impl AppView for BrowserView {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ViewContext<'_>) {
        if self.bookmarks.selected() != self.shown {
            self.shown = self.bookmarks.selected();
            if let Some(index) = self.shown {
                self.page.set_text(PAGES[index].1);
            }
        }
        let [bar, body] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
        let [side, content] =
            Layout::horizontal([Constraint::Length(24), Constraint::Min(0)]).areas(body);
        let address = self
            .shown
            .map(|index| PAGES[index].0)
            .unwrap_or("about:blank");
        frame.render_widget(
            Paragraph::new(format!(" mesh://{address}")).style(
                Style::default()
                    .fg(theme::accent())
                    .add_modifier(Modifier::BOLD),
            ),
            bar,
        );
        self.bookmarks.render(frame, side, ctx.focused());
        self.page
            .render(frame, content, Style::default().fg(theme::window_fg()));
    }

    fn handle_event(&mut self, event: &Event, _session: &mut Session) -> bool {
        let Event::Key(key) = event else {
            return false;
        };
        self.bookmarks.handle_key(key) || self.page.handle_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bookmarks_cover_every_page() {
        let view = BrowserView::new();
        assert_eq!(view.bookmarks.items().len(), PAGES.len());
        assert_eq!(view.bookmarks.items()[0], "home.mesh");
    }
}
