//! Account overview. The balance is the live session wallet, so purchases
//! made in the store and cracker payouts show up here immediately.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::apps::{AppView, ViewContext};
use crate::theme;
use crate::ui::UiFrame;

/// date, memo, amount
const LEDGER: &[(&str, &str, &str)] = &[
    ("08-22", "Transfer from savings", "+120"),
    ("08-20", "Nexus Store refund", "+35"),
    ("08-18", "Utility autopay", "-60"),
    ("08-15", "Salary deposit", "+500"),
    ("08-11", "Card payment", "-45"),
];

pub struct BankView;

impl BankView {
    pub fn new() -> Self {
        Self
    }
}

impl AppView for BankView {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ViewContext<'_>) {
        let [summary, history] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
        let balance = Paragraph::new(vec![
            Line::from("Bank of Aster · account ****2241"),
            Line::styled(
                format!("{} cr", ctx.session().wallet()),
                Style::default()
                    .fg(theme::success_fg())
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(balance, summary);

        let mut lines = vec![Line::styled(
            "Recent activity",
            Style::default().fg(theme::muted_fg()),
        )];
        for (date, memo, amount) in LEDGER {
            let color = if amount.starts_with('+') {
                theme::success_fg()
            } else {
                theme::danger_fg()
            };
            lines.push(Line::from(vec![
                ratatui::text::Span::raw(format!("{date}  {memo:<28}")),
                ratatui::text::Span::styled(amount.to_string(), Style::default().fg(color)),
            ]));
        }
        frame.render_widget(Paragraph::new(lines), history);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use crate::ui::UiFrame;
    use ratatui::buffer::Buffer;

    fn render_to_row(session: &Session, row: u16) -> String {
        let area = Rect::new(0, 0, 48, 12);
        let mut buffer = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buffer);
        let ctx = ViewContext::new(session);
        BankView::new().render(&mut frame, area, &ctx);
        (0..area.width)
            .filter_map(|x| buffer.cell((x, row)).map(|cell| cell.symbol().to_string()))
            .collect()
    }

    #[test]
    fn balance_tracks_session_wallet() {
        let mut session = Session::new(740);
        assert!(render_to_row(&session, 1).contains("740 cr"));
        session.deposit(60);
        assert!(render_to_row(&session, 1).contains("800 cr"));
    }
}
