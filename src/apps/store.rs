//! Software store. Purchases debit the session wallet and add the product
//! name to the owned set, which is what the dock and the launch gate key
//! entitlements off.

use crossterm::event::{Event, KeyCode};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::apps::{AppView, ViewContext};
use crate::components::SelectList;
use crate::session::{PurchaseOutcome, Session};
use crate::theme;
use crate::ui::UiFrame;

/// name, price in credits. The Cracker entry matches the catalog title of
/// the locked app, so buying it unlocks the app.
pub const PRODUCTS: &[(&str, u32)] = &[
    ("Synapse Cloud", 100),
    ("Guardian Password Manager", 120),
    ("Quantum VPN", 150),
    ("Sentinel Antivirus", 200),
    ("Nexus Code Editor", 250),
    ("Aegis Firewall", 300),
    ("Cracker", 350),
];

pub struct StoreView {
    list: SelectList,
    status: Option<String>,
}

impl StoreView {
    pub fn new() -> Self {
        Self {
            list: SelectList::new(),
            status: None,
        }
    }

    fn rows(session: &Session) -> Vec<String> {
        PRODUCTS
            .iter()
            .map(|(name, price)| {
                if session.owns(name) {
                    format!("{name:<28} owned")
                } else {
                    format!("{name:<28} {price:>3} cr")
                }
            })
            .collect()
    }
}

impl AppView for StoreView {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ViewContext<'_>) {
        self.list.set_items(Self::rows(ctx.session()));
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);
        frame.render_widget(
            Paragraph::new(format!(
                "Nexus Store · wallet {} cr",
                ctx.session().wallet()
            ))
            .style(
                Style::default()
                    .fg(theme::accent())
                    .add_modifier(Modifier::BOLD),
            ),
            header,
        );
        self.list.render(frame, body, ctx.focused());
        let status = self.status.as_deref().unwrap_or("enter buys");
        frame.render_widget(
            Paragraph::new(status).style(Style::default().fg(theme::muted_fg())),
            footer,
        );
    }

    fn handle_event(&mut self, event: &Event, session: &mut Session) -> bool {
        let Event::Key(key) = event else {
            return false;
        };
        if self.list.handle_key(key) {
            return true;
        }
        if key.code != KeyCode::Enter {
            return false;
        }
        let Some(index) = self.list.selected() else {
            return false;
        };
        let (name, price) = PRODUCTS[index];
        self.status = Some(match session.try_purchase(name, price) {
            PurchaseOutcome::Purchased => format!("Purchased {name}."),
            PurchaseOutcome::AlreadyOwned => format!("{name} is already owned."),
            PurchaseOutcome::InsufficientFunds => {
                format!("Not enough credits for {name} ({price} cr).")
            }
        });
        true
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
    fn enter_purchases_the_selected_product() {
        let mut view = StoreView::new();
        let mut session = Session::new(500);
        view.list.set_items(StoreView::rows(&session));

        assert!(view.handle_event(&key(KeyCode::Enter), &mut session));
        assert!(session.owns("Synapse Cloud"));
        assert_eq!(session.wallet(), 400);
        assert_eq!(view.status.as_deref(), Some("Purchased Synapse Cloud."));

        // Buying the same row again reports ownership without a charge.
        assert!(view.handle_event(&key(KeyCode::Enter), &mut session));
        assert_eq!(session.wallet(), 400);
        assert!(
            view.status
                .as_deref()
                .is_some_and(|status| status.contains("already owned"))
        );
    }

    #[test]
    fn short_wallet_refuses_the_sale() {
        let mut view = StoreView::new();
        let mut session = Session::new(10);
        view.list.set_items(StoreView::rows(&session));
        view.list.set_selected(PRODUCTS.len() - 1);
        assert!(view.handle_event(&key(KeyCode::Enter), &mut session));
        assert!(!session.owns("Cracker"));
        assert_eq!(session.wallet(), 10);
    }
}
