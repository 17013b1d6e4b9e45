//! The single-row status bar at the top of the screen: identity on the
//! left, wallet and build info on the right.

use std::env;
use std::sync::OnceLock;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::session::Session;
use crate::theme;
use crate::ui::{UiFrame, safe_set_string};

const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

fn host_label() -> &'static str {
    static HOST: OnceLock<String> = OnceLock::new();
    HOST.get_or_init(|| {
        hostname::get()
            .ok()
            .and_then(|name| name.into_string().ok())
            .unwrap_or_else(|| "localhost".to_string())
    })
}

fn user_label() -> &'static str {
    static USER: OnceLock<String> = OnceLock::new();
    USER.get_or_init(|| env::var("USER").unwrap_or_else(|_| "operator".to_string()))
}

pub fn render_status_bar(frame: &mut UiFrame<'_>, area: Rect, session: &Session) {
    if area.height == 0 {
        return;
    }
    let bar_style = Style::default().bg(theme::bar_bg()).fg(theme::bar_fg());
    frame.render_widget(Block::new().style(bar_style), area);

    let left = format!(" {}@{}", user_label(), host_label());
    let right = format!("{} cr · {CRATE_NAME} v{CRATE_VERSION} ", session.wallet());

    let buffer = frame.buffer_mut();
    safe_set_string(
        buffer,
        area,
        area.x,
        area.y,
        &left,
        bar_style.add_modifier(Modifier::BOLD),
    );
    let right_len = right.chars().count() as u16;
    if area.width > right_len {
        safe_set_string(
            buffer,
            area,
            area.x + area.width - right_len,
            area.y,
            &right,
            bar_style,
        );
    }
}
