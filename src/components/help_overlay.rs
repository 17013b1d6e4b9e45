//! Modal help overlay fed by the build-embedded `assets/help.md`.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, BorderType, Clear, Paragraph, Wrap};

use crate::theme;
use crate::ui::UiFrame;

include!(concat!(env!("OUT_DIR"), "/generated_help.rs"));

pub fn help_text() -> String {
    String::from_utf8_lossy(EMBEDDED_HELP.content).into_owned()
}

/// Draw the help text centered above everything else.
pub fn render_help_overlay(frame: &mut UiFrame<'_>, area: Rect) {
    if area.width < 8 || area.height < 5 {
        return;
    }
    let width = area.width.saturating_sub(6).min(66);
    let height = area.height.saturating_sub(2).min(24);
    let overlay = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, overlay);
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::accent()))
        .title(" Help ")
        .style(Style::default().bg(theme::window_bg()).fg(theme::window_fg()));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);
    frame.render_widget(
        Paragraph::new(help_text()).wrap(Wrap { trim: false }),
        inner,
    );
}
