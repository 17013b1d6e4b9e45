//! A simulated shell: a fixed command table over a scrollback, no real
//! process behind it.

use crossterm::event::{Event, KeyCode, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;

use crate::apps::{AppView, ViewContext};
use crate::session::Session;
use crate::theme;
use crate::ui::UiFrame;

const PROMPT: &str = "operator@desk:~$ ";

pub struct ConsoleView {
    scrollback: Vec<String>,
    input: String,
}

impl ConsoleView {
    pub fn new() -> Self {
        Self {
            scrollback: vec![
                "term-desk console. Type `help` for commands.".to_string(),
                String::new(),
            ],
            input: String::new(),
        }
    }

    fn run_command(&mut self, session: &Session) {
        let line = self.input.trim().to_string();
        self.scrollback.push(format!("{PROMPT}{line}"));
        self.input.clear();
        let mut parts = line.split_whitespace();
        match parts.next() {
            None => {}
            Some("help") => {
                self.scrollback.extend(
                    [
                        "help      show this list",
                        "whoami    current operator",
                        "balance   wallet credits",
                        "owned     purchased products",
                        "echo ...  print arguments",
                        "clear     wipe the scrollback",
                    ]
                    .map(str::to_string),
                );
            }
            Some("whoami") => self.scrollback.push("operator".to_string()),
            Some("balance") => self
                .scrollback
                .push(format!("{} cr", session.wallet())),
            Some("owned") => {
                if session.owned().is_empty() {
                    self.scrollback.push("(nothing purchased)".to_string());
                } else {
                    for product in session.owned() {
                        self.scrollback.push(product.clone());
                    }
                }
            }
            Some("echo") => {
                let rest: Vec<&str> = parts.collect();
                self.scrollback.push(rest.join(" "));
            }
            Some("clear") => self.scrollback.clear(),
            Some(other) => self
                .scrollback
                .push(format!("{other}: command not found")),
        }
    }
}

impl AppView for ConsoleView {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ViewContext<'_>) {
        if area.height == 0 {
            return;
        }
        let cursor = if ctx.focused() { "_" } else { "" };
        let mut lines = self.scrollback.clone();
        lines.push(format!("{PROMPT}{}{cursor}", self.input));
        // Pin the prompt to the bottom once the scrollback outgrows the
        // content area.
        let scroll = lines.len().saturating_sub(area.height as usize) as u16;
        let paragraph = Paragraph::new(lines.join("\n"))
            .style(Style::default().fg(theme::success_fg()))
            .scroll((scroll, 0));
        frame.render_widget(paragraph, area);
    }

    fn handle_event(&mut self, event: &Event, session: &mut Session) -> bool {
        let Event::Key(key) = event else {
            return false;
        };
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        match key.code {
            KeyCode::Char(c) => {
                self.input.push(c);
                true
            }
            KeyCode::Backspace => {
                self.input.pop();
                true
            }
            KeyCode::Enter => {
                self.run_command(session);
                true
            }
            _ => false,
        }
    }
}
