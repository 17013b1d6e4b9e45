//! The locked app: a password-cracking toybox. Jobs run on wall-clock time
//! driven by `tick` and pay their reward into the session wallet exactly
//! once on completion.

use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::apps::{AppView, ViewContext};
use crate::components::SelectList;
use crate::session::Session;
use crate::theme;
use crate::ui::UiFrame;

/// target, crack time, payout in credits
const JOBS: &[(&str, Duration, u32)] = &[
    ("cafe-wifi.pcap", Duration::from_secs(4), 40),
    ("forum-hashes.txt", Duration::from_secs(7), 90),
    ("corp-vpn.seed", Duration::from_secs(12), 160),
];

#[derive(Clone, Copy)]
enum JobState {
    Queued,
    Running { started: Instant },
    Done,
}

pub struct CrackerView {
    list: SelectList,
    states: Vec<JobState>,
}

impl CrackerView {
    pub fn new() -> Self {
        Self {
            list: SelectList::new(),
            states: vec![JobState::Queued; JOBS.len()],
        }
    }

    fn rows(&self) -> Vec<String> {
        JOBS.iter()
            .zip(&self.states)
            .map(|((target, duration, reward), state)| {
                let status = match state {
                    JobState::Queued => format!("{reward:>3} cr"),
                    JobState::Running { started } => {
                        let ratio =
                            (started.elapsed().as_secs_f32() / duration.as_secs_f32()).min(1.0);
                        format!("{:>5.0}%", ratio * 100.0)
                    }
                    JobState::Done => format!("paid {reward} cr"),
                };
                format!("{target:<22} {status}")
            })
            .collect()
    }
}

impl AppView for CrackerView {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ViewContext<'_>) {
        self.list.set_items(self.rows());
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);
        frame.render_widget(
            Paragraph::new("krackd 2.4 · offline mode").style(
                Style::default()
                    .fg(theme::danger_fg())
                    .add_modifier(Modifier::BOLD),
            ),
            header,
        );
        self.list.render(frame, body, ctx.focused());
        frame.render_widget(
            Paragraph::new("enter starts a job").style(Style::default().fg(theme::muted_fg())),
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
        if key.code == KeyCode::Enter
            && let Some(index) = self.list.selected()
            && matches!(self.states[index], JobState::Queued)
        {
            self.states[index] = JobState::Running {
                started: Instant::now(),
            };
            return true;
        }
        false
    }

    fn tick(&mut self, session: &mut Session) {
        for ((_, duration, reward), state) in JOBS.iter().zip(&mut self.states) {
            if let JobState::Running { started } = state
                && started.elapsed() >= *duration
            {
                *state = JobState::Done;
                session.deposit(*reward);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    #[test]
    fn finished_job_pays_out_once() {
        let mut view = CrackerView::new();
        let mut session = Session::new(0);
        view.list.set_items(view.rows());
        let enter = Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert!(view.handle_event(&enter, &mut session));

        // Still running right after the start.
        view.tick(&mut session);
        assert_eq!(session.wallet(), 0);

        // Backdate the start past the job duration instead of sleeping.
        let backdated = Instant::now()
            .checked_sub(JOBS[0].1 + Duration::from_secs(1))
            .unwrap();
        view.states[0] = JobState::Running { started: backdated };
        view.tick(&mut session);
        assert_eq!(session.wallet(), JOBS[0].2);
        assert!(matches!(view.states[0], JobState::Done));

        // A later tick must not pay again.
        view.tick(&mut session);
        assert_eq!(session.wallet(), JOBS[0].2);
    }

    #[test]
    fn enter_does_not_restart_a_running_job() {
        let mut view = CrackerView::new();
        let mut session = Session::new(0);
        view.list.set_items(view.rows());
        let enter = Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert!(view.handle_event(&enter, &mut session));
        assert!(!view.handle_event(&enter, &mut session));
    }
}
