use std::io;
use std::time::Duration;

use crossterm::event::Event;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::layout::Rect;

use crate::desktop::Desktop;
use crate::drivers::InputDriver;
use crate::event_loop::{ControlFlow, EventLoop};

/// Drive the desktop until it requests quit. The caller owns terminal
/// bring-up and teardown; this function only pumps events and draws.
pub fn run_desktop<B, D>(
    terminal: &mut Terminal<B>,
    driver: &mut D,
    desktop: &mut Desktop,
    poll_interval: Duration,
) -> io::Result<()>
where
    B: Backend,
    D: InputDriver,
{
    let size = terminal
        .size()
        .map_err(|err| io::Error::other(err.to_string()))?;
    desktop.layout(Rect::new(0, 0, size.width, size.height));

    let mut event_loop = EventLoop::new(driver, poll_interval);
    event_loop
        .driver()
        .set_mouse_capture(desktop.session().mouse_capture_enabled())?;
    // The line above already synced the terminal; clear any change latched
    // during session setup so the first iteration does not repeat it.
    desktop.session_mut().take_mouse_capture_change();

    event_loop.run(|driver, event| {
        match event {
            Some(event) => {
                // Mouse reports can still be in flight right after capture
                // was turned off; drop them instead of routing stale
                // clicks.
                let stale_mouse = matches!(event, Event::Mouse(_))
                    && !desktop.session().mouse_capture_enabled();
                if !stale_mouse {
                    desktop.handle_event(&event);
                }
            }
            None => {
                desktop.on_tick();
                terminal
                    .draw(|frame| desktop.render(frame))
                    .map_err(|err| io::Error::other(err.to_string()))?;
            }
        }
        if let Some(enabled) = desktop.session_mut().take_mouse_capture_change() {
            driver.set_mouse_capture(enabled)?;
        }
        if desktop.quit_requested() {
            return Ok(ControlFlow::Quit);
        }
        Ok(ControlFlow::Continue)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;

    use crate::desktop::Desktop;
    use crate::drivers::ScriptedDriver;
    use crate::session::Session;

    fn key(code: KeyCode, mods: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, mods))
    }

    #[test]
    fn quit_key_ends_the_run() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut driver =
            ScriptedDriver::new([key(KeyCode::Char('q'), KeyModifiers::CONTROL)]);
        let mut desktop = Desktop::new(Session::new(500));

        run_desktop(
            &mut terminal,
            &mut driver,
            &mut desktop,
            Duration::from_millis(1),
        )
        .unwrap();

        assert!(desktop.quit_requested());
        // The initial capture sync happened exactly once.
        assert_eq!(driver.capture_log(), &[true]);
    }

    #[test]
    fn capture_toggle_reaches_the_driver() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut driver = ScriptedDriver::new([
            key(KeyCode::Char('c'), KeyModifiers::ALT),
            key(KeyCode::Char('q'), KeyModifiers::CONTROL),
        ]);
        let mut desktop = Desktop::new(Session::new(500));

        run_desktop(
            &mut terminal,
            &mut driver,
            &mut desktop,
            Duration::from_millis(1),
        )
        .unwrap();

        assert_eq!(driver.capture_log(), &[true, false]);
    }
}
