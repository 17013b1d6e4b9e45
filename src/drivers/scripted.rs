use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crossterm::event::Event;

use super::InputDriver;

/// Replays a fixed event script. Lets tests drive the event loop and the
/// runner without a terminal.
pub struct ScriptedDriver {
    events: VecDeque<Event>,
    capture_log: Vec<bool>,
}

impl ScriptedDriver {
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
            capture_log: Vec::new(),
        }
    }

    /// Every mouse-capture state pushed to this driver, in order.
    pub fn capture_log(&self) -> &[bool] {
        &self.capture_log
    }
}

impl InputDriver for ScriptedDriver {
    fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
        Ok(!self.events.is_empty())
    }

    fn read(&mut self) -> io::Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| io::Error::other("event script exhausted"))
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        self.capture_log.push(enabled);
        Ok(())
    }
}
