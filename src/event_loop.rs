use std::io;
use std::time::Duration;

use crossterm::event::Event;

use crate::drivers::InputDriver;

pub enum ControlFlow {
    Continue,
    Quit,
}

/// The single synchronous pump that drives the UI thread.
///
/// It is the only place that calls `driver.poll()` or `driver.read()`. The
/// handler closure receives `Some(event)` for each input event and `None`
/// once per poll interval when the queue is idle, which is where drawing
/// and time-based updates belong.
pub struct EventLoop<D> {
    driver: D,
    poll_interval: Duration,
}

impl<D: InputDriver> EventLoop<D> {
    pub fn new(driver: D, poll_interval: Duration) -> Self {
        Self {
            driver,
            poll_interval,
        }
    }

    pub fn driver(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn run<F>(&mut self, mut handler: F) -> io::Result<()>
    where
        F: FnMut(&mut D, Option<Event>) -> io::Result<ControlFlow>,
    {
        loop {
            if let ControlFlow::Quit = handler(&mut self.driver, None)? {
                break;
            }

            if self.driver.poll(self.poll_interval)? {
                // Drain the whole queue before drawing again. Processing a
                // single event per poll would let a burst (mouse drags,
                // autorepeat) outrun the render loop.
                loop {
                    let event = self.driver.read()?;
                    if let ControlFlow::Quit = handler(&mut self.driver, Some(event))? {
                        return Ok(());
                    }
                    if !self.driver.poll(Duration::from_millis(0))? {
                        break;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::drivers::ScriptedDriver;

    fn key(ch: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE))
    }

    #[test]
    fn bursts_drain_before_the_next_idle_tick() {
        let driver = ScriptedDriver::new([key('a'), key('b'), key('c')]);
        let mut pump = EventLoop::new(driver, Duration::from_millis(1));
        let mut log: Vec<Option<Event>> = Vec::new();
        pump.run(|_, event| {
            let idle = event.is_none();
            log.push(event);
            if idle && log.len() > 1 {
                return Ok(ControlFlow::Quit);
            }
            Ok(ControlFlow::Continue)
        })
        .unwrap();

        // One idle tick, then the whole burst back to back, then idle again.
        assert_eq!(log.len(), 5);
        assert!(log[0].is_none());
        assert!(log[1..4].iter().all(|event| event.is_some()));
        assert!(log[4].is_none());
    }

    #[test]
    fn quit_from_an_event_stops_reading() {
        let driver = ScriptedDriver::new([key('q'), key('x')]);
        let mut pump = EventLoop::new(driver, Duration::from_millis(1));
        let mut seen = 0;
        pump.run(|_, event| {
            if event.is_some() {
                seen += 1;
                return Ok(ControlFlow::Quit);
            }
            Ok(ControlFlow::Continue)
        })
        .unwrap();
        assert_eq!(seen, 1);
    }
}
