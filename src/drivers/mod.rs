//! Input abstraction between the event loop and the terminal. The desktop
//! is driven through this trait, so tests can feed it synthetic events and
//! the real binary wires up the crossterm-backed console driver.

pub mod console;
pub mod keyboard;
pub mod scripted;

use std::io;
use std::time::Duration;

use crossterm::event::Event;

pub use console::ConsoleDriver;
pub use keyboard::KeyboardNormalizer;
pub use scripted::ScriptedDriver;

pub trait InputDriver {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<Event>;
    fn set_mouse_capture(&mut self, _enabled: bool) -> io::Result<()> {
        Ok(())
    }
}

impl<T: InputDriver + ?Sized> InputDriver for &mut T {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        (**self).poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        (**self).read()
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        (**self).set_mouse_capture(enabled)
    }
}
