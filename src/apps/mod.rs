//! Hosted application views.
//!
//! Each catalog entry has one view implementation hosted inside a window.
//! Views are deliberately small: the window manager treats them as opaque
//! children that render into the content area and consume keyboard events.
//! They read shared state through `ViewContext` while rendering and may
//! mutate the session (purchases, rewards, settings) while handling events,
//! but they hold no window-lifecycle state of their own.

use crossterm::event::Event;
use ratatui::layout::Rect;

use crate::catalog::AppId;
use crate::session::Session;
use crate::ui::UiFrame;

pub mod bank;
pub mod browser;
pub mod console;
pub mod cracker;
pub mod files;
pub mod mail;
pub mod settings;
pub mod store;
pub mod task;

pub use bank::BankView;
pub use browser::BrowserView;
pub use console::ConsoleView;
pub use cracker::CrackerView;
pub use files::FilesView;
pub use mail::MailView;
pub use settings::SettingsView;
pub use store::StoreView;
pub use task::TaskView;

/// Read-only state handed to views while rendering.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    focused: bool,
    session: &'a Session,
}

impl<'a> ViewContext<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self {
            focused: false,
            session,
        }
    }

    pub fn with_focus(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn session(&self) -> &Session {
        self.session
    }
}

pub trait AppView {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ViewContext<'_>);

    /// Handle an input event routed to this view. Return true when
    /// consumed.
    fn handle_event(&mut self, _event: &Event, _session: &mut Session) -> bool {
        false
    }

    /// Called once per poll interval for every open view, visible or not.
    fn tick(&mut self, _session: &mut Session) {}
}

/// Construct the view for an application. Called on every closed-to-open
/// transition, so reopened apps start from their initial content.
pub fn build_view(id: AppId) -> Box<dyn AppView> {
    match id {
        AppId::Console => Box::new(ConsoleView::new()),
        AppId::Files => Box::new(FilesView::new()),
        AppId::Mail => Box::new(MailView::new()),
        AppId::Bank => Box::new(BankView::new()),
        AppId::Browser => Box::new(BrowserView::new()),
        AppId::Settings => Box::new(SettingsView::new()),
        AppId::Task => Box::new(TaskView::new()),
        AppId::Store => Box::new(StoreView::new()),
        AppId::Cracker => Box::new(CrackerView::new()),
    }
}
