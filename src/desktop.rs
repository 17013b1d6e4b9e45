//! The desktop itself: owns the registry, the per-window state, the dock,
//! and the session, and routes every input event to the right place.
//!
//! Pointer routing order on press: help overlay, dock, then windows from
//! the top of the stacking order down. The first window whose frame
//! contains the pointer wins, is raised, and the press is interpreted
//! against its chrome. Everything below the hit window never sees the
//! event.

use std::collections::BTreeMap;

use crossterm::event::{Event, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph};
use tracing::{debug, info};

use crate::actions::Action;
use crate::apps::{self, AppView, ViewContext};
use crate::catalog::{self, AppId};
use crate::components::{render_help_overlay, render_status_bar};
use crate::dock::Dock;
use crate::entitlement;
use crate::geometry::{self, WindowRect};
use crate::keybindings::KeyBindings;
use crate::layout::{self, rect_contains};
use crate::registry::{OpenOutcome, WindowRegistry};
use crate::session::Session;
use crate::theme;
use crate::ui::UiFrame;
use crate::window::{
    ChromeHit, GlassDecorator, WindowButton, WindowDecorator, WindowInstance, chrome,
};

/// Everything that exists only while an app's window is open: its frame
/// and gesture state plus the hosted view. Dropped on close, so reopening
/// starts fresh.
struct WindowState {
    instance: WindowInstance,
    view: Box<dyn AppView>,
}

pub struct Desktop {
    session: Session,
    registry: WindowRegistry,
    windows: BTreeMap<AppId, WindowState>,
    bindings: KeyBindings,
    dock: Dock,
    decorator: GlassDecorator,
    area: Rect,
    workspace: Rect,
    help_visible: bool,
    quit: bool,
    /// Window owning the live pointer gesture, if any.
    pointer_target: Option<AppId>,
    cascade_slot: u16,
}

impl Desktop {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            registry: WindowRegistry::new(),
            windows: BTreeMap::new(),
            bindings: KeyBindings::default(),
            dock: Dock::new(),
            decorator: GlassDecorator,
            area: Rect::default(),
            workspace: Rect::default(),
            help_visible: false,
            quit: false,
            pointer_target: None,
            cascade_slot: 0,
        }
    }

    /// Recompute the bar and workspace split. Called on startup and on
    /// every terminal resize.
    pub fn layout(&mut self, area: Rect) {
        self.area = area;
        let (_, workspace, _) = layout::split_desktop(area);
        self.workspace = workspace;
    }

    pub fn workspace(&self) -> Rect {
        self.workspace
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    pub fn dock(&self) -> &Dock {
        &self.dock
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    /// The frame a window occupies right now, workspace-sized while
    /// maximized.
    pub fn window_rect(&self, id: AppId) -> Option<WindowRect> {
        self.windows
            .get(&id)
            .map(|state| state.instance.effective_rect(self.workspace))
    }

    /// Launch an app through the entitlement gate. A locked app is never
    /// opened; the request lands on the store instead so the operator can
    /// buy it. Returns the app that actually opened.
    pub fn request_open(&mut self, id: AppId) -> AppId {
        let entry = catalog::entry(id);
        let target = if entitlement::unlocked(entry, self.session.owned()) {
            id
        } else {
            info!(app = %id, "launch refused, not entitled");
            entitlement::FALLBACK_APP
        };
        self.open(target);
        target
    }

    fn open(&mut self, id: AppId) {
        if self.registry.open(id) == OpenOutcome::Launched {
            let rect = self.next_launch_rect();
            self.windows.insert(
                id,
                WindowState {
                    instance: WindowInstance::new(rect),
                    view: apps::build_view(id),
                },
            );
        }
    }

    /// Fresh windows cascade from the workspace center so stacked
    /// launches stay distinguishable.
    fn next_launch_rect(&mut self) -> WindowRect {
        let base = geometry::centered(self.workspace);
        let offset = 2 * self.cascade_slot as i32;
        self.cascade_slot = (self.cascade_slot + 1) % 6;
        geometry::clamp_drag(geometry::apply_drag(base, offset, offset), self.workspace)
    }

    pub fn close_window(&mut self, id: AppId) -> bool {
        if !self.registry.close(id) {
            return false;
        }
        self.windows.remove(&id);
        if self.pointer_target == Some(id) {
            self.pointer_target = None;
        }
        true
    }

    pub fn minimize_window(&mut self, id: AppId) -> bool {
        if !self.registry.minimize(id) {
            return false;
        }
        // A hidden window cannot keep a live gesture.
        if let Some(state) = self.windows.get_mut(&id) {
            state.instance.end_interaction();
        }
        if self.pointer_target == Some(id) {
            self.pointer_target = None;
        }
        true
    }

    /// Unhide a minimized window in place. Whether it also raises is a
    /// user preference, off by default.
    pub fn restore_window(&mut self, id: AppId) -> bool {
        if !self.registry.restore(id) {
            return false;
        }
        if self.session.settings().raise_on_restore {
            self.registry.bring_to_front(id);
        }
        true
    }

    pub fn toggle_maximize_window(&mut self, id: AppId) -> bool {
        if !self.registry.is_visible(id) {
            return false;
        }
        match self.windows.get_mut(&id) {
            Some(state) => state.instance.toggle_maximized(),
            None => false,
        }
    }

    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) => self.handle_key(event, *key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            Event::Resize(width, height) => self.layout(Rect::new(0, 0, *width, *height)),
            _ => {}
        }
    }

    fn handle_key(&mut self, event: &Event, key: KeyEvent) {
        // The help overlay is modal; any key dismisses it.
        if self.help_visible {
            self.help_visible = false;
            return;
        }
        if let Some(action) = self.bindings.action_for(&key) {
            self.run_action(action);
            return;
        }
        if let Some(id) = self.registry.top_visible()
            && let Some(state) = self.windows.get_mut(&id)
        {
            state.view.handle_event(event, &mut self.session);
        }
    }

    fn run_action(&mut self, action: Action) {
        debug!(%action, "desktop action");
        match action {
            Action::Quit => self.quit = true,
            Action::OpenHelp => self.help_visible = true,
            Action::FocusNext => self.focus_next(),
            Action::FocusPrev => self.focus_prev(),
            Action::MinimizeFocused => {
                if let Some(id) = self.registry.top_visible() {
                    self.minimize_window(id);
                }
            }
            Action::ToggleMaximizeFocused => {
                if let Some(id) = self.registry.top_visible() {
                    self.toggle_maximize_window(id);
                }
            }
            Action::CloseFocused => {
                if let Some(id) = self.registry.top_visible() {
                    self.close_window(id);
                }
            }
            Action::ToggleMouseCapture => {
                let enabled = self.session.mouse_capture_enabled();
                self.session.set_mouse_capture_enabled(!enabled);
            }
        }
    }

    /// Rotate the bottom of the stack to the top. Cycling restores a
    /// minimized window as it surfaces, like any alt-tab.
    fn focus_next(&mut self) {
        let Some(&bottom) = self.registry.stack().first() else {
            return;
        };
        self.registry.bring_to_front(bottom);
        self.registry.restore(bottom);
    }

    fn focus_prev(&mut self) {
        let Some(&top) = self.registry.stack().last() else {
            return;
        };
        self.registry.send_to_back(top);
        if let Some(&next) = self.registry.stack().last() {
            self.registry.restore(next);
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pointer_down(mouse.column, mouse.row);
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.pointer_drag(mouse.column, mouse.row);
            }
            MouseEventKind::Up(MouseButton::Left) => self.pointer_up(),
            _ => {}
        }
    }

    fn pointer_down(&mut self, column: u16, row: u16) {
        if self.help_visible {
            self.help_visible = false;
            return;
        }
        if self.dock.hit_test_mouse_capture(column, row) {
            let enabled = self.session.mouse_capture_enabled();
            self.session.set_mouse_capture_enabled(!enabled);
            return;
        }
        if let Some(id) = self.dock.hit_test(column, row) {
            self.request_open(id);
            return;
        }
        if !rect_contains(self.workspace, column, row) {
            return;
        }
        // Topmost window under the pointer wins and is raised before its
        // chrome is consulted.
        let candidates: Vec<AppId> = self.registry.visible_back_to_front().collect();
        for id in candidates.into_iter().rev() {
            let Some(rect) = self.window_rect(id) else {
                continue;
            };
            let Some(hit) = chrome::hit_test(rect, column, row) else {
                continue;
            };
            self.registry.bring_to_front(id);
            match hit {
                ChromeHit::Header => {
                    if let Some(state) = self.windows.get_mut(&id)
                        && state.instance.begin_drag(column, row)
                    {
                        self.pointer_target = Some(id);
                    }
                }
                ChromeHit::Edge(edge) => {
                    if let Some(state) = self.windows.get_mut(&id)
                        && state.instance.begin_resize(edge, column, row)
                    {
                        self.pointer_target = Some(id);
                    }
                }
                ChromeHit::Button(WindowButton::Minimize) => {
                    self.minimize_window(id);
                }
                ChromeHit::Button(WindowButton::Maximize) => {
                    self.toggle_maximize_window(id);
                }
                ChromeHit::Button(WindowButton::Close) => {
                    self.close_window(id);
                }
                ChromeHit::Content => {}
            }
            return;
        }
    }

    fn pointer_drag(&mut self, column: u16, row: u16) {
        let Some(id) = self.pointer_target else {
            return;
        };
        match self.windows.get_mut(&id) {
            Some(state) => {
                state.instance.pointer_moved(column, row, self.workspace);
            }
            None => self.pointer_target = None,
        }
    }

    fn pointer_up(&mut self) {
        if let Some(id) = self.pointer_target.take()
            && let Some(state) = self.windows.get_mut(&id)
        {
            state.instance.end_interaction();
        }
    }

    /// Advance time-based app state. Runs for every open view, minimized
    /// ones included, once per poll interval.
    pub fn on_tick(&mut self) {
        for state in self.windows.values_mut() {
            state.view.tick(&mut self.session);
        }
    }

    pub fn render(&mut self, frame: &mut Frame<'_>) {
        let area = frame.area();
        if area != self.area {
            self.layout(area);
        }
        let (status, workspace, dock_area) = layout::split_desktop(area);

        {
            let mut ui = UiFrame::new(frame);
            ui.render_widget(
                Block::default().style(
                    Style::default()
                        .bg(theme::wallpaper_bg())
                        .fg(theme::wallpaper_fg()),
                ),
                area,
            );
            render_status_bar(&mut ui, status, &self.session);
            if self.registry.visible_back_to_front().next().is_none() {
                let hint = "F1 for help";
                let width = hint.len() as u16;
                let hint_y = workspace.y + workspace.height / 2;
                let hint_x = workspace.x + workspace.width.saturating_sub(width) / 2;
                ui.render_widget(
                    Paragraph::new(hint).style(Style::default().fg(theme::muted_fg())),
                    Rect::new(hint_x, hint_y, width, 1).intersection(workspace),
                );
            }
        }

        // Each visible window renders onto its own surface in local
        // coordinates, then the surface is blitted into the workspace with
        // signed clipping. Offscreen portions simply fall away.
        let focused = self.registry.top_visible();
        let order: Vec<AppId> = self.registry.visible_back_to_front().collect();
        for id in order {
            let Some(state) = self.windows.get_mut(&id) else {
                continue;
            };
            let rect = state.instance.effective_rect(workspace);
            if rect.width < 2 || rect.height < 2 {
                continue;
            }
            let local = rect.local();
            let mut surface = Buffer::empty(local);
            {
                let mut window_frame = UiFrame::from_parts(local, &mut surface);
                let entry = catalog::entry(id);
                self.decorator.render_window(
                    &mut window_frame,
                    entry.title,
                    entry.glyph,
                    focused == Some(id),
                    state.instance.is_maximized(),
                );
                let content = chrome::content_area(local);
                if content.width > 0 && content.height > 0 {
                    let ctx = ViewContext::new(&self.session).with_focus(focused == Some(id));
                    state.view.render(&mut window_frame, content, &ctx);
                }
            }
            let mut workspace_frame = UiFrame::from_parts(workspace, frame.buffer_mut());
            workspace_frame.blit_from_signed(&surface, rect);
        }

        {
            let mut ui = UiFrame::new(frame);
            self.dock.begin_frame();
            self.dock.render(&mut ui, dock_area, &self.registry, &self.session);
            if self.help_visible {
                render_help_overlay(&mut ui, area);
            }
        }
    }
}
