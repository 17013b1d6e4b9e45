//! One open window's live state: its frame, the maximize flag, and the
//! current pointer gesture.
//!
//! Gestures are explicit sessions. A session is acquired on pointer-down,
//! carries the starting frame and pointer origin, and is released on
//! pointer-up or when the window goes away mid-gesture. Every pointer-move
//! recomputes the frame from the session's start data, so a gesture can
//! never accumulate rounding drift and an abandoned gesture can never leak
//! into the next one.
//!
//! Lifecycle (open / minimized) deliberately lives elsewhere, in the
//! registry; holding it here too would create a second source of truth.

use ratatui::layout::Rect;
use tracing::debug;

use crate::geometry::{self, ResizeEdge, WindowRect};

#[derive(Debug, Clone, Copy)]
pub struct DragSession {
    start: WindowRect,
    origin_column: u16,
    origin_row: u16,
}

#[derive(Debug, Clone, Copy)]
pub struct ResizeSession {
    start: WindowRect,
    edge: ResizeEdge,
    origin_column: u16,
    origin_row: u16,
}

/// Per-window gesture state machine. Dragging and resizing are mutually
/// exclusive by construction.
#[derive(Debug, Clone, Copy, Default)]
pub enum Interaction {
    #[default]
    Idle,
    Dragging(DragSession),
    Resizing(ResizeSession),
}

#[derive(Debug)]
pub struct WindowInstance {
    rect: WindowRect,
    maximized: bool,
    interaction: Interaction,
}

impl WindowInstance {
    pub fn new(rect: WindowRect) -> Self {
        Self {
            rect,
            maximized: false,
            interaction: Interaction::Idle,
        }
    }

    /// The stored frame, regardless of the maximize flag.
    pub fn rect(&self) -> WindowRect {
        self.rect
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    /// The frame used for rendering and hit-testing: the workspace while
    /// maximized, the stored frame otherwise.
    pub fn effective_rect(&self, workspace: Rect) -> WindowRect {
        if self.maximized {
            WindowRect::from_rect(workspace)
        } else {
            self.rect
        }
    }

    /// Flip maximize, only from `Idle`. The stored frame is left untouched
    /// underneath, so un-maximizing restores the prior frame exactly.
    pub fn toggle_maximized(&mut self) -> bool {
        if !matches!(self.interaction, Interaction::Idle) {
            return false;
        }
        self.maximized = !self.maximized;
        true
    }

    pub fn is_interacting(&self) -> bool {
        !matches!(self.interaction, Interaction::Idle)
    }

    /// Acquire a drag session. Refused while maximized or while another
    /// gesture is live.
    pub fn begin_drag(&mut self, column: u16, row: u16) -> bool {
        if self.maximized || self.is_interacting() {
            return false;
        }
        self.interaction = Interaction::Dragging(DragSession {
            start: self.rect,
            origin_column: column,
            origin_row: row,
        });
        debug!(column, row, "drag session started");
        true
    }

    /// Acquire a resize session on one edge or corner. Refused while
    /// maximized or while another gesture is live.
    pub fn begin_resize(&mut self, edge: ResizeEdge, column: u16, row: u16) -> bool {
        if self.maximized || self.is_interacting() {
            return false;
        }
        self.interaction = Interaction::Resizing(ResizeSession {
            start: self.rect,
            edge,
            origin_column: column,
            origin_row: row,
        });
        debug!(?edge, column, row, "resize session started");
        true
    }

    /// Apply a pointer position to the live gesture, if any. Returns
    /// whether the frame changed.
    pub fn pointer_moved(&mut self, column: u16, row: u16, workspace: Rect) -> bool {
        let next = match self.interaction {
            Interaction::Idle => return false,
            Interaction::Dragging(session) => {
                let dx = column as i32 - session.origin_column as i32;
                let dy = row as i32 - session.origin_row as i32;
                geometry::clamp_drag(geometry::apply_drag(session.start, dx, dy), workspace)
            }
            Interaction::Resizing(session) => {
                let dx = column as i32 - session.origin_column as i32;
                let dy = row as i32 - session.origin_row as i32;
                geometry::clamp_resize(
                    geometry::apply_resize(session.start, session.edge, dx, dy),
                    workspace,
                )
            }
        };
        if next == self.rect {
            return false;
        }
        self.rect = next;
        true
    }

    /// Release the live gesture on any exit path. Returns whether one was
    /// active.
    pub fn end_interaction(&mut self) -> bool {
        if self.is_interacting() {
            self.interaction = Interaction::Idle;
            debug!("gesture session released");
            true
        } else {
            false
        }
    }
}
