//! Canonical window lifecycle state and focus order.
//!
//! The registry is the single writer for which applications are open or
//! minimized and for the focus stack that stacking order derives from.
//! Every operation is a total function: preconditions that do not hold
//! (closing a closed window, raising an absent one) are absorbed as no-ops
//! rather than surfaced as errors, because window management must never
//! take the desktop down.

use std::collections::BTreeMap;

use tracing::debug;

use crate::catalog::AppId;
use crate::constants::WINDOW_Z_BASE;

/// Lifecycle of one application window.
///
/// A single tagged state instead of independent open/minimized booleans:
/// "minimized but closed" is unrepresentable, and reopening cannot leak a
/// stale minimized flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowLifecycle {
    #[default]
    Closed,
    Open {
        minimized: bool,
    },
}

impl WindowLifecycle {
    pub fn is_open(self) -> bool {
        matches!(self, WindowLifecycle::Open { .. })
    }

    /// A window renders iff it is open and not minimized.
    pub fn is_visible(self) -> bool {
        matches!(self, WindowLifecycle::Open { minimized: false })
    }
}

/// What `open` did, so the caller knows whether a fresh window instance is
/// needed or an existing one was surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// Closed before: a new window came into existence.
    Launched,
    /// Was open but minimized: unminimized and raised.
    Restored,
    /// Already visible: raised only.
    Raised,
}

#[derive(Debug, Default)]
pub struct WindowRegistry {
    states: BTreeMap<AppId, WindowLifecycle>,
    /// Open ids ordered least-recently-focused first; the tail renders on
    /// top. Minimized windows keep their slot so restoring needs no order
    /// recovery.
    stack: Vec<AppId>,
}

impl WindowRegistry {
    /// Every catalog id starts out closed.
    pub fn new() -> Self {
        let mut states = BTreeMap::new();
        for id in AppId::ALL {
            states.insert(id, WindowLifecycle::Closed);
        }
        Self {
            states,
            stack: Vec::new(),
        }
    }

    pub fn lifecycle(&self, id: AppId) -> WindowLifecycle {
        self.states.get(&id).copied().unwrap_or_default()
    }

    pub fn is_open(&self, id: AppId) -> bool {
        self.lifecycle(id).is_open()
    }

    pub fn is_visible(&self, id: AppId) -> bool {
        self.lifecycle(id).is_visible()
    }

    /// Open ids, bottom of the stacking order first.
    pub fn stack(&self) -> &[AppId] {
        &self.stack
    }

    /// Derived z value for an open window: base plus stack position. Not
    /// stored anywhere, so it cannot drift from the focus order.
    pub fn z_index(&self, id: AppId) -> Option<u16> {
        self.stack
            .iter()
            .position(|other| *other == id)
            .map(|index| WINDOW_Z_BASE + index as u16)
    }

    /// The topmost visible window, i.e. where keyboard input goes.
    pub fn top_visible(&self) -> Option<AppId> {
        self.stack
            .iter()
            .rev()
            .copied()
            .find(|id| self.is_visible(*id))
    }

    pub fn visible_back_to_front(&self) -> impl Iterator<Item = AppId> + '_ {
        self.stack
            .iter()
            .copied()
            .filter(|id| self.is_visible(*id))
    }

    /// Open a window, or surface it if it already exists. Always leaves the
    /// window visible and on top of the stack.
    pub fn open(&mut self, id: AppId) -> OpenOutcome {
        match self.lifecycle(id) {
            WindowLifecycle::Closed => {
                self.states
                    .insert(id, WindowLifecycle::Open { minimized: false });
                self.stack.push(id);
                debug!(app = %id, "window opened");
                OpenOutcome::Launched
            }
            WindowLifecycle::Open { minimized } => {
                self.states
                    .insert(id, WindowLifecycle::Open { minimized: false });
                self.bring_to_front(id);
                if minimized {
                    debug!(app = %id, "window restored via open");
                    OpenOutcome::Restored
                } else {
                    OpenOutcome::Raised
                }
            }
        }
    }

    /// Close a window and drop it from the focus stack. Returns whether
    /// anything changed.
    pub fn close(&mut self, id: AppId) -> bool {
        if !self.is_open(id) {
            return false;
        }
        self.states.insert(id, WindowLifecycle::Closed);
        self.stack.retain(|other| *other != id);
        debug!(app = %id, "window closed");
        true
    }

    /// Hide an open window. Its focus-stack slot is kept.
    pub fn minimize(&mut self, id: AppId) -> bool {
        match self.lifecycle(id) {
            WindowLifecycle::Open { minimized: false } => {
                self.states
                    .insert(id, WindowLifecycle::Open { minimized: true });
                debug!(app = %id, "window minimized");
                true
            }
            _ => false,
        }
    }

    /// Make a minimized window visible again, in place. Raising is the
    /// caller's decision, not a side effect of restoring.
    pub fn restore(&mut self, id: AppId) -> bool {
        match self.lifecycle(id) {
            WindowLifecycle::Open { minimized: true } => {
                self.states
                    .insert(id, WindowLifecycle::Open { minimized: false });
                debug!(app = %id, "window restored");
                true
            }
            _ => false,
        }
    }

    /// Move an open window to the top of the stacking order. No-op when the
    /// id is not open or already on top.
    pub fn bring_to_front(&mut self, id: AppId) -> bool {
        let Some(position) = self.stack.iter().position(|other| *other == id) else {
            return false;
        };
        if position + 1 == self.stack.len() {
            return false;
        }
        self.stack.remove(position);
        self.stack.push(id);
        true
    }

    /// Drop an open window to the bottom of the stacking order. Used by the
    /// reverse focus-cycling key.
    pub fn send_to_back(&mut self, id: AppId) -> bool {
        let Some(position) = self.stack.iter().position(|other| *other == id) else {
            return false;
        };
        if position == 0 {
            return false;
        }
        self.stack.remove(position);
        self.stack.insert(0, id);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_close_round_trip() {
        let mut registry = WindowRegistry::new();
        assert_eq!(registry.lifecycle(AppId::Console), WindowLifecycle::Closed);

        assert_eq!(registry.open(AppId::Console), OpenOutcome::Launched);
        assert!(registry.is_visible(AppId::Console));
        assert_eq!(registry.stack(), &[AppId::Console]);

        assert!(registry.close(AppId::Console));
        assert_eq!(registry.lifecycle(AppId::Console), WindowLifecycle::Closed);
        assert!(registry.stack().is_empty());
        // Double close is absorbed.
        assert!(!registry.close(AppId::Console));
    }

    #[test]
    fn reopening_clears_minimized() {
        let mut registry = WindowRegistry::new();
        registry.open(AppId::Mail);
        registry.minimize(AppId::Mail);
        registry.close(AppId::Mail);
        assert_eq!(registry.open(AppId::Mail), OpenOutcome::Launched);
        assert!(registry.is_visible(AppId::Mail));
    }

    #[test]
    fn open_twice_keeps_single_stack_entry() {
        let mut registry = WindowRegistry::new();
        registry.open(AppId::Files);
        assert_eq!(registry.open(AppId::Files), OpenOutcome::Raised);
        assert_eq!(
            registry.stack().iter().filter(|id| **id == AppId::Files).count(),
            1
        );
    }

    #[test]
    fn open_on_minimized_restores_and_raises() {
        let mut registry = WindowRegistry::new();
        registry.open(AppId::Bank);
        registry.open(AppId::Mail);
        registry.minimize(AppId::Bank);
        assert_eq!(registry.open(AppId::Bank), OpenOutcome::Restored);
        assert!(registry.is_visible(AppId::Bank));
        assert_eq!(registry.stack().last(), Some(&AppId::Bank));
    }

    #[test]
    fn minimize_keeps_stack_slot() {
        let mut registry = WindowRegistry::new();
        registry.open(AppId::Bank);
        registry.open(AppId::Mail);
        assert!(registry.minimize(AppId::Bank));
        assert_eq!(registry.stack(), &[AppId::Bank, AppId::Mail]);
        assert!(!registry.is_visible(AppId::Bank));
        assert!(registry.is_open(AppId::Bank));
        // Restore does not reorder either.
        assert!(registry.restore(AppId::Bank));
        assert_eq!(registry.stack(), &[AppId::Bank, AppId::Mail]);
    }

    #[test]
    fn lifecycle_noops_on_closed_windows() {
        let mut registry = WindowRegistry::new();
        assert!(!registry.minimize(AppId::Task));
        assert!(!registry.restore(AppId::Task));
        assert!(!registry.bring_to_front(AppId::Task));
        assert!(!registry.send_to_back(AppId::Task));
        assert_eq!(registry.lifecycle(AppId::Task), WindowLifecycle::Closed);
    }

    #[test]
    fn z_index_tracks_stack_position() {
        let mut registry = WindowRegistry::new();
        registry.open(AppId::Console);
        registry.open(AppId::Files);
        registry.open(AppId::Store);
        assert_eq!(registry.z_index(AppId::Console), Some(WINDOW_Z_BASE));
        assert_eq!(registry.z_index(AppId::Store), Some(WINDOW_Z_BASE + 2));
        assert_eq!(registry.z_index(AppId::Mail), None);

        registry.bring_to_front(AppId::Console);
        assert_eq!(registry.z_index(AppId::Console), Some(WINDOW_Z_BASE + 2));
        assert_eq!(registry.z_index(AppId::Files), Some(WINDOW_Z_BASE));
    }

    #[test]
    fn top_visible_skips_minimized() {
        let mut registry = WindowRegistry::new();
        registry.open(AppId::Console);
        registry.open(AppId::Files);
        registry.minimize(AppId::Files);
        assert_eq!(registry.top_visible(), Some(AppId::Console));
        registry.minimize(AppId::Console);
        assert_eq!(registry.top_visible(), None);
    }

    #[test]
    fn send_to_back_rotates_order() {
        let mut registry = WindowRegistry::new();
        registry.open(AppId::Console);
        registry.open(AppId::Files);
        registry.open(AppId::Mail);
        assert!(registry.send_to_back(AppId::Mail));
        assert_eq!(registry.stack(), &[AppId::Mail, AppId::Console, AppId::Files]);
        assert!(!registry.send_to_back(AppId::Mail));
    }
}
