//! Keyboard shortcuts for desktop actions.
//!
//! Bindings are looked up before the focused app sees the key, so every
//! combo here is reserved. All of them carry a modifier (or are function
//! keys) to stay out of the way of plain typing in app views.

use std::collections::HashMap;
use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::actions::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.code == self.code && key.modifiers == self.mods
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mods.contains(KeyModifiers::CONTROL) {
            f.write_str("Ctrl+")?;
        }
        if self.mods.contains(KeyModifiers::ALT) {
            f.write_str("Alt+")?;
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            f.write_str("Shift+")?;
        }
        match self.code {
            KeyCode::Char(c) => write!(f, "{c}"),
            KeyCode::F(n) => write!(f, "F{n}"),
            KeyCode::Tab => f.write_str("Tab"),
            // BackTab means Shift+Tab whether or not the modifier bit
            // survived normalization.
            KeyCode::BackTab if self.mods.contains(KeyModifiers::SHIFT) => f.write_str("Tab"),
            KeyCode::BackTab => f.write_str("Shift+Tab"),
            KeyCode::Esc => f.write_str("Esc"),
            KeyCode::Enter => f.write_str("Enter"),
            other => write!(f, "{other:?}"),
        }
    }
}

pub struct KeyBindings {
    bindings: HashMap<Action, Vec<KeyCombo>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings: HashMap<Action, Vec<KeyCombo>> = HashMap::new();
        let mut bind = |action: Action, code: KeyCode, mods: KeyModifiers| {
            bindings.entry(action).or_default().push(KeyCombo::new(code, mods));
        };
        bind(Action::Quit, KeyCode::Char('q'), KeyModifiers::CONTROL);
        bind(Action::OpenHelp, KeyCode::F(1), KeyModifiers::NONE);
        bind(Action::FocusNext, KeyCode::Tab, KeyModifiers::NONE);
        // The normalizer folds Shift+Tab into a bare BackTab, but some
        // terminals deliver BackTab with SHIFT still set.
        bind(Action::FocusPrev, KeyCode::BackTab, KeyModifiers::NONE);
        bind(Action::FocusPrev, KeyCode::BackTab, KeyModifiers::SHIFT);
        bind(Action::MinimizeFocused, KeyCode::Char('m'), KeyModifiers::ALT);
        bind(
            Action::ToggleMaximizeFocused,
            KeyCode::Char('f'),
            KeyModifiers::CONTROL,
        );
        bind(Action::CloseFocused, KeyCode::Char('w'), KeyModifiers::CONTROL);
        bind(
            Action::ToggleMouseCapture,
            KeyCode::Char('c'),
            KeyModifiers::ALT,
        );
        Self { bindings }
    }
}

impl KeyBindings {
    /// Resolve a key event to the action it is bound to, if any.
    pub fn action_for(&self, key: &KeyEvent) -> Option<Action> {
        for action in Action::ALL {
            if let Some(combos) = self.bindings.get(&action)
                && combos.iter().any(|combo| combo.matches(key))
            {
                return Some(action);
            }
        }
        None
    }

    pub fn combos(&self, action: Action) -> &[KeyCombo] {
        self.bindings
            .get(&action)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve_and_plain_keys_pass_through() {
        let bindings = KeyBindings::default();
        let quit = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert_eq!(bindings.action_for(&quit), Some(Action::Quit));
        let back_tab = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(bindings.action_for(&back_tab), Some(Action::FocusPrev));
        // A bare letter must never trigger an action.
        let plain = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(bindings.action_for(&plain), None);
    }

    #[test]
    fn combo_display_names_modifiers() {
        assert_eq!(
            KeyCombo::new(KeyCode::Char('q'), KeyModifiers::CONTROL).to_string(),
            "Ctrl+q"
        );
        assert_eq!(
            KeyCombo::new(KeyCode::BackTab, KeyModifiers::SHIFT).to_string(),
            "Shift+Tab"
        );
        assert_eq!(
            KeyCombo::new(KeyCode::F(1), KeyModifiers::NONE).to_string(),
            "F1"
        );
    }

    #[test]
    fn every_action_has_a_binding() {
        let bindings = KeyBindings::default();
        for action in Action::ALL {
            assert!(!bindings.combos(action).is_empty(), "{action} is unbound");
        }
    }
}
