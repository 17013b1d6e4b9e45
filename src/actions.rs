//! Desktop-level actions, the targets key bindings resolve to.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    OpenHelp,
    FocusNext,
    FocusPrev,
    MinimizeFocused,
    ToggleMaximizeFocused,
    CloseFocused,
    ToggleMouseCapture,
}

impl Action {
    pub const ALL: [Action; 8] = [
        Action::Quit,
        Action::OpenHelp,
        Action::FocusNext,
        Action::FocusPrev,
        Action::MinimizeFocused,
        Action::ToggleMaximizeFocused,
        Action::CloseFocused,
        Action::ToggleMouseCapture,
    ];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Action::Quit => "quit",
            Action::OpenHelp => "open help",
            Action::FocusNext => "focus next window",
            Action::FocusPrev => "focus previous window",
            Action::MinimizeFocused => "minimize focused window",
            Action::ToggleMaximizeFocused => "toggle maximize",
            Action::CloseFocused => "close focused window",
            Action::ToggleMouseCapture => "toggle mouse capture",
        };
        f.write_str(label)
    }
}
