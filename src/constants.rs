//! Shared crate-wide constants.

/// Base added to a window's focus-stack position when deriving its z value.
/// The stack index is the only varying input, so ordering can never drift
/// from the focus order itself.
pub const WINDOW_Z_BASE: u16 = 100;

/// Minimum number of visible columns a window must keep inside the
/// workspace so the user can grab its chrome again.
pub const MIN_VISIBLE_MARGIN: u16 = 4;

/// Height of the status bar at the top of the screen, in rows.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the dock at the bottom of the screen, in rows.
pub const DOCK_HEIGHT: u16 = 1;
