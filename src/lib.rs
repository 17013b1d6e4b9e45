//! term-desk: a simulated desktop environment for terminal shells.
//!
//! A fixed catalog of pseudo-applications runs as floating windows over a
//! wallpaper, launched from a dock. The window manager core tracks lifecycle
//! (open / closed / minimized), focus order, and per-window geometry, with
//! mouse-driven dragging, eight-direction resizing, and maximize/restore.

pub mod actions;
pub mod apps;
pub mod catalog;
pub mod components;
pub mod constants;
pub mod desktop;
pub mod dock;
pub mod drivers;
pub mod entitlement;
pub mod error;
pub mod event_loop;
pub mod geometry;
pub mod keybindings;
pub mod layout;
pub mod registry;
pub mod runner;
pub mod session;
pub mod theme;
pub mod tracing_sub;
pub mod ui;
pub mod window;

pub use catalog::AppId;
pub use desktop::Desktop;
pub use registry::{OpenOutcome, WindowLifecycle, WindowRegistry};
pub use session::Session;
