pub mod help_overlay;
pub mod select_list;
pub mod status_bar;
pub mod text_pane;

pub use help_overlay::render_help_overlay;
pub use select_list::SelectList;
pub use status_bar::render_status_bar;
pub use text_pane::TextPane;
