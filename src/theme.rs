use ratatui::style::Color;

// Centralized theme colors. Keep these as small helpers so every surface
// pulls from one palette instead of hardcoding styles inline.

pub fn wallpaper_bg() -> Color {
    Color::Rgb(16, 24, 38)
}
pub fn wallpaper_fg() -> Color {
    Color::Rgb(40, 56, 80)
}

// Window chrome
pub fn window_bg() -> Color {
    Color::Rgb(24, 30, 42)
}
pub fn window_fg() -> Color {
    Color::Gray
}
pub fn border_focused_fg() -> Color {
    Color::Cyan
}
pub fn border_fg() -> Color {
    Color::DarkGray
}
pub fn title_focused_fg() -> Color {
    Color::White
}
pub fn title_fg() -> Color {
    Color::Gray
}
pub fn button_fg() -> Color {
    Color::Gray
}
pub fn close_button_fg() -> Color {
    Color::LightRed
}

// Status bar / dock
pub fn bar_bg() -> Color {
    Color::Rgb(10, 14, 22)
}
pub fn bar_fg() -> Color {
    Color::Gray
}
pub fn dock_entry_fg() -> Color {
    Color::Gray
}
pub fn dock_open_fg() -> Color {
    Color::Cyan
}

// Shared accents used by app views
pub fn accent() -> Color {
    Color::Cyan
}
pub fn success_fg() -> Color {
    Color::Green
}
pub fn warning_fg() -> Color {
    Color::Yellow
}
pub fn danger_fg() -> Color {
    Color::Red
}
pub fn muted_fg() -> Color {
    Color::DarkGray
}
pub fn selected_bg() -> Color {
    Color::Rgb(38, 50, 70)
}
pub fn selected_fg() -> Color {
    Color::White
}
