use ratatui::style::Color;

/// Resolved color palette used by the render layer.
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub dim_fg: Color,
    pub border_fg: Color,
    pub title_fg: Color,

    // Tree rows
    pub directory_fg: Color,
    pub disclosure_fg: Color,
    pub time_fg: Color,

    // Status overlay
    pub overlay_fg: Color,
    pub overlay_bg: Color,
    pub overlay_error_fg: Color,
    pub overlay_error_bg: Color,

    // Status bar
    pub status_bar_fg: Color,
    pub status_bar_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::White,
            dim_fg: Color::DarkGray,
            border_fg: Color::DarkGray,
            title_fg: Color::Gray,

            directory_fg: Color::LightBlue,
            disclosure_fg: Color::Yellow,
            time_fg: Color::Gray,

            overlay_fg: Color::Black,
            overlay_bg: Color::Yellow,
            overlay_error_fg: Color::White,
            overlay_error_bg: Color::Red,

            status_bar_fg: Color::Black,
            status_bar_bg: Color::Gray,
        }
    }
}
