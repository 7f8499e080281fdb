use crate::view::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// State of the status overlay.
///
/// At most one transition happens per launch, driven by the single fetch
/// outcome. A non-2xx response performs no transition: the overlay keeps
/// its initial pending state while the listing renders empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    /// Initial state while the fetch is in flight
    #[default]
    Pending,
    /// Fetch succeeded; the overlay is not drawn
    Hidden,
    /// Fetch failed with a transport or parse error
    Error,
}

pub struct OverlayRenderer;

impl OverlayRenderer {
    /// Draw the status banner centered over the given area.
    pub fn render(state: OverlayState, frame: &mut Frame, area: Rect, theme: &Theme) {
        let (text, style) = match state {
            OverlayState::Hidden => return,
            OverlayState::Pending => (
                "Loading directory listing...",
                Style::default().fg(theme.overlay_fg).bg(theme.overlay_bg),
            ),
            OverlayState::Error => (
                "Error: could not load the directory listing",
                Style::default()
                    .fg(theme.overlay_error_fg)
                    .bg(theme.overlay_error_bg)
                    .add_modifier(Modifier::BOLD),
            ),
        };

        let banner = Self::banner_area(area, text.width() as u16 + 4);

        // Clear the area behind the banner first to hide underlying rows
        frame.render_widget(Clear, banner);
        let paragraph = Paragraph::new(Line::from(text).centered())
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_style(style));
        frame.render_widget(paragraph, banner);
    }

    /// Centered banner rect, clamped to fit within `area`
    fn banner_area(area: Rect, width: u16) -> Rect {
        let width = width.min(area.width);
        let height = 3.min(area.height);
        let x = area.x + (area.width - width) / 2;
        let y = area.y + area.height.saturating_sub(height) / 2;
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}
