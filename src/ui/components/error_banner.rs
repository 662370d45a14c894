//! Inline error banner component

use crate::state::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

/// Render the banner text in the error color; nothing when hidden
pub fn render_error_banner(frame: &mut Frame, area: Rect, text: Option<&str>, palette: &Palette) {
    let Some(text) = text else {
        return;
    };
    let banner = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(palette.error)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(banner, area);
}
