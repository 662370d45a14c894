//! Field rendering utilities for forms

use crate::state::{FieldKind, FormField, Palette};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows a field takes (top border + content + bottom border)
pub const FIELD_HEIGHT: u16 = 3;

/// Draw a form field using FormField from the domain layer
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    reveal_passwords: bool,
    palette: &Palette,
) {
    let color = if is_active {
        palette.accent
    } else {
        palette.muted
    };

    let display_value = field.display_value(reveal_passwords);
    let cursor = if is_active && field.accepts_text() {
        "▌"
    } else {
        ""
    };

    let value_style = match field.kind {
        FieldKind::ShowPassword if is_active => Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
        _ => Style::default().fg(palette.foreground),
    };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, value_style),
        Span::styled(cursor, Style::default().fg(palette.accent)),
    ]));

    let block = match field.kind {
        // The checkbox carries its own label
        FieldKind::ShowPassword => Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
        FieldKind::Text | FieldKind::Password => Block::default()
            .title(format!(" {} ", field.label))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    };

    frame.render_widget(content.block(block), area);
}

/// Draw a single line of help text
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str, palette: &Palette) {
    let help = Paragraph::new(text).style(Style::default().fg(palette.muted));
    frame.render_widget(help, area);
}
