//! Page layout shared by the login and registration forms

use super::field_renderer::{draw_field, draw_help_text, FIELD_HEIGHT};
use crate::state::{Form, FormModel, FormView, Palette};
use crate::ui::components::{render_error_banner, render_success_panel, success_panel_height};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders},
    Frame,
};
use std::time::Instant;

/// Maximum width of the form column
const FORM_WIDTH: u16 = 48;

/// Center a fixed-width column inside `area`
fn centered_column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// Draw a form page: success panel, bordered form with banner and fields, footer hint
pub fn draw_form_page(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    model: &FormModel,
    footer: &str,
    palette: &Palette,
    now: Instant,
) {
    let column = centered_column(area, FORM_WIDTH);

    let panel_height = model
        .success()
        .map(|shown| success_panel_height(shown, palette, column.width, now))
        .unwrap_or(0);
    let form_height = 2 + 1 + FIELD_HEIGHT * model.fields().len() as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // Top margin
            Constraint::Length(panel_height), // Success panel
            Constraint::Length(form_height),  // Form
            Constraint::Length(1),            // Footer
            Constraint::Min(0),
        ])
        .split(column);

    if let Some(shown) = model.success() {
        render_success_panel(frame, chunks[1], shown, palette);
    }

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent));
    let inner = block.inner(chunks[2]);
    frame.render_widget(block, chunks[2]);

    let mut constraints = vec![Constraint::Length(1)]; // Banner
    constraints.extend(model.fields().iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    render_error_banner(frame, rows[0], model.banner().text(), palette);

    let reveal = model.is_password_visible();
    for (idx, field) in model.fields().iter().enumerate() {
        draw_field(
            frame,
            rows[idx + 1],
            field,
            model.active_field() == idx,
            reveal,
            palette,
        );
    }

    draw_help_text(frame, chunks[3], footer, palette);
}
