//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod main_page;

use crate::app::App;
use crate::state::View;
use ratatui::{style::Style, widgets::Block, Frame};
use std::time::Instant;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();
    let palette = app.state.theme.palette();

    // Page background follows the active theme
    frame.render_widget(
        Block::default().style(
            Style::default()
                .bg(palette.background)
                .fg(palette.foreground),
        ),
        area,
    );

    let (header_area, main_area, status_area) = layout::create_layout(area);

    layout::draw_header(frame, header_area, app);

    match app.state.current_view {
        View::Login => forms::draw_login(frame, main_area, &app.state.login, &palette, now),
        View::Register => {
            forms::draw_register(frame, main_area, &app.state.register, &palette, now)
        }
        View::Main => main_page::draw(frame, main_area, &palette),
    }

    layout::draw_status_bar(frame, status_area, app);
}
