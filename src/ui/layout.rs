//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::{SWITCH_FORM_SHORTCUT, THEME_SHORTCUT};
use crate::state::View;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the header: page title on the left, theme toggle on the right
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.state.theme.palette();
    let theme = app.state.theme.theme();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(24)])
        .split(area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            " Portal ",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("· {}", app.state.current_view.title()),
            Style::default().fg(palette.foreground),
        ),
    ]));
    frame.render_widget(title, chunks[0]);

    let toggle = Paragraph::new(Line::from(vec![
        Span::styled(theme.icon(), Style::default().fg(palette.accent)),
        Span::raw(" "),
        Span::styled(theme.toggle_label(), Style::default().fg(palette.foreground)),
        Span::styled(
            format!(" [{THEME_SHORTCUT}] "),
            Style::default().fg(palette.muted),
        ),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(toggle, chunks[1]);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.state.theme.palette();

    let spans = vec![
        Span::styled(
            format!(" {} ", app.state.current_view.route()),
            Style::default().fg(palette.accent),
        ),
        Span::styled(
            get_view_hints(&app.state.current_view),
            Style::default().fg(palette.muted),
        ),
    ];

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.background));
    frame.render_widget(status, area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::Login => format!(
            "Tab:next  Space:show password  Enter:login  {SWITCH_FORM_SHORTCUT}:register  Esc:quit"
        ),
        View::Register => format!(
            "Tab:next  Space:show passwords  Enter:register  {SWITCH_FORM_SHORTCUT}:login  Esc:quit"
        ),
        View::Main => "t:theme  l:log out  q:quit".to_string(),
    }
}
