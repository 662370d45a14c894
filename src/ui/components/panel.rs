//! Bordered message panel shared by the banner and the success confirmation

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Configuration for rendering a panel
pub struct PanelConfig<'a> {
    /// Optional first line, rendered bold (e.g. an icon)
    pub icon: Option<&'a str>,
    /// Bold heading line
    pub heading: &'a str,
    /// Body text, word-wrapped to the panel width
    pub body: &'a str,
    pub text_color: Color,
    pub border_color: Color,
    pub background: Color,
}

/// Rows a panel needs for the given inner width, including borders
pub fn panel_height(config: &PanelConfig, width: u16) -> u16 {
    let inner_width = width.saturating_sub(4) as usize;
    let icon_rows = u16::from(config.icon.is_some());
    let heading_rows = wrap_text(config.heading, inner_width).len() as u16;
    let body_rows = if config.body.is_empty() {
        0
    } else {
        wrap_text(config.body, inner_width).len() as u16
    };
    icon_rows + heading_rows + body_rows + 2
}

/// Render a centered panel into `area`, clipping from the bottom if it is short
pub fn render_panel(frame: &mut Frame, area: Rect, config: PanelConfig) {
    if area.height == 0 || area.width < 4 {
        return;
    }
    let inner_width = area.width.saturating_sub(4) as usize;
    let style = Style::default().fg(config.text_color).bg(config.background);

    let mut content = Vec::new();
    if let Some(icon) = config.icon {
        content.push(Line::from(Span::styled(
            icon,
            style.add_modifier(Modifier::BOLD),
        )));
    }
    for line in wrap_text(config.heading, inner_width) {
        content.push(Line::from(Span::styled(
            line,
            style.add_modifier(Modifier::BOLD),
        )));
    }
    if !config.body.is_empty() {
        for line in wrap_text(config.body, inner_width) {
            content.push(Line::from(Span::styled(line, style)));
        }
    }

    // Clear the area behind the panel
    frame.render_widget(Clear, area);

    let panel = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.border_color))
                .style(Style::default().bg(config.background)),
        )
        .style(style);

    frame.render_widget(panel, area);
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            let current_width = current_line.chars().count();
            let word_width = word.chars().count();
            if current_width + word_width + 1 > max_width && !current_line.is_empty() {
                lines.push(current_line);
                current_line = String::new();
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_text_is_one_line() {
        assert_eq!(
            wrap_text("Registration Successful!", 40),
            vec!["Registration Successful!".to_string()]
        );
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        let lines = wrap_text("Welcome aboard! Your account has been created", 16);
        assert!(lines.iter().all(|l| l.chars().count() <= 16));
        assert_eq!(lines.join(" "), "Welcome aboard! Your account has been created");
    }

    #[test]
    fn test_wrap_keeps_long_word_whole() {
        let lines = wrap_text("averyveryverylongword", 5);
        assert_eq!(lines, vec!["averyveryverylongword".to_string()]);
    }

    #[test]
    fn test_wrap_empty_text() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn test_panel_height_counts_borders_and_icon() {
        let config = PanelConfig {
            icon: Some("✓"),
            heading: "Done",
            body: "All good",
            text_color: Color::Green,
            border_color: Color::Green,
            background: Color::Black,
        };
        assert_eq!(panel_height(&config, 40), 5);

        let no_icon = PanelConfig {
            icon: None,
            body: "",
            ..config
        };
        assert_eq!(panel_height(&no_icon, 40), 3);
    }
}
