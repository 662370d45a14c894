//! Animated success confirmation shown above a form

use super::panel::{panel_height, render_panel, PanelConfig};
use crate::state::{Palette, ShownPanel, SUCCESS_ICON};
use ratatui::{layout::Rect, Frame};
use std::time::Instant;

fn config<'a>(shown: &'a ShownPanel, palette: &Palette) -> PanelConfig<'a> {
    PanelConfig {
        icon: Some(SUCCESS_ICON),
        heading: &shown.panel.heading,
        body: &shown.panel.body,
        text_color: palette.success,
        border_color: palette.success,
        background: palette.background,
    }
}

/// Rows the panel occupies right now; grows to full height while popping in
pub fn success_panel_height(
    shown: &ShownPanel,
    palette: &Palette,
    width: u16,
    now: Instant,
) -> u16 {
    let full = panel_height(&config(shown, palette), width);
    (f32::from(full) * shown.progress(now)).round() as u16
}

pub fn render_success_panel(frame: &mut Frame, area: Rect, shown: &ShownPanel, palette: &Palette) {
    render_panel(frame, area, config(shown, palette));
}
