//! Registration form rendering

use super::form_page::draw_form_page;
use crate::platform::SWITCH_FORM_SHORTCUT;
use crate::state::{FormController, Palette, RegisterForm};
use ratatui::{layout::Rect, Frame};
use std::time::Instant;

/// Draw the registration page
pub fn draw_register(
    frame: &mut Frame,
    area: Rect,
    form: &RegisterForm,
    palette: &Palette,
    now: Instant,
) {
    let footer = format!("Already have an account? {SWITCH_FORM_SHORTCUT} to log in");
    draw_form_page(frame, area, "Create Account", form.view(), &footer, palette, now);
}
