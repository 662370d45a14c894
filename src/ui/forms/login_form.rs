//! Login form rendering

use super::form_page::draw_form_page;
use crate::platform::SWITCH_FORM_SHORTCUT;
use crate::state::{FormController, LoginForm, Palette};
use ratatui::{layout::Rect, Frame};
use std::time::Instant;

/// Draw the login page
pub fn draw_login(
    frame: &mut Frame,
    area: Rect,
    form: &LoginForm,
    palette: &Palette,
    now: Instant,
) {
    let footer = format!("Don't have an account? {SWITCH_FORM_SHORTCUT} to register");
    draw_form_page(frame, area, "Login", form.view(), &footer, palette, now);
}
