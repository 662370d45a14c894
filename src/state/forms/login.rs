//! Login page controller

use super::field::FormField;
use super::form_state::{FormController, FormCore, FormModel, FormPhase, FormView};
use super::success::SuccessPanel;
use crate::state::validation::{live_email, live_password, validate_login, Validation};
use crate::state::View;
use std::time::Instant;

pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";
pub const SHOW_PASSWORD: &str = "show_password";

/// Fields cleared when the form resets after a successful login
const RESET_FIELDS: [&str; 2] = [EMAIL, PASSWORD];

/// Email and password form with a show-password toggle
#[derive(Debug)]
pub struct LoginForm<V: FormView = FormModel> {
    core: FormCore<V>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::with_view(FormModel::new(vec![
            FormField::text(EMAIL, "Email"),
            FormField::password(PASSWORD, "Password"),
            FormField::show_password(SHOW_PASSWORD, "Show password"),
        ]))
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: FormView> LoginForm<V> {
    pub fn with_view(view: V) -> Self {
        Self {
            core: FormCore::new(view),
        }
    }
}

impl<V: FormView> FormController for LoginForm<V> {
    type Model = V;

    fn view(&self) -> &V {
        &self.core.view
    }

    fn view_mut(&mut self) -> &mut V {
        &mut self.core.view
    }

    fn phase(&self) -> FormPhase {
        self.core.phase()
    }

    fn submit(&mut self, now: Instant) -> Validation {
        if !self.core.begin_submit() {
            return Validation::Skipped;
        }
        let email = self.core.view.field_value(EMAIL);
        let password = self.core.view.field_value(PASSWORD);
        let result = validate_login(&email, &password);
        if result.is_valid() {
            tracing::info!("Login accepted");
        }
        self.core.finish_submit(
            result,
            || SuccessPanel::login(email.trim()),
            &RESET_FIELDS,
            now,
        );
        result
    }

    fn on_blur(&mut self, field: &str, now: Instant) {
        if field == EMAIL {
            let result = live_email(&self.core.view.field_value(EMAIL));
            self.core.apply_live(result, now);
        }
    }

    fn on_input(&mut self, field: &str, now: Instant) {
        if field == PASSWORD {
            let result = live_password(&self.core.view.field_value(PASSWORD));
            self.core.apply_live(result, now);
        }
    }

    fn toggle_password_visibility(&mut self) {
        self.core.toggle_password_visibility();
    }

    fn tick(&mut self, now: Instant) -> Option<View> {
        self.core.tick(now)
    }
}
