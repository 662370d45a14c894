//! Registration page controller

use super::field::FormField;
use super::form_state::{FormController, FormCore, FormModel, FormPhase, FormView};
use super::success::SuccessPanel;
use crate::state::validation::{
    live_confirm_password, live_email, live_password, live_username, validate_registration,
    RegistrationInput, Validation,
};
use crate::state::View;
use std::time::Instant;

pub const USERNAME: &str = "username";
pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";
pub const CONFIRM_PASSWORD: &str = "confirm_password";
pub const SHOW_PASSWORD: &str = "show_password";

const RESET_FIELDS: [&str; 4] = [USERNAME, EMAIL, PASSWORD, CONFIRM_PASSWORD];

/// Account creation form; the show-password toggle reveals both password fields
#[derive(Debug)]
pub struct RegisterForm<V: FormView = FormModel> {
    core: FormCore<V>,
}

impl RegisterForm {
    pub fn new() -> Self {
        Self::with_view(FormModel::new(vec![
            FormField::text(USERNAME, "Username"),
            FormField::text(EMAIL, "Email"),
            FormField::password(PASSWORD, "Password"),
            FormField::password(CONFIRM_PASSWORD, "Confirm Password"),
            FormField::show_password(SHOW_PASSWORD, "Show passwords"),
        ]))
    }
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: FormView> RegisterForm<V> {
    pub fn with_view(view: V) -> Self {
        Self {
            core: FormCore::new(view),
        }
    }

    fn value(&self, field: &str) -> String {
        self.core.view.field_value(field)
    }
}

impl<V: FormView> FormController for RegisterForm<V> {
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
        let username = self.value(USERNAME);
        let email = self.value(EMAIL);
        let password = self.value(PASSWORD);
        let confirm_password = self.value(CONFIRM_PASSWORD);

        let result = validate_registration(&RegistrationInput {
            username: &username,
            email: &email,
            password: &password,
            confirm_password: &confirm_password,
        });
        if result.is_valid() {
            tracing::info!("Registration accepted");
        }
        self.core
            .finish_submit(result, SuccessPanel::registration, &RESET_FIELDS, now);
        result
    }

    fn on_blur(&mut self, field: &str, now: Instant) {
        let result = match field {
            USERNAME => live_username(&self.value(USERNAME)),
            EMAIL => live_email(&self.value(EMAIL)),
            _ => return,
        };
        self.core.apply_live(result, now);
    }

    fn on_input(&mut self, field: &str, now: Instant) {
        let result = match field {
            PASSWORD => live_password(&self.value(PASSWORD)),
            CONFIRM_PASSWORD => {
                live_confirm_password(&self.value(PASSWORD), &self.value(CONFIRM_PASSWORD))
            }
            _ => return,
        };
        self.core.apply_live(result, now);
    }

    fn toggle_password_visibility(&mut self) {
        self.core.toggle_password_visibility();
    }

    fn tick(&mut self, now: Instant) -> Option<View> {
        self.core.tick(now)
    }
}
