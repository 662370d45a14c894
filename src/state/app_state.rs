//! Application state definitions

use super::forms::{LoginForm, RegisterForm};
use super::theme::ThemeController;

/// Current page in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Login,
    Register,
    /// Landing page reached after a successful submission
    Main,
}

impl View {
    /// Route name of the page, as used in logs and the status bar
    pub fn route(&self) -> &'static str {
        match self {
            View::Login => "login.html",
            View::Register => "register.html",
            View::Main => "main.html",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Login => "Login",
            View::Register => "Register",
            View::Main => "Home",
        }
    }
}

/// Main application state.
///
/// Each page owns its controller; navigating to a form page builds a fresh
/// one, the way a page load would.
#[derive(Debug)]
pub struct AppState {
    pub current_view: View,
    pub theme: ThemeController,
    pub login: LoginForm,
    pub register: RegisterForm,
}

impl AppState {
    pub fn new(theme: ThemeController, start_view: View) -> Self {
        Self {
            current_view: start_view,
            theme,
            login: LoginForm::new(),
            register: RegisterForm::new(),
        }
    }

    /// Switch pages, resetting the destination form
    pub fn navigate(&mut self, view: View) {
        tracing::debug!(
            "Navigating {} -> {}",
            self.current_view.route(),
            view.route()
        );
        match view {
            View::Login => self.login = LoginForm::new(),
            View::Register => self.register = RegisterForm::new(),
            View::Main => {}
        }
        self.current_view = view;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FormController, FormView};
    use crate::storage::FileStore;

    fn state(view: View) -> AppState {
        AppState::new(
            ThemeController::load(Box::new(FileStore::default()), false),
            view,
        )
    }

    #[test]
    fn test_routes() {
        assert_eq!(View::Login.route(), "login.html");
        assert_eq!(View::Register.route(), "register.html");
        assert_eq!(View::Main.route(), "main.html");
    }

    #[test]
    fn test_default_view_is_login() {
        assert_eq!(View::default(), View::Login);
    }

    #[test]
    fn test_navigate_builds_fresh_form() {
        let mut state = state(View::Login);
        state.register.view_mut().set_field_value("username", "alice");

        state.navigate(View::Register);

        assert_eq!(state.current_view, View::Register);
        assert_eq!(state.register.view().field_value("username"), "");
    }

    #[test]
    fn test_navigate_to_main_keeps_forms() {
        let mut state = state(View::Login);
        state.login.view_mut().set_field_value("email", "a@example.com");

        state.navigate(View::Main);

        assert_eq!(state.current_view, View::Main);
        assert_eq!(state.login.view().field_value("email"), "a@example.com");
    }
}
