//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform;
use crate::state::{AppState, FormController, FormModel, FormPhase, ThemeController, View};
use crate::storage::{FileStore, PreferenceStore};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App backed by the on-disk preference store
    pub fn new(config: &TuiConfig) -> Self {
        let os_prefers_dark = platform::prefers_dark_scheme(config.color_scheme_override());
        Self::with_store(
            Box::new(FileStore::open_default()),
            os_prefers_dark,
            config.start_view(),
        )
    }

    pub fn with_store(
        store: Box<dyn PreferenceStore>,
        os_prefers_dark: bool,
        start_view: View,
    ) -> Self {
        let theme = ThemeController::load(store, os_prefers_dark);
        Self {
            state: AppState::new(theme, start_view),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// True while the current page's success panel is still popping in
    pub fn is_animating(&self, now: Instant) -> bool {
        let model = match self.state.current_view {
            View::Login => self.state.login.view(),
            View::Register => self.state.register.view(),
            View::Main => return false,
        };
        model.success().is_some_and(|shown| shown.is_animating(now))
    }

    /// Advance banner and redirect timers on the current page
    pub fn tick(&mut self, now: Instant) {
        let destination = match self.state.current_view {
            View::Login => self.state.login.tick(now),
            View::Register => self.state.register.tick(now),
            View::Main => None,
        };
        if let Some(view) = destination {
            self.state.navigate(view);
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        let ctrl = is_shortcut(&key);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.quit = true;
                return;
            }
            KeyCode::Esc => {
                self.quit = true;
                return;
            }
            KeyCode::Char('t') if ctrl => {
                self.state.theme.toggle();
                return;
            }
            _ => {}
        }

        match self.state.current_view {
            View::Login => {
                if ctrl && key.code == KeyCode::Char('n') {
                    self.state.navigate(View::Register);
                } else {
                    handle_form_key(&mut self.state.login, key, now);
                }
            }
            View::Register => {
                if ctrl && key.code == KeyCode::Char('n') {
                    self.state.navigate(View::Login);
                } else {
                    handle_form_key(&mut self.state.register, key, now);
                }
            }
            View::Main => self.handle_main_key(key),
        }
    }

    fn handle_main_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('t') => {
                self.state.theme.toggle();
            }
            KeyCode::Char('l') => self.state.navigate(View::Login),
            _ => {}
        }
    }
}

/// Ctrl held without Alt. Windows reports AltGr as Ctrl+Alt, and those
/// presses are ordinary characters such as `@`.
fn is_shortcut(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && !key.modifiers.contains(KeyModifiers::ALT)
}

/// Route a key press to a form page: focus moves fire blur checks, edits fire
/// input checks, Enter submits.
fn handle_form_key<C>(form: &mut C, key: KeyEvent, now: Instant)
where
    C: FormController<Model = FormModel>,
{
    if form.phase() == FormPhase::Redirected {
        return;
    }
    let ctrl = is_shortcut(&key);

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            let left = form.view_mut().focus_next();
            form.on_blur(left, now);
        }
        KeyCode::BackTab | KeyCode::Up => {
            let left = form.view_mut().focus_prev();
            form.on_blur(left, now);
        }
        KeyCode::Enter => {
            form.submit(now);
        }
        KeyCode::Char(' ') if form.view().is_active_field_toggle() => {
            form.toggle_password_visibility();
        }
        KeyCode::Char(c) if !ctrl => {
            if form.view_mut().input_char(c) {
                let name = form.view().active_field_name();
                form.on_input(name, now);
            }
        }
        KeyCode::Backspace => {
            if form.view_mut().backspace() {
                let name = form.view().active_field_name();
                form.on_input(name, now);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FormView, Theme};
    use crate::storage::MockPreferenceStore;
    use std::time::Duration;

    fn app(view: View) -> App {
        App::with_store(Box::new(FileStore::default()), false, view)
    }

    fn press(app: &mut App, code: KeyCode, now: Instant) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), now);
    }

    fn ctrl(app: &mut App, c: char, now: Instant) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL), now);
    }

    fn type_text(app: &mut App, text: &str, now: Instant) {
        for c in text.chars() {
            press(app, KeyCode::Char(c), now);
        }
    }

    mod global_keys {
        use super::*;

        #[test]
        fn test_should_quit_initially_false() {
            assert!(!app(View::Login).should_quit());
        }

        #[test]
        fn test_ctrl_c_quits() {
            let mut app = app(View::Login);
            ctrl(&mut app, 'c', Instant::now());
            assert!(app.should_quit());
        }

        #[test]
        fn test_esc_quits() {
            let mut app = app(View::Register);
            press(&mut app, KeyCode::Esc, Instant::now());
            assert!(app.should_quit());
        }

        #[test]
        fn test_ctrl_t_toggles_and_persists_theme() {
            let mut store = MockPreferenceStore::new();
            store.expect_get().return_const(None::<String>);
            store
                .expect_set()
                .withf(|key, value| key == "theme" && value == "dark")
                .times(1)
                .returning(|_, _| Ok(()));

            let mut app = App::with_store(Box::new(store), false, View::Login);
            assert_eq!(app.state.theme.theme(), Theme::Light);
            ctrl(&mut app, 't', Instant::now());
            assert_eq!(app.state.theme.theme(), Theme::Dark);
        }

        #[test]
        fn test_os_dark_applies_on_startup() {
            let app = App::with_store(Box::new(FileStore::default()), true, View::Login);
            assert_eq!(app.state.theme.theme(), Theme::Dark);
        }

        #[test]
        fn test_ctrl_n_switches_between_forms() {
            let now = Instant::now();
            let mut app = app(View::Login);
            ctrl(&mut app, 'n', now);
            assert_eq!(app.state.current_view, View::Register);
            ctrl(&mut app, 'n', now);
            assert_eq!(app.state.current_view, View::Login);
        }

        #[test]
        fn test_altgr_chars_are_typed() {
            let now = Instant::now();
            let mut app = app(View::Login);
            let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
            type_text(&mut app, "user", now);
            app.handle_key(KeyEvent::new(KeyCode::Char('@'), altgr), now);
            type_text(&mut app, "example.com", now);

            assert_eq!(
                app.state.login.view().field_value("email"),
                "user@example.com"
            );
        }

        #[test]
        fn test_altgr_is_not_a_shortcut() {
            let now = Instant::now();
            let mut app = app(View::Login);
            let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
            app.handle_key(KeyEvent::new(KeyCode::Char('n'), altgr), now);
            app.handle_key(KeyEvent::new(KeyCode::Char('t'), altgr), now);

            assert_eq!(app.state.current_view, View::Login);
            assert_eq!(app.state.theme.theme(), Theme::Light);
            assert_eq!(app.state.login.view().field_value("email"), "nt");
        }

        #[test]
        fn test_ctrl_chars_are_not_typed() {
            let now = Instant::now();
            let mut app = app(View::Login);
            ctrl(&mut app, 'x', now);
            assert_eq!(app.state.login.view().field_value("email"), "");
        }
    }

    mod login_page {
        use super::*;

        #[test]
        fn test_successful_login_redirects_to_main() {
            let now = Instant::now();
            let mut app = app(View::Login);

            type_text(&mut app, "user@example.com", now);
            press(&mut app, KeyCode::Tab, now);
            type_text(&mut app, "secret1", now);
            press(&mut app, KeyCode::Enter, now);

            let model = app.state.login.view();
            assert!(!model.is_error_visible());
            assert!(model.success().is_some());
            assert!(app.is_animating(now));

            app.tick(now + Duration::from_millis(1500));
            assert_eq!(app.state.current_view, View::Login);

            app.tick(now + Duration::from_secs(2));
            assert_eq!(app.state.current_view, View::Main);
            assert_eq!(app.state.current_view.route(), "main.html");
            assert!(!app.is_animating(now));
        }

        #[test]
        fn test_blur_with_bad_email_shows_error() {
            let now = Instant::now();
            let mut app = app(View::Login);
            type_text(&mut app, "user@", now);
            press(&mut app, KeyCode::Tab, now);

            assert_eq!(
                app.state.login.view().banner().text(),
                Some("⚠ Please enter a valid email address.")
            );

            app.tick(now + Duration::from_secs(5));
            assert!(!app.state.login.view().is_error_visible());
        }

        #[test]
        fn test_typing_short_password_shows_error_until_long_enough() {
            let now = Instant::now();
            let mut app = app(View::Login);
            press(&mut app, KeyCode::Tab, now);
            type_text(&mut app, "abc", now);
            assert!(app.state.login.view().is_error_visible());

            type_text(&mut app, "def", now);
            assert!(!app.state.login.view().is_error_visible());
        }

        #[test]
        fn test_backspace_triggers_live_check() {
            let now = Instant::now();
            let mut app = app(View::Login);
            press(&mut app, KeyCode::Tab, now);
            type_text(&mut app, "abcdef", now);
            press(&mut app, KeyCode::Backspace, now);
            assert!(app.state.login.view().is_error_visible());
        }

        #[test]
        fn test_space_toggles_checkbox_but_types_in_fields() {
            let now = Instant::now();
            let mut app = app(View::Login);
            press(&mut app, KeyCode::Char(' '), now);
            assert_eq!(app.state.login.view().field_value("email"), " ");

            press(&mut app, KeyCode::BackTab, now);
            assert!(app.state.login.view().is_active_field_toggle());
            press(&mut app, KeyCode::Char(' '), now);
            assert!(app.state.login.view().is_password_visible());
        }
    }

    mod register_page {
        use super::*;

        #[test]
        fn test_empty_username_shows_fill_all_fields() {
            let now = Instant::now();
            let mut app = app(View::Register);
            press(&mut app, KeyCode::Tab, now);
            type_text(&mut app, "alice@example.com", now);
            press(&mut app, KeyCode::Tab, now);
            type_text(&mut app, "secret1", now);
            press(&mut app, KeyCode::Tab, now);
            type_text(&mut app, "secret1", now);
            press(&mut app, KeyCode::Enter, now);

            assert_eq!(
                app.state.register.view().banner().text(),
                Some("⚠ Please fill in all fields!")
            );
            assert_eq!(app.state.current_view, View::Register);
        }

        #[test]
        fn test_successful_registration_redirects() {
            let now = Instant::now();
            let mut app = app(View::Register);
            for value in ["alice", "alice@example.com", "secret1", "secret1"] {
                type_text(&mut app, value, now);
                press(&mut app, KeyCode::Tab, now);
            }
            press(&mut app, KeyCode::Enter, now);
            assert!(app.state.register.view().success().is_some());

            app.tick(now + Duration::from_secs(2));
            assert_eq!(app.state.current_view, View::Main);
        }
    }

    mod main_page {
        use super::*;

        #[test]
        fn test_logout_returns_to_fresh_login() {
            let now = Instant::now();
            let mut app = app(View::Main);
            press(&mut app, KeyCode::Char('l'), now);
            assert_eq!(app.state.current_view, View::Login);
            assert_eq!(app.state.login.phase(), FormPhase::Editing);
            assert!(app.state.login.view().success().is_none());
        }

        #[test]
        fn test_t_toggles_theme() {
            let mut app = app(View::Main);
            press(&mut app, KeyCode::Char('t'), Instant::now());
            assert_eq!(app.state.theme.theme(), Theme::Dark);
        }

        #[test]
        fn test_q_quits() {
            let mut app = app(View::Main);
            press(&mut app, KeyCode::Char('q'), Instant::now());
            assert!(app.should_quit());
        }

        #[test]
        fn test_tick_on_main_is_noop() {
            let mut app = app(View::Main);
            app.tick(Instant::now() + Duration::from_secs(60));
            assert_eq!(app.state.current_view, View::Main);
        }
    }
}
