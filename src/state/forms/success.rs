//! Confirmation panel and the delayed redirect after a successful submission

use super::form_state::FormView;
use crate::state::timer::Timer;
use crate::state::View;
use std::time::{Duration, Instant};

/// Delay between showing the confirmation and leaving the page
pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Where both forms land after a successful submission
pub const REDIRECT_TARGET: View = View::Main;

/// Icon shown at the top of the confirmation panel
pub const SUCCESS_ICON: &str = "✓";

/// Confirmation text inserted above the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessPanel {
    pub heading: String,
    pub body: String,
}

impl SuccessPanel {
    /// Personalized welcome for a signed-in user
    pub fn login(email: &str) -> Self {
        Self {
            heading: format!("Welcome {email}!"),
            body: "You have successfully logged in.".to_string(),
        }
    }

    pub fn registration() -> Self {
        Self {
            heading: "Registration Successful!".to_string(),
            body: "Welcome aboard! Your account has been created successfully.".to_string(),
        }
    }
}

/// A panel together with the moment it appeared, for the pop-in animation
#[derive(Debug, Clone)]
pub struct ShownPanel {
    pub panel: SuccessPanel,
    pub shown_at: Instant,
}

impl ShownPanel {
    /// Length of the pop-in animation
    pub const POP_IN: Duration = Duration::from_millis(600);

    /// Eased animation progress from 0.0 to 1.0
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.shown_at);
        let linear = (elapsed.as_secs_f32() / Self::POP_IN.as_secs_f32()).min(1.0);
        simple_easing::cubic_out(linear)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) < Self::POP_IN
    }
}

/// Owns the single pending redirect of a form page
#[derive(Debug, Default)]
pub struct SuccessTransition {
    redirect: Timer,
}

impl SuccessTransition {
    /// Show the confirmation, reset the form and schedule the redirect.
    ///
    /// A second success before the redirect fires replaces the first one's
    /// deadline.
    pub fn begin<V: FormView>(
        &mut self,
        view: &mut V,
        panel: SuccessPanel,
        fields: &[&str],
        now: Instant,
    ) {
        view.hide_error();
        view.show_success(panel, now);
        for field in fields {
            view.set_field_value(field, "");
        }
        view.set_password_visible(false);
        self.redirect.schedule(now, REDIRECT_DELAY);
    }

    /// True from a successful submission until its redirect fires
    pub fn is_pending(&self) -> bool {
        self.redirect.is_pending()
    }

    /// The redirect destination, once its delay has elapsed
    pub fn tick(&mut self, now: Instant) -> Option<View> {
        self.redirect.fire(now).then_some(REDIRECT_TARGET)
    }
}
