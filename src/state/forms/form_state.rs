//! Form state management shared by the login and registration pages

use super::field::{FieldKind, FormField};
use super::success::{ShownPanel, SuccessPanel, SuccessTransition};
use crate::state::banner::ErrorBanner;
use crate::state::validation::Validation;
use crate::state::View;
use std::time::Instant;

/// Trait for common form focus operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// The narrow surface a form controller needs from its page.
///
/// Controllers only read and write fields, drive the error banner and show
/// the success panel through this trait, so their logic can be tested
/// without a terminal.
#[cfg_attr(test, mockall::automock)]
pub trait FormView {
    /// Raw text of a field; empty for unknown names
    fn field_value(&self, name: &str) -> String;

    fn set_field_value(&mut self, name: &str, value: &str);

    /// Show an error message, superseding any current one
    fn show_error(&mut self, message: &str, now: Instant);

    fn hide_error(&mut self);

    fn is_error_visible(&self) -> bool;

    /// Run the banner's auto-hide countdown. Returns true when it hid the banner.
    fn expire_error(&mut self, now: Instant) -> bool;

    fn is_password_visible(&self) -> bool;

    fn set_password_visible(&mut self, visible: bool);

    /// Insert the confirmation panel above the form
    fn show_success(&mut self, panel: SuccessPanel, now: Instant);
}

/// Submission lifecycle of one form page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Validating,
    ErrorShown,
    SuccessShown,
    /// Terminal: the page has navigated away
    Redirected,
}

/// Operations every form page supports, driven by the app's event loop
pub trait FormController {
    type Model: FormView;

    fn view(&self) -> &Self::Model;
    fn view_mut(&mut self) -> &mut Self::Model;
    fn phase(&self) -> FormPhase;

    /// Validate every field in priority order and act on the first failure
    fn submit(&mut self, now: Instant) -> Validation;

    /// Live check for a field that just lost focus
    fn on_blur(&mut self, field: &str, now: Instant);

    /// Live check for a field whose text just changed
    fn on_input(&mut self, field: &str, now: Instant);

    fn toggle_password_visibility(&mut self);

    /// Advance timers. Returns the destination once the redirect fires.
    fn tick(&mut self, now: Instant) -> Option<View>;
}

/// Phase tracking and success handling shared by both controllers
#[derive(Debug)]
pub(super) struct FormCore<V> {
    pub view: V,
    phase: FormPhase,
    transition: SuccessTransition,
}

impl<V: FormView> FormCore<V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            phase: FormPhase::Editing,
            transition: SuccessTransition::default(),
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_closed(&self) -> bool {
        self.phase == FormPhase::Redirected
    }

    /// Enter `Validating`; false once the page has redirected
    pub fn begin_submit(&mut self) -> bool {
        if self.is_closed() {
            return false;
        }
        self.phase = FormPhase::Validating;
        true
    }

    /// Finish a submission with its validation result.
    ///
    /// While a redirect is pending the page stays in `SuccessShown`, even if
    /// a later submission fails; the redirect still fires.
    pub fn finish_submit(
        &mut self,
        result: Validation,
        panel: impl FnOnce() -> SuccessPanel,
        fields: &[&str],
        now: Instant,
    ) {
        match result {
            Validation::Invalid(message) => {
                tracing::debug!("Submission rejected: {message}");
                self.view.show_error(message, now);
                self.phase = self.settled_phase(FormPhase::ErrorShown);
            }
            Validation::Valid => {
                self.transition.begin(&mut self.view, panel(), fields, now);
                self.phase = FormPhase::SuccessShown;
            }
            Validation::Skipped => self.phase = self.settled_phase(FormPhase::Editing),
        }
    }

    fn settled_phase(&self, phase: FormPhase) -> FormPhase {
        if self.transition.is_pending() {
            FormPhase::SuccessShown
        } else {
            phase
        }
    }

    /// Apply a live rule's outcome to the banner
    pub fn apply_live(&mut self, result: Validation, now: Instant) {
        if self.is_closed() {
            return;
        }
        match result {
            Validation::Skipped => {}
            Validation::Invalid(message) => {
                self.view.show_error(message, now);
                self.phase = self.settled_phase(FormPhase::ErrorShown);
            }
            Validation::Valid => {
                self.view.hide_error();
                if self.phase == FormPhase::ErrorShown {
                    self.phase = FormPhase::Editing;
                }
            }
        }
    }

    pub fn toggle_password_visibility(&mut self) {
        if self.is_closed() {
            return;
        }
        let visible = !self.view.is_password_visible();
        self.view.set_password_visible(visible);
    }

    pub fn tick(&mut self, now: Instant) -> Option<View> {
        if self.is_closed() {
            return None;
        }
        if self.view.expire_error(now) && self.phase == FormPhase::ErrorShown {
            self.phase = FormPhase::Editing;
        }
        let destination = self.transition.tick(now)?;
        tracing::info!("Redirecting to {}", destination.route());
        self.phase = FormPhase::Redirected;
        Some(destination)
    }
}

/// In-memory page model backing a form: fields, focus, banner and success panel
#[derive(Debug, Clone)]
pub struct FormModel {
    fields: Vec<FormField>,
    active_field_index: usize,
    banner: ErrorBanner,
    success: Option<ShownPanel>,
}

impl FormModel {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self {
            fields,
            active_field_index: 0,
            banner: ErrorBanner::default(),
            success: None,
        }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    pub fn active_field_name(&self) -> &'static str {
        self.fields
            .get(self.active_field_index)
            .map(|f| f.name)
            .unwrap_or_default()
    }

    pub fn is_active_field_toggle(&self) -> bool {
        self.get_field(self.active_field_index)
            .is_some_and(|f| f.kind == FieldKind::ShowPassword)
    }

    /// Move focus forward; returns the name of the field that lost focus
    pub fn focus_next(&mut self) -> &'static str {
        let left = self.active_field_name();
        self.next_field();
        left
    }

    /// Move focus backward; returns the name of the field that lost focus
    pub fn focus_prev(&mut self) -> &'static str {
        let left = self.active_field_name();
        self.prev_field();
        left
    }

    /// Type into the focused field. Returns true if its text changed.
    pub fn input_char(&mut self, c: char) -> bool {
        !self.fields.is_empty() && self.get_active_field_mut().push_char(c)
    }

    /// Delete from the focused field. Returns true if its text changed.
    pub fn backspace(&mut self) -> bool {
        !self.fields.is_empty() && self.get_active_field_mut().pop_char()
    }

    pub fn banner(&self) -> &ErrorBanner {
        &self.banner
    }

    pub fn success(&self) -> Option<&ShownPanel> {
        self.success.as_ref()
    }
}

impl Form for FormModel {
    fn field_count(&self) -> usize {
        self.fields.len().max(1)
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len().saturating_sub(1));
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        &mut self.fields[self.active_field_index]
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }
}

impl FormView for FormModel {
    fn field_value(&self, name: &str) -> String {
        self.field(name)
            .map(|f| f.as_text().to_string())
            .unwrap_or_default()
    }

    fn set_field_value(&mut self, name: &str, value: &str) {
        if let Some(field) = self.field_mut(name) {
            field.set_text(value);
        }
    }

    fn show_error(&mut self, message: &str, now: Instant) {
        self.banner.show(message, now);
    }

    fn hide_error(&mut self) {
        self.banner.hide();
    }

    fn is_error_visible(&self) -> bool {
        self.banner.is_visible()
    }

    fn expire_error(&mut self, now: Instant) -> bool {
        self.banner.tick(now)
    }

    fn is_password_visible(&self) -> bool {
        self.fields
            .iter()
            .any(|f| f.kind == FieldKind::ShowPassword && f.is_checked())
    }

    fn set_password_visible(&mut self, visible: bool) {
        for field in &mut self.fields {
            if field.kind == FieldKind::ShowPassword {
                field.set_checked(visible);
            }
        }
    }

    fn show_success(&mut self, panel: SuccessPanel, now: Instant) {
        self.success = Some(ShownPanel {
            panel,
            shown_at: now,
        });
    }
}
