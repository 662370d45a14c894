//! Form field value objects

/// Mask character used for hidden password text
pub const MASK_CHAR: char = '•';

/// What kind of input a field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Text that is masked unless the form's show-password toggle is on
    Password,
    /// Checkbox that controls password masking for the whole form
    ShowPassword,
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    value: String,
    checked: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    /// Create a new password field
    pub fn password(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Password)
    }

    /// Create the show-password checkbox
    pub fn show_password(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::ShowPassword)
    }

    fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            value: String::new(),
            checked: false,
        }
    }

    pub fn accepts_text(&self) -> bool {
        self.kind != FieldKind::ShowPassword
    }

    /// Get the raw, untrimmed text value
    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Set the text value
    pub fn set_text(&mut self, value: &str) {
        self.value = value.to_string();
    }

    /// Push a character to the field value. Returns false for checkboxes.
    pub fn push_char(&mut self, c: char) -> bool {
        if !self.accepts_text() {
            return false;
        }
        self.value.push(c);
        true
    }

    /// Remove the last character. Returns true if the value changed.
    pub fn pop_char(&mut self) -> bool {
        self.accepts_text() && self.value.pop().is_some()
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// Get the display value for rendering
    pub fn display_value(&self, reveal_passwords: bool) -> String {
        match self.kind {
            FieldKind::Text => self.value.clone(),
            FieldKind::Password if reveal_passwords => self.value.clone(),
            FieldKind::Password => MASK_CHAR.to_string().repeat(self.value.chars().count()),
            FieldKind::ShowPassword => {
                let checkbox = if self.checked { "[x]" } else { "[ ]" };
                format!("{checkbox} {}", self.label)
            }
        }
    }
}
