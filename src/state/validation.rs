//! Field validation rules for the login and registration forms
//!
//! Every rule trims its input first, so whitespace-only text counts as empty.
//! Submission rules always return `Valid` or `Invalid`. Live rules, run when a
//! single field is edited or loses focus, return `Skipped` for an empty field
//! so the user is not nagged before they have typed anything.

use regex::Regex;
use std::sync::LazyLock;

/// Minimum password length, counted in characters after trimming
pub const MIN_PASSWORD_LEN: usize = 6;

/// Minimum username length for live feedback on the registration form
pub const MIN_USERNAME_LEN: usize = 3;

pub const LOGIN_EMAIL_REQUIRED: &str = "Please enter your email.";
pub const LOGIN_EMAIL_INVALID: &str = "Please enter a valid email address.";
pub const LOGIN_PASSWORD_REQUIRED: &str = "Please enter your password.";
pub const LOGIN_PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters.";

pub const REGISTER_FIELDS_REQUIRED: &str = "Please fill in all fields!";
pub const REGISTER_EMAIL_INVALID: &str = "Please enter a valid email!";
pub const REGISTER_PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters!";
pub const REGISTER_PASSWORD_MISMATCH: &str = "Passwords do not match!";

pub const LIVE_USERNAME_TOO_SHORT: &str = "Username must be at least 3 characters.";
pub const LIVE_EMAIL_INVALID: &str = "Please enter a valid email address.";
pub const LIVE_PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters.";
pub const LIVE_PASSWORD_MISMATCH: &str = "Passwords do not match.";

/// Accepted email shape, shared by both forms:
/// local part and domain without whitespace or `@`, then a dot and a
/// top-level domain of at least two ASCII letters.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

/// Outcome of running a rule against the current field text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Invalid(&'static str),
    /// Live check on an empty field; neither shows nor hides an error
    Skipped,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }
}

/// Check an already-trimmed email against the accepted pattern
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Submission rules for the login form, in priority order
pub fn validate_login(email: &str, password: &str) -> Validation {
    let email = email.trim();
    let password = password.trim();

    if email.is_empty() {
        Validation::Invalid(LOGIN_EMAIL_REQUIRED)
    } else if !is_valid_email(email) {
        Validation::Invalid(LOGIN_EMAIL_INVALID)
    } else if password.is_empty() {
        Validation::Invalid(LOGIN_PASSWORD_REQUIRED)
    } else if char_len(password) < MIN_PASSWORD_LEN {
        Validation::Invalid(LOGIN_PASSWORD_TOO_SHORT)
    } else {
        Validation::Valid
    }
}

/// Field values captured from the registration form at submit time
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistrationInput<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
}

/// Submission rules for the registration form, in priority order
pub fn validate_registration(input: &RegistrationInput<'_>) -> Validation {
    let username = input.username.trim();
    let email = input.email.trim();
    let password = input.password.trim();
    let confirm = input.confirm_password.trim();

    if [username, email, password, confirm].iter().any(|v| v.is_empty()) {
        Validation::Invalid(REGISTER_FIELDS_REQUIRED)
    } else if !is_valid_email(email) {
        Validation::Invalid(REGISTER_EMAIL_INVALID)
    } else if char_len(password) < MIN_PASSWORD_LEN {
        Validation::Invalid(REGISTER_PASSWORD_TOO_SHORT)
    } else if password != confirm {
        Validation::Invalid(REGISTER_PASSWORD_MISMATCH)
    } else {
        Validation::Valid
    }
}

/// Live email check (on blur), shared by both forms
pub fn live_email(email: &str) -> Validation {
    let email = email.trim();
    if email.is_empty() {
        Validation::Skipped
    } else if is_valid_email(email) {
        Validation::Valid
    } else {
        Validation::Invalid(LIVE_EMAIL_INVALID)
    }
}

/// Live password length check (on input), shared by both forms
pub fn live_password(password: &str) -> Validation {
    let password = password.trim();
    if password.is_empty() {
        Validation::Skipped
    } else if char_len(password) < MIN_PASSWORD_LEN {
        Validation::Invalid(LIVE_PASSWORD_TOO_SHORT)
    } else {
        Validation::Valid
    }
}

/// Live username length check (on blur)
pub fn live_username(username: &str) -> Validation {
    let username = username.trim();
    if username.is_empty() {
        Validation::Skipped
    } else if char_len(username) < MIN_USERNAME_LEN {
        Validation::Invalid(LIVE_USERNAME_TOO_SHORT)
    } else {
        Validation::Valid
    }
}

/// Live confirmation check (on input); skipped until both fields have text
pub fn live_confirm_password(password: &str, confirm: &str) -> Validation {
    let password = password.trim();
    let confirm = confirm.trim();
    if password.is_empty() || confirm.is_empty() {
        Validation::Skipped
    } else if password != confirm {
        Validation::Invalid(LIVE_PASSWORD_MISMATCH)
    } else {
        Validation::Valid
    }
}
