//! Transient error banner shown above a form

use super::timer::Timer;
use std::time::{Duration, Instant};

/// Glyph prefixed to every banner message
pub const WARNING_GLYPH: &str = "⚠";

/// Error banner with a single auto-hide countdown
#[derive(Debug, Clone, Default)]
pub struct ErrorBanner {
    text: String,
    visible: bool,
    auto_hide: Timer,
}

impl ErrorBanner {
    /// How long a message stays up before hiding itself
    pub const AUTO_HIDE_AFTER: Duration = Duration::from_secs(5);

    /// Replace the current message and restart the countdown
    pub fn show(&mut self, message: &str, now: Instant) {
        self.text = format!("{WARNING_GLYPH} {message}");
        self.visible = true;
        self.auto_hide.schedule(now, Self::AUTO_HIDE_AFTER);
    }

    /// Hide immediately. Safe to call when already hidden.
    pub fn hide(&mut self) {
        self.visible = false;
        self.auto_hide.cancel();
    }

    /// Hide the banner if its countdown has run out.
    /// Returns true when this call hid it.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.auto_hide.fire(now) {
            self.visible = false;
            return true;
        }
        false
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The displayed text, including the glyph, while visible
    pub fn text(&self) -> Option<&str> {
        self.visible.then_some(self.text.as_str())
    }
}
