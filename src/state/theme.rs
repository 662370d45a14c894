//! Light/dark theme preference and its persisted state

use crate::storage::PreferenceStore;
use ratatui::style::Color;

/// Storage key for the theme preference
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Resolve the startup theme: stored value, then OS preference, then light.
    ///
    /// An empty stored value counts as absent. Any other value that is not
    /// `"dark"` resolves to light.
    pub fn resolve(stored: Option<&str>, os_prefers_dark: bool) -> Self {
        match stored {
            Some("dark") => Theme::Dark,
            Some(value) if !value.is_empty() => Theme::Light,
            _ if os_prefers_dark => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value written to storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Icon on the toggle control: a moon offers dark mode, a sun offers light mode
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }

    /// Label on the toggle control, naming the theme a click switches to
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Self::Light => "Dark Mode",
            Self::Dark => "Light Mode",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Self::Light => Palette {
                background: Color::White,
                foreground: Color::Black,
                accent: Color::Blue,
                muted: Color::Gray,
                error: Color::Red,
                success: Color::Green,
            },
            Self::Dark => Palette {
                background: Color::Black,
                foreground: Color::White,
                accent: Color::Cyan,
                muted: Color::DarkGray,
                error: Color::LightRed,
                success: Color::LightGreen,
            },
        }
    }
}

/// Colors every draw function reads from the active theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub muted: Color,
    pub error: Color,
    pub success: Color,
}

/// Owns the active theme and writes every change through to storage
pub struct ThemeController {
    store: Box<dyn PreferenceStore>,
    theme: Theme,
}

impl ThemeController {
    /// Apply the stored preference, falling back to the OS signal
    pub fn load(store: Box<dyn PreferenceStore>, os_prefers_dark: bool) -> Self {
        let stored = store.get(THEME_KEY);
        let theme = Theme::resolve(stored.as_deref(), os_prefers_dark);
        tracing::debug!(
            "Theme resolved to {} (stored={stored:?}, os_dark={os_prefers_dark})",
            theme.as_str()
        );
        Self { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }

    /// Flip the theme and persist it.
    ///
    /// A failed write is logged; the new theme stays active for this session.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        if let Err(err) = self.store.set(THEME_KEY, self.theme.as_str()) {
            tracing::warn!("Failed to persist theme preference: {err}");
        }
        tracing::info!("Theme switched to {}", self.theme.as_str());
        self.theme
    }
}

impl std::fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}
