//! Shortcut labels and color-scheme hints from the terminal environment

use std::env;

/// Theme toggle shortcut display
pub const THEME_SHORTCUT: &str = "Ctrl+T";

/// Switch between the login and registration pages
pub const SWITCH_FORM_SHORTCUT: &str = "Ctrl+N";

/// Whether the environment reports a dark color scheme.
///
/// An explicit override from the config wins. Otherwise the terminal's
/// `COLORFGBG` hint is consulted. No signal means no dark preference.
pub fn prefers_dark_scheme(config_override: Option<bool>) -> bool {
    if let Some(prefers_dark) = config_override {
        return prefers_dark;
    }
    env::var("COLORFGBG")
        .ok()
        .and_then(|value| parse_colorfgbg(&value))
        .unwrap_or(false)
}

/// Interpret a `COLORFGBG` value such as `15;0` or `0;default;15`.
///
/// The last field is the background palette index. Indices 0-6 and 8 are
/// dark colors in the standard 16-color palette.
fn parse_colorfgbg(value: &str) -> Option<bool> {
    let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(matches!(background, 0..=6 | 8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        assert!(prefers_dark_scheme(Some(true)));
        assert!(!prefers_dark_scheme(Some(false)));
    }

    #[test]
    fn test_dark_backgrounds() {
        assert_eq!(parse_colorfgbg("15;0"), Some(true));
        assert_eq!(parse_colorfgbg("7;8"), Some(true));
        assert_eq!(parse_colorfgbg("15;default;4"), Some(true));
    }

    #[test]
    fn test_light_backgrounds() {
        assert_eq!(parse_colorfgbg("0;15"), Some(false));
        assert_eq!(parse_colorfgbg("0;7"), Some(false));
    }

    #[test]
    fn test_unparseable_values() {
        assert_eq!(parse_colorfgbg(""), None);
        assert_eq!(parse_colorfgbg("15;default"), None);
        assert_eq!(parse_colorfgbg("15;300"), None);
    }
}
