//! Light/dark theme preference.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Storage key holding the persisted preference.
pub const THEME_STORAGE_KEY: &str = "ash_theme";

/// Class set on the root element while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

/// Visual mode of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Default mode.
    #[default]
    Light,
    /// Dark mode.
    Dark,
}

/// Returned when a string is neither `light` nor `dark`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme: {0}")]
pub struct ThemeParseError(pub String);

impl Theme {
    /// Value written to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Whether the root `dark` class is set.
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// `aria-pressed` value for the toggle button.
    pub fn aria_pressed(self) -> &'static str {
        if self.is_dark() {
            "true"
        } else {
            "false"
        }
    }

    /// Hero photo file name for this mode.
    pub fn hero_photo(self) -> &'static str {
        match self {
            Theme::Light => "photo-light.png",
            Theme::Dark => "photo-dark.png",
        }
    }

    /// Lenient reading of a stored value: anything other than `dark` is light.
    pub fn from_stored(value: &str) -> Self {
        value.parse().unwrap_or(Theme::Light)
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Picks the theme applied at page load.
///
/// A non-empty stored value wins over the system preference; without one the
/// system's `prefers-color-scheme: dark` decides, and light is the fallback.
pub fn resolve_initial(stored: Option<&str>, prefers_dark: Option<bool>) -> Theme {
    match stored.filter(|value| !value.is_empty()) {
        Some(value) => Theme::from_stored(value),
        None if prefers_dark.unwrap_or(false) => Theme::Dark,
        None => Theme::Light,
    }
}

/// Owns the current mode so toggles don't have to re-derive it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeState {
    current: Theme,
}

impl ThemeState {
    /// Starts from an already-applied theme.
    pub fn new(current: Theme) -> Self {
        Self {
            current,
        }
    }

    /// Currently applied theme.
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flips the mode and returns the theme that must now be applied and
    /// persisted.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        tracing::debug!(theme = %self.current, "theme toggled");
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_value_wins_over_system_preference() {
        assert_eq!(resolve_initial(Some("light"), Some(true)), Theme::Light);
        assert_eq!(resolve_initial(Some("dark"), Some(false)), Theme::Dark);
    }

    #[test]
    fn falls_back_to_system_preference() {
        assert_eq!(resolve_initial(None, Some(true)), Theme::Dark);
        assert_eq!(resolve_initial(None, Some(false)), Theme::Light);
        assert_eq!(resolve_initial(Some(""), Some(true)), Theme::Dark);
    }

    #[test]
    fn defaults_to_light_without_any_signal() {
        assert_eq!(resolve_initial(None, None), Theme::Light);
    }

    #[test]
    fn unknown_stored_value_is_light() {
        assert_eq!(resolve_initial(Some("sepia"), Some(true)), Theme::Light);
        assert_eq!("sepia".parse::<Theme>(), Err(ThemeParseError("sepia".to_string())));
    }

    #[test]
    fn toggle_sequence_agrees_with_persisted_value() {
        let mut state = ThemeState::new(Theme::Light);
        let persisted: Vec<String> = (0..5).map(|_| state.toggle().as_str().to_string()).collect();
        assert_eq!(persisted, ["dark", "light", "dark", "light", "dark"]);
        assert_eq!(Theme::from_stored(&persisted[4]), state.current());
    }

    #[test]
    fn dom_facing_values() {
        assert_eq!(Theme::Dark.aria_pressed(), "true");
        assert_eq!(Theme::Light.aria_pressed(), "false");
        assert_eq!(Theme::Dark.hero_photo(), "photo-dark.png");
        assert_eq!(Theme::Light.hero_photo(), "photo-light.png");
    }
}
