//! Light/dark theme preference.
//!
//! A saved preference always wins; without one the system color-scheme
//! query decides, and keeps deciding as the system setting changes.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Local-storage key holding `"light"` or `"dark"`.
pub const STORAGE_KEY: &str = "theme";

/// Class applied to `<html>` while dark.
pub const DARK_CLASS: &str = "theme-dark";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Icon class for the toggle button: offer the sun while dark.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            ThemeMode::Light => "bx bx-moon",
            ThemeMode::Dark => "bx bx-sun",
        }
    }

    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Usando tema claro (alternar)",
            ThemeMode::Dark => "Usando tema escuro (alternar)",
        }
    }
}

/// Resolve the effective theme from a stored value and the system preference.
#[must_use]
pub fn resolve(saved: Option<&str>, system_prefers_dark: bool) -> ThemeMode {
    match saved.and_then(ThemeMode::parse) {
        Some(mode) => mode,
        None if system_prefers_dark => ThemeMode::Dark,
        None => ThemeMode::Light,
    }
}

/// Whether a system color-scheme change should be applied.
#[must_use]
pub fn follows_system(saved: Option<&str>) -> bool {
    saved.is_none_or(str::is_empty)
}
