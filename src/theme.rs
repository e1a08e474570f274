//! Light/dark theme resolution and application.
//!
//! Reads the explicit preference from the [`PreferenceStore`] and applies a
//! `data-theme` attribute to the `<html>` element. Only explicit user toggles
//! are written back; a theme derived from the OS preference is never persisted,
//! so OS changes keep flowing through until the user picks a theme.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownTheme;
use crate::page::{Page, PreferenceStore};

/// Media query for the OS dark color scheme.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Root attribute read by the stylesheet.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Visual mode of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// Accessible label for the toggle control, announcing the next action.
    #[must_use]
    pub fn toggle_label(self) -> String {
        format!("Switch to {} mode", self.toggled().as_str())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}

/// The persisted explicit preference, if one is stored and valid.
#[must_use]
pub fn stored_preference<S: PreferenceStore>(store: &S, key: &str) -> Option<Theme> {
    let raw = store.get(key)?;
    match raw.parse() {
        Ok(theme) => Some(theme),
        Err(err) => {
            log::debug!("ignoring stored theme: {err}");
            None
        }
    }
}

/// Resolve the startup theme: stored preference, then OS preference, then light.
#[must_use]
pub fn resolve_initial(stored: Option<Theme>, system_prefers_dark: bool) -> Theme {
    stored.unwrap_or_else(|| Theme::from_system(system_prefers_dark))
}

/// Reflect `theme` on the root element and the toggle control's label.
pub fn apply<P: Page>(page: &mut P, toggle: Option<&P::Element>, theme: Theme) {
    if let Some(root) = page.root() {
        page.set_attribute(&root, THEME_ATTRIBUTE, theme.as_str());
    }
    if let Some(toggle) = toggle {
        page.set_attribute(toggle, "aria-label", &theme.toggle_label());
    }
}
