//! Light/dark theme selection with a persisted preference.
//!
//! The stored preference wins over the OS `prefers-color-scheme` query, and
//! the OS query wins over the light default. Storage is reached through
//! [`PreferenceStore`] so the decision logic runs without a browser; the
//! `localStorage` implementation lives in [`crate::dom`].
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. A store that cannot be read behaves like an
//! empty one, and a failed write only costs the preference on next load.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// The two page themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Attribute and storage value for this theme.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything unrecognized counts as no preference.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Key/value persistence for the theme preference.
pub trait PreferenceStore {
    /// The stored value, or `None` when absent or unreadable.
    fn load(&self, key: &str) -> Option<String>;

    /// Persist `value` under `key`. Returns `false` if the write failed.
    fn save(&mut self, key: &str, value: &str) -> bool;
}

/// Holds the active theme and knows how to persist changes to it.
#[derive(Clone, Debug)]
pub struct ThemeController {
    key: String,
    theme: Theme,
}

impl ThemeController {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into(), theme: Theme::Light }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Resolve the theme at page load.
    pub fn init(&mut self, store: &impl PreferenceStore, prefers_dark: bool) -> Theme {
        let stored = store.load(&self.key).as_deref().and_then(Theme::parse);
        self.theme = match stored {
            Some(theme) => theme,
            None if prefers_dark => Theme::Dark,
            None => Theme::Light,
        };
        self.theme
    }

    /// Flip the theme and persist the new value.
    pub fn toggle(&mut self, store: &mut impl PreferenceStore) -> Theme {
        self.theme = self.theme.toggled();
        if !store.save(&self.key, self.theme.as_str()) {
            log::warn!("theme: could not persist preference {:?}", self.theme.as_str());
        }
        self.theme
    }
}
