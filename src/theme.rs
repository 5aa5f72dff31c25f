//! Dark-mode preference state.
//!
//! The DOM side (body class and toggle icon) is applied by the page
//! controller; this module owns the two-state machine and its persistence.

use crate::storage::PrefStore;

pub const STORAGE_KEY: &str = "darkMode";
pub const BODY_CLASS: &str = "dark-mode";

const SUN_ICON: &str = "<i class=\"fas fa-sun\"></i>";
const MOON_ICON: &str = "<i class=\"fas fa-moon\"></i>";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemePref {
    Light,
    Dark,
}

impl ThemePref {
    /// Decode a stored preference; only the literal `enabled` selects dark.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        if value == Some("enabled") {
            Self::Dark
        } else {
            Self::Light
        }
    }

    #[must_use]
    pub fn stored_value(self) -> &'static str {
        match self {
            Self::Dark => "enabled",
            Self::Light => "disabled",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Toggle-button icon: sun while dark (click returns to light), moon
    /// while light.
    #[must_use]
    pub fn icon_html(self) -> &'static str {
        match self {
            Self::Dark => SUN_ICON,
            Self::Light => MOON_ICON,
        }
    }
}

/// Dark-mode state machine persisted through a [`PrefStore`].
pub struct DarkMode<S: PrefStore> {
    store: S,
    pref: ThemePref,
}

impl<S: PrefStore> DarkMode<S> {
    /// Read the saved preference; an absent or unknown value starts light.
    pub fn load(store: S) -> Self {
        let pref = ThemePref::from_stored(store.get(STORAGE_KEY).as_deref());
        Self { store, pref }
    }

    #[must_use]
    pub fn pref(&self) -> ThemePref {
        self.pref
    }

    /// Flip the state, persist it, and return the new preference.
    pub fn toggle(&mut self) -> ThemePref {
        self.pref = self.pref.toggled();
        self.store.set(STORAGE_KEY, self.pref.stored_value());
        self.pref
    }
}
