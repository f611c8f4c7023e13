//! Dark/light preference and the palette derived from it.
//!
//! `ThemeContext` is built once at the application root (with the injected
//! [`Preferences`]) and shared through the Dioxus context; views read the
//! palette from it and re-render when the flag changes.

use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

use super::platform;
use super::storage::{PreferenceStore, Preferences, StorageError, DARK_MODE_KEY};

/// Named colors consumed by inline styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub input_bg: &'static str,
    pub text: &'static str,
    pub border: &'static str,
    pub button: &'static str,
    pub heading: &'static str,
    pub card_bg: &'static str,
    pub icon: &'static str,
}

impl Palette {
    pub const DARK: Palette = Palette {
        input_bg: "#1f2937",
        text: "#f9fafb",
        border: "#374151",
        button: "#3b82f6",
        heading: "#f9fafb",
        card_bg: "#111827",
        icon: "#f9fafb",
    };

    pub const LIGHT: Palette = Palette {
        input_bg: "#f3f4f6",
        text: "#111827",
        border: "#d1d5db",
        button: "#3b82f6",
        heading: "#111827",
        card_bg: "#ffffff",
        icon: "#111827",
    };

    pub const fn for_mode(dark: bool) -> Palette {
        if dark {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }

    /// `background-color` + `color` pair used by most surfaces.
    pub fn surface_style(&self) -> String {
        format!("background-color: {}; color: {};", self.card_bg, self.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePreference {
    pub dark: bool,
}

impl ThemePreference {
    /// Read the persisted flag; absent or unparsable values fall back to `default_dark`.
    pub fn restore(store: &dyn PreferenceStore, default_dark: bool) -> Self {
        let dark = match store.read(DARK_MODE_KEY).as_deref() {
            Some("true") => true,
            Some("false") => false,
            _ => default_dark,
        };
        Self { dark }
    }

    pub fn toggled(self) -> Self {
        Self { dark: !self.dark }
    }

    pub fn palette(self) -> Palette {
        Palette::for_mode(self.dark)
    }

    pub fn persist(self, store: &dyn PreferenceStore) -> Result<(), StorageError> {
        store.write(DARK_MODE_KEY, if self.dark { "true" } else { "false" })
    }
}

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    preference: Signal<ThemePreference>,
    prefs: Preferences,
}

impl ThemeContext {
    /// Must run inside a component scope (it allocates a signal).
    pub fn new(prefs: Preferences, default_dark: bool) -> Self {
        let preference = ThemePreference::restore(prefs.store(), default_dark);
        platform::set_document_dark_class(preference.dark);
        Self {
            preference: Signal::new(preference),
            prefs,
        }
    }

    pub fn is_dark(&self) -> bool {
        (self.preference)().dark
    }

    pub fn palette(&self) -> Palette {
        (self.preference)().palette()
    }

    pub fn toggle(&mut self) {
        let next = self.preference.peek().toggled();
        self.preference.set(next);
        platform::set_document_dark_class(next.dark);
        debug!("theme toggled (dark={})", next.dark);
        if let Err(err) = next.persist(self.prefs.store()) {
            warn!("could not persist theme preference: {err}");
        }
    }
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}
