//! Internationalization (i18n) support for `ggt-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `rust-embed` (compile-time embedding of the `i18n/` folder)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en/ggt_ui.ftl      (fallback/reference messages)
//!   en/content.json    (list-shaped content, see `content`)
//!   es/ggt_ui.ftl
//!   es/content.json
//! ```
//!
//! Text uses Fluent messages; anything list-shaped (cards, team members,
//! projects) lives in the JSON bundle next to it and is read through
//! [`crate::content::list`].
//!
//! The active language is owned by [`LocaleContext`], which views obtain with
//! [`use_locale`]. Reading it subscribes the view, so switching language
//! re-renders every consumer.
use std::fmt;
use std::sync::Once;

use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use serde::de::DeserializeOwned;
use unic_langid::LanguageIdentifier;

use crate::core::storage::{Preferences, LANGUAGE_KEY};

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-home")
///     t!("footer-copyright", year = 2025)
///
/// Expands to `fl!(&*LOADER, ...)` so every literal lookup is checked against
/// the fallback bundle at compile time.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain: the package name with `-` replaced by `_`, which is what `fl!` derives.
/// The fallback file is `i18n/en/{DOMAIN}.ftl`.
const DOMAIN: &str = "ggt_ui";

#[derive(Embed)]
#[folder = "i18n"]
pub(crate) struct Localizations;

/// Global message loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = Language::FALLBACK
        .code()
        .parse()
        .expect("valid fallback language identifier");
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);
    loader.set_use_isolating(false);
    loader
});

static INIT: Once = Once::new();

/// Supported site languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Es];
    pub const FALLBACK: Language = Language::En;

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Language::En => "🇬🇧",
            Language::Es => "🇪🇸",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// First requested language whose primary subtag is supported.
    pub fn negotiate(requested: &[LanguageIdentifier]) -> Option<Self> {
        requested
            .iter()
            .find_map(|id| Self::from_code(id.language.as_str()))
    }

    fn identifier(self) -> LanguageIdentifier {
        match self {
            Language::En => unic_langid::langid!("en"),
            Language::Es => unic_langid::langid!("es"),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Initialize i18n with the fallback bundle (idempotent).
pub fn init() {
    INIT.call_once(|| {
        if let Err(err) = select(Language::FALLBACK) {
            warn!("[i18n] failed loading fallback bundle ({err})");
        }
    });
}

/// Load the Fluent bundle for `lang`.
pub fn select(lang: Language) -> Result<(), i18n_embed::I18nEmbedError> {
    i18n_embed::select(&*LOADER, &Localizations, &[lang.identifier()]).map(|_| ())
}

/// Resolve a message by dynamic key. Missing keys render as the key itself.
pub fn text(key: &str) -> String {
    if LOADER.has(key) {
        LOADER.get(key)
    } else {
        key.to_string()
    }
}

/// List embedded language folders (for diagnostics and tests).
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

/// Persisted choice, then the browser's languages, then the configured default.
pub fn initial_language(stored: Option<&str>, detected: &[LanguageIdentifier], default: Language) -> Language {
    stored
        .and_then(Language::from_code)
        .or_else(|| Language::negotiate(detected))
        .unwrap_or(default)
}

/// Active-language state shared through the Dioxus context.
#[derive(Clone, PartialEq)]
pub struct LocaleContext {
    lang: Signal<Language>,
    prefs: Preferences,
}

impl LocaleContext {
    /// Must run inside a component scope (it allocates a signal).
    pub fn new(prefs: Preferences, default: Language) -> Self {
        init();
        let stored = prefs.store().read(LANGUAGE_KEY);
        let lang = initial_language(stored.as_deref(), &requested_languages(), default);
        if let Err(err) = select(lang) {
            warn!("[i18n] failed selecting {lang} ({err}); continuing with fallback");
        }
        Self {
            lang: Signal::new(lang),
            prefs,
        }
    }

    /// Current language; subscribes the calling component.
    pub fn current(&self) -> Language {
        (self.lang)()
    }

    pub fn set(&mut self, lang: Language) {
        if let Err(err) = select(lang) {
            warn!("[i18n] failed selecting {lang} ({err})");
            return;
        }
        debug!("[i18n] language switched to {lang}");
        self.lang.set(lang);
        if let Err(err) = self.prefs.store().write(LANGUAGE_KEY, lang.code()) {
            warn!("[i18n] could not persist language: {err}");
        }
    }

    pub fn text(&self, key: &str) -> String {
        let _ = self.current();
        text(key)
    }

    pub fn list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        crate::content::list(self.current(), key)
    }
}

pub fn use_locale() -> LocaleContext {
    use_context::<LocaleContext>()
}
