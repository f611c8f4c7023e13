//! Cookie consent banner state: shown until the visitor accepts once.
//!
//! Any non-empty stored acknowledgement counts as accepted, so values written
//! by older builds keep the banner hidden.

use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

use super::storage::{PreferenceStore, Preferences, StorageError, CONSENT_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentBanner {
    Shown,
    Hidden,
}

impl ConsentBanner {
    pub fn restore(store: &dyn PreferenceStore) -> Self {
        match store.read(CONSENT_KEY) {
            Some(value) if !value.is_empty() => Self::Hidden,
            _ => Self::Shown,
        }
    }

    pub fn is_visible(self) -> bool {
        self == Self::Shown
    }

    /// `Shown -> Hidden`, recording the acceptance. The banner hides even if the write fails.
    pub fn accept(&mut self, store: &dyn PreferenceStore) -> Result<(), StorageError> {
        if *self == Self::Hidden {
            return Ok(());
        }
        *self = Self::Hidden;
        store.write(CONSENT_KEY, "true")
    }
}

/// Banner state shared through the Dioxus context.
#[derive(Clone, PartialEq)]
pub struct ConsentContext {
    banner: Signal<ConsentBanner>,
    prefs: Preferences,
}

impl ConsentContext {
    /// Must run inside a component scope (it allocates a signal).
    pub fn new(prefs: Preferences) -> Self {
        let banner = ConsentBanner::restore(prefs.store());
        Self {
            banner: Signal::new(banner),
            prefs,
        }
    }

    /// Subscribes the calling component.
    pub fn is_visible(&self) -> bool {
        (self.banner)().is_visible()
    }

    pub fn accept(&mut self) {
        let prefs = &self.prefs;
        self.banner.with_mut(|state| {
            if let Err(err) = state.accept(prefs.store()) {
                warn!("could not record cookie consent: {err}");
            }
        });
        debug!("cookie consent accepted");
    }
}

pub fn use_consent() -> ConsentContext {
    use_context::<ConsentContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;

    #[test]
    fn first_visit_shows_banner() {
        assert_eq!(ConsentBanner::restore(&MemoryStore::new()), ConsentBanner::Shown);
    }

    #[test]
    fn recorded_acceptance_hides_banner_on_next_visit() {
        let store = MemoryStore::new();
        let mut banner = ConsentBanner::restore(&store);
        banner.accept(&store).unwrap();
        assert!(!banner.is_visible());
        assert_eq!(ConsentBanner::restore(&store), ConsentBanner::Hidden);
    }

    #[test]
    fn any_stored_acknowledgement_hides_banner() {
        for value in ["true", "yes", "1"] {
            let store = MemoryStore::new().with_entry(CONSENT_KEY, value);
            assert!(!ConsentBanner::restore(&store).is_visible(), "{value}");
        }
    }

    #[test]
    fn empty_flag_keeps_banner() {
        let store = MemoryStore::new().with_entry(CONSENT_KEY, "");
        assert!(ConsentBanner::restore(&store).is_visible());
    }
}
