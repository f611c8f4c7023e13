//! Persisted browser state (local storage) behind a small trait so views stay testable natively.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

/// Theme flag, `"true"` / `"false"`.
pub const DARK_MODE_KEY: &str = "darkMode";
/// Selected language code, `"en"` / `"es"`.
pub const LANGUAGE_KEY: &str = "appLanguage";
/// Cookie banner acknowledgement. Written as `"true"`; any non-empty value counts.
pub const CONSENT_KEY: &str = "privacyAccepted";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("write to `{key}` rejected: {reason}")]
    Rejected { key: String, reason: String },
}

/// Minimal key/value persistence used for preferences.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process store. Native builds and tests use it; nothing survives a restart.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `window.localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
impl BrowserStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for BrowserStore {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| StorageError::Rejected {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }
}

/// Shared handle to the active store, provided to components through context.
#[derive(Clone)]
pub struct Preferences(Rc<dyn PreferenceStore>);

impl Preferences {
    pub fn new(store: impl PreferenceStore + 'static) -> Self {
        Self(Rc::new(store))
    }

    /// Local storage in the browser, an in-memory map elsewhere.
    pub fn for_platform() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(BrowserStore)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::new(MemoryStore::new())
        }
    }

    pub fn store(&self) -> &dyn PreferenceStore {
        &*self.0
    }
}

impl PartialEq for Preferences {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
