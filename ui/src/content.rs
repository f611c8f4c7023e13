//! List-shaped localized content (cards, team, projects) read from `i18n/<code>/content.json`.
//!
//! Each bundle is parsed once. Keys are dotted paths into the document
//! (`"about.team.members"`); a key missing from the active language falls back
//! to the English bundle, and a key missing everywhere yields an empty list.

use std::collections::HashMap;

use dioxus::logger::tracing::warn;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::i18n::{Language, Localizations};

const CONTENT_FILE: &str = "content.json";

static BUNDLES: Lazy<HashMap<Language, Value>> = Lazy::new(|| {
    Language::ALL
        .into_iter()
        .filter_map(|lang| load_bundle(lang).map(|doc| (lang, doc)))
        .collect()
});

fn load_bundle(lang: Language) -> Option<Value> {
    let path = format!("{}/{CONTENT_FILE}", lang.code());
    let file = Localizations::get(&path)?;
    match serde_json::from_slice(&file.data) {
        Ok(doc) => Some(doc),
        Err(err) => {
            warn!("[i18n] could not parse {path}: {err}");
            None
        }
    }
}

fn lookup(lang: Language, key: &str) -> Option<&'static Value> {
    key.split('.')
        .try_fold(BUNDLES.get(&lang)?, |node, segment| node.get(segment))
}

/// Typed list for `key` in `lang`.
pub fn list<T: DeserializeOwned>(lang: Language, key: &str) -> Vec<T> {
    let Some(node) = lookup(lang, key).or_else(|| lookup(Language::FALLBACK, key)) else {
        warn!("[i18n] missing list content `{key}`");
        return Vec::new();
    };
    match Vec::<T>::deserialize(node) {
        Ok(items) => items,
        Err(err) => {
            warn!("[i18n] list content `{key}` has an unexpected shape: {err}");
            Vec::new()
        }
    }
}

/// Service card on Home and Services.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceCard {
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Portfolio demo tile.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PortfolioDemo {
    pub title: String,
    pub image: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeamMember {
    pub photo: String,
    pub name: String,
    pub job: String,
    pub description: String,
}
