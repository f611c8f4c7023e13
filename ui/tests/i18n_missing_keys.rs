//! Locale parity checks over the embedded bundles.
//!
//! Every locale must define exactly the message IDs of the fallback (`en`)
//! `ggt_ui.ftl`, without duplicates, and its `content.json` must have the same
//! shape (same keys, same list lengths) as the English one.
//!
//! Adding a locale: create `ui/i18n/<code>/ggt_ui.ftl` and
//! `ui/i18n/<code>/content.json`, then register both in `LOCALES`.

use std::collections::BTreeSet;

use serde_json::Value;

const FALLBACK: (&str, &str, &str) = (
    "en",
    include_str!("../i18n/en/ggt_ui.ftl"),
    include_str!("../i18n/en/content.json"),
);

const LOCALES: &[(&str, &str, &str)] = &[(
    "es",
    include_str!("../i18n/es/ggt_ui.ftl"),
    include_str!("../i18n/es/content.json"),
)];

/// Message IDs in definition order. Comments, terms, attributes and
/// continuation lines are skipped.
fn message_ids(src: &str) -> Vec<&str> {
    src.lines()
        .filter(|line| !line.starts_with([' ', '\t', '#', '-', '.']))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && !id.contains(char::is_whitespace))
        .collect()
}

fn duplicates(ids: &[&str]) -> BTreeSet<String> {
    let mut seen = BTreeSet::new();
    ids.iter()
        .filter(|id| !seen.insert(**id))
        .map(|id| id.to_string())
        .collect()
}

#[test]
fn no_locale_defines_a_message_twice() {
    for (code, ftl, _) in std::iter::once(&FALLBACK).chain(LOCALES) {
        let dups = duplicates(&message_ids(ftl));
        assert!(dups.is_empty(), "{code}: duplicate message IDs {dups:?}");
    }
}

#[test]
fn every_locale_matches_fallback_messages() {
    let reference: BTreeSet<_> = message_ids(FALLBACK.1).into_iter().collect();
    assert!(!reference.is_empty(), "fallback bundle has no messages");

    let mut failures = Vec::new();
    for (code, ftl, _) in LOCALES {
        let ids: BTreeSet<_> = message_ids(ftl).into_iter().collect();
        let missing: Vec<_> = reference.difference(&ids).collect();
        let extra: Vec<_> = ids.difference(&reference).collect();
        if !missing.is_empty() || !extra.is_empty() {
            failures.push(format!("{code}: missing {missing:?}, not in fallback {extra:?}"));
        }
    }
    assert!(
        failures.is_empty(),
        "Translation parity check failed:\n  {}\nHint: copy the missing keys from en, then translate.",
        failures.join("\n  ")
    );
}

#[test]
fn content_bundles_share_shape() {
    let reference = shape_of(FALLBACK.0, FALLBACK.2);
    for (code, _, json) in LOCALES {
        let shape = shape_of(code, json);
        let missing: Vec<_> = reference.difference(&shape).collect();
        let extra: Vec<_> = shape.difference(&reference).collect();
        assert!(
            missing.is_empty() && extra.is_empty(),
            "{code}/content.json shape mismatch\n  missing: {missing:?}\n  extra: {extra:?}"
        );
    }
}

fn shape_of(code: &str, json: &str) -> BTreeSet<String> {
    let doc: Value = serde_json::from_str(json)
        .unwrap_or_else(|err| panic!("{code}/content.json does not parse: {err}"));
    let mut out = BTreeSet::new();
    collect_shape(&doc, "", &mut out);
    out
}

/// Dotted paths of every object key plus the length of every array.
fn collect_shape(node: &Value, prefix: &str, out: &mut BTreeSet<String>) {
    match node {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                out.insert(path.clone());
                collect_shape(child, &path, out);
            }
        }
        Value::Array(items) => {
            out.insert(format!("{prefix}[{}]", items.len()));
            for (idx, item) in items.iter().enumerate() {
                collect_shape(item, &format!("{prefix}[{idx}]"), out);
            }
        }
        _ => {}
    }
}
