//! Key-Value Line Parser
//!
//! Extracts loose `key: value` / `key = value` pairs from README text,
//! one per line, and provides case-insensitive substring lookups over them.
//!
//! The store is plain data; lookups are free functions taking the store.

use serde::Serialize;

use super::link::find_first_link;
use crate::probe::{LinkProber, ProbeTransport, ProbedLink};

/// One `key<sep>value` line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyValueEntry {
    pub key: String,
    pub value: String,
}

/// Entries in line order; duplicate keys are kept
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeyValueStore {
    entries: Vec<KeyValueEntry>,
}

impl KeyValueStore {
    pub fn entries(&self) -> &[KeyValueEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Split `text` into lines and keep every line holding `:` or `=`.
///
/// The first `:` wins; `=` is only used when the line has no `:`.
pub fn parse(text: &str) -> KeyValueStore {
    let entries = text
        .split('\n')
        .filter_map(|line| {
            let idx = line.find(':').or_else(|| line.find('='))?;
            Some(KeyValueEntry {
                key: line[..idx].trim().to_string(),
                value: line[idx + 1..].trim().to_string(),
            })
        })
        .collect();

    KeyValueStore { entries }
}

/// First entry whose key contains `substring`, ignoring case and surrounding whitespace
pub fn find<'a>(store: &'a KeyValueStore, substring: &str) -> Option<&'a KeyValueEntry> {
    let needle = substring.trim().to_lowercase();
    store
        .entries
        .iter()
        .find(|entry| entry.key.to_lowercase().contains(&needle))
}

/// Value of the first matching entry
pub fn get<'a>(store: &'a KeyValueStore, substring: &str) -> Option<&'a str> {
    find(store, substring).map(|entry| entry.value.as_str())
}

/// First URL inside the value of the first matching entry
pub fn get_link(store: &KeyValueStore, substring: &str) -> Option<String> {
    find(store, substring).and_then(|entry| find_first_link(&entry.value))
}

/// As [`get_link`], then probe the URL for liveness
pub async fn get_link_with_info<T: ProbeTransport>(
    store: &KeyValueStore,
    substring: &str,
    prober: &LinkProber<T>,
) -> Option<ProbedLink> {
    let url = get_link(store, substring)?;
    Some(prober.probe_link(&url).await)
}
