// SPDX-License-Identifier: PMPL-1.0-or-later

//! One locale's key -> display string mapping.

use crate::error::{CatalogError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Message keys are ASCII identifiers such as `edit-model` or
/// `models_available`.
fn key_pattern() -> &'static Regex {
    static KEY: OnceLock<Regex> = OnceLock::new();
    KEY.get_or_init(|| Regex::new(r"^[a-z0-9]+(?:[-_][a-z0-9]+)*$").expect("valid key regex"))
}

/// Whether `key` has the shape of a message key.
pub fn is_valid_key(key: &str) -> bool {
    key_pattern().is_match(key)
}

/// Messages for a single locale, ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageTable {
    messages: BTreeMap<String, String>,
}

impl MessageTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from compiled-in `(key, text)` pairs.
    ///
    /// Later duplicates overwrite earlier ones, matching object-literal
    /// semantics of the web app's dictionaries.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let messages = pairs
            .iter()
            .map(|(key, text)| (key.to_string(), text.to_string()))
            .collect();
        Self { messages }
    }

    /// Insert or replace a message.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.messages.insert(key.into(), text.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.messages
            .iter()
            .map(|(key, text)| (key.as_str(), text.as_str()))
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Reject keys that are not message identifiers. `locale` is only used
    /// for the error.
    pub fn validate_keys(&self, locale: &str) -> Result<()> {
        match self.keys().find(|key| !is_valid_key(key)) {
            Some(key) => Err(CatalogError::InvalidKey {
                locale: locale.to_string(),
                key: key.to_string(),
            }),
            None => Ok(()),
        }
    }
}

impl FromIterator<(String, String)> for MessageTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            messages: iter.into_iter().collect(),
        }
    }
}
