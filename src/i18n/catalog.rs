// SPDX-License-Identifier: PMPL-1.0-or-later

//! Message catalog for the Serial Vault admin console.
//!
//! Holds one [`MessageTable`] per locale and resolves `(locale, key)` to
//! display text. The catalog is immutable once built, so it is `Send +
//! Sync` and can be shared between rendering contexts without locking.
//!
//! ## Fallback policy
//!
//! 1. An unregistered locale falls back to the default locale.
//! 2. A key missing from the resolved table falls back to the default
//!    locale's table.
//! 3. A key missing from the default locale too resolves to the key itself,
//!    so gaps show up in the rendered UI instead of as blank labels.
//!
//! Empty locales or keys are caller bugs and fail with
//! [`CatalogError::InvalidArgument`].

use super::audit;
use super::locale::Locale;
use super::table::MessageTable;
use crate::error::{CatalogError, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

/// Which step of the fallback chain produced a resolved message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Source {
    /// Found in the requested locale.
    Exact,
    /// Requested locale is not registered; found in the default locale.
    DefaultLocale,
    /// Requested locale lacks the key; found in the default locale.
    DefaultKey,
    /// Missing everywhere; the text is the key itself.
    Placeholder,
}

impl Source {
    pub fn is_fallback(self) -> bool {
        self != Source::Exact
    }
}

/// A resolved message together with where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution<'a> {
    pub text: &'a str,
    /// Locale whose table supplied `text`; `None` for placeholders.
    pub locale: Option<&'a str>,
    pub source: Source,
}

/// Immutable per-locale message tables plus the default locale.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    tables: BTreeMap<Locale, MessageTable>,
    locales: BTreeSet<Locale>,
    default_locale: Locale,
    fingerprint: String,
}

impl MessageCatalog {
    /// Build a catalog from per-locale tables.
    ///
    /// Fails if the default locale has no table or an empty one; a catalog
    /// is never handed out half-configured.
    pub fn new(tables: BTreeMap<Locale, MessageTable>, default_locale: Locale) -> Result<Self> {
        match tables.get(&default_locale) {
            None => {
                return Err(CatalogError::MissingDefaultTable {
                    locale: default_locale.to_string(),
                })
            }
            Some(table) if table.is_empty() => {
                return Err(CatalogError::EmptyDefaultTable {
                    locale: default_locale.to_string(),
                })
            }
            Some(_) => {}
        }

        let locales = tables.keys().cloned().collect();
        let fingerprint = fingerprint_tables(&tables);
        debug!(
            default = %default_locale,
            locales = tables.len(),
            %fingerprint,
            "message catalog built"
        );

        Ok(Self {
            tables,
            locales,
            default_locale,
            fingerprint,
        })
    }

    /// Like [`MessageCatalog::new`], but also refuses catalogs in which any
    /// locale lacks a key the default locale defines.
    pub fn new_strict(
        tables: BTreeMap<Locale, MessageTable>,
        default_locale: Locale,
    ) -> Result<Self> {
        let catalog = Self::new(tables, default_locale)?;
        let report = audit::audit(&catalog);
        if report.is_complete() {
            Ok(catalog)
        } else {
            Err(CatalogError::Incomplete {
                locales: report.incomplete_locales(),
            })
        }
    }

    /// Catalog over the tables compiled into the crate, English default.
    pub fn bundled() -> Result<Self> {
        super::bundled::bundled_catalog()
    }

    /// Resolve `key` for `locale` following the fallback policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use serial_vault_messages::i18n::MessageCatalog;
    /// let catalog = MessageCatalog::bundled().unwrap();
    /// assert_eq!(catalog.resolve("en", "model").unwrap(), "Model");
    /// assert_eq!(catalog.resolve("zh", "model").unwrap(), "机型");
    /// assert_eq!(
    ///     catalog.resolve("zh", "users_available").unwrap(),
    ///     "The following users are available"
    /// );
    /// ```
    pub fn resolve<'a>(&'a self, locale: &str, key: &'a str) -> Result<&'a str> {
        self.resolve_detailed(locale, key)
            .map(|resolution| resolution.text)
    }

    /// [`MessageCatalog::resolve`], also reporting which fallback step
    /// produced the text.
    pub fn resolve_detailed<'a>(&'a self, locale: &str, key: &'a str) -> Result<Resolution<'a>> {
        if locale.is_empty() {
            return Err(CatalogError::InvalidArgument { what: "locale" });
        }
        if key.is_empty() {
            return Err(CatalogError::InvalidArgument { what: "key" });
        }

        let registered = match self.tables.get_key_value(locale) {
            Some((found, table)) => {
                if let Some(text) = table.get(key) {
                    return Ok(Resolution {
                        text,
                        locale: Some(found.as_str()),
                        source: Source::Exact,
                    });
                }
                true
            }
            None => false,
        };

        if let Some(text) = self.default_table().get(key) {
            let source = if registered {
                debug!(locale, key, "key missing in locale, using default");
                Source::DefaultKey
            } else {
                debug!(
                    locale,
                    default = %self.default_locale,
                    "locale not registered, using default"
                );
                Source::DefaultLocale
            };
            return Ok(Resolution {
                text,
                locale: Some(self.default_locale.as_str()),
                source,
            });
        }

        warn!(locale, key, "missing translation key");
        Ok(Resolution {
            text: key,
            locale: None,
            source: Source::Placeholder,
        })
    }

    /// Locales registered at construction.
    pub fn supported_locales(&self) -> &BTreeSet<Locale> {
        &self.locales
    }

    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    pub fn table(&self, locale: &str) -> Option<&MessageTable> {
        self.tables.get(locale)
    }

    /// The default locale's table; present by construction.
    pub fn default_table(&self) -> &MessageTable {
        &self.tables[&self.default_locale]
    }

    pub fn tables(&self) -> &BTreeMap<Locale, MessageTable> {
        &self.tables
    }

    /// Whether `locale` itself (without fallback) defines `key`.
    pub fn contains(&self, locale: &str, key: &str) -> bool {
        self.table(locale).is_some_and(|table| table.contains(key))
    }

    /// SHA-256 over the sorted `(locale, key, text)` triples, hex encoded.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

fn fingerprint_tables(tables: &BTreeMap<Locale, MessageTable>) -> String {
    let mut hasher = Sha256::new();
    for (locale, table) in tables {
        for (key, text) in table.iter() {
            // NUL separators keep ("a", "bc") and ("ab", "c") apart.
            for part in [locale.as_str(), key, text] {
                hasher.update(part.as_bytes());
                hasher.update([0u8]);
            }
        }
    }
    hex::encode(hasher.finalize())
}
