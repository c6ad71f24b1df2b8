// SPDX-License-Identifier: PMPL-1.0-or-later

//! Completeness audit over a catalog.
//!
//! Every key the default locale defines should exist in every other
//! locale. The audit lists what is missing, what exists only outside the
//! default locale, and which values still carry the web app's `<...>`
//! "not translated yet" marker.

use super::catalog::MessageCatalog;
use super::table::MessageTable;
use chrono::Utc;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

fn untranslated_marker() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| Regex::new(r"^<[^<>].*>$").expect("valid marker regex"))
}

/// Whether a value is still the `<English text>` stand-in.
pub fn is_untranslated(text: &str) -> bool {
    untranslated_marker().is_match(text)
}

/// Findings for one non-default locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleAudit {
    pub locale: String,
    pub total_keys: usize,
    /// Default-locale keys absent here.
    pub missing: Vec<String>,
    /// Keys defined here but not in the default locale.
    pub extra: Vec<String>,
    /// Default-locale keys whose value here is still wrapped in `<...>`.
    pub untranslated: Vec<String>,
}

impl LocaleAudit {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Share of default-locale keys this locale translates for real.
    pub fn coverage(&self, default_keys: usize) -> f64 {
        if default_keys == 0 {
            return 1.0;
        }
        let translated = default_keys
            .saturating_sub(self.missing.len())
            .saturating_sub(self.untranslated.len());
        translated as f64 / default_keys as f64
    }
}

/// Result of auditing a whole catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    pub generated_at: String,
    pub default_locale: String,
    pub default_keys: usize,
    pub fingerprint: String,
    pub locales: Vec<LocaleAudit>,
}

impl AuditReport {
    /// No locale misses a default-locale key. Untranslated markers and
    /// extra keys do not count against completeness.
    pub fn is_complete(&self) -> bool {
        self.locales.iter().all(LocaleAudit::is_complete)
    }

    pub fn incomplete_locales(&self) -> Vec<String> {
        self.locales
            .iter()
            .filter(|entry| !entry.is_complete())
            .map(|entry| entry.locale.clone())
            .collect()
    }

    pub fn locale(&self, code: &str) -> Option<&LocaleAudit> {
        self.locales.iter().find(|entry| entry.locale == code)
    }
}

/// Compare every non-default locale against the default locale.
pub fn audit(catalog: &MessageCatalog) -> AuditReport {
    let default = catalog.default_table();
    let locales = catalog
        .tables()
        .iter()
        .filter(|(locale, _)| *locale != catalog.default_locale())
        .map(|(locale, table)| audit_table(locale.as_str(), table, default))
        .collect();

    AuditReport {
        generated_at: Utc::now().to_rfc3339(),
        default_locale: catalog.default_locale().to_string(),
        default_keys: default.len(),
        fingerprint: catalog.fingerprint().to_string(),
        locales,
    }
}

fn audit_table(locale: &str, table: &MessageTable, default: &MessageTable) -> LocaleAudit {
    let missing = default
        .keys()
        .filter(|key| !table.contains(key))
        .map(str::to_string)
        .collect();
    let extra = table
        .keys()
        .filter(|key| !default.contains(key))
        .map(str::to_string)
        .collect();
    let untranslated = table
        .iter()
        .filter(|(key, text)| default.contains(key) && is_untranslated(text))
        .map(|(key, _)| key.to_string())
        .collect();

    LocaleAudit {
        locale: locale.to_string(),
        total_keys: table.len(),
        missing,
        extra,
        untranslated,
    }
}
