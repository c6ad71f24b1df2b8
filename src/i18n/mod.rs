// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale-aware message resolution for the Serial Vault admin console.
//!
//! ## Bundled languages
//!
//! | Code | Language | Native name |
//! |------|----------|-------------|
//! | en   | English  | English     |
//! | zh   | Chinese  | 中文         |
//!
//! ## Design
//!
//! Message keys are flat, hyphen- or underscore-separated identifiers:
//! `"edit-model"`, `"models_available"`, `"error-auth"`. Lookups fall back
//! to the default locale (English) when a locale or key is missing. If the
//! key is missing there too, the key itself is returned so the gap is
//! visible on screen (fail-open, never blank).
//!
//! Catalogs are built once and never mutated; [`CatalogHandle`] swaps in
//! a new one when translations are reloaded.

pub mod audit;
mod bundled;
mod catalog;
mod handle;
mod locale;
mod table;

pub use audit::{audit, is_untranslated, AuditReport, LocaleAudit};
pub use bundled::{bundled_tables, BUNDLED_LOCALES};
pub use catalog::{MessageCatalog, Resolution, Source};
pub use handle::CatalogHandle;
pub use locale::{
    is_valid_iso639_1, language_name, native_name, negotiate, requested_from_env, Locale,
    DEFAULT_LOCALE, LANG_ENV,
};
pub use table::{is_valid_key, MessageTable};
