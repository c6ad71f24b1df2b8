// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serial Vault messages: locale-aware labels and error strings for the
//! Serial Vault admin console.
//!
//! The admin console renders every label and every API error through a
//! per-locale dictionary. This crate owns that dictionary layer; the
//! signing service, its HTTP API and the browser UI only consume it.
//!
//! PIECES:
//! 1. **i18n**: the immutable [`i18n::MessageCatalog`] with its
//!    default-locale fallback chain, the bundled `en`/`zh` tables, the
//!    completeness audit and the hot-swappable [`i18n::CatalogHandle`].
//! 2. **config**: catalog files (JSON/YAML) and catalog settings.
//! 3. **response**: the API's standard response envelope, whose error
//!    codes are message keys.
//! 4. **report** / **diagnostics**: export, audit printing and the
//!    `check` command used by the `vault-messages` binary.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod report;
pub mod response;

pub use error::{CatalogError, Result};
pub use i18n::{Locale, MessageCatalog, MessageTable};
