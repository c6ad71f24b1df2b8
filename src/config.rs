// SPDX-License-Identifier: PMPL-1.0-or-later

//! Catalog sources and settings.
//!
//! A catalog file is the same nested mapping the web app ships,
//! `locale -> (key -> text)`, written as JSON or YAML:
//!
//! ```yaml
//! en:
//!   model: Model
//! zh:
//!   model: 机型
//! ```

use crate::error::{CatalogError, Result};
use crate::i18n::{Locale, MessageCatalog, MessageTable};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Yaml,
}

impl SourceFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Some(SourceFormat::Json),
            "yaml" | "yml" => Some(SourceFormat::Yaml),
            _ => None,
        }
    }

    /// Format implied by a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        Self::parse(ext).ok_or_else(|| CatalogError::UnsupportedFormat(ext.to_string()))
    }

    fn decode<T: DeserializeOwned>(self, raw: &str) -> Result<T> {
        match self {
            SourceFormat::Json => Ok(serde_json::from_str(raw)?),
            SourceFormat::Yaml => Ok(serde_yaml::from_str(raw)?),
        }
    }
}

/// Per-locale tables read from a file or string, not yet a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogSource {
    tables: BTreeMap<Locale, MessageTable>,
}

impl CatalogSource {
    pub fn from_path(path: &Path) -> Result<Self> {
        let format = SourceFormat::from_path(path)?;
        let raw = fs::read_to_string(path)?;
        let source = Self::from_str_as(&raw, format)?;
        info!(
            path = %path.display(),
            locales = source.tables.len(),
            "loaded catalog source"
        );
        Ok(source)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        Self::from_str_as(raw, SourceFormat::Json)
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        Self::from_str_as(raw, SourceFormat::Yaml)
    }

    fn from_str_as(raw: &str, format: SourceFormat) -> Result<Self> {
        let source: Self = format.decode(raw)?;
        for (locale, table) in &source.tables {
            table.validate_keys(locale.as_str())?;
        }
        Ok(source)
    }

    pub fn tables(&self) -> &BTreeMap<Locale, MessageTable> {
        &self.tables
    }

    /// Build a catalog honouring `settings`.
    pub fn into_catalog(self, settings: &CatalogSettings) -> Result<MessageCatalog> {
        let default = settings.default_locale.clone();
        if settings.strict {
            MessageCatalog::new_strict(self.tables, default)
        } else {
            MessageCatalog::new(self.tables, default)
        }
    }
}

impl From<BTreeMap<Locale, MessageTable>> for CatalogSource {
    fn from(tables: BTreeMap<Locale, MessageTable>) -> Self {
        Self { tables }
    }
}

/// How a catalog is assembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogSettings {
    /// Locale every lookup falls back to.
    pub default_locale: Locale,
    /// Refuse catalogs in which a locale misses default-locale keys.
    pub strict: bool,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            default_locale: Locale::default(),
            strict: false,
        }
    }
}

impl CatalogSettings {
    pub fn load(path: &Path) -> Result<Self> {
        let format = SourceFormat::from_path(path)?;
        let raw = fs::read_to_string(path)?;
        format.decode(&raw)
    }
}

/// Catalog from `path`, or from the bundled tables when `path` is `None`.
pub fn load_catalog(path: Option<&Path>, settings: &CatalogSettings) -> Result<MessageCatalog> {
    let source = match path {
        Some(path) => CatalogSource::from_path(path)?,
        None => CatalogSource::from(crate::i18n::bundled_tables()),
    };
    source.into_catalog(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            SourceFormat::from_path(Path::new("messages.json")).unwrap(),
            SourceFormat::Json
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("messages.YML")).unwrap(),
            SourceFormat::Yaml
        );
        assert!(matches!(
            SourceFormat::from_path(Path::new("messages.js")),
            Err(CatalogError::UnsupportedFormat(ext)) if ext == "js"
        ));
        assert!(matches!(
            SourceFormat::from_path(Path::new("messages")),
            Err(CatalogError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn json_source() {
        let source =
            CatalogSource::from_json_str(r#"{"en": {"model": "Model"}, "zh": {"model": "机型"}}"#)
                .unwrap();
        let catalog = source.into_catalog(&CatalogSettings::default()).unwrap();
        assert_eq!(catalog.resolve("zh", "model").unwrap(), "机型");
    }

    #[test]
    fn yaml_source() {
        let source =
            CatalogSource::from_yaml_str("en:\n  brand: Brand\nzh:\n  brand: 牌\n").unwrap();
        assert_eq!(source.tables().len(), 2);
    }

    #[test]
    fn bad_key_rejected() {
        let err = CatalogSource::from_json_str(r#"{"en": {"Edit Model": "Edit Model"}}"#)
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidKey { .. }));
    }

    #[test]
    fn empty_locale_rejected() {
        let err = CatalogSource::from_json_str(r#"{"": {"model": "Model"}}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn settings_default_locale_must_have_table() {
        let source = CatalogSource::from_json_str(r#"{"zh": {"model": "机型"}}"#).unwrap();
        let err = source
            .into_catalog(&CatalogSettings::default())
            .unwrap_err();
        assert!(matches!(err, CatalogError::MissingDefaultTable { .. }));
    }

    #[test]
    fn settings_file_round_trip() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "default_locale: zh\nstrict: true").unwrap();
        let settings = CatalogSettings::load(file.path()).unwrap();
        assert_eq!(settings.default_locale.as_str(), "zh");
        assert!(settings.strict);
    }

    #[test]
    fn settings_reject_unknown_fields() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"default": "zh"}}"#).unwrap();
        assert!(CatalogSettings::load(file.path()).is_err());
    }

    #[test]
    fn bundled_when_no_path() {
        let catalog = load_catalog(None, &CatalogSettings::default()).unwrap();
        assert_eq!(catalog.resolve("en", "title").unwrap(), "Serial Vault");
    }
}
