// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error type shared by the catalog, its sources, and the audit.
//!
//! Missing translations are never errors: lookups fall back instead. The
//! variants here are either caller bugs (empty arguments) or broken
//! configuration discovered while building a catalog.

use thiserror::Error;

/// Everything that can go wrong while building or querying a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// An empty locale or key was passed to a lookup.
    #[error("invalid argument: {what} must not be empty")]
    InvalidArgument { what: &'static str },

    /// The default locale has no table registered.
    #[error("no message table registered for default locale '{locale}'")]
    MissingDefaultTable { locale: String },

    /// The default locale's table exists but holds no messages.
    #[error("message table for default locale '{locale}' is empty")]
    EmptyDefaultTable { locale: String },

    /// A locale identifier is malformed.
    #[error("invalid locale identifier '{0}'")]
    InvalidLocale(String),

    /// A message key does not have the expected shape.
    #[error("invalid message key '{key}' in locale '{locale}'")]
    InvalidKey { locale: String, key: String },

    /// Strict construction found locales missing default-locale keys.
    #[error("catalog is incomplete: {}", .locales.join(", "))]
    Incomplete { locales: Vec<String> },

    /// Source file extension is not a known catalog format.
    #[error("unsupported catalog format '{0}' (expected json, yaml or yml)")]
    UnsupportedFormat(String),

    #[error("reading catalog source: {0}")]
    Io(#[from] std::io::Error),

    #[error("parsing JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("parsing YAML catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
