// SPDX-License-Identifier: PMPL-1.0-or-later

//! The vault API's standard JSON response envelope.
//!
//! Failed API calls answer with an `error_code` that is a message key
//! (`"error-auth"`, `"error-fetch-models"`, ...) and an optional backend
//! detail in `message`. The admin UI shows the localized text for the code.

use crate::error::Result;
use crate::i18n::MessageCatalog;
use serde::{Deserialize, Serialize};

/// `{"success": .., "error_code": .., "error_subcode": .., "message": ..}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardResponse {
    pub success: bool,
    #[serde(default)]
    pub error_code: String,
    #[serde(default)]
    pub error_subcode: String,
    #[serde(default)]
    pub message: String,
}

impl StandardResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            ..Self::default()
        }
    }

    pub fn error(
        code: impl Into<String>,
        subcode: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            success: false,
            error_code: code.into(),
            error_subcode: subcode.into(),
            message: message.into(),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Text to show for this response in `locale`.
    ///
    /// Successful responses and failures without an error code keep their
    /// message as is. Otherwise the code is resolved through the catalog;
    /// a backend detail, when present, is appended after a colon.
    pub fn display_message(&self, catalog: &MessageCatalog, locale: &str) -> Result<String> {
        if self.success || self.error_code.is_empty() {
            return Ok(self.message.clone());
        }
        let text = catalog.resolve(locale, &self.error_code)?;
        if self.message.is_empty() {
            Ok(text.to_string())
        } else {
            Ok(format!("{}: {}", text, self.message))
        }
    }

    /// Copy of this response with `message` replaced by
    /// [`StandardResponse::display_message`].
    pub fn localize(&self, catalog: &MessageCatalog, locale: &str) -> Result<Self> {
        Ok(Self {
            message: self.display_message(catalog, locale)?,
            ..self.clone()
        })
    }
}
