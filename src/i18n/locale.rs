// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale identifiers, ISO 639-1 metadata, and locale negotiation.
//!
//! A [`Locale`] is an opaque identifier: the catalog never rewrites it.
//! Only [`negotiate`], [`Locale::from_env`] and [`Locale::from_system_tag`]
//! reduce tags such as `zh_CN.UTF-8` to their primary language subtag.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

use super::catalog::MessageCatalog;

/// Locale used when nothing else is requested or registered.
pub const DEFAULT_LOCALE: &str = "en";

/// Environment variable checked before `LANG` by [`Locale::from_env`].
pub const LANG_ENV: &str = "SERIAL_VAULT_LANG";

/// Validated locale identifier (e.g. `"en"`, `"zh"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(pub(crate) String);

impl Locale {
    /// Build a locale, rejecting empty identifiers and embedded whitespace.
    pub fn parse(value: &str) -> Result<Self> {
        if value.is_empty() {
            return Err(CatalogError::InvalidArgument { what: "locale" });
        }
        if value.chars().any(char::is_whitespace) {
            return Err(CatalogError::InvalidLocale(value.to_string()));
        }
        Ok(Locale(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Primary language subtag: `zh_CN.UTF-8` -> `zh`, `en-GB` -> `en`.
    pub fn primary_subtag(&self) -> &str {
        self.0
            .split(['_', '-', '.', '@'])
            .next()
            .unwrap_or(self.0.as_str())
    }

    /// Locale requested by the environment.
    ///
    /// Priority: `SERIAL_VAULT_LANG` > `LANG` > [`DEFAULT_LOCALE`]. Either
    /// variable goes through [`Locale::from_system_tag`].
    pub fn from_env() -> Self {
        requested_from_env()
            .and_then(|(_, value)| Locale::from_system_tag(&value))
            .unwrap_or_default()
    }

    /// Reduce a system locale tag to its lowercase primary subtag:
    /// `zh_CN.UTF-8` -> `zh`, `ZH` -> `zh`. Blank tags and the POSIX `C`
    /// locale give `None`.
    pub fn from_system_tag(value: &str) -> Option<Self> {
        let locale = Locale::parse(value.trim()).ok()?;
        let primary = locale.primary_subtag().to_ascii_lowercase();
        if primary.is_empty() || primary == "c" || primary == "posix" {
            None
        } else {
            Some(Locale(primary))
        }
    }
}

/// The variable [`Locale::from_env`] reads and its raw value, if either
/// `SERIAL_VAULT_LANG` or `LANG` is set.
pub fn requested_from_env() -> Option<(&'static str, String)> {
    env::var(LANG_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(|value| (LANG_ENV, value))
        .or_else(|| env::var("LANG").ok().map(|value| ("LANG", value)))
}

impl Default for Locale {
    fn default() -> Self {
        Locale(DEFAULT_LOCALE.to_string())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for Locale {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Locale {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self> {
        Locale::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

/// Pick the supported locale that best matches `requested`.
///
/// Tries the exact tag, then its primary subtag, then gives up and returns
/// the catalog's default locale.
pub fn negotiate<'a>(catalog: &'a MessageCatalog, requested: &str) -> &'a Locale {
    let supported = catalog.supported_locales();
    if let Some(found) = supported.get(requested) {
        return found;
    }
    if let Ok(locale) = Locale::parse(requested) {
        let primary = locale.primary_subtag().to_ascii_lowercase();
        if let Some(found) = supported.get(primary.as_str()) {
            return found;
        }
    }
    catalog.default_locale()
}

// Sorted for binary search.
const ISO_639_1: &[&str] = &[
    "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az", "ba", "be", "bg",
    "bh", "bi", "bm", "bn", "bo", "br", "bs", "ca", "ce", "ch", "co", "cr", "cs", "cu", "cv",
    "cy", "da", "de", "dv", "dz", "ee", "el", "en", "eo", "es", "et", "eu", "fa", "ff", "fi",
    "fj", "fo", "fr", "fy", "ga", "gd", "gl", "gn", "gu", "gv", "ha", "he", "hi", "ho", "hr",
    "ht", "hu", "hy", "hz", "ia", "id", "ie", "ig", "ii", "ik", "io", "is", "it", "iu", "ja",
    "jv", "ka", "kg", "ki", "kj", "kk", "kl", "km", "kn", "ko", "kr", "ks", "ku", "kv", "kw",
    "ky", "la", "lb", "lg", "li", "ln", "lo", "lt", "lu", "lv", "mg", "mh", "mi", "mk", "ml",
    "mn", "mr", "ms", "mt", "my", "na", "nb", "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv",
    "ny", "oc", "oj", "om", "or", "os", "pa", "pi", "pl", "ps", "pt", "qu", "rm", "rn", "ro",
    "ru", "rw", "sa", "sc", "sd", "se", "sg", "si", "sk", "sl", "sm", "sn", "so", "sq", "sr",
    "ss", "st", "su", "sv", "sw", "ta", "te", "tg", "th", "ti", "tk", "tl", "tn", "to", "tr",
    "ts", "tt", "tw", "ty", "ug", "uk", "ur", "uz", "ve", "vi", "vo", "wa", "wo", "xh", "yi",
    "yo", "za", "zh", "zu",
];

/// Whether `code` is a lowercase ISO 639-1 two-letter language code.
///
/// ```
/// use serial_vault_messages::i18n::is_valid_iso639_1;
/// assert!(is_valid_iso639_1("zh"));
/// assert!(!is_valid_iso639_1("ZH"));
/// assert!(!is_valid_iso639_1("zho"));
/// ```
pub fn is_valid_iso639_1(code: &str) -> bool {
    ISO_639_1.binary_search(&code).is_ok()
}

// (code, English name, native name)
const LANGUAGE_NAMES: &[(&str, &str, &str)] = &[
    ("de", "German", "Deutsch"),
    ("en", "English", "English"),
    ("es", "Spanish", "Español"),
    ("fr", "French", "Français"),
    ("it", "Italian", "Italiano"),
    ("ja", "Japanese", "日本語"),
    ("ko", "Korean", "한국어"),
    ("pt", "Portuguese", "Português"),
    ("ru", "Russian", "Русский"),
    ("zh", "Chinese", "中文"),
];

fn names_for(code: &str) -> Option<&'static (&'static str, &'static str, &'static str)> {
    LANGUAGE_NAMES.iter().find(|(c, _, _)| *c == code)
}

/// English name of a language code, for the languages the console ships
/// or is likely to ship.
pub fn language_name(code: &str) -> Option<&'static str> {
    names_for(code).map(|(_, english, _)| *english)
}

/// Name of a language written in its own script, for locale pickers.
pub fn native_name(code: &str) -> Option<&'static str> {
    names_for(code).map(|(_, _, native)| *native)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_table_is_sorted() {
        assert!(ISO_639_1.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn valid_codes_accepted() {
        assert!(is_valid_iso639_1("en"));
        assert!(is_valid_iso639_1("zh"));
        assert!(!is_valid_iso639_1("xx"));
        assert!(!is_valid_iso639_1(""));
        assert!(!is_valid_iso639_1("EN"));
    }

    #[test]
    fn names_resolve() {
        assert_eq!(language_name("zh"), Some("Chinese"));
        assert_eq!(native_name("zh"), Some("中文"));
        assert_eq!(language_name("xx"), None);
    }

    #[test]
    fn parse_rejects_empty_and_whitespace() {
        assert!(matches!(
            Locale::parse(""),
            Err(CatalogError::InvalidArgument { what: "locale" })
        ));
        assert!(matches!(
            Locale::parse("z h"),
            Err(CatalogError::InvalidLocale(_))
        ));
        assert_eq!(Locale::parse("zh").unwrap().as_str(), "zh");
    }

    #[test]
    fn primary_subtag_strips_region_and_encoding() {
        assert_eq!(Locale::parse("zh_CN.UTF-8").unwrap().primary_subtag(), "zh");
        assert_eq!(Locale::parse("en-GB").unwrap().primary_subtag(), "en");
        assert_eq!(Locale::parse("en").unwrap().primary_subtag(), "en");
    }

    #[test]
    fn system_tags_reduce_to_primary_subtag() {
        assert_eq!(Locale::from_system_tag("zh_CN.UTF-8").unwrap().as_str(), "zh");
        assert_eq!(Locale::from_system_tag(" ZH ").unwrap().as_str(), "zh");
        assert_eq!(Locale::from_system_tag("en_US").unwrap().as_str(), "en");
        assert!(Locale::from_system_tag("C").is_none());
        assert!(Locale::from_system_tag("POSIX").is_none());
        assert!(Locale::from_system_tag("   ").is_none());
    }

    #[test]
    fn locale_serializes_as_plain_string() {
        let locale = Locale::parse("zh").unwrap();
        assert_eq!(serde_json::to_string(&locale).unwrap(), "\"zh\"");
        let back: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(back, Locale::default());
        assert!(serde_json::from_str::<Locale>("\"\"").is_err());
    }
}
