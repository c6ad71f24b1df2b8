// SPDX-License-Identifier: PMPL-1.0-or-later

//! `check` command: OK/WARN/ERR diagnostics over a loaded catalog.

use crate::i18n::{
    audit, is_valid_iso639_1, requested_from_env, Locale, MessageCatalog, LANG_ENV,
};
use anyhow::{anyhow, Result};
use colored::*;

pub fn run_diagnostics(catalog: &MessageCatalog, strict: bool) -> Result<()> {
    println!("vault-messages catalog check");

    let checks = collect_diagnostics(catalog, strict);

    println!();
    for entry in &checks {
        entry.print();
    }

    if checks.iter().any(|entry| entry.level == Level::Error) {
        Err(anyhow!("catalog check reported issues"))
    } else {
        Ok(())
    }
}

/// Every diagnostic for `catalog`, in print order.
pub fn collect_diagnostics(catalog: &MessageCatalog, strict: bool) -> Vec<Diagnostic> {
    let mut checks = Vec::new();
    checks.push(Diagnostic::ok(
        "version",
        format!("serial-vault-messages {}", env!("CARGO_PKG_VERSION")),
    ));
    checks.push(Diagnostic::ok(
        "default locale",
        format!(
            "{} ({} keys)",
            catalog.default_locale(),
            catalog.default_table().len()
        ),
    ));
    checks.push(Diagnostic::ok("fingerprint", catalog.fingerprint().to_string()));

    for locale in catalog.supported_locales() {
        if !is_valid_iso639_1(locale.primary_subtag()) {
            checks.push(Diagnostic::warning(
                "locale code",
                format!("{} is not an ISO 639-1 language code", locale),
            ));
        }
    }

    let report = audit(catalog);
    for entry in &report.locales {
        if entry.missing.is_empty() {
            checks.push(Diagnostic::ok(
                "completeness",
                format!("{} defines every default key", entry.locale),
            ));
        } else {
            let detail = format!(
                "{} misses {} key(s): {}",
                entry.locale,
                entry.missing.len(),
                entry.missing.join(", ")
            );
            checks.push(if strict {
                Diagnostic::error("completeness", detail)
            } else {
                Diagnostic::warning("completeness", detail)
            });
        }

        if !entry.untranslated.is_empty() {
            checks.push(Diagnostic::warning(
                "untranslated",
                format!(
                    "{} has {} value(s) still marked <...>",
                    entry.locale,
                    entry.untranslated.len()
                ),
            ));
        }

        if !entry.extra.is_empty() {
            checks.push(Diagnostic::warning(
                "orphan keys",
                format!(
                    "{} defines {} key(s) the default locale lacks",
                    entry.locale,
                    entry.extra.len()
                ),
            ));
        }
    }

    checks.push(check_env_locale(catalog));
    checks
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Ok,
    Warn,
    Error,
}

impl Level {
    fn tag(&self) -> ColoredString {
        match self {
            Level::Ok => "OK".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERR".red().bold(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub label: &'static str,
    pub level: Level,
    pub detail: String,
}

impl Diagnostic {
    fn new(label: &'static str, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:16} {}", self.level.tag(), self.label, self.detail);
    }
}

fn check_env_locale(catalog: &MessageCatalog) -> Diagnostic {
    let requested = requested_from_env();
    let requested = requested.as_ref().map(|(var, value)| (*var, value.as_str()));
    env_locale_diagnostic(catalog, requested)
}

/// Judge the locale a `(variable, raw value)` pair selects, reduced the same
/// way [`Locale::from_env`] reduces it.
fn env_locale_diagnostic(
    catalog: &MessageCatalog,
    requested: Option<(&str, &str)>,
) -> Diagnostic {
    let Some((var, raw)) = requested else {
        return Diagnostic::ok(
            "env locale",
            format!(
                "{} and LANG not set; using {}",
                LANG_ENV,
                catalog.default_locale()
            ),
        );
    };

    match Locale::from_system_tag(raw) {
        Some(locale) if catalog.supported_locales().contains(&locale) => {
            Diagnostic::ok("env locale", format!("{}={} -> {}", var, raw.trim(), locale))
        }
        Some(locale) => Diagnostic::warning(
            "env locale",
            format!(
                "{}={} -> {} is not registered; lookups fall back to {}",
                var,
                raw.trim(),
                locale,
                catalog.default_locale()
            ),
        ),
        None => Diagnostic::ok(
            "env locale",
            format!(
                "{}={} selects no language; using {}",
                var,
                raw.trim(),
                catalog.default_locale()
            ),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_warns_about_gaps() {
        let catalog = MessageCatalog::bundled().unwrap();
        let checks = collect_diagnostics(&catalog, false);
        assert!(checks.iter().all(|c| c.level != Level::Error));
        assert!(checks
            .iter()
            .any(|c| c.label == "completeness" && c.detail.contains("users_available")));
        assert!(checks.iter().any(|c| c.label == "untranslated"));
    }

    #[test]
    fn env_locale_is_reduced_before_lookup() {
        let catalog = MessageCatalog::bundled().unwrap();
        for raw in ["zh_CN.UTF-8", "ZH", "zh"] {
            let check = env_locale_diagnostic(&catalog, Some((LANG_ENV, raw)));
            assert_eq!(check.level, Level::Ok, "{}", raw);
            assert!(check.detail.ends_with("-> zh"), "{}", check.detail);
            assert!(check.detail.contains(raw));
        }
        assert_eq!(Locale::from_system_tag("zh_CN.UTF-8").unwrap().as_str(), "zh");
    }

    #[test]
    fn unregistered_env_locale_warns() {
        let catalog = MessageCatalog::bundled().unwrap();
        let check = env_locale_diagnostic(&catalog, Some(("LANG", "fr_FR.UTF-8")));
        assert_eq!(check.level, Level::Warn);
        assert!(check.detail.contains("LANG=fr_FR.UTF-8 -> fr"));
        assert!(check.detail.ends_with("fall back to en"));

        let posix = env_locale_diagnostic(&catalog, Some(("LANG", "C")));
        assert_eq!(posix.level, Level::Ok);
        assert_eq!(env_locale_diagnostic(&catalog, None).level, Level::Ok);
    }

    #[test]
    fn strict_turns_gaps_into_errors() {
        let catalog = MessageCatalog::bundled().unwrap();
        let checks = collect_diagnostics(&catalog, true);
        assert!(checks
            .iter()
            .any(|c| c.label == "completeness" && c.level == Level::Error));
    }
}
