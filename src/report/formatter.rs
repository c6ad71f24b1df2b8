// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console formatting for audit reports and resolutions

use crate::i18n::{language_name, AuditReport, LocaleAudit, Resolution, Source};
use anyhow::Result;
use colored::*;
use serde::Serialize;
use std::fs;
use std::path::Path;

use super::output::OutputFormat;

// Listing more than this many keys per section turns the summary into a dump.
const MAX_LISTED_KEYS: usize = 10;

pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print_audit(&self, report: &AuditReport) {
        println!("\n{}", "=== SERIAL VAULT MESSAGE AUDIT ===".bold().cyan());
        println!("  Default locale: {}", report.default_locale);
        println!("  Default keys:   {}", report.default_keys);
        println!("  Fingerprint:    {}", report.fingerprint.dimmed());
        println!();

        for entry in &report.locales {
            self.print_locale(entry, report.default_keys);
            println!();
        }

        if report.is_complete() {
            println!("{}", "All locales define every default key".green());
        } else {
            println!(
                "{} {}",
                "Incomplete locales:".bold().red(),
                report.incomplete_locales().join(", ")
            );
        }
    }

    fn print_locale(&self, entry: &LocaleAudit, default_keys: usize) {
        let name = language_name(&entry.locale).unwrap_or("unknown language");
        println!("{}", format!("{} ({})", entry.locale, name).bold().yellow());

        let coverage = entry.coverage(default_keys) * 100.0;
        let coverage_color = if coverage >= 95.0 {
            "green"
        } else if coverage >= 60.0 {
            "yellow"
        } else {
            "red"
        };
        println!(
            "  Keys: {}  Coverage: {}",
            entry.total_keys,
            format!("{:.1}%", coverage).color(coverage_color).bold()
        );

        self.print_keys("Missing", &entry.missing, |key| key.red().to_string());
        self.print_keys("Untranslated", &entry.untranslated, |key| {
            key.yellow().to_string()
        });
        self.print_keys("Not in default locale", &entry.extra, |key| {
            key.dimmed().to_string()
        });
    }

    fn print_keys(&self, label: &str, keys: &[String], paint: impl Fn(&str) -> String) {
        if keys.is_empty() {
            return;
        }
        println!("  {} ({}):", label, keys.len());
        for key in keys.iter().take(MAX_LISTED_KEYS) {
            println!("    - {}", paint(key));
        }
        if keys.len() > MAX_LISTED_KEYS {
            println!("    ... and {} more", keys.len() - MAX_LISTED_KEYS);
        }
    }

    /// One-line explanation of where a resolved message came from.
    pub fn describe_resolution(
        &self,
        key: &str,
        requested: &str,
        resolution: &Resolution,
    ) -> String {
        match resolution.source {
            Source::Exact => format!("'{}' found in {}", key, requested),
            Source::DefaultLocale => format!(
                "locale {} not registered; '{}' taken from {}",
                requested,
                key,
                resolution.locale.unwrap_or("default")
            ),
            Source::DefaultKey => format!(
                "'{}' missing in {}; taken from {}",
                key,
                requested,
                resolution.locale.unwrap_or("default")
            ),
            Source::Placeholder => format!("'{}' missing in every locale; showing the key", key),
        }
    }

    pub fn save<T: Serialize + ?Sized, P: AsRef<Path>>(
        &self,
        value: &T,
        format: OutputFormat,
        path: P,
    ) -> Result<()> {
        let content = format.serialize(value)?;
        fs::write(path.as_ref(), content)?;
        println!("Report saved to: {}", path.as_ref().display());
        Ok(())
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::MessageCatalog;

    #[test]
    fn describes_each_fallback_step() {
        let catalog = MessageCatalog::bundled().unwrap();
        let formatter = ReportFormatter::new();

        let exact = catalog.resolve_detailed("zh", "model").unwrap();
        assert_eq!(
            formatter.describe_resolution("model", "zh", &exact),
            "'model' found in zh"
        );

        let key = catalog.resolve_detailed("zh", "users_available").unwrap();
        assert_eq!(
            formatter.describe_resolution("users_available", "zh", &key),
            "'users_available' missing in zh; taken from en"
        );

        let locale = catalog.resolve_detailed("fr", "model").unwrap();
        assert_eq!(
            formatter.describe_resolution("model", "fr", &locale),
            "locale fr not registered; 'model' taken from en"
        );

        let placeholder = catalog.resolve_detailed("en", "no-such-key").unwrap();
        assert!(formatter
            .describe_resolution("no-such-key", "en", &placeholder)
            .contains("no-such-key"));
    }

    #[test]
    fn save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.yaml");
        let catalog = MessageCatalog::bundled().unwrap();
        let report = crate::i18n::audit(&catalog);
        ReportFormatter::new()
            .save(&report, OutputFormat::Yaml, &path)
            .unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("default_locale: en"));
        assert!(content.contains("users_available"));
    }
}
