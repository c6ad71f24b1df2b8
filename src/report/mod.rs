// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report printing and export

pub mod formatter;
pub mod output;

use crate::i18n::AuditReport;
use anyhow::Result;
use serde::Serialize;
use std::path::Path;

pub use formatter::ReportFormatter;
pub use output::OutputFormat;

/// Save any serializable report or table to file
pub fn save_report<T: Serialize + ?Sized, P: AsRef<Path>>(
    value: &T,
    format: OutputFormat,
    path: P,
) -> Result<()> {
    ReportFormatter::new().save(value, format, path)
}

/// Print an audit report to console
pub fn print_audit(report: &AuditReport) {
    ReportFormatter::new().print_audit(report);
}
