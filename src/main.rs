// SPDX-License-Identifier: PMPL-1.0-or-later

//! vault-messages: inspect, resolve and audit the Serial Vault message catalog
//!
//! Works on the tables bundled with the admin console, or on a JSON/YAML
//! catalog file with the same `locale -> (key -> text)` shape.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use serial_vault_messages::config::{load_catalog, CatalogSettings};
use serial_vault_messages::diagnostics;
use serial_vault_messages::i18n::{self, language_name, native_name, Locale, MessageCatalog};
use serial_vault_messages::report::{self, OutputFormat, ReportFormatter};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "vault-messages")]
#[command(version)]
#[command(about = "Resolve and audit Serial Vault admin console messages")]
#[command(long_about = None)]
struct Cli {
    /// Catalog file (JSON or YAML); defaults to the bundled tables
    #[arg(short, long, global = true, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Catalog settings file (JSON or YAML)
    #[arg(long, global = true, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Locale every lookup falls back to (overrides the settings file)
    #[arg(long, global = true, value_name = "LOCALE")]
    default_locale: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a message key
    Resolve {
        /// Message key, e.g. `models_available`
        #[arg(value_name = "KEY")]
        key: String,

        /// Locale to resolve for (default: SERIAL_VAULT_LANG, then LANG)
        #[arg(short, long)]
        locale: Option<String>,

        /// Explain which fallback step produced the text
        #[arg(short, long)]
        explain: bool,
    },

    /// List the registered locales
    Locales,

    /// Export one locale's table, or every table
    Export {
        /// Locale to export (default: all)
        #[arg(short, long)]
        locale: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Audit every locale against the default locale
    Audit {
        /// Emit the report in this format instead of the console summary
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output report to file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fail when a locale misses default-locale keys
        #[arg(long)]
        strict: bool,
    },

    /// Run catalog diagnostics
    Check {
        /// Treat missing keys as errors
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Resolve {
            key,
            locale,
            explain,
        } => {
            let catalog = load(&cli, true)?;
            let requested = locale
                .as_deref()
                .map(Locale::parse)
                .transpose()?
                .unwrap_or_else(Locale::from_env);
            let resolution = catalog.resolve_detailed(requested.as_str(), key)?;
            println!("{}", resolution.text);
            if *explain {
                eprintln!(
                    "{}",
                    ReportFormatter::new().describe_resolution(key, requested.as_str(), &resolution)
                );
            }
        }

        Commands::Locales => {
            let catalog = load(&cli, true)?;
            for locale in catalog.supported_locales() {
                let code = locale.primary_subtag();
                let marker = if locale == catalog.default_locale() {
                    " (default)"
                } else {
                    ""
                };
                println!(
                    "{:6} {:12} {:10} {} keys{}",
                    locale.as_str(),
                    language_name(code).unwrap_or("-"),
                    native_name(code).unwrap_or("-"),
                    catalog.table(locale.as_str()).map_or(0, |table| table.len()),
                    marker
                );
            }
        }

        Commands::Export {
            locale,
            format,
            output,
        } => {
            let catalog = load(&cli, true)?;
            let content = match locale {
                Some(code) => {
                    let table = catalog
                        .table(code)
                        .ok_or_else(|| anyhow!("locale '{}' is not registered", code))?;
                    format.serialize(table)?
                }
                None => format.serialize(catalog.tables())?,
            };
            write_or_print(&content, output.as_deref())?;
        }

        Commands::Audit {
            format,
            output,
            strict,
        } => {
            let catalog = load(&cli, false)?;
            let audit = i18n::audit(&catalog);

            match (format, output) {
                (_, Some(path)) => {
                    let format = format.unwrap_or_else(|| {
                        path.extension()
                            .and_then(|ext| ext.to_str())
                            .and_then(OutputFormat::parse)
                            .unwrap_or(OutputFormat::Json)
                    });
                    report::save_report(&audit, format, path)?;
                }
                (Some(format), None) => println!("{}", format.serialize(&audit)?),
                (None, None) => report::print_audit(&audit),
            }

            if *strict && !audit.is_complete() {
                return Err(anyhow!(
                    "incomplete locales: {}",
                    audit.incomplete_locales().join(", ")
                ));
            }
        }

        Commands::Check { strict } => {
            let catalog = load(&cli, false)?;
            diagnostics::run_diagnostics(&catalog, *strict)?;
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Build the catalog the command works on. Audits and checks must see
/// incomplete catalogs, so they never load strictly.
fn load(cli: &Cli, honour_strict: bool) -> Result<MessageCatalog> {
    let mut settings = match &cli.settings {
        Some(path) => CatalogSettings::load(path)
            .with_context(|| format!("reading settings {}", path.display()))?,
        None => CatalogSettings::default(),
    };
    if let Some(code) = &cli.default_locale {
        settings.default_locale = Locale::parse(code)?;
    }
    if !honour_strict {
        settings.strict = false;
    }

    let catalog =
        load_catalog(cli.catalog.as_deref(), &settings).with_context(|| match &cli.catalog {
            Some(path) => format!("loading catalog {}", path.display()),
            None => "loading bundled catalog".to_string(),
        })?;
    Ok(catalog)
}

fn write_or_print(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("Saved to: {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}
