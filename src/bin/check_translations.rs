//! Translation checker - validates the built-in strings and any overrides file
//!
//! Usage:
//!   cargo run --bin check-translations                       # Built-in table only
//!   cargo run --bin check-translations -- overrides.json     # Built-in plus overrides
//!
//! Optional:
//! - TRANSLATIONS_FILE (used when no path argument is given)
//!
//! Exits with status 1 when the default language is incomplete.

use anyhow::Result;
use nonprofit_site::i18n::{LanguageRegistry, TableValidator, TranslationTable};
use std::path::PathBuf;
use tracing::info;

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("nonprofit_site=info".parse()?),
        )
        .init();

    let overrides_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("TRANSLATIONS_FILE").ok())
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    let mut table = TranslationTable::builtin().clone();
    if let Some(path) = &overrides_path {
        info!("Applying overrides from {}", path.display());
        table = table.with_overrides(TranslationTable::load_json(path)?);
    }

    let report = TableValidator::validate(&table);

    println!("\n========== TRANSLATION CHECK ==========");
    for config in LanguageRegistry::get().list_all() {
        println!(
            "{} {:<8} {:>4} strings ({}){}",
            config.code,
            config.name,
            table.len(config.language),
            config.direction,
            if config.is_canonical { " [default]" } else { "" }
        );
    }
    println!("=======================================\n");

    if report.is_clean() {
        println!("No problems found.");
        return Ok(());
    }

    if report.has_warnings() {
        println!("Warnings ({}):", report.warnings.len());
        for warning in &report.warnings {
            println!("  - {}", warning);
        }
        println!();
    }

    if report.has_errors() {
        println!("Errors ({}):", report.errors.len());
        for error in &report.errors {
            println!("  - {}", error);
        }
        std::process::exit(1);
    }

    Ok(())
}
