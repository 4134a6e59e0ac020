//! Key resolution with a fixed fallback chain.
//!
//! Lookup order is always: active language, then the default language, then
//! the key itself. Resolution never fails.

use crate::i18n::{Language, ResolutionMetrics, TranslationKey, TranslationTable};
use std::sync::Arc;

/// Where a resolved string came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// Found for the requested language.
    Active,
    /// Missing for the requested language, found for the default language.
    Fallback,
    /// Missing everywhere; the key is returned as the display text.
    KeyLiteral,
}

/// Result of resolving a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub text: &'a str,
    pub source: ResolutionSource,
}

/// Resolve a key and report which step of the fallback chain answered.
pub fn resolve_detailed<'a>(
    table: &'a TranslationTable,
    language: Language,
    key: &'a str,
) -> Resolution<'a> {
    if let Some(text) = table.get(language, key) {
        return Resolution {
            text,
            source: ResolutionSource::Active,
        };
    }

    let canonical = Language::canonical();
    if language != canonical {
        if let Some(text) = table.get(canonical, key) {
            return Resolution {
                text,
                source: ResolutionSource::Fallback,
            };
        }
    }

    Resolution {
        text: key,
        source: ResolutionSource::KeyLiteral,
    }
}

/// Resolve a key to display text.
pub fn resolve<'a>(table: &'a TranslationTable, language: Language, key: &'a str) -> &'a str {
    resolve_detailed(table, language, key).text
}

/// Resolves keys for one language and records how each lookup went.
///
/// Pages take a `Localizer` instead of a table so every string on a page comes
/// from the same language.
#[derive(Clone)]
pub struct Localizer<'a> {
    table: &'a TranslationTable,
    language: Language,
    metrics: Arc<ResolutionMetrics>,
}

impl<'a> Localizer<'a> {
    pub fn new(table: &'a TranslationTable, language: Language, metrics: Arc<ResolutionMetrics>) -> Self {
        Self {
            table,
            language,
            metrics,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Resolve a known key.
    pub fn t(&self, key: TranslationKey) -> &'a str {
        self.lookup(key.as_str())
    }

    /// Resolve an arbitrary dotted key.
    pub fn lookup(&self, key: &'a str) -> &'a str {
        let resolution = resolve_detailed(self.table, self.language, key);
        self.metrics.record(resolution.source);
        if resolution.source == ResolutionSource::KeyLiteral {
            tracing::debug!("No translation for '{}' in {}", key, self.language);
        }
        resolution.text
    }
}
