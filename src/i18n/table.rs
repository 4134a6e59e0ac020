//! Translation table: language -> dotted key -> localized string.
//!
//! A table is assembled once (built-in strings, optionally merged with an
//! override file) and then only read. There is no API to mutate a table that
//! is already shared.

use crate::i18n::strings::builtin_entries;
use crate::i18n::{I18nError, Language};
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

type Entries = HashMap<Cow<'static, str>, Cow<'static, str>>;

/// Immutable translation table.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    languages: HashMap<Language, Entries>,
}

static BUILTIN: OnceLock<TranslationTable> = OnceLock::new();

impl TranslationTable {
    /// An empty table. Every lookup against it degrades to the key literal.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in table covering every `TranslationKey` in all languages.
    pub fn builtin() -> &'static TranslationTable {
        BUILTIN.get_or_init(|| {
            let mut table = TranslationTable::empty();
            for language in Language::ALL {
                let entries = table.languages.entry(language).or_default();
                for (key, value) in builtin_entries(language) {
                    entries.insert(Cow::Borrowed(key.as_str()), Cow::Borrowed(value));
                }
            }
            table
        })
    }

    /// Build a table from `(language, key, value)` triples.
    ///
    /// Later entries replace earlier ones for the same language and key.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Language, K, V)>,
        K: Into<Cow<'static, str>>,
        V: Into<Cow<'static, str>>,
    {
        let mut table = TranslationTable::empty();
        for (language, key, value) in entries {
            table
                .languages
                .entry(language)
                .or_default()
                .insert(key.into(), value.into());
        }
        table
    }

    /// Parse a table from JSON of the form `{"en": {"a.b": "Hello"}, ...}`.
    pub fn from_json_str(json: &str) -> Result<Self, I18nError> {
        let raw: HashMap<String, HashMap<String, String>> =
            serde_json::from_str(json).map_err(|e| I18nError::InvalidTable(e.to_string()))?;

        let mut table = TranslationTable::empty();
        for (code, entries) in raw {
            let language = Language::from_code(&code)?;
            let target = table.languages.entry(language).or_default();
            for (key, value) in entries {
                target.insert(Cow::Owned(key), Cow::Owned(value));
            }
        }
        Ok(table)
    }

    /// Read a JSON table from disk.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read translations from {}", path.display()))?;
        let table = Self::from_json_str(&content)
            .with_context(|| format!("Failed to parse translations in {}", path.display()))?;
        Ok(table)
    }

    /// Merge `overrides` on top of this table; overriding entries win.
    pub fn with_overrides(mut self, overrides: TranslationTable) -> Self {
        for (language, entries) in overrides.languages {
            self.languages.entry(language).or_default().extend(entries);
        }
        self
    }

    /// Direct lookup, no fallback.
    pub fn get(&self, language: Language, key: &str) -> Option<&str> {
        self.languages
            .get(&language)
            .and_then(|entries| entries.get(key))
            .map(|value| value.as_ref())
    }

    pub fn contains(&self, language: Language, key: &str) -> bool {
        self.get(language, key).is_some()
    }

    /// Keys present for a language, sorted.
    pub fn keys(&self, language: Language) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .languages
            .get(&language)
            .map(|entries| entries.keys().map(|k| k.as_ref()).collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }

    /// Number of entries for a language.
    pub fn len(&self, language: Language) -> usize {
        self.languages.get(&language).map_or(0, |entries| entries.len())
    }

    pub fn is_empty(&self) -> bool {
        self.languages.values().all(|entries| entries.is_empty())
    }
}
