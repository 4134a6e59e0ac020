//! Language preference persistence.
//!
//! A preference is a single scoped value holding one language code. Storage
//! is optional: the store works the same without it, and storage failures are
//! logged rather than surfaced.

use crate::i18n::{Language, LanguageObserver};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// Somewhere a language preference can be kept.
pub trait PreferenceStorage: Send + Sync {
    /// The stored code, if any. The value is not validated here.
    fn load(&self) -> Option<String>;

    fn save(&self, language: Language) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredPreference {
    language: String,
}

/// Preference kept in a small JSON file: `{"language":"fr"}`.
#[derive(Debug, Clone)]
pub struct FilePreference {
    path: PathBuf,
}

impl FilePreference {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStorage for FilePreference {
    fn load(&self) -> Option<String> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                debug!("No stored language preference at {}: {}", self.path.display(), e);
                return None;
            }
        };

        match serde_json::from_str::<StoredPreference>(&content) {
            Ok(stored) => Some(stored.language),
            Err(e) => {
                warn!(
                    "Ignoring unreadable language preference at {}: {}",
                    self.path.display(),
                    e
                );
                None
            }
        }
    }

    fn save(&self, language: Language) -> Result<()> {
        let stored = StoredPreference {
            language: language.code().to_string(),
        };
        let json = serde_json::to_string(&stored).context("Failed to serialize language preference")?;
        std::fs::write(&self.path, json).with_context(|| {
            format!(
                "Failed to write language preference to {}",
                self.path.display()
            )
        })?;
        Ok(())
    }
}

/// Restore the stored language, or use `default` when nothing valid is stored.
pub fn initial_language(storage: &dyn PreferenceStorage, default: Language) -> Language {
    match storage.load() {
        Some(code) => Language::from_code(&code).unwrap_or_else(|e| {
            warn!("Stored language preference rejected: {}", e);
            default
        }),
        None => default,
    }
}

/// Writes the preference on every accepted language change.
pub struct PreferenceObserver {
    storage: Arc<dyn PreferenceStorage>,
}

impl PreferenceObserver {
    pub fn new(storage: Arc<dyn PreferenceStorage>) -> Self {
        Self { storage }
    }
}

impl LanguageObserver for PreferenceObserver {
    fn language_changed(&self, language: Language) {
        if let Err(e) = self.storage.save(language) {
            warn!("Could not persist language preference: {:#}", e);
        }
    }
}
