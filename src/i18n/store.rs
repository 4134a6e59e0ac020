//! Language state store.
//!
//! A `LanguageStore` owns the current language. Everything else holds a
//! reference to the store and can read the language or request a change;
//! there is no other way to mutate it.

use crate::i18n::{Direction, Language, ResolutionMetrics};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{info, warn};

/// Reacts to accepted language changes.
///
/// Observers run synchronously inside [`LanguageStore::set_language`], in
/// registration order, while the store's state lock is held. They get the new
/// language as an argument and must not call back into the store.
pub trait LanguageObserver: Send + Sync {
    fn language_changed(&self, language: Language);
}

/// Owning handle for the current language.
pub struct LanguageStore {
    current: Mutex<Language>,
    observers: Vec<Box<dyn LanguageObserver>>,
    metrics: Arc<ResolutionMetrics>,
}

impl LanguageStore {
    /// Create the store and run every observer once with `initial`.
    pub fn new(
        initial: Language,
        observers: Vec<Box<dyn LanguageObserver>>,
        metrics: Arc<ResolutionMetrics>,
    ) -> Self {
        let store = Self {
            current: Mutex::new(initial),
            observers,
            metrics,
        };
        {
            let _guard = store.lock();
            store.notify(initial);
        }
        store
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Language> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn notify(&self, language: Language) {
        for observer in &self.observers {
            observer.language_changed(language);
        }
    }

    /// The current language.
    pub fn language(&self) -> Language {
        *self.lock()
    }

    /// Reading direction of the current language.
    pub fn direction(&self) -> Direction {
        self.language().direction()
    }

    /// Replace the current language and notify observers.
    ///
    /// Re-selecting the active language re-runs the observers; they are
    /// expected to be idempotent.
    pub fn set_language(&self, language: Language) {
        let mut current = self.lock();
        let previous = *current;
        *current = language;
        self.notify(language);
        if previous != language {
            self.metrics.record_language_change();
        }
        drop(current);

        if previous != language {
            info!("Language changed: {} -> {}", previous, language);
        }
    }

    /// Request a change by raw code.
    ///
    /// Unsupported codes leave the state untouched and return `false`; no
    /// error reaches the caller.
    pub fn set_language_code(&self, code: &str) -> bool {
        match Language::from_code(code) {
            Ok(language) => {
                self.set_language(language);
                true
            }
            Err(e) => {
                warn!("Ignoring language change request: {}", e);
                self.metrics.record_rejected_code();
                false
            }
        }
    }

    pub fn metrics(&self) -> &Arc<ResolutionMetrics> {
        &self.metrics
    }
}
