//! Document direction binding.
//!
//! The document root carries two attributes derived from the active language:
//! `dir` (`ltr`/`rtl`) and `lang`. [`DirectionBinder`] is the only writer.

use crate::i18n::{Direction, Language, LanguageObserver};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// The root attributes as seen by renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootAttributes {
    pub dir: Direction,
    pub lang: &'static str,
}

impl RootAttributes {
    fn for_language(language: Language) -> Self {
        Self {
            dir: language.direction(),
            lang: language.code(),
        }
    }
}

impl Default for RootAttributes {
    fn default() -> Self {
        Self::for_language(Language::canonical())
    }
}

/// The document root element.
///
/// Readers get a copy through [`DocumentRoot::snapshot`]; writes are only
/// possible from this module.
#[derive(Debug, Default)]
pub struct DocumentRoot {
    attributes: RwLock<RootAttributes>,
}

impl DocumentRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> RootAttributes {
        *self
            .attributes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn apply(&self, language: Language) {
        let mut attributes = self
            .attributes
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *attributes = RootAttributes::for_language(language);
    }
}

/// Keeps the document root's `dir` and `lang` in step with the store.
pub struct DirectionBinder {
    document: Option<Arc<DocumentRoot>>,
}

impl DirectionBinder {
    /// Bind to a document root.
    pub fn attached(document: Arc<DocumentRoot>) -> Self {
        Self {
            document: Some(document),
        }
    }

    /// A binder with no document (non-rendering contexts). Every update is a no-op.
    pub fn detached() -> Self {
        Self { document: None }
    }
}

impl LanguageObserver for DirectionBinder {
    fn language_changed(&self, language: Language) {
        match &self.document {
            Some(document) => {
                document.apply(language);
                debug!(
                    "Document root bound: lang={} dir={}",
                    language.code(),
                    language.direction()
                );
            }
            None => debug!("No document attached, skipping direction binding"),
        }
    }
}
