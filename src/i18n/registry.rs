//! Language registry: Single source of truth for language metadata.
//!
//! The set of languages is closed (see [`Language`]); the registry only
//! carries the display metadata for each of them.

use crate::i18n::{Direction, Language};

/// Metadata for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    pub language: Language,

    /// ISO 639-1 language code (e.g., "en", "fr", "ar")
    pub code: &'static str,

    /// English name of the language (e.g., "French")
    pub name: &'static str,

    /// Name of the language in that language (e.g., "Français")
    pub native_name: &'static str,

    /// Reading direction of the script
    pub direction: Direction,

    /// Whether this is the default/fallback language (exactly one is)
    pub is_canonical: bool,
}

/// Static language registry.
pub struct LanguageRegistry {
    languages: [LanguageConfig; 3],
}

static REGISTRY: LanguageRegistry = LanguageRegistry {
    languages: [
        LanguageConfig {
            language: Language::English,
            code: "en",
            name: "English",
            native_name: "English",
            direction: Direction::Ltr,
            is_canonical: true,
        },
        LanguageConfig {
            language: Language::French,
            code: "fr",
            name: "French",
            native_name: "Français",
            direction: Direction::Ltr,
            is_canonical: false,
        },
        LanguageConfig {
            language: Language::Arabic,
            code: "ar",
            name: "Arabic",
            native_name: "العربية",
            direction: Direction::Rtl,
            is_canonical: false,
        },
    ],
};

impl LanguageRegistry {
    /// Get the registry instance.
    pub fn get() -> &'static LanguageRegistry {
        &REGISTRY
    }

    /// Look up a language configuration by its code.
    ///
    /// Matching is exact; callers normalise input first.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|config| config.code == code)
    }

    /// Configuration for a language. Every variant has an entry.
    pub fn config(&self, language: Language) -> &LanguageConfig {
        &self.languages[language.index()]
    }

    /// All languages in selector order.
    pub fn list_all(&self) -> &[LanguageConfig] {
        &self.languages
    }

    /// The default (fallback) language configuration.
    pub fn canonical(&self) -> &LanguageConfig {
        self.languages
            .iter()
            .find(|config| config.is_canonical)
            .unwrap_or(&self.languages[0])
    }
}
