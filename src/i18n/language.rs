//! Language type: the closed set of site languages.

use crate::i18n::{I18nError, LanguageConfig, LanguageRegistry};
use std::fmt;
use std::str::FromStr;

/// Reading direction of a language's script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Attribute value for the document root (`ltr` / `rtl`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A supported site language.
///
/// Only these three values exist; raw codes coming from users go through
/// [`Language::from_code`], which rejects everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    French,
    Arabic,
}

impl Language {
    /// All languages in selector order.
    pub const ALL: [Language; 3] = [Language::English, Language::French, Language::Arabic];

    /// Parse a language code.
    ///
    /// Surrounding whitespace and case are ignored (`" FR "` is French).
    ///
    /// # Returns
    /// * `Ok(Language)` for `en`, `fr` or `ar`
    /// * `Err(I18nError::UnsupportedLanguage)` for anything else
    pub fn from_code(code: &str) -> Result<Language, I18nError> {
        let normalized = code.trim().to_ascii_lowercase();
        LanguageRegistry::get()
            .get_by_code(&normalized)
            .map(|config| config.language)
            .ok_or_else(|| I18nError::UnsupportedLanguage(code.to_string()))
    }

    /// The default language, used as the fallback for missing translations.
    pub fn canonical() -> Language {
        LanguageRegistry::get().canonical().language
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Language::English => 0,
            Language::French => 1,
            Language::Arabic => 2,
        }
    }

    /// Full registry entry for this language.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get().config(*self)
    }

    /// ISO 639-1 code (`en`, `fr`, `ar`), also used as the document `lang` tag.
    pub fn code(&self) -> &'static str {
        self.config().code
    }

    /// English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Name of the language written in that language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn direction(&self) -> Direction {
        self.config().direction
    }

    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::canonical()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}
