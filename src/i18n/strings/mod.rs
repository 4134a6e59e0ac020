//! Built-in localized strings for every [`TranslationKey`].
//!
//! Strings are stored raw; renderers escape them for their output format.
//!
//! [`TranslationKey`]: crate::i18n::TranslationKey

mod ar;
mod en;
mod fr;

use crate::i18n::{Language, TranslationKey};

pub use ar::ARABIC;
pub use en::english;
pub use fr::FRENCH;

/// Built-in entries for one language.
pub fn builtin_entries(language: Language) -> Vec<(TranslationKey, &'static str)> {
    match language {
        Language::English => TranslationKey::ALL
            .iter()
            .map(|key| (*key, english(*key)))
            .collect(),
        Language::French => FRENCH.to_vec(),
        Language::Arabic => ARABIC.to_vec(),
    }
}
