use thiserror::Error;

/// Errors raised while building or parsing localization data.
///
/// None of these reach the page: the store swallows unsupported codes and the
/// resolver never fails. They surface at startup (bad config, bad override
/// file) and in tooling.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum I18nError {
    #[error("Unsupported language code: '{0}'")]
    UnsupportedLanguage(String),

    #[error("Invalid translation table: {0}")]
    InvalidTable(String),
}
