//! Translation table validation.
//!
//! Checks that the default language covers every [`TranslationKey`] and holds
//! no keys the site never renders, that the other languages cover the default
//! language's keys, and that literal elements (URLs, email addresses, phone
//! numbers) survive translation.

use crate::i18n::{Language, TranslationKey, TranslationTable};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make the default language incomplete
    pub errors: Vec<String>,

    /// Gaps that degrade gracefully at runtime
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation tables.
pub struct TableValidator;

// Regex patterns for extraction (cached for performance)
static URL_REGEX: OnceLock<Regex> = OnceLock::new();
static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();

fn cached(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("static regex pattern is valid"))
}

impl TableValidator {
    /// Validate a whole table.
    pub fn validate(table: &TranslationTable) -> ValidationReport {
        let mut report = ValidationReport::new();
        let canonical = Language::canonical();

        for key in TranslationKey::ALL {
            match table.get(canonical, key.as_str()) {
                None => report.errors.push(format!(
                    "Missing {} string for '{}'",
                    canonical.name(),
                    key.as_str()
                )),
                Some(value) if value.trim().is_empty() => report.errors.push(format!(
                    "Empty {} string for '{}'",
                    canonical.name(),
                    key.as_str()
                )),
                Some(_) => {}
            }
        }

        let mut default_keys: Vec<&str> = table.keys(canonical);
        default_keys.sort_unstable();
        for key in default_keys
            .iter()
            .filter(|key| TranslationKey::parse(key).is_none())
        {
            report
                .warnings
                .push(format!("'{}' is not used by any page", key));
        }
        let default_keys: HashSet<&str> = default_keys.into_iter().collect();

        for language in Language::ALL.iter().filter(|l| !l.is_canonical()) {
            let keys: HashSet<&str> = table.keys(*language).into_iter().collect();

            let mut missing: Vec<&str> = default_keys
                .iter()
                .copied()
                .filter(|key| !table.contains(*language, key))
                .collect();
            missing.sort_unstable();
            for key in missing {
                report
                    .warnings
                    .push(format!("{} is missing '{}'", language.name(), key));
            }

            let mut orphaned: Vec<&str> = keys.difference(&default_keys).copied().collect();
            orphaned.sort_unstable();
            for key in orphaned {
                report.warnings.push(format!(
                    "{} has '{}' which the default language does not define",
                    language.name(),
                    key
                ));
            }

            let mut shared: Vec<&str> = keys.intersection(&default_keys).copied().collect();
            shared.sort_unstable();
            for key in shared {
                if let (Some(original), Some(translated)) =
                    (table.get(canonical, key), table.get(*language, key))
                {
                    for warning in Self::validate_entry(original, translated) {
                        report
                            .warnings
                            .push(format!("{} '{}': {}", language.name(), key, warning));
                    }
                }
            }
        }

        report
    }

    /// Compare one translated string with its default-language original.
    pub fn validate_entry(original: &str, translated: &str) -> Vec<String> {
        let mut warnings = Vec::new();

        let orig_urls = Self::extract_urls(original);
        let trans_urls = Self::extract_urls(translated);
        if orig_urls != trans_urls {
            warnings.push(format!(
                "URL mismatch: original has {:?}, translation has {:?}",
                orig_urls, trans_urls
            ));
        }

        let orig_emails = Self::extract_emails(original);
        let trans_emails = Self::extract_emails(translated);
        if orig_emails != trans_emails {
            warnings.push(format!(
                "Email mismatch: original has {:?}, translation has {:?}",
                orig_emails, trans_emails
            ));
        }

        let orig_phones = Self::extract_phones(original);
        let trans_phones = Self::extract_phones(translated);
        if orig_phones != trans_phones {
            warnings.push(format!(
                "Phone number mismatch: original has {:?}, translation has {:?}",
                orig_phones, trans_phones
            ));
        }

        warnings
    }

    /// Extract all URLs from text
    fn extract_urls(text: &str) -> Vec<String> {
        cached(&URL_REGEX, r"https?://[^\s)\]]+")
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Extract all email addresses from text
    fn extract_emails(text: &str) -> Vec<String> {
        cached(&EMAIL_REGEX, r"[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}")
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Extract international phone numbers (`+` followed by digits and spaces)
    fn extract_phones(text: &str) -> Vec<String> {
        cached(&PHONE_REGEX, r"\+\d[\d ]{6,}\d")
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Extraction Tests ====================

    #[test]
    fn test_extract_urls() {
        let urls = TableValidator::extract_urls("See https://example.org and http://test.org.");
        assert_eq!(urls, vec!["https://example.org", "http://test.org."]);
    }

    #[test]
    fn test_extract_emails() {
        let emails = TableValidator::extract_emails("Write to contact@hopebridge.org today");
        assert_eq!(emails, vec!["contact@hopebridge.org"]);
    }

    #[test]
    fn test_extract_emails_none() {
        assert!(TableValidator::extract_emails("No address here").is_empty());
    }

    #[test]
    fn test_extract_phones() {
        let phones = TableValidator::extract_phones("Call +222 45 25 00 00 now");
        assert_eq!(phones, vec!["+222 45 25 00 00"]);
    }

    #[test]
    fn test_extract_phones_ignores_plain_numbers() {
        assert!(TableValidator::extract_phones("12 000 students, 85% of gifts").is_empty());
    }

    // ==================== Entry Tests ====================

    #[test]
    fn test_validate_entry_preserved() {
        let warnings = TableValidator::validate_entry(
            "Email contact@hopebridge.org or call +222 45 25 00 00",
            "Écrivez à contact@hopebridge.org ou appelez le +222 45 25 00 00",
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_validate_entry_missing_email() {
        let warnings =
            TableValidator::validate_entry("Email contact@hopebridge.org", "Écrivez-nous");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Email mismatch"));
    }

    #[test]
    fn test_validate_entry_changed_phone() {
        let warnings = TableValidator::validate_entry("Call +222 45 25 00 00", "Appelez +222 45 25 00 01");
        assert!(warnings[0].contains("Phone number mismatch"));
    }

    // ==================== Table Tests ====================

    #[test]
    fn test_builtin_table_is_clean() {
        let report = TableValidator::validate(TranslationTable::builtin());
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn test_empty_table_reports_every_key() {
        let report = TableValidator::validate(&TranslationTable::empty());
        assert_eq!(report.errors.len(), TranslationKey::ALL.len());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_partial_translation_warns() {
        let table = TranslationTable::builtin().clone().with_overrides(
            TranslationTable::from_entries([(Language::French, "extra.key", "Clé en trop")]),
        );
        let report = TableValidator::validate(&table);
        assert!(!report.has_errors());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("extra.key"));
    }

    #[test]
    fn test_missing_translation_warns() {
        let table = TranslationTable::from_entries([
            (Language::English, "a.b", "Hello"),
            (Language::French, "a.b", "Bonjour"),
        ]);
        let report = TableValidator::validate(&table);
        assert!(report.warnings.iter().any(|w| w == "Arabic is missing 'a.b'"));
        assert!(!report.warnings.iter().any(|w| w.starts_with("French")));
    }

    #[test]
    fn test_unknown_default_key_warns() {
        let table = TranslationTable::builtin().clone().with_overrides(
            TranslationTable::from_entries([
                (Language::English, "nav.blog", "Blog"),
                (Language::French, "nav.blog", "Blog"),
                (Language::Arabic, "nav.blog", "المدونة"),
            ]),
        );
        let report = TableValidator::validate(&table);
        assert!(!report.has_errors());
        assert_eq!(
            report.warnings,
            vec!["'nav.blog' is not used by any page".to_string()]
        );
    }

    #[test]
    fn test_empty_default_string_is_error() {
        let table = TranslationTable::builtin()
            .clone()
            .with_overrides(TranslationTable::from_entries([(
                Language::English,
                "nav.home",
                "  ",
            )]));
        let report = TableValidator::validate(&table);
        assert_eq!(report.errors, vec!["Empty English string for 'nav.home'".to_string()]);
    }

    #[test]
    fn test_validation_report_new() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert_eq!(report, ValidationReport::default());
    }
}
