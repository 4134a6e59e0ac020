use crate::i18n::Language;
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,
    pub secure_cookies: bool,

    // Localization
    pub default_language: Language,
    pub translations_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            secure_cookies: false,
            default_language: Language::canonical(),
            translations_file: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            // Server
            port: match lookup("PORT") {
                Some(v) => v
                    .trim()
                    .parse()
                    .with_context(|| format!("PORT is not a valid port: '{}'", v))?,
                None => defaults.port,
            },
            secure_cookies: lookup("SECURE_COOKIES")
                .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.secure_cookies),

            // Localization
            default_language: match lookup("DEFAULT_LANGUAGE") {
                Some(code) => Language::from_code(&code)
                    .context("DEFAULT_LANGUAGE must be one of en, fr, ar")?,
                None => defaults.default_language,
            },
            translations_file: lookup("TRANSLATIONS_FILE")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}
