//! Localization metrics.
//!
//! Counts how lookups resolve (direct hit, fallback, key literal) and how
//! language change requests are handled. One instance is shared by the whole
//! application through an `Arc`.

use crate::i18n::ResolutionSource;
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Resolution and language-change counters.
#[derive(Debug, Default)]
pub struct ResolutionMetrics {
    /// Lookups answered by the requested language
    hits: AtomicUsize,

    /// Lookups answered by the default language
    fallbacks: AtomicUsize,

    /// Lookups that fell through to the key literal
    misses: AtomicUsize,

    /// Accepted changes to a different language
    language_changes: AtomicUsize,

    /// Language codes rejected by the store
    rejected_codes: AtomicUsize,
}

impl ResolutionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one lookup.
    pub fn record(&self, source: ResolutionSource) {
        let counter = match source {
            ResolutionSource::Active => &self.hits,
            ResolutionSource::Fallback => &self.fallbacks,
            ResolutionSource::KeyLiteral => &self.misses,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_language_change(&self) {
        self.language_changes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected_code(&self) {
        self.rejected_codes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn language_changes(&self) -> usize {
        self.language_changes.load(Ordering::Relaxed)
    }

    pub fn rejected_codes(&self) -> usize {
        self.rejected_codes.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.hits();
        let fallbacks = self.fallbacks();
        let misses = self.misses();
        let lookups = hits + fallbacks + misses;
        let degraded_rate = if lookups > 0 {
            ((fallbacks + misses) as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups,
            hits,
            fallbacks,
            misses,
            degraded_rate,
            language_changes: self.language_changes(),
            rejected_codes: self.rejected_codes(),
        }
    }
}

/// Snapshot of the localization counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Total lookups
    pub lookups: usize,

    pub hits: usize,

    pub fallbacks: usize,

    pub misses: usize,

    /// Share of lookups that did not resolve in the requested language (0-100)
    pub degraded_rate: f64,

    pub language_changes: usize,

    pub rejected_codes: usize,
}
