//! Internationalization (i18n) for the site.
//!
//! All language-related state and lookup lives here. Pages only see a
//! [`Localizer`] for the request's language and the document root attributes.
//!
//! # Architecture
//!
//! - `language` / `registry`: the closed set of languages and their metadata
//! - `keys`: every translation key the site uses
//! - `strings` / `table`: localized strings and the immutable lookup table
//! - `resolver`: key resolution (active language, then default, then key)
//! - `store`: the owning handle for the current language and its observers
//! - `binder`: keeps the document root `dir`/`lang` attributes in sync
//! - `selector`: the language picker
//! - `preference`: optional persistence of the chosen language
//! - `validator` / `metrics`: table checks and lookup counters
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use nonprofit_site::i18n::*;
//!
//! let document = Arc::new(DocumentRoot::new());
//! let metrics = Arc::new(ResolutionMetrics::new());
//! let store = LanguageStore::new(
//!     Language::canonical(),
//!     vec![Box::new(DirectionBinder::attached(document.clone()))],
//!     metrics.clone(),
//! );
//!
//! store.set_language_code("ar");
//! assert_eq!(document.snapshot().dir, Direction::Rtl);
//!
//! let localizer = Localizer::new(TranslationTable::builtin(), store.language(), metrics);
//! let title = localizer.t(TranslationKey::NavAbout);
//! ```

mod binder;
mod error;
mod keys;
mod language;
mod metrics;
mod preference;
mod registry;
mod resolver;
mod selector;
mod store;
mod strings;
mod table;
mod validator;

pub use binder::{DirectionBinder, DocumentRoot, RootAttributes};
pub use error::I18nError;
pub use keys::TranslationKey;
pub use language::{Direction, Language};
pub use metrics::{MetricsReport, ResolutionMetrics};
pub use preference::{
    initial_language, FilePreference, PreferenceObserver, PreferenceStorage,
};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use resolver::{resolve, resolve_detailed, Localizer, Resolution, ResolutionSource};
pub use selector::{LanguageSelector, SelectorOption};
pub use store::{LanguageObserver, LanguageStore};
pub use table::TranslationTable;
pub use validator::{TableValidator, ValidationReport};
