//! Language selector control.

use crate::html::escape;
use crate::i18n::{Direction, Language, LanguageStore};

/// One entry of the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorOption {
    pub language: Language,
    pub code: &'static str,
    /// Always the language's own name, whatever the UI language is
    pub label: &'static str,
    /// Direction of the option's own script
    pub dir: Direction,
    pub active: bool,
}

/// Lists the supported languages and forwards selections to the store.
pub struct LanguageSelector<'a> {
    store: &'a LanguageStore,
}

impl<'a> LanguageSelector<'a> {
    pub fn new(store: &'a LanguageStore) -> Self {
        Self { store }
    }

    pub fn options(&self) -> Vec<SelectorOption> {
        let current = self.store.language();
        Language::ALL
            .iter()
            .map(|language| SelectorOption {
                language: *language,
                code: language.code(),
                label: language.native_name(),
                dir: language.direction(),
                active: *language == current,
            })
            .collect()
    }

    /// Activate an entry by code. Returns whether the store accepted it.
    pub fn activate(&self, code: &str) -> bool {
        self.store.set_language_code(code)
    }

    /// Selector markup. Each entry links to `path?lang=<code>`.
    pub fn render_html(&self, path: &str, label: &str) -> String {
        let mut html = format!(
            "<nav class=\"language-selector\" aria-label=\"{}\"><ul>",
            escape(label)
        );
        for option in self.options() {
            let current = if option.active {
                " class=\"active\" aria-current=\"true\""
            } else {
                ""
            };
            html.push_str(&format!(
                "<li><a href=\"{}?lang={}\" hreflang=\"{}\" lang=\"{}\" dir=\"{}\"{}>{}</a></li>",
                escape(path),
                option.code,
                option.code,
                option.code,
                option.dir,
                current,
                escape(option.label)
            ));
        }
        html.push_str("</ul></nav>");
        html
    }
}
