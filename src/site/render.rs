//! HTML rendering of the site shell and pages.
//!
//! Every piece of visible text goes through the request's [`Localizer`] and
//! is escaped. The root `lang`/`dir` attributes come from the document root
//! written by the direction binder; the renderer only reads them.

use crate::html::escape;
use crate::i18n::{Localizer, RootAttributes, TranslationKey};
use crate::site::forms::{Frequency, PaymentMethod, PRESET_AMOUNTS};
use crate::site::pages::{Block, FormKind, Page};
use chrono::Datelike;

/// What to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Page(Page),
    NotFound,
}

/// Banner shown above the page body after a form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Success(TranslationKey),
    Error(TranslationKey),
}

/// Render a complete HTML document.
pub fn render_page(
    view: View,
    localizer: &Localizer<'_>,
    root: RootAttributes,
    selector_html: &str,
    notice: Option<Notice>,
) -> String {
    let t = |key: TranslationKey| escape(localizer.t(key));
    let site_name = t(TranslationKey::SiteName);
    let title_key = match view {
        View::Page(page) => page.title_key(),
        View::NotFound => TranslationKey::NotFoundTitle,
    };

    let mut html = String::with_capacity(8 * 1024);
    html.push_str(&format!(
        "<!DOCTYPE html>\n<html lang=\"{}\" dir=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<title>{} | {}</title>\n</head>\n<body>\n",
        root.lang,
        root.dir,
        t(title_key),
        site_name
    ));

    html.push_str(&render_header(view, localizer, selector_html));

    html.push_str("<main>\n");
    if let Some(notice) = notice {
        let (class, key, role) = match notice {
            Notice::Success(key) => ("notice notice-success", key, "status"),
            Notice::Error(key) => ("notice notice-error", key, "alert"),
        };
        html.push_str(&format!(
            "<div class=\"{}\" role=\"{}\">{}</div>\n",
            class,
            role,
            t(key)
        ));
    }

    match view {
        View::Page(page) => html.push_str(&render_body(page, localizer)),
        View::NotFound => html.push_str(&format!(
            "<h1>{}</h1>\n<p class=\"intro\">{}</p>\n<p><a class=\"button\" href=\"/\">{}</a></p>\n",
            t(TranslationKey::NotFoundTitle),
            t(TranslationKey::NotFoundText),
            t(TranslationKey::NotFoundBack)
        )),
    }
    html.push_str("</main>\n");

    html.push_str(&render_footer(localizer));
    html.push_str("</body>\n</html>\n");
    html
}

fn render_header(view: View, localizer: &Localizer<'_>, selector_html: &str) -> String {
    let t = |key: TranslationKey| escape(localizer.t(key));
    let mut html = format!(
        "<header class=\"site-header\">\n<a class=\"brand\" href=\"/\">{}</a>\n<p class=\"tagline\">{}</p>\n<nav class=\"main-nav\"><ul>",
        t(TranslationKey::SiteName),
        t(TranslationKey::SiteTagline)
    );
    for page in Page::ALL {
        let current = if view == View::Page(page) {
            " aria-current=\"page\""
        } else {
            ""
        };
        html.push_str(&format!(
            "<li><a href=\"{}\"{}>{}</a></li>",
            page.path(),
            current,
            t(page.nav_key())
        ));
    }
    html.push_str("</ul></nav>\n");
    html.push_str(selector_html);
    html.push_str("\n</header>\n");
    html
}

fn render_body(page: Page, localizer: &Localizer<'_>) -> String {
    let t = |key: TranslationKey| escape(localizer.t(key));
    let mut html = format!(
        "<h1>{}</h1>\n<p class=\"intro\">{}</p>\n",
        t(page.title_key()),
        t(page.intro_key())
    );

    for block in page.blocks() {
        match block {
            Block::Section { title, body } => html.push_str(&format!(
                "<section>\n<h2>{}</h2>\n<p>{}</p>\n</section>\n",
                t(*title),
                t(*body)
            )),
            Block::Question { question, answer } => html.push_str(&format!(
                "<details class=\"faq\">\n<summary>{}</summary>\n<p>{}</p>\n</details>\n",
                t(*question),
                t(*answer)
            )),
            Block::Link { label, target } => html.push_str(&format!(
                "<p><a class=\"button\" href=\"{}\">{}</a></p>\n",
                target.path(),
                t(*label)
            )),
            Block::Note(key) => html.push_str(&format!("<p class=\"note\">{}</p>\n", t(*key))),
        }
    }

    for form in page.forms() {
        html.push_str(&render_form(*form, localizer));
    }
    html
}

fn text_field(name: &str, label: &str, kind: &str, required: bool) -> String {
    format!(
        "<label for=\"{name}\">{label}</label>\n<input id=\"{name}\" name=\"{name}\" type=\"{kind}\" value=\"\"{}>\n",
        if required { " required" } else { "" },
    )
}

/// Forms are always rendered empty; a completed submission clears its fields.
fn render_form(kind: FormKind, localizer: &Localizer<'_>) -> String {
    let t = |key: TranslationKey| escape(localizer.t(key));
    let mut html = format!(
        "<form class=\"form-{}\" method=\"post\" action=\"{}\">\n",
        kind.action().trim_start_matches('/'),
        kind.action()
    );

    match kind {
        FormKind::Contact => {
            html.push_str(&text_field("name", &t(TranslationKey::FormName), "text", true));
            html.push_str(&text_field("email", &t(TranslationKey::FormEmail), "email", true));
            html.push_str(&text_field("subject", &t(TranslationKey::FormSubject), "text", false));
            html.push_str(&format!(
                "<label for=\"message\">{}</label>\n<textarea id=\"message\" name=\"message\" required></textarea>\n",
                t(TranslationKey::FormMessage)
            ));
            html.push_str(&submit(&t(TranslationKey::FormSubmit)));
        }
        FormKind::Volunteer => {
            html.push_str(&text_field("name", &t(TranslationKey::FormName), "text", true));
            html.push_str(&text_field("email", &t(TranslationKey::FormEmail), "email", true));
            html.push_str(&text_field("phone", &t(TranslationKey::FormPhone), "tel", false));
            html.push_str(&text_field("interest", &t(TranslationKey::FormInterest), "text", true));
            html.push_str(&text_field(
                "availability",
                &t(TranslationKey::FormAvailability),
                "text",
                false,
            ));
            html.push_str(&submit(&t(TranslationKey::FormSubmit)));
        }
        FormKind::Newsletter => {
            html.push_str(&text_field("email", &t(TranslationKey::FormEmail), "email", true));
            html.push_str(&submit(&t(TranslationKey::FormSubmit)));
        }
        FormKind::Donation => {
            html.push_str("<fieldset class=\"amounts\">\n");
            for amount in PRESET_AMOUNTS {
                html.push_str(&format!(
                    "<label><input type=\"radio\" name=\"amount\" value=\"{amount}\"> {amount}</label>\n"
                ));
            }
            html.push_str(&format!(
                "<label><input type=\"radio\" name=\"amount\" value=\"custom\"> {}</label>\n\
<input name=\"custom_amount\" type=\"number\" min=\"1\" value=\"\">\n</fieldset>\n",
                t(TranslationKey::DonateAmountCustom)
            ));

            html.push_str("<fieldset class=\"frequency\">\n");
            for frequency in Frequency::ALL {
                html.push_str(&format!(
                    "<label><input type=\"radio\" name=\"frequency\" value=\"{}\"> {}</label>\n",
                    frequency.value(),
                    t(frequency.label_key())
                ));
            }
            html.push_str("</fieldset>\n");

            html.push_str(&format!(
                "<fieldset class=\"method\">\n<legend>{}</legend>\n",
                t(TranslationKey::DonateMethodTitle)
            ));
            for method in PaymentMethod::ALL {
                html.push_str(&format!(
                    "<label><input type=\"radio\" name=\"method\" value=\"{}\"> {}</label>\n",
                    method.value(),
                    t(method.label_key())
                ));
            }
            html.push_str("</fieldset>\n");
            html.push_str(&submit(&t(TranslationKey::DonateSubmit)));
        }
    }

    html.push_str("</form>\n");
    html
}

fn submit(label: &str) -> String {
    format!("<button type=\"submit\">{}</button>\n", label)
}

fn render_footer(localizer: &Localizer<'_>) -> String {
    let t = |key: TranslationKey| escape(localizer.t(key));
    let mut html = format!(
        "<footer class=\"site-footer\">\n<p class=\"mission\">{}</p>\n<h2>{}</h2>\n<ul class=\"quick-links\">",
        t(TranslationKey::FooterMission),
        t(TranslationKey::FooterQuickLinks)
    );
    for page in Page::ALL {
        html.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>",
            page.path(),
            t(page.nav_key())
        ));
    }
    html.push_str("</ul>\n");

    // Contact details keep their own direction inside RTL pages.
    html.push_str(&format!(
        "<h2>{}</h2>\n<address>{}<br><a href=\"mailto:{email}\" dir=\"ltr\">{email}</a><br><span dir=\"ltr\">{}</span></address>\n",
        t(TranslationKey::FooterContact),
        t(TranslationKey::FooterAddress),
        t(TranslationKey::FooterPhone),
        email = t(TranslationKey::FooterEmail),
    ));
    html.push_str(&format!(
        "<p class=\"copyright\">© {} {}. {}</p>\n</footer>\n",
        chrono::Utc::now().year(),
        t(TranslationKey::SiteName),
        t(TranslationKey::FooterRights)
    ));
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Direction, Language, ResolutionMetrics, TranslationTable};
    use std::sync::Arc;

    fn render(view: View, language: Language, notice: Option<Notice>) -> String {
        let metrics = Arc::new(ResolutionMetrics::new());
        let localizer = Localizer::new(TranslationTable::builtin(), language, metrics);
        let root = RootAttributes {
            dir: language.direction(),
            lang: language.code(),
        };
        render_page(view, &localizer, root, "<nav class=\"language-selector\"></nav>", notice)
    }

    #[test]
    fn test_root_attributes_rendered() {
        let html = render(View::Page(Page::Home), Language::Arabic, None);
        assert!(html.contains("<html lang=\"ar\" dir=\"rtl\">"));

        let html = render(View::Page(Page::Home), Language::French, None);
        assert!(html.contains("<html lang=\"fr\" dir=\"ltr\">"));
    }

    #[test]
    fn test_page_text_is_localized() {
        let html = render(View::Page(Page::About), Language::French, None);
        assert!(html.contains("<h1>À propos de nous</h1>"));
        assert!(html.contains("<title>À propos de nous | Hope Bridge</title>"));
        assert!(html.contains(">Nos actions</a>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let html = render(View::Page(Page::About), Language::French, None);
        assert!(html.contains("organisation à but non lucratif"));
        assert!(html.contains("l&#39;éducation"));
        assert!(!html.contains("l'éducation"));
    }

    #[test]
    fn test_current_page_marked_in_nav() {
        let html = render(View::Page(Page::Faq), Language::English, None);
        assert!(html.contains("<a href=\"/faq\" aria-current=\"page\">FAQ</a>"));
        assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
    }

    #[test]
    fn test_faq_renders_questions() {
        let html = render(View::Page(Page::Faq), Language::English, None);
        assert!(html.contains("<summary>Can I donate with Bankily?</summary>"));
    }

    #[test]
    fn test_contact_form_rendered_empty() {
        let html = render(View::Page(Page::Contact), Language::English, None);
        assert!(html.contains("action=\"/contact\""));
        assert!(html.contains("<input id=\"email\" name=\"email\" type=\"email\" value=\"\" required>"));
    }

    #[test]
    fn test_donate_form_lists_methods() {
        let html = render(View::Page(Page::Donate), Language::Arabic, None);
        assert!(html.contains("value=\"bankily\"> بنكيلي"));
        assert!(html.contains("value=\"25\""));
        assert!(html.contains("value=\"monthly\""));
    }

    #[test]
    fn test_notice_rendered() {
        let html = render(
            View::Page(Page::Contact),
            Language::English,
            Some(Notice::Success(TranslationKey::ContactSuccess)),
        );
        assert!(html.contains("role=\"status\">Thank you for your message."));

        let html = render(
            View::Page(Page::Contact),
            Language::English,
            Some(Notice::Error(TranslationKey::FormError)),
        );
        assert!(html.contains("class=\"notice notice-error\" role=\"alert\""));
    }

    #[test]
    fn test_not_found_view() {
        let html = render(View::NotFound, Language::Arabic, None);
        assert!(html.contains("<h1>الصفحة غير موجودة</h1>"));
        assert!(!html.contains("aria-current=\"page\""));
    }

    #[test]
    fn test_footer() {
        let html = render(View::Page(Page::Home), Language::English, None);
        assert!(html.contains("mailto:contact@hopebridge.org"));
        assert!(html.contains("© "));
        assert!(html.contains("All rights reserved."));
    }

    #[test]
    fn test_missing_translation_degrades_to_fallback() {
        let table = TranslationTable::from_entries([(Language::English, "nav.home", "Home")]);
        let metrics = Arc::new(ResolutionMetrics::new());
        let localizer = Localizer::new(&table, Language::French, Arc::clone(&metrics));
        let root = RootAttributes {
            dir: Direction::Ltr,
            lang: "fr",
        };

        let html = render_page(View::Page(Page::Home), &localizer, root, "", None);
        assert!(html.contains(">Home</a>"));
        assert!(html.contains("<h1>home.title</h1>"));
        assert!(metrics.fallbacks() > 0);
        assert!(metrics.misses() > 0);
    }
}
