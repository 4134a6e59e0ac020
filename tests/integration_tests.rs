//! Integration tests for the nonprofit site
//!
//! These tests drive the full router in-process and check how the language
//! store, direction binder, selector and cookie preference work together.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use proptest::prelude::*;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use nonprofit_site::config::Config;
use nonprofit_site::i18n::{
    resolve, Direction, DirectionBinder, DocumentRoot, FilePreference, Language, LanguageStore,
    Localizer, PreferenceObserver, ResolutionMetrics, TranslationKey, TranslationTable,
};
use nonprofit_site::server::{self, AppState};

// ==================== Test Helpers ====================

fn test_app() -> Router {
    test_app_with(Config::default())
}

fn test_app_with(config: Config) -> Router {
    server::router(AppState::new(config, TranslationTable::builtin().clone()))
}

struct TestResponse {
    status: StatusCode,
    set_cookie: Option<String>,
    content_language: Option<String>,
    location: Option<String>,
    body: String,
}

async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.expect("Router should not fail");
    let status = response.status();
    let header_text = |name: header::HeaderName| {
        response
            .headers()
            .get(name)
            .map(|v| v.to_str().unwrap().to_string())
    };
    let set_cookie = header_text(header::SET_COOKIE);
    let content_language = header_text(header::CONTENT_LANGUAGE);
    let location = header_text(header::LOCATION);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        set_cookie,
        content_language,
        location,
        body: String::from_utf8(bytes.to_vec()).expect("Body should be UTF-8"),
    }
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

fn post_form(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

// ==================== Page Rendering Tests ====================

#[tokio::test]
async fn test_home_defaults_to_english_ltr() {
    let response = send(test_app(), get("/")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("<html lang=\"en\" dir=\"ltr\">"));
    assert!(response.body.contains("Hope Bridge"));
    assert_eq!(response.content_language.as_deref(), Some("en"));
    assert!(response.set_cookie.is_none());
}

#[tokio::test]
async fn test_every_page_renders() {
    for path in [
        "/",
        "/about",
        "/our-work",
        "/impact",
        "/faq",
        "/get-involved",
        "/donate",
        "/contact",
        "/policies",
    ] {
        let response = send(test_app(), get(path)).await;
        assert_eq!(response.status, StatusCode::OK, "GET {} failed", path);
        assert!(response.body.starts_with("<!DOCTYPE html>"));
    }
}

#[tokio::test]
async fn test_trailing_slash_renders_page() {
    let response = send(test_app(), get("/about/")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("aria-current=\"page\">About</a>"));
}

#[tokio::test]
async fn test_trailing_slash_post_redirects_to_form_route() {
    let response = send(
        test_app(),
        post_form(
            "/contact/?lang=fr",
            "name=Aminetou&email=aminetou%40example.org&message=Hello",
            None,
        ),
    )
    .await;

    assert_eq!(response.status, StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.location.as_deref(), Some("/contact?lang=fr"));
    assert!(response.body.is_empty());

    let followed = send(
        test_app(),
        post_form(
            "/contact?lang=fr",
            "name=Aminetou&email=aminetou%40example.org&message=Hello",
            None,
        ),
    )
    .await;
    assert_eq!(followed.status, StatusCode::OK);
    assert!(followed.body.contains("role=\"status\""));
}

#[tokio::test]
async fn test_trailing_slash_post_to_static_page_is_not_rendered() {
    let response = send(test_app(), post_form("/about/", "", None)).await;
    assert_eq!(response.status, StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.location.as_deref(), Some("/about"));

    let direct = send(test_app(), post_form("/about", "", None)).await;
    assert_eq!(direct.status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unknown_path_is_localized_404() {
    let response = send(test_app(), get_with_cookie("/blog", "site_lang=fr")).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.contains("Page introuvable"));
    assert!(response.body.contains("<html lang=\"fr\" dir=\"ltr\">"));
}

// ==================== Language Switching Tests ====================

#[tokio::test]
async fn test_query_switches_to_arabic_rtl_and_sets_cookie() {
    let response = send(test_app(), get("/about?lang=ar")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("<html lang=\"ar\" dir=\"rtl\">"));
    assert!(response.body.contains("من نحن"));
    assert_eq!(response.content_language.as_deref(), Some("ar"));

    let cookie = response.set_cookie.expect("Set-Cookie should be present");
    assert!(cookie.starts_with("site_lang=ar;"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(!cookie.contains("Secure"));
}

#[tokio::test]
async fn test_cookie_is_honored_without_resetting_it() {
    let response = send(test_app(), get_with_cookie("/about", "site_lang=fr")).await;

    assert!(response.body.contains("<html lang=\"fr\" dir=\"ltr\">"));
    assert!(response.body.contains("À propos"));
    assert!(response.set_cookie.is_none());
}

#[tokio::test]
async fn test_query_overrides_cookie() {
    let response = send(test_app(), get_with_cookie("/?lang=en", "site_lang=ar")).await;

    assert!(response.body.contains("<html lang=\"en\" dir=\"ltr\">"));
    assert!(response
        .set_cookie
        .expect("Set-Cookie should be present")
        .starts_with("site_lang=en;"));
}

#[tokio::test]
async fn test_unsupported_query_is_ignored() {
    let response = send(test_app(), get_with_cookie("/?lang=de", "site_lang=fr")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("<html lang=\"fr\" dir=\"ltr\">"));
    assert!(response.set_cookie.is_none());
}

#[tokio::test]
async fn test_unsupported_cookie_falls_back_to_default() {
    let config = Config {
        default_language: Language::French,
        ..Config::default()
    };
    let response = send(test_app_with(config), get_with_cookie("/", "site_lang=xx")).await;
    assert!(response.body.contains("<html lang=\"fr\" dir=\"ltr\">"));
}

#[tokio::test]
async fn test_secure_cookie_flag() {
    let config = Config {
        secure_cookies: true,
        ..Config::default()
    };
    let response = send(test_app_with(config), get("/?lang=fr")).await;
    assert!(response.set_cookie.unwrap().ends_with("; Secure"));
}

#[tokio::test]
async fn test_selector_marks_active_language() {
    let response = send(test_app(), get("/faq?lang=ar")).await;

    assert_eq!(response.body.matches("aria-current=\"true\"").count(), 1);
    assert!(response.body.contains("href=\"/faq?lang=en\""));
    assert!(response.body.contains("href=\"/faq?lang=fr\""));
}

// ==================== Form Tests ====================

#[tokio::test]
async fn test_contact_form_success() {
    let response = send(
        test_app(),
        post_form(
            "/contact",
            "name=Aminetou&email=aminetou%40example.org&message=Hello",
            None,
        ),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response
        .body
        .contains("Thank you for your message. We will get back to you soon."));
}

#[tokio::test]
async fn test_contact_form_error_is_localized() {
    let response = send(
        test_app(),
        post_form("/contact", "name=&email=bad", Some("site_lang=ar")),
    )
    .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("يرجى التحقق من الاستمارة والمحاولة مرة أخرى."));
    assert!(response.body.contains("dir=\"rtl\""));
}

#[tokio::test]
async fn test_newsletter_and_donation_forms() {
    let newsletter = send(
        test_app(),
        post_form("/newsletter", "email=reader%40example.org", None),
    )
    .await;
    assert_eq!(newsletter.status, StatusCode::OK);
    assert!(newsletter
        .body
        .contains("You are now subscribed to our newsletter."));

    let donation = send(
        test_app(),
        post_form(
            "/donate",
            "amount=custom&custom_amount=75&frequency=monthly&method=bankily",
            None,
        ),
    )
    .await;
    assert_eq!(donation.status, StatusCode::OK);
    assert!(donation
        .body
        .contains("Thank you for your generosity! Your pledge has been recorded."));

    let bad_donation = send(
        test_app(),
        post_form("/donate", "amount=30&frequency=monthly&method=card", None),
    )
    .await;
    assert_eq!(bad_donation.status, StatusCode::UNPROCESSABLE_ENTITY);
}

// ==================== Health Tests ====================

#[tokio::test]
async fn test_health_reports_metrics() {
    let app = test_app();
    let _ = send(app.clone(), get("/?lang=ar")).await;
    let response = send(app, get("/health")).await;

    assert_eq!(response.status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["default_language"], "en");
    assert!(json["localization"]["lookups"].as_u64().unwrap() > 0);
    assert!(json["localization"]["language_changes"].as_u64().unwrap() >= 1);
    assert_eq!(json["localization"]["misses"], 0);
}

#[tokio::test]
async fn test_health_ignores_reselecting_current_language() {
    let app = test_app();
    let _ = send(app.clone(), get_with_cookie("/?lang=fr", "site_lang=fr")).await;
    let _ = send(app.clone(), get("/?lang=en")).await;
    let response = send(app, get("/health")).await;

    let json: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(json["localization"]["language_changes"], 0);
}

// ==================== Overrides Tests ====================

#[tokio::test]
async fn test_overrides_file_replaces_strings() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("translations.json");
    std::fs::write(&path, r#"{"fr": {"nav.about": "Qui sommes-nous"}}"#).unwrap();

    let config = Config {
        translations_file: Some(path),
        ..Config::default()
    };
    let table = server::load_translations(&config).unwrap();
    let app = server::router(AppState::new(config, table));

    let response = send(app, get("/about?lang=fr")).await;
    assert!(response.body.contains("Qui sommes-nous"));
}

#[test]
fn test_missing_overrides_file_fails() {
    let config = Config {
        translations_file: Some("/nonexistent/translations.json".into()),
        ..Config::default()
    };
    assert!(server::load_translations(&config).is_err());
}

// ==================== Language Lifecycle Tests ====================

#[test]
fn test_switch_to_arabic_updates_root_and_lookups() {
    let temp_dir = TempDir::new().unwrap();
    let preference = Arc::new(FilePreference::new(temp_dir.path().join("lang.json")));
    let document = Arc::new(DocumentRoot::new());
    let metrics = Arc::new(ResolutionMetrics::new());

    let store = LanguageStore::new(
        Language::English,
        vec![
            Box::new(DirectionBinder::attached(document.clone())),
            Box::new(PreferenceObserver::new(preference.clone())),
        ],
        metrics.clone(),
    );

    assert!(store.set_language_code("ar"));
    assert_eq!(store.direction(), Direction::Rtl);
    assert_eq!(document.snapshot().dir, Direction::Rtl);
    assert_eq!(document.snapshot().lang, "ar");

    let localizer = Localizer::new(TranslationTable::builtin(), store.language(), metrics);
    assert_eq!(localizer.t(TranslationKey::NavAbout), "من نحن");

    let saved = std::fs::read_to_string(preference.path()).unwrap();
    assert!(saved.contains("\"ar\""));
}

#[test]
fn test_store_driven_lookups_follow_language_changes() {
    let table = TranslationTable::from_entries([
        (Language::English, "a.b", "Hello"),
        (Language::French, "a.b", "Bonjour"),
    ]);
    let document = Arc::new(DocumentRoot::new());
    let metrics = Arc::new(ResolutionMetrics::new());
    let store = LanguageStore::new(
        Language::English,
        vec![Box::new(DirectionBinder::attached(document.clone()))],
        metrics.clone(),
    );

    assert!(store.set_language_code("fr"));
    let localizer = Localizer::new(&table, store.language(), metrics.clone());
    assert_eq!(localizer.lookup("a.b"), "Bonjour");
    assert_eq!(document.snapshot().dir, Direction::Ltr);

    assert!(store.set_language_code("ar"));
    let localizer = Localizer::new(&table, store.language(), metrics.clone());
    assert_eq!(localizer.lookup("a.b"), "Hello");
    assert_eq!(document.snapshot().dir, Direction::Rtl);
    assert_eq!(document.snapshot().lang, "ar");

    assert_eq!(metrics.hits(), 1);
    assert_eq!(metrics.fallbacks(), 1);
}

#[test]
fn test_partial_table_falls_back_to_english() {
    let table = TranslationTable::from_entries([
        (Language::English, "nav.about", "About"),
        (Language::English, "nav.home", "Home"),
        (Language::Arabic, "nav.home", "الرئيسية"),
    ]);

    assert_eq!(resolve(&table, Language::Arabic, "nav.home"), "الرئيسية");
    assert_eq!(resolve(&table, Language::Arabic, "nav.about"), "About");
    assert_eq!(resolve(&table, Language::Arabic, "nav.blog"), "nav.blog");
}

// ==================== Property Tests ====================

proptest! {
    #[test]
    fn prop_resolve_never_panics_and_degrades_to_key(key in "[a-zA-Z.]{0,40}") {
        let table = TranslationTable::builtin();
        for language in Language::ALL {
            let text = resolve(table, language, &key);
            if table.get(language, &key).is_none() && table.get(Language::English, &key).is_none() {
                prop_assert_eq!(text, key.as_str());
            }
        }
    }

    #[test]
    fn prop_unsupported_codes_leave_state_unchanged(code in "\\PC{0,12}", start in 0usize..3) {
        prop_assume!(Language::from_code(&code).is_err());

        let document = Arc::new(DocumentRoot::new());
        let initial = Language::ALL[start];
        let store = LanguageStore::new(
            initial,
            vec![Box::new(DirectionBinder::attached(document.clone()))],
            Arc::new(ResolutionMetrics::new()),
        );

        prop_assert!(!store.set_language_code(&code));
        prop_assert_eq!(store.language(), initial);
        prop_assert_eq!(document.snapshot().dir, initial.direction());
    }

    #[test]
    fn prop_set_then_get(index in 0usize..3, upper in any::<bool>()) {
        let language = Language::ALL[index];
        let code = if upper { language.code().to_uppercase() } else { language.code().to_string() };
        let store = LanguageStore::new(Language::English, Vec::new(), Arc::new(ResolutionMetrics::new()));

        prop_assert!(store.set_language_code(&code));
        prop_assert_eq!(store.language(), language);
        prop_assert_eq!(store.direction(), language.direction());
    }
}
