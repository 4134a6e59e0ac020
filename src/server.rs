//! HTTP server: routes, per-request language sessions and form handlers.
//!
//! Every request gets its own [`LanguageStore`], seeded from the `site_lang`
//! cookie (or the configured default). A `?lang=` query parameter goes through
//! the language selector; accepted changes are written back as a cookie.

use crate::config::Config;
use crate::i18n::{
    initial_language, DirectionBinder, DocumentRoot, Language, LanguageSelector, LanguageStore,
    Localizer, PreferenceObserver, PreferenceStorage, ResolutionMetrics, TranslationKey,
    TranslationTable,
};
use crate::site::forms::{ContactForm, DonationForm, NewsletterForm, VolunteerForm};
use crate::site::{render_page, Notice, Page, Submission, View};
use anyhow::Result;
use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::Deserialize;
use std::sync::{Arc, Mutex, PoisonError};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

/// Name of the cookie holding the language preference.
pub const LANGUAGE_COOKIE: &str = "site_lang";

const COOKIE_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 365;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub table: Arc<TranslationTable>,
    pub metrics: Arc<ResolutionMetrics>,
}

impl AppState {
    pub fn new(config: Config, table: TranslationTable) -> Self {
        Self {
            config: Arc::new(config),
            table: Arc::new(table),
            metrics: Arc::new(ResolutionMetrics::new()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LanguageQuery {
    pub lang: Option<String>,
}

/// Language preference carried by the request/response cookie.
///
/// `save` only records a pending `Set-Cookie` when the language differs from
/// the one the request started with.
pub struct CookiePreference {
    received: Option<String>,
    baseline: Language,
    pending: Mutex<Option<Language>>,
}

impl CookiePreference {
    pub fn from_headers(headers: &HeaderMap, default: Language) -> Self {
        let received = read_cookie(headers, LANGUAGE_COOKIE);
        let baseline = received
            .as_deref()
            .and_then(|code| Language::from_code(code).ok())
            .unwrap_or(default);
        Self {
            received,
            baseline,
            pending: Mutex::new(None),
        }
    }

    /// `Set-Cookie` value for a changed preference, if any.
    pub fn set_cookie_header(&self, secure: bool) -> Option<HeaderValue> {
        let pending = *self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        pending.and_then(|language| {
            let mut cookie = format!(
                "{}={}; Path=/; Max-Age={}; SameSite=Lax",
                LANGUAGE_COOKIE,
                language.code(),
                COOKIE_MAX_AGE_SECS
            );
            if secure {
                cookie.push_str("; Secure");
            }
            HeaderValue::from_str(&cookie).ok()
        })
    }
}

impl PreferenceStorage for CookiePreference {
    fn load(&self) -> Option<String> {
        self.received.clone()
    }

    fn save(&self, language: Language) -> Result<()> {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        *pending = (language != self.baseline).then_some(language);
        Ok(())
    }
}

/// Read a cookie value from the request headers.
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().to_string())
}

/// One request's language state.
struct Session {
    store: LanguageStore,
    document: Arc<DocumentRoot>,
    cookie: Arc<CookiePreference>,
}

impl Session {
    fn open(state: &AppState, headers: &HeaderMap, query: &LanguageQuery) -> Self {
        let default = state.config.default_language;
        let cookie = Arc::new(CookiePreference::from_headers(headers, default));
        let document = Arc::new(DocumentRoot::new());
        let initial = initial_language(cookie.as_ref(), default);

        let store = LanguageStore::new(
            initial,
            vec![
                Box::new(DirectionBinder::attached(Arc::clone(&document))),
                Box::new(PreferenceObserver::new(cookie.clone())),
            ],
            Arc::clone(&state.metrics),
        );

        if let Some(code) = query.lang.as_deref() {
            LanguageSelector::new(&store).activate(code);
        }

        Self {
            store,
            document,
            cookie,
        }
    }

    fn respond(
        &self,
        state: &AppState,
        status: StatusCode,
        view: View,
        path: &str,
        notice: Option<Notice>,
    ) -> Response {
        let localizer = Localizer::new(
            &state.table,
            self.store.language(),
            Arc::clone(&state.metrics),
        );
        let root = self.document.snapshot();
        let selector =
            LanguageSelector::new(&self.store).render_html(path, localizer.t(TranslationKey::LanguageLabel));
        let body = render_page(view, &localizer, root, &selector, notice);

        let mut response = (status, Html(body)).into_response();
        let headers = response.headers_mut();
        headers.insert(header::CONTENT_LANGUAGE, HeaderValue::from_static(root.lang));
        headers.insert(header::VARY, HeaderValue::from_static("Cookie"));
        if let Some(cookie) = self.cookie.set_cookie_header(state.config.secure_cookies) {
            headers.insert(header::SET_COOKIE, cookie);
        }
        response
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let mut router: Router<AppState> = Router::new().route("/health", get(health));

    for page in Page::ALL {
        let method_router = match page {
            Page::Contact => get(show_page).post(submit_contact),
            Page::GetInvolved => get(show_page).post(submit_volunteer),
            Page::Donate => get(show_page).post(submit_donation),
            _ => get(show_page),
        };
        router = router.route(page.path(), method_router);
    }

    router
        .route("/newsletter", post(submit_newsletter))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn show_page(
    State(state): State<AppState>,
    uri: Uri,
    Query(query): Query<LanguageQuery>,
    headers: HeaderMap,
) -> Response {
    let session = Session::open(&state, &headers, &query);
    match Page::from_path(uri.path()) {
        Some(page) => session.respond(&state, StatusCode::OK, View::Page(page), uri.path(), None),
        None => session.respond(&state, StatusCode::NOT_FOUND, View::NotFound, uri.path(), None),
    }
}

/// Unknown paths.
///
/// A trailing-slash variant of a page path renders the page for GET/HEAD.
/// Other methods are redirected with 308 so the body reaches the real route.
async fn fallback(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    Query(query): Query<LanguageQuery>,
    headers: HeaderMap,
) -> Response {
    match Page::from_path(uri.path()) {
        Some(page) if method == Method::GET || method == Method::HEAD => {
            let session = Session::open(&state, &headers, &query);
            session.respond(&state, StatusCode::OK, View::Page(page), page.path(), None)
        }
        Some(page) => {
            let target = match uri.query() {
                Some(q) => format!("{}?{}", page.path(), q),
                None => page.path().to_string(),
            };
            debug!("Redirecting {} {} to {}", method, uri.path(), target);
            Redirect::permanent(&target).into_response()
        }
        None => {
            debug!("No page at {}", uri.path());
            let session = Session::open(&state, &headers, &query);
            session.respond(&state, StatusCode::NOT_FOUND, View::NotFound, uri.path(), None)
        }
    }
}

fn handle_submission<F: Submission>(
    state: &AppState,
    headers: &HeaderMap,
    query: &LanguageQuery,
    page: Page,
    form_name: &str,
    form: F,
) -> Response {
    let session = Session::open(state, headers, query);
    match form.validate() {
        Ok(()) => {
            info!("Accepted {} submission", form_name);
            session.respond(
                state,
                StatusCode::OK,
                View::Page(page),
                page.path(),
                Some(Notice::Success(form.success_key())),
            )
        }
        Err(e) => {
            warn!("Rejected {} submission: {}", form_name, e);
            session.respond(
                state,
                StatusCode::UNPROCESSABLE_ENTITY,
                View::Page(page),
                page.path(),
                Some(Notice::Error(TranslationKey::FormError)),
            )
        }
    }
}

async fn submit_contact(
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
    headers: HeaderMap,
    Form(form): Form<ContactForm>,
) -> Response {
    handle_submission(&state, &headers, &query, Page::Contact, "contact", form)
}

async fn submit_volunteer(
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
    headers: HeaderMap,
    Form(form): Form<VolunteerForm>,
) -> Response {
    handle_submission(&state, &headers, &query, Page::GetInvolved, "volunteer", form)
}

async fn submit_newsletter(
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
    headers: HeaderMap,
    Form(form): Form<NewsletterForm>,
) -> Response {
    handle_submission(&state, &headers, &query, Page::GetInvolved, "newsletter", form)
}

async fn submit_donation(
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
    headers: HeaderMap,
    Form(form): Form<DonationForm>,
) -> Response {
    if let Ok(selection) = form.selection() {
        info!(
            "Donation pledge: {} ({:?}, {:?})",
            selection.amount, selection.frequency, selection.method
        );
    }
    handle_submission(&state, &headers, &query, Page::Donate, "donation", form)
}

async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "default_language": state.config.default_language.code(),
        "localization": state.metrics.report(),
    }))
}

/// Built-in strings, with the configured overrides file applied on top.
pub fn load_translations(config: &Config) -> Result<TranslationTable> {
    let table = TranslationTable::builtin().clone();
    match &config.translations_file {
        Some(path) => {
            let overrides = TranslationTable::load_json(path)?;
            info!("Loaded translation overrides from {}", path.display());
            Ok(table.with_overrides(overrides))
        }
        None => Ok(table),
    }
}

/// Bind and serve until the process is stopped.
pub async fn serve(state: AppState) -> Result<()> {
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], state.config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
