//! Web preview server for the portfolio.
//!
//! Serves the same page the static export writes, with the interactive
//! controls wired to the server instead of to separate files. No state lives
//! on the server: the theme travels in a cookie and the carousel position in
//! the query string.
//!
//! # Endpoints
//!
//! - `GET /` - The page (`?project=N`, `theme` cookie)
//! - `POST /theme` - Toggle the theme cookie and redirect back
//! - `POST /contact` - Compose the contact form and redirect to `mailto:`
//! - `GET /api/content` - The content tables as JSON
//! - `GET /api/projects/{index}` - One project as JSON
//! - `GET /health` - Health check
//!
//! Anything else is looked up in the configured asset directory.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::config::Config;
use crate::models::{Project, SiteContent};
use crate::render::{render_page, LinkMode, PageOptions, RootClass};
use crate::state::{commit_theme, restore_theme, ContactForm, PresentationState};
use crate::store::PreferenceStore;

/// Cookie lifetime: one year.
const COOKIE_MAX_AGE_SECS: u32 = 60 * 60 * 24 * 365;

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the preview server.
#[derive(Clone)]
pub struct AppState {
    /// Content tables (immutable after load)
    content: Arc<SiteContent>,
    /// Application configuration
    config: Arc<Config>,
}

impl AppState {
    /// Loads the configured content.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let content = config.load_content()?;
        Ok(Self::with_content(config, content))
    }

    /// Uses already loaded content.
    pub fn with_content(config: Config, content: SiteContent) -> Self {
        Self {
            content: Arc::new(content),
            config: Arc::new(config),
        }
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Crate version
    pub version: String,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// Query of the page route.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Carousel position (clamped)
    pub project: Option<usize>,
}

/// Body of the theme toggle form.
#[derive(Debug, Default, Deserialize)]
pub struct ThemeToggleForm {
    /// Carousel position to return to
    pub project: Option<usize>,
}

// ============================================================================
// Cookies
// ============================================================================

/// Request cookies seen as a preference store.
///
/// Writes are not applied to the request; they become `Set-Cookie` headers
/// on the response.
#[derive(Debug, Default)]
struct CookieStore {
    incoming: HashMap<String, String>,
    outgoing: Vec<String>,
}

impl CookieStore {
    fn from_headers(headers: &HeaderMap) -> Self {
        let incoming = headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| {
                let (name, value) = pair.trim().split_once('=')?;
                Some((name.trim().to_string(), value.trim().to_string()))
            })
            .collect();
        Self {
            incoming,
            outgoing: Vec::new(),
        }
    }
}

impl PreferenceStore for CookieStore {
    fn get(&self, key: &str) -> Option<String> {
        self.incoming.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.outgoing.push(format!(
            "{key}={value}; Path=/; Max-Age={COOKIE_MAX_AGE_SECS}; SameSite=Lax"
        ));
        Ok(())
    }
}

fn page_location(project: Option<usize>) -> String {
    match project {
        Some(index) if index > 0 => format!("/?project={index}"),
        _ => "/".to_string(),
    }
}

/// Appends the cookies written during the request as `Set-Cookie` headers.
fn attach_cookies(mut response: Response, cookies: CookieStore) -> Response {
    for cookie in cookies.outgoing {
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
    }
    response
}

fn see_other(location: &str) -> Result<Response, (StatusCode, Json<ApiError>)> {
    let location = HeaderValue::from_str(location).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiError::with_details("Cannot redirect", e.to_string())),
        )
    })?;
    Ok((StatusCode::SEE_OTHER, [(header::LOCATION, location)]).into_response())
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET / - The page.
///
/// The restored theme is written back, so an unrecognized cookie is
/// replaced with the fallback.
async fn index(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    headers: HeaderMap,
) -> Response {
    let mut cookies = CookieStore::from_headers(&headers);
    let theme = restore_theme(&cookies);
    let mut root = RootClass::default();
    commit_theme(theme, &mut cookies, &mut root);

    let mut view = PresentationState::new(&state.content, theme, state.config.ui.lookahead_margin);
    if let Some(index) = query.project {
        view.carousel.go_to(index);
    }

    let options = PageOptions {
        asset_base: &state.config.content.asset_base,
        links: LinkMode::Server,
        lookahead_px: state.config.ui.page_lookahead_px,
    };
    let page = Html(render_page(&state.content, &view, &options).into_string());
    attach_cookies(page.into_response(), cookies)
}

/// POST /theme - Toggle the theme cookie.
async fn toggle_theme(
    headers: HeaderMap,
    Form(form): Form<ThemeToggleForm>,
) -> Result<Response, (StatusCode, Json<ApiError>)> {
    let mut cookies = CookieStore::from_headers(&headers);
    let next = restore_theme(&cookies).toggled();
    commit_theme(next, &mut cookies, &mut RootClass::default());
    debug!("Theme toggled to {next}");

    let response = see_other(&page_location(form.project))?;
    Ok(attach_cookies(response, cookies))
}

/// POST /contact - Compose the message and hand it to the mail client.
async fn submit_contact(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Result<Response, (StatusCode, Json<ApiError>)> {
    if form.is_blank() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError::new("The contact form is empty")),
        ));
    }

    let uri = form.compose(&state.content.profile.contact.email).to_uri();
    debug!("Redirecting contact form to {uri}");
    see_other(&uri)
}

/// GET /api/content - The content tables.
async fn get_content(State(state): State<AppState>) -> Json<SiteContent> {
    Json(state.content.as_ref().clone())
}

/// GET /api/projects/{index} - One project.
async fn get_project(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<Project>, (StatusCode, Json<ApiError>)> {
    state
        .content
        .projects
        .get(index)
        .cloned()
        .map(Json)
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ApiError::with_details(
                    "Project not found",
                    format!("{} project(s) available", state.content.projects.len()),
                )),
            )
        })
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    // The preview is meant for local use; any origin may read the JSON API.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let asset_dir = state.config.content.asset_dir.clone();

    let router = Router::new()
        .route("/", get(index))
        .route("/theme", post(toggle_theme))
        .route("/contact", post(submit_contact))
        .route("/health", get(health_check))
        .route("/api/content", get(get_content))
        .route("/api/projects/{index}", get(get_project));

    let router = match asset_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the preview server.
///
/// # Errors
///
/// Returns an error if the content cannot be loaded or the address cannot be
/// bound.
pub async fn run_server(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let state = AppState::new(config)?;
    let app = create_router(state);

    info!("Starting Folio preview server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ThemePreference, THEME_KEY};

    fn headers(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn test_cookie_parsing() {
        let store = CookieStore::from_headers(&headers("a=1; theme=dark ;b=2"));
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(store.get("a").as_deref(), Some("1"));
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn test_bad_cookie_falls_back_to_light() {
        let store = CookieStore::from_headers(&headers("theme=sepia"));
        assert_eq!(restore_theme(&store), ThemePreference::Light);
        let store = CookieStore::from_headers(&HeaderMap::new());
        assert_eq!(restore_theme(&store), ThemePreference::Light);
    }

    #[test]
    fn test_set_writes_cookie_header() {
        let mut store = CookieStore::default();
        store.set(THEME_KEY, "dark").unwrap();
        assert_eq!(store.outgoing.len(), 1);
        assert!(store.outgoing[0].starts_with("theme=dark; Path=/"));
        // The request view is unchanged
        assert_eq!(store.get(THEME_KEY), None);
    }

    #[test]
    fn test_attach_cookies_appends_each_write() {
        let mut store = CookieStore::default();
        store.set(THEME_KEY, "light").unwrap();
        let response = attach_cookies(StatusCode::OK.into_response(), store);
        let values: Vec<_> = response.headers().get_all(header::SET_COOKIE).iter().collect();
        assert_eq!(values.len(), 1);
        assert!(values[0].to_str().unwrap().starts_with("theme=light;"));
    }

    #[test]
    fn test_page_location() {
        assert_eq!(page_location(None), "/");
        assert_eq!(page_location(Some(0)), "/");
        assert_eq!(page_location(Some(2)), "/?project=2");
    }

    #[test]
    fn test_see_other_rejects_invalid_header() {
        assert!(see_other("/ok").is_ok());
        assert!(see_other("bad\nvalue").is_err());
    }
}
