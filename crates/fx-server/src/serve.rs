//! Static-file serving for local preview.
//!
//! One route shape: resolve the request path against the site root (`/` maps
//! to the index document), look up a content type by extension, and return
//! the file bytes. Missing files are 404, any other read failure is 500;
//! failures are terminal per request.

use crate::ambassador::{self, AmbassadorStore};
use crate::waitlist::{self, WaitlistStore};
use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub site_root: PathBuf,
    pub waitlist: Arc<Mutex<WaitlistStore>>,
    pub ambassador: Arc<Mutex<AmbassadorStore>>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/waitlist", post(waitlist::add_to_waitlist))
        .route("/api/ambassador", post(ambassador::submit_application))
        .fallback(serve_static)
        .with_state(state)
}

/// Fixed extension table; anything unknown falls back to plain text.
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("html") => "text/html",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("json") => "application/json",
        Some("wasm") => "application/wasm",
        _ => "text/plain",
    }
}

/// Map a request path onto the site root. The root path serves the index
/// document; anything stepping outside the root resolves to nothing.
pub fn resolve_request_path(site_root: &Path, request_path: &str) -> Option<PathBuf> {
    let trimmed = request_path.trim_start_matches('/');
    let relative = if trimmed.is_empty() { "index.html" } else { trimmed };
    let relative = Path::new(relative);
    if !relative
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
    {
        return None;
    }
    Some(site_root.join(relative))
}

async fn serve_static(State(state): State<AppState>, uri: Uri) -> Response {
    let Some(path) = resolve_request_path(&state.site_root, uri.path()) else {
        return not_found();
    };
    match tokio::fs::read(&path).await {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, content_type_for(&path))],
            bytes,
        )
            .into_response(),
        Err(e) if e.kind() == ErrorKind::NotFound => not_found(),
        Err(e) => {
            log::error!("failed to read {}: {e}", path.display());
            internal_error()
        }
    }
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/html")],
        "<h1>404 - File Not Found</h1>",
    )
        .into_response()
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "text/html")],
        "<h1>500 - Internal Server Error</h1>",
    )
        .into_response()
}
