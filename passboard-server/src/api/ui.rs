//! Dashboard asset serving
//!
//! The built dashboard lives in the configured static directory. Unknown
//! non-API paths get `index.html` so client-side routes resolve; before the
//! dashboard has been built they get a JSON hint instead.

use std::path::{Path, PathBuf};

use axum::{
    handler::HandlerWithoutStateExt,
    http::Uri,
    response::{Html, IntoResponse, Response},
    Json, Router,
};
use serde_json::json;
use tower_http::services::ServeDir;
use tracing::debug;

use crate::error::ApiError;
use crate::AppState;

/// Fallback for paths that match neither a route nor a static file
pub async fn frontend_fallback(uri: Uri, index_path: PathBuf) -> Response {
    if uri.path().starts_with("/api") {
        return ApiError::NotFound(format!("No route for {}", uri.path())).into_response();
    }

    match tokio::fs::read_to_string(&index_path).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            debug!("Frontend index unavailable at {}: {}", index_path.display(), e);
            Json(json!({
                "message": "Frontend build not found yet. Build the dashboard into the static directory.",
            }))
            .into_response()
        }
    }
}

/// Static dashboard routes; merged last so API routes take precedence
pub fn ui_routes(static_dir: &Path) -> Router<AppState> {
    let index_path = static_dir.join("index.html");
    let fallback = move |uri: Uri| frontend_fallback(uri, index_path.clone());
    Router::new().fallback_service(ServeDir::new(static_dir).fallback(fallback.into_service()))
}
