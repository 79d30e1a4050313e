//! passboard-server library - recruitment pass dashboard API
//!
//! Exposes the router and shared state so integration tests can drive the
//! service without binding a socket.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, Router};
use chrono::{DateTime, Utc};
use passboard_common::PassStore;
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod api;
pub mod cli;
pub mod error;

pub use crate::error::{ApiError, ApiResult};

/// Largest accepted request body
pub const BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// The single process-wide pass store
///
/// Readers share the lock; each mutation holds the write lock for its whole
/// transaction.
pub type SharedStore = Arc<RwLock<PassStore>>;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    /// Directory holding the built dashboard
    pub static_dir: PathBuf,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(store: PassStore, static_dir: PathBuf) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            static_dir,
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::dashboard_routes())
        .merge(api::pass_routes())
        .merge(api::mutation_routes())
        .merge(api::health_routes())
        .merge(api::ui_routes(&state.static_dir))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
