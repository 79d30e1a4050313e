//! Dashboard aggregate endpoints

use axum::{extract::State, routing::get, Json, Router};
use passboard_common::model::{SummaryMetrics, TimelineInsight};

use crate::AppState;

/// GET /api/summary
///
/// Headline metrics across every pass, ignoring any listing filter.
pub async fn get_summary(State(state): State<AppState>) -> Json<SummaryMetrics> {
    let store = state.store.read().await;
    Json(store.summary())
}

/// GET /api/timeline
///
/// Always exactly three insights: velocity, panel-load, offer-accept.
pub async fn get_timeline(State(state): State<AppState>) -> Json<[TimelineInsight; 3]> {
    let store = state.store.read().await;
    Json(store.timeline())
}

/// Build dashboard aggregate routes
pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/api/summary", get(get_summary))
        .route("/api/timeline", get(get_timeline))
}
