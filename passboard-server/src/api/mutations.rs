//! Status update and feedback submission endpoints
//!
//! Each mutation holds the store's write lock from lookup through derived
//! state recomputation, so readers never observe a half-applied change.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use passboard_common::validate::{FeedbackInput, StatusUpdateInput};
use passboard_common::{FeedbackOutcome, StatusUpdateOutcome};

use super::context::RequestUser;
use crate::error::ApiResult;
use crate::AppState;

/// POST /api/status
///
/// Body: `{passId, positionId, status, note?}`
pub async fn update_status(
    State(state): State<AppState>,
    user: RequestUser,
    payload: Result<Json<StatusUpdateInput>, JsonRejection>,
) -> ApiResult<Json<StatusUpdateOutcome>> {
    let Json(input) = payload?;
    let update = input.validate()?;

    let mut store = state.store.write().await;
    let outcome = store.update_status(update, &user.name)?;
    Ok(Json(outcome))
}

/// POST /api/feedback
///
/// Body: `{passId, positionId, panelist, highlights, concerns?, decision, score, nextStep?}`
pub async fn create_feedback(
    State(state): State<AppState>,
    user: RequestUser,
    payload: Result<Json<FeedbackInput>, JsonRejection>,
) -> ApiResult<Json<FeedbackOutcome>> {
    let Json(input) = payload?;
    let submission = input.validate()?;

    let mut store = state.store.write().await;
    let outcome = store.add_feedback(submission, &user.name)?;
    Ok(Json(outcome))
}

/// Build mutation routes
pub fn mutation_routes() -> Router<AppState> {
    Router::new()
        .route("/api/status", post(update_status))
        .route("/api/feedback", post(create_feedback))
}
