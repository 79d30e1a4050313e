//! Pass listing and detail endpoints

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use passboard_common::model::{PassCollection, RecruitmentPass};
use passboard_common::validate::{PassDetailInput, PassFilterInput};

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// GET /api/passes?search=&status=&priority=&owner=&department=&limit=&offset=
///
/// Filtered, newest-first page of passes. `status=all` and `priority=all`
/// disable those filters.
pub async fn list_passes(
    State(state): State<AppState>,
    query: Result<Query<PassFilterInput>, QueryRejection>,
) -> ApiResult<Json<PassCollection>> {
    let Query(input) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let filter = input.validate()?;

    let store = state.store.read().await;
    Ok(Json(store.list(&filter)))
}

/// GET /api/passes/:pass_id
pub async fn get_pass(
    State(state): State<AppState>,
    Path(pass_id): Path<String>,
) -> ApiResult<Json<RecruitmentPass>> {
    let pass_id = PassDetailInput { pass_id }.validate()?;

    let store = state.store.read().await;
    let pass = store.get_by_id(&pass_id)?;
    Ok(Json(pass.clone()))
}

/// Build pass query routes
pub fn pass_routes() -> Router<AppState> {
    Router::new()
        .route("/api/passes", get(list_passes))
        .route("/api/passes/:pass_id", get(get_pass))
}
