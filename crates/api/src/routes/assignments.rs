//! Routes and handlers for the `/assignments` resource.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use alumnet_core::types::DbId;
use alumnet_db::models::mentorship_assignment::UpdateAssignment;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET / -- list all mentorship assignments, oldest first.
async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let assignments = state.mentorship.list_assignments().await?;
    Ok(Json(DataResponse { data: assignments }))
}

/// GET /{id} -- fetch one assignment.
async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let assignment = state.mentorship.get_assignment(id).await?;
    Ok(Json(DataResponse { data: assignment }))
}

/// PUT /{id} -- update an assignment's date bounds.
async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(updates): Json<UpdateAssignment>,
) -> AppResult<impl IntoResponse> {
    let assignment = state.mentorship.update_assignment(id, &updates).await?;
    Ok(Json(DataResponse { data: assignment }))
}

/// DELETE /{id} -- remove an assignment, returning the removed row.
async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let assignment = state.mentorship.delete_assignment(id).await?;
    Ok(Json(DataResponse { data: assignment }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list))
        .route("/{id}", get(get_by_id).put(update).delete(delete))
}
