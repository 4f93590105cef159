//! Routes and handlers for the `/mentors` resource.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use alumnet_core::types::DbId;
use alumnet_db::models::mentor::{CreateMentor, UpdateMentor};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET / -- list all mentors.
async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mentors = state.mentorship.list_mentors().await?;
    Ok(Json(DataResponse { data: mentors }))
}

/// POST / -- register an alumni as a mentor.
async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMentor>,
) -> AppResult<impl IntoResponse> {
    let mentor = state.mentorship.create_mentor(&input).await?;
    Ok(Json(DataResponse { data: mentor }))
}

/// GET /{id} -- fetch one mentor.
async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let mentor = state.mentorship.get_mentor(id).await?;
    Ok(Json(DataResponse { data: mentor }))
}

/// PUT /{id} -- partial update.
async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(updates): Json<UpdateMentor>,
) -> AppResult<impl IntoResponse> {
    let mentor = state.mentorship.update_mentor(id, &updates).await?;
    Ok(Json(DataResponse { data: mentor }))
}

/// DELETE /{id} -- remove a mentor, returning the removed row.
async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let mentor = state.mentorship.delete_mentor(id).await?;
    Ok(Json(DataResponse { data: mentor }))
}

/// GET /{id}/students -- assignments held by this mentor.
async fn students(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let assignments = state.mentorship.list_students_by_mentor(id).await?;
    Ok(Json(DataResponse { data: assignments }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(get_by_id).put(update).delete(delete))
        .route("/{id}/students", get(students))
}
