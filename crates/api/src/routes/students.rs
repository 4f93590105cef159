//! Routes and handlers for the `/students` resource.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use alumnet_core::filter::FilterPair;
use alumnet_core::types::DbId;
use alumnet_db::models::student::{CreateStudent, StudentField, UpdateStudent};
use chrono::NaiveDate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::routes::alumni::{JoinEventRequest, SearchParams};
use crate::routes::events::EventFilterParams;
use crate::state::AppState;

/// Body for entering a mentorship.
#[derive(Debug, serde::Deserialize)]
pub struct JoinMentorshipRequest {
    pub mentor_id: DbId,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Optional equality filters for student listings, applied in-process.
#[derive(Debug, Default, serde::Deserialize)]
pub struct StudentFilterParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub course: Option<String>,
    pub year: Option<String>,
}

impl StudentFilterParams {
    /// Convert the provided params into filter pairs.
    pub fn into_pairs(self) -> Vec<FilterPair> {
        let mut pairs = Vec::new();
        if let Some(name) = self.name {
            pairs.push(("name".to_string(), name));
        }
        if let Some(email) = self.email {
            pairs.push(("email".to_string(), email));
        }
        if let Some(course) = self.course {
            pairs.push(("course".to_string(), course));
        }
        if let Some(year) = self.year {
            pairs.push(("year".to_string(), year));
        }
        pairs
    }
}

/// GET / -- list students, optionally filtered.
async fn list(
    State(state): State<AppState>,
    Query(params): Query<StudentFilterParams>,
) -> AppResult<impl IntoResponse> {
    let students = state.students.list_students(&params.into_pairs()).await?;
    Ok(Json(DataResponse { data: students }))
}

/// POST / -- register a new student.
async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateStudent>,
) -> AppResult<impl IntoResponse> {
    let student = state.students.create_student(&input).await?;
    Ok(Json(DataResponse { data: student }))
}

/// GET /search?field=...&value=... -- exact-match search on one field.
async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let field: StudentField = params.field.parse().map_err(AppError::BadRequest)?;
    let students = state.students.search_students(field, &params.value).await?;
    Ok(Json(DataResponse { data: students }))
}

/// GET /{id} -- fetch one student.
async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let student = state.students.get_student(id).await?;
    Ok(Json(DataResponse { data: student }))
}

/// PUT /{id} -- partial update.
async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(updates): Json<UpdateStudent>,
) -> AppResult<impl IntoResponse> {
    let student = state.students.update_student(id, &updates).await?;
    Ok(Json(DataResponse { data: student }))
}

/// DELETE /{id} -- remove a student, returning the removed row.
async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let student = state.students.delete_student(id).await?;
    Ok(Json(DataResponse { data: student }))
}

/// GET /{id}/events -- events this student registered for.
async fn my_events(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let events = state.students.list_my_events(id).await?;
    Ok(Json(DataResponse { data: events }))
}

/// POST /{id}/events -- join an event.
async fn join_event(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<JoinEventRequest>,
) -> AppResult<impl IntoResponse> {
    let registration = state.students.join_event(id, body.event_id).await?;
    Ok(Json(DataResponse { data: registration }))
}

/// GET /events-search -- browse events through the student service.
async fn search_events(
    State(state): State<AppState>,
    Query(params): Query<EventFilterParams>,
) -> AppResult<impl IntoResponse> {
    let events = state.students.search_events(&params.into_pairs()).await?;
    Ok(Json(DataResponse { data: events }))
}

/// GET /{id}/mentors -- mentorship assignments this student belongs to.
async fn my_mentors(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let assignments = state.students.list_my_mentors(id).await?;
    Ok(Json(DataResponse { data: assignments }))
}

/// POST /{id}/mentorships -- enter a mentorship with a mentor.
async fn join_mentorship(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<JoinMentorshipRequest>,
) -> AppResult<impl IntoResponse> {
    let assignment = state
        .students
        .join_mentorship(id, body.mentor_id, body.start_date, body.end_date)
        .await?;
    Ok(Json(DataResponse { data: assignment }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/search", get(search))
        .route("/events-search", get(search_events))
        .route("/{id}", get(get_by_id).put(update).delete(delete))
        .route("/{id}/events", get(my_events).post(join_event))
        .route("/{id}/mentors", get(my_mentors))
        .route("/{id}/mentorships", post(join_mentorship))
}
