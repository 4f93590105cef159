//! Routes and handlers for the `/alumni` resource.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use alumnet_core::filter::FilterPair;
use alumnet_core::types::DbId;
use alumnet_db::models::alumni::{AlumniField, CreateAlumni, UpdateAlumni};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::routes::events::EventFilterParams;
use crate::state::AppState;

/// Query params for single-field search.
#[derive(Debug, serde::Deserialize)]
pub struct SearchParams {
    pub field: String,
    pub value: String,
}

/// Body for joining an event.
#[derive(Debug, serde::Deserialize)]
pub struct JoinEventRequest {
    pub event_id: DbId,
}

/// Optional equality filters for alumni listings, applied in-process.
#[derive(Debug, Default, serde::Deserialize)]
pub struct AlumniFilterParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub industry: Option<String>,
    pub graduation_year: Option<String>,
    pub location: Option<String>,
}

impl AlumniFilterParams {
    /// Convert the provided params into filter pairs.
    pub fn into_pairs(self) -> Vec<FilterPair> {
        let mut pairs = Vec::new();
        if let Some(name) = self.name {
            pairs.push(("name".to_string(), name));
        }
        if let Some(email) = self.email {
            pairs.push(("email".to_string(), email));
        }
        if let Some(industry) = self.industry {
            pairs.push(("industry".to_string(), industry));
        }
        if let Some(year) = self.graduation_year {
            pairs.push(("graduation_year".to_string(), year));
        }
        if let Some(location) = self.location {
            pairs.push(("location".to_string(), location));
        }
        pairs
    }
}

/// GET / -- list alumni, optionally filtered.
async fn list(
    State(state): State<AppState>,
    Query(params): Query<AlumniFilterParams>,
) -> AppResult<impl IntoResponse> {
    let alumni = state.alumni.list_alumni(&params.into_pairs()).await?;
    Ok(Json(DataResponse { data: alumni }))
}

/// POST / -- register a new alumni.
async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAlumni>,
) -> AppResult<impl IntoResponse> {
    let alumni = state.alumni.add_alumni(&input).await?;
    Ok(Json(DataResponse { data: alumni }))
}

/// GET /search?field=...&value=... -- exact-match search on one field.
async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let field: AlumniField = params.field.parse().map_err(AppError::BadRequest)?;
    let alumni = state.alumni.search_alumni(field, &params.value).await?;
    Ok(Json(DataResponse { data: alumni }))
}

/// GET /{id} -- fetch one alumni.
async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let alumni = state.alumni.get_alumni(id).await?;
    Ok(Json(DataResponse { data: alumni }))
}

/// PUT /{id} -- partial update.
async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(updates): Json<UpdateAlumni>,
) -> AppResult<impl IntoResponse> {
    let alumni = state.alumni.update_alumni(id, &updates).await?;
    Ok(Json(DataResponse { data: alumni }))
}

/// DELETE /{id} -- remove an alumni, returning the removed row.
async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let alumni = state.alumni.remove_alumni(id).await?;
    Ok(Json(DataResponse { data: alumni }))
}

/// GET /{id}/events -- events this alumni registered for.
async fn my_events(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let events = state.alumni.list_my_events(id).await?;
    Ok(Json(DataResponse { data: events }))
}

/// POST /{id}/events -- join an event.
async fn join_event(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<JoinEventRequest>,
) -> AppResult<impl IntoResponse> {
    let registration = state.alumni.join_event(id, body.event_id).await?;
    Ok(Json(DataResponse { data: registration }))
}

/// GET /events-search -- browse events through the alumni service.
async fn search_events(
    State(state): State<AppState>,
    Query(params): Query<EventFilterParams>,
) -> AppResult<impl IntoResponse> {
    let events = state.alumni.search_events(&params.into_pairs()).await?;
    Ok(Json(DataResponse { data: events }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/search", get(search))
        .route("/events-search", get(search_events))
        .route("/{id}", get(get_by_id).put(update).delete(delete))
        .route("/{id}/events", get(my_events).post(join_event))
}
