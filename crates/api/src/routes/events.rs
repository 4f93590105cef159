//! Routes and handlers for the `/events` resource.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use alumnet_core::filter::FilterPair;
use alumnet_core::types::DbId;
use alumnet_db::models::event::{CreateEvent, UpdateEvent};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Optional equality filters for event listings.
///
/// Matching is case-insensitive and exact, applied in-process after the
/// date-ordered fetch.
#[derive(Debug, Default, serde::Deserialize)]
pub struct EventFilterParams {
    pub name: Option<String>,
    pub event_date: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl EventFilterParams {
    /// Convert the provided params into filter pairs.
    pub fn into_pairs(self) -> Vec<FilterPair> {
        let mut pairs = Vec::new();
        if let Some(name) = self.name {
            pairs.push(("name".to_string(), name));
        }
        if let Some(date) = self.event_date {
            pairs.push(("event_date".to_string(), date));
        }
        if let Some(location) = self.location {
            pairs.push(("location".to_string(), location));
        }
        if let Some(description) = self.description {
            pairs.push(("description".to_string(), description));
        }
        pairs
    }
}

/// GET / -- list events ordered by date, optionally filtered.
async fn list(
    State(state): State<AppState>,
    Query(params): Query<EventFilterParams>,
) -> AppResult<impl IntoResponse> {
    let events = state.events.list_events(&params.into_pairs()).await?;
    Ok(Json(DataResponse { data: events }))
}

/// POST / -- create a new event.
async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEvent>,
) -> AppResult<impl IntoResponse> {
    let event = state.events.add_event(&input).await?;
    Ok(Json(DataResponse { data: event }))
}

/// GET /{id} -- fetch one event.
async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let event = state.events.get_event(id).await?;
    Ok(Json(DataResponse { data: event }))
}

/// PUT /{id} -- partial update.
async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(updates): Json<UpdateEvent>,
) -> AppResult<impl IntoResponse> {
    let event = state.events.update_event(id, &updates).await?;
    Ok(Json(DataResponse { data: event }))
}

/// DELETE /{id} -- remove an event, returning the removed row.
async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let event = state.events.delete_event(id).await?;
    Ok(Json(DataResponse { data: event }))
}

/// GET /{id}/participants -- users registered for the event.
async fn participants(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let participants = state.events.list_participants(id).await?;
    Ok(Json(DataResponse { data: participants }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(get_by_id).put(update).delete(delete))
        .route("/{id}/participants", get(participants))
}
