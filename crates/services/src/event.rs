//! Event service: CRUD over events plus the in-process listing filter.

use alumnet_core::error::CoreError;
use alumnet_core::filter::{matches_all, FilterPair};
use alumnet_core::types::DbId;
use alumnet_core::validate;
use alumnet_db::models::event::{CreateEvent, Event, UpdateEvent};
use alumnet_db::models::event_registration::EventParticipant;
use alumnet_db::repositories::{EventRegistrationRepo, EventRepo};
use alumnet_db::DbPool;

use crate::ErrorKind;

#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Event with id {0} not found")]
    NotFound(DbId),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl EventError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EventError::Validation(_) => ErrorKind::Validation,
            EventError::NotFound(_) => ErrorKind::NotFound,
            EventError::Database(_) => ErrorKind::Database,
        }
    }

    /// The underlying sqlx error, when this wraps one.
    pub fn as_database(&self) -> Option<&sqlx::Error> {
        match self {
            EventError::Database(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CoreError> for EventError {
    fn from(err: CoreError) -> Self {
        EventError::Validation(err.to_string())
    }
}

/// CRUD and listing over events. Stateless aside from the pool handle.
#[derive(Clone)]
pub struct EventService {
    pool: DbPool,
}

impl EventService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create a new event. All fields are required.
    pub async fn add_event(&self, input: &CreateEvent) -> Result<Event, EventError> {
        validate::require("name", &input.name)?;
        validate::require("location", &input.location)?;
        validate::require("description", &input.description)?;

        Ok(EventRepo::create(&self.pool, input).await?)
    }

    /// Fetch one event by id.
    pub async fn get_event(&self, event_id: DbId) -> Result<Event, EventError> {
        EventRepo::find_by_id(&self.pool, event_id)
            .await?
            .ok_or(EventError::NotFound(event_id))
    }

    /// Apply a partial update to an event.
    pub async fn update_event(
        &self,
        event_id: DbId,
        updates: &UpdateEvent,
    ) -> Result<Event, EventError> {
        EventRepo::update(&self.pool, event_id, updates)
            .await?
            .ok_or(EventError::NotFound(event_id))
    }

    /// Delete an event, returning the removed row.
    pub async fn delete_event(&self, event_id: DbId) -> Result<Event, EventError> {
        EventRepo::delete(&self.pool, event_id)
            .await?
            .ok_or(EventError::NotFound(event_id))
    }

    /// List events ordered by date, optionally filtered.
    ///
    /// Fetches every row and filters in-process: each pair must match its
    /// field case-insensitively and exactly. There is no pushdown to the
    /// store for this operation. Unknown filter keys are rejected.
    pub async fn list_events(&self, filters: &[FilterPair]) -> Result<Vec<Event>, EventError> {
        for (field, _) in filters {
            if !Event::FILTERABLE_FIELDS.contains(&field.as_str()) {
                return Err(EventError::Validation(format!(
                    "unknown event filter field: {field}"
                )));
            }
        }

        let events = EventRepo::list(&self.pool).await?;
        Ok(apply_filters(events, filters))
    }

    /// List the users registered for one event.
    pub async fn list_participants(
        &self,
        event_id: DbId,
    ) -> Result<Vec<EventParticipant>, EventError> {
        self.get_event(event_id).await?;
        Ok(EventRegistrationRepo::list_event_participants(&self.pool, event_id).await?)
    }
}

/// Keep the events matching every filter pair. Order is preserved.
fn apply_filters(events: Vec<Event>, filters: &[FilterPair]) -> Vec<Event> {
    if filters.is_empty() {
        return events;
    }
    events
        .into_iter()
        .filter(|e| matches_all(filters, |field| e.field_text(field)))
        .collect()
}
