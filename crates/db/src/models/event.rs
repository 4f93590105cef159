//! Event entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use alumnet_core::types::{DbId, Timestamp};

/// An event row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub name: String,
    pub event_date: NaiveDate,
    pub location: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Event {
    /// Stringified value of a filterable field, `None` for unknown names.
    ///
    /// Used by the in-process event-list filter.
    pub fn field_text(&self, field: &str) -> Option<String> {
        match field {
            "id" => Some(self.id.to_string()),
            "name" => Some(self.name.clone()),
            "event_date" => Some(self.event_date.to_string()),
            "location" => Some(self.location.clone()),
            "description" => Some(self.description.clone()),
            _ => None,
        }
    }

    /// Filter keys accepted by [`Event::field_text`].
    pub const FILTERABLE_FIELDS: &'static [&'static str] =
        &["id", "name", "event_date", "location", "description"];
}

/// DTO for creating a new event.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvent {
    pub name: String,
    pub event_date: NaiveDate,
    pub location: String,
    pub description: String,
}

/// DTO for updating an existing event. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEvent {
    pub name: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub description: Option<String>,
}
