//! Event registration model and DTOs.
//!
//! Links one user (alumni or student) to one event. The user id is
//! polymorphic over the `user_type` column, so it carries no foreign key.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

use alumnet_core::types::{DbId, Timestamp};

/// A row from the `event_registrations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventRegistration {
    pub id: DbId,
    pub event_id: DbId,
    pub user_id: DbId,
    pub user_type: String,
    pub registered_at: Timestamp,
}

/// An event a user registered for, joined with its registration time.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RegisteredEvent {
    pub event_id: DbId,
    pub name: String,
    pub event_date: NaiveDate,
    pub location: String,
    pub description: String,
    pub registered_at: Timestamp,
}

/// One participant of an event.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventParticipant {
    pub user_id: DbId,
    pub user_type: String,
    pub registered_at: Timestamp,
}
