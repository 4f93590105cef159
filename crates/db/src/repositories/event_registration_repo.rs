//! Repository for the `event_registrations` table.

use sqlx::PgPool;

use alumnet_core::types::{DbId, UserType};

use crate::models::event_registration::{EventParticipant, EventRegistration, RegisteredEvent};

const COLUMNS: &str = "id, event_id, user_id, user_type, registered_at";

/// Provides registration inserts and the joined listings built on them.
pub struct EventRegistrationRepo;

impl EventRegistrationRepo {
    /// Register a user for an event, returning the created row.
    ///
    /// The caller is responsible for verifying the event exists first;
    /// the sequence is not atomic against the store.
    pub async fn register(
        pool: &PgPool,
        event_id: DbId,
        user_id: DbId,
        user_type: UserType,
    ) -> Result<EventRegistration, sqlx::Error> {
        let query = format!(
            "INSERT INTO event_registrations (event_id, user_id, user_type)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EventRegistration>(&query)
            .bind(event_id)
            .bind(user_id)
            .bind(user_type.as_str())
            .fetch_one(pool)
            .await
    }

    /// List the events one user registered for, joined with the event rows.
    pub async fn list_user_events(
        pool: &PgPool,
        user_id: DbId,
        user_type: UserType,
    ) -> Result<Vec<RegisteredEvent>, sqlx::Error> {
        let query = "SELECT e.id AS event_id, e.name, e.event_date, e.location,
                            e.description, r.registered_at
                     FROM event_registrations r
                     JOIN events e ON e.id = r.event_id
                     WHERE r.user_id = $1 AND r.user_type = $2
                     ORDER BY e.event_date ASC";
        sqlx::query_as::<_, RegisteredEvent>(query)
            .bind(user_id)
            .bind(user_type.as_str())
            .fetch_all(pool)
            .await
    }

    /// List the participants registered for one event.
    pub async fn list_event_participants(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<EventParticipant>, sqlx::Error> {
        let query = "SELECT user_id, user_type, registered_at
                     FROM event_registrations
                     WHERE event_id = $1
                     ORDER BY registered_at ASC";
        sqlx::query_as::<_, EventParticipant>(query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }
}
