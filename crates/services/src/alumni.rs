//! Alumni service: profile CRUD, single-field search, and event joining.

use alumnet_core::error::CoreError;
use alumnet_core::filter::{self, FilterPair};
use alumnet_core::types::{DbId, UserType};
use alumnet_core::validate;
use alumnet_db::models::alumni::{Alumni, AlumniField, CreateAlumni, UpdateAlumni};
use alumnet_db::models::event::Event;
use alumnet_db::models::event_registration::{EventRegistration, RegisteredEvent};
use alumnet_db::repositories::{AlumniRepo, EventRegistrationRepo};
use alumnet_db::DbPool;

use crate::event::{EventError, EventService};
use crate::ErrorKind;

#[derive(Debug, thiserror::Error)]
pub enum AlumniError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    /// A downstream event call failed; wrapped with context.
    #[error("Event lookup failed: {0}")]
    Event(#[from] EventError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AlumniError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AlumniError::Validation(_) => ErrorKind::Validation,
            AlumniError::Conflict(_) => ErrorKind::Conflict,
            AlumniError::NotFound(_) => ErrorKind::NotFound,
            AlumniError::Event(inner) => inner.kind(),
            AlumniError::Database(_) => ErrorKind::Database,
        }
    }

    /// The underlying sqlx error, when this wraps one, including through
    /// the dependency-wrapping variant.
    pub fn as_database(&self) -> Option<&sqlx::Error> {
        match self {
            AlumniError::Database(e) => Some(e),
            AlumniError::Event(inner) => inner.as_database(),
            _ => None,
        }
    }

    fn not_found(id: DbId) -> Self {
        AlumniError::NotFound(format!("Alumni with id {id} not found"))
    }
}

impl From<CoreError> for AlumniError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Conflict(msg) => AlumniError::Conflict(msg),
            other => AlumniError::Validation(other.to_string()),
        }
    }
}

/// Alumni profile management plus event participation, composed from the
/// alumni/registration repositories and the event service.
#[derive(Clone)]
pub struct AlumniService {
    pool: DbPool,
    events: EventService,
}

impl AlumniService {
    pub fn new(pool: DbPool) -> Self {
        let events = EventService::new(pool.clone());
        Self { pool, events }
    }

    // -- Profile CRUD ------------------------------------------------------

    /// Register a new alumni. Every field is required, email must be unused.
    pub async fn add_alumni(&self, input: &CreateAlumni) -> Result<Alumni, AlumniError> {
        validate::require("name", &input.name)?;
        validate::require("email", &input.email)?;
        validate::require("industry", &input.industry)?;
        validate::require("location", &input.location)?;
        validate::validate_graduation_year(input.graduation_year)?;

        if AlumniRepo::find_by_email(&self.pool, &input.email)
            .await?
            .is_some()
        {
            return Err(AlumniError::Conflict(
                "An alumni with this email already exists".to_string(),
            ));
        }

        Ok(AlumniRepo::create(&self.pool, input).await?)
    }

    pub async fn get_alumni(&self, alumni_id: DbId) -> Result<Alumni, AlumniError> {
        AlumniRepo::find_by_id(&self.pool, alumni_id)
            .await?
            .ok_or_else(|| AlumniError::not_found(alumni_id))
    }

    /// List alumni ordered by id, optionally filtered.
    ///
    /// Filters are case-insensitive exact matches applied in-process, the
    /// same mechanism event listing uses. Unknown filter keys are rejected.
    pub async fn list_alumni(&self, filters: &[FilterPair]) -> Result<Vec<Alumni>, AlumniError> {
        for (field, _) in filters {
            if !Alumni::FILTERABLE_FIELDS.contains(&field.as_str()) {
                return Err(AlumniError::Validation(format!(
                    "unknown alumni filter field: {field}"
                )));
            }
        }

        let alumni = AlumniRepo::list(&self.pool).await?;
        Ok(alumni
            .into_iter()
            .filter(|a| filter::matches_all(filters, |field| a.field_text(field)))
            .collect())
    }

    /// Exact-match search on one field. Empty result sets are an error,
    /// unlike `list_alumni`.
    pub async fn search_alumni(
        &self,
        field: AlumniField,
        value: &str,
    ) -> Result<Vec<Alumni>, AlumniError> {
        let results = AlumniRepo::search(&self.pool, field, value).await?;
        if results.is_empty() {
            return Err(AlumniError::NotFound(format!(
                "No alumni found with {} = {value}",
                field.as_column()
            )));
        }
        Ok(results)
    }

    /// Apply a partial update to an alumni record.
    pub async fn update_alumni(
        &self,
        alumni_id: DbId,
        updates: &UpdateAlumni,
    ) -> Result<Alumni, AlumniError> {
        AlumniRepo::update(&self.pool, alumni_id, updates)
            .await?
            .ok_or_else(|| AlumniError::not_found(alumni_id))
    }

    /// Delete an alumni record, returning the removed row.
    pub async fn remove_alumni(&self, alumni_id: DbId) -> Result<Alumni, AlumniError> {
        AlumniRepo::delete(&self.pool, alumni_id)
            .await?
            .ok_or_else(|| AlumniError::not_found(alumni_id))
    }

    // -- Events -----------------------------------------------------------

    /// Browse events, optionally filtered. Delegates to the event service.
    pub async fn search_events(&self, filters: &[FilterPair]) -> Result<Vec<Event>, AlumniError> {
        Ok(self.events.list_events(filters).await?)
    }

    /// Register this alumni for an event.
    ///
    /// The event must exist; the existence check and the insert are two
    /// separate store calls, not a transaction.
    pub async fn join_event(
        &self,
        alumni_id: DbId,
        event_id: DbId,
    ) -> Result<EventRegistration, AlumniError> {
        self.events.get_event(event_id).await?;
        Ok(EventRegistrationRepo::register(&self.pool, event_id, alumni_id, UserType::Alumni)
            .await?)
    }

    /// Events this alumni has registered for.
    pub async fn list_my_events(&self, alumni_id: DbId) -> Result<Vec<RegisteredEvent>, AlumniError> {
        Ok(
            EventRegistrationRepo::list_user_events(&self.pool, alumni_id, UserType::Alumni)
                .await?,
        )
    }
}
