//! Student service: profile CRUD plus event and mentorship participation.

use alumnet_core::error::CoreError;
use alumnet_core::filter::{self, FilterPair};
use alumnet_core::types::{DbId, UserType};
use alumnet_core::validate;
use alumnet_db::models::event::Event;
use alumnet_db::models::event_registration::{EventRegistration, RegisteredEvent};
use alumnet_db::models::mentor::Mentor;
use alumnet_db::models::mentorship_assignment::{CreateAssignment, MentorshipAssignment};
use alumnet_db::models::student::{CreateStudent, Student, StudentField, UpdateStudent};
use alumnet_db::repositories::{EventRegistrationRepo, StudentRepo};
use alumnet_db::DbPool;

use crate::event::{EventError, EventService};
use crate::mentorship::{MentorshipError, MentorshipService};
use crate::ErrorKind;

#[derive(Debug, thiserror::Error)]
pub enum StudentError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    /// A downstream event call failed; wrapped with context.
    #[error("Event lookup failed: {0}")]
    Event(#[from] EventError),

    /// A downstream mentorship call failed; wrapped with context.
    #[error("Mentorship failed: {0}")]
    Mentorship(#[from] MentorshipError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StudentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StudentError::Validation(_) => ErrorKind::Validation,
            StudentError::Conflict(_) => ErrorKind::Conflict,
            StudentError::NotFound(_) => ErrorKind::NotFound,
            StudentError::Event(inner) => inner.kind(),
            StudentError::Mentorship(inner) => inner.kind(),
            StudentError::Database(_) => ErrorKind::Database,
        }
    }

    /// The underlying sqlx error, when this wraps one, including through
    /// the dependency-wrapping variants.
    pub fn as_database(&self) -> Option<&sqlx::Error> {
        match self {
            StudentError::Database(e) => Some(e),
            StudentError::Event(inner) => inner.as_database(),
            StudentError::Mentorship(inner) => inner.as_database(),
            _ => None,
        }
    }

    fn not_found(id: DbId) -> Self {
        StudentError::NotFound(format!("Student with id {id} not found"))
    }
}

impl From<CoreError> for StudentError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Conflict(msg) => StudentError::Conflict(msg),
            other => StudentError::Validation(other.to_string()),
        }
    }
}

/// Student profile management plus event and mentorship participation,
/// composed from the student/registration repositories and the event and
/// mentorship services.
#[derive(Clone)]
pub struct StudentService {
    pool: DbPool,
    events: EventService,
    mentorship: MentorshipService,
}

impl StudentService {
    pub fn new(pool: DbPool) -> Self {
        let events = EventService::new(pool.clone());
        let mentorship = MentorshipService::new(pool.clone());
        Self {
            pool,
            events,
            mentorship,
        }
    }

    // -- Profile CRUD ------------------------------------------------------

    /// Register a new student. Name and email are required, email must be
    /// unused; course and year are optional.
    pub async fn create_student(&self, input: &CreateStudent) -> Result<Student, StudentError> {
        validate::require("name", &input.name)?;
        validate::require("email", &input.email)?;
        if let Some(year) = input.year {
            validate::validate_study_year(year)?;
        }

        if StudentRepo::find_by_email(&self.pool, &input.email)
            .await?
            .is_some()
        {
            return Err(StudentError::Conflict(format!(
                "Student with email {} already exists",
                input.email
            )));
        }

        Ok(StudentRepo::create(&self.pool, input).await?)
    }

    pub async fn get_student(&self, student_id: DbId) -> Result<Student, StudentError> {
        StudentRepo::find_by_id(&self.pool, student_id)
            .await?
            .ok_or_else(|| StudentError::not_found(student_id))
    }

    /// List students ordered by id, optionally filtered.
    ///
    /// Filters are case-insensitive exact matches applied in-process, the
    /// same mechanism event listing uses. Unknown filter keys are rejected.
    pub async fn list_students(
        &self,
        filters: &[FilterPair],
    ) -> Result<Vec<Student>, StudentError> {
        for (field, _) in filters {
            if !Student::FILTERABLE_FIELDS.contains(&field.as_str()) {
                return Err(StudentError::Validation(format!(
                    "unknown student filter field: {field}"
                )));
            }
        }

        let students = StudentRepo::list(&self.pool).await?;
        Ok(students
            .into_iter()
            .filter(|s| filter::matches_all(filters, |field| s.field_text(field)))
            .collect())
    }

    /// Exact-match search on one field. Empty result sets are an error.
    pub async fn search_students(
        &self,
        field: StudentField,
        value: &str,
    ) -> Result<Vec<Student>, StudentError> {
        let results = StudentRepo::search(&self.pool, field, value).await?;
        if results.is_empty() {
            return Err(StudentError::NotFound(format!(
                "No students found with {} = {value}",
                field.as_column()
            )));
        }
        Ok(results)
    }

    /// Apply a partial update to a student record.
    pub async fn update_student(
        &self,
        student_id: DbId,
        updates: &UpdateStudent,
    ) -> Result<Student, StudentError> {
        if let Some(year) = updates.year {
            validate::validate_study_year(year)?;
        }
        StudentRepo::update(&self.pool, student_id, updates)
            .await?
            .ok_or_else(|| StudentError::not_found(student_id))
    }

    /// Delete a student record, returning the removed row.
    pub async fn delete_student(&self, student_id: DbId) -> Result<Student, StudentError> {
        StudentRepo::delete(&self.pool, student_id)
            .await?
            .ok_or_else(|| StudentError::not_found(student_id))
    }

    // -- Events -----------------------------------------------------------

    /// Browse events, optionally filtered. Delegates to the event service.
    pub async fn search_events(&self, filters: &[FilterPair]) -> Result<Vec<Event>, StudentError> {
        Ok(self.events.list_events(filters).await?)
    }

    /// Register this student for an event. The event must exist.
    pub async fn join_event(
        &self,
        student_id: DbId,
        event_id: DbId,
    ) -> Result<EventRegistration, StudentError> {
        self.events.get_event(event_id).await?;
        Ok(EventRegistrationRepo::register(&self.pool, event_id, student_id, UserType::Student)
            .await?)
    }

    /// Events this student has registered for.
    pub async fn list_my_events(
        &self,
        student_id: DbId,
    ) -> Result<Vec<RegisteredEvent>, StudentError> {
        Ok(
            EventRegistrationRepo::list_user_events(&self.pool, student_id, UserType::Student)
                .await?,
        )
    }

    // -- Mentorship ----------------------------------------------------------

    /// Browse every registered mentor.
    pub async fn list_all_mentors(&self) -> Result<Vec<Mentor>, StudentError> {
        Ok(self.mentorship.list_mentors().await?)
    }

    /// Enter a mentorship with a mentor.
    ///
    /// Both the student and the mentor must exist before the assignment is
    /// created; a missing mentor surfaces as a wrapped mentorship error.
    pub async fn join_mentorship(
        &self,
        student_id: DbId,
        mentor_id: DbId,
        start_date: Option<chrono::NaiveDate>,
        end_date: Option<chrono::NaiveDate>,
    ) -> Result<MentorshipAssignment, StudentError> {
        self.get_student(student_id).await?;
        self.mentorship.get_mentor(mentor_id).await?;

        let input = CreateAssignment {
            mentor_id,
            student_id,
            start_date,
            end_date,
        };
        Ok(self.mentorship.assign_student(&input).await?)
    }

    /// Assignments this student belongs to.
    pub async fn list_my_mentors(
        &self,
        student_id: DbId,
    ) -> Result<Vec<MentorshipAssignment>, StudentError> {
        Ok(self.mentorship.list_mentors_by_student(student_id).await?)
    }
}
