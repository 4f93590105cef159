//! Mentorship service: mentor CRUD and mentor-student assignments.

use alumnet_core::types::DbId;
use alumnet_db::models::mentor::{CreateMentor, Mentor, UpdateMentor};
use alumnet_db::models::mentorship_assignment::{
    CreateAssignment, MentorshipAssignment, UpdateAssignment,
};
use alumnet_db::repositories::{AlumniRepo, MentorRepo, MentorshipAssignmentRepo};
use alumnet_db::DbPool;

use crate::ErrorKind;

#[derive(Debug, thiserror::Error)]
pub enum MentorshipError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl MentorshipError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MentorshipError::Validation(_) => ErrorKind::Validation,
            MentorshipError::NotFound { .. } => ErrorKind::NotFound,
            MentorshipError::Database(_) => ErrorKind::Database,
        }
    }

    /// The underlying sqlx error, when this wraps one.
    pub fn as_database(&self) -> Option<&sqlx::Error> {
        match self {
            MentorshipError::Database(e) => Some(e),
            _ => None,
        }
    }

    fn mentor_not_found(id: DbId) -> Self {
        MentorshipError::NotFound {
            entity: "Mentor",
            id,
        }
    }
}

/// Mentor and assignment management. Stateless aside from the pool handle.
#[derive(Clone)]
pub struct MentorshipService {
    pool: DbPool,
}

impl MentorshipService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    // -- Mentors -----------------------------------------------------------

    /// Register an alumni as a mentor.
    ///
    /// The referenced alumni must exist; checked here before the insert.
    pub async fn create_mentor(&self, input: &CreateMentor) -> Result<Mentor, MentorshipError> {
        if AlumniRepo::find_by_id(&self.pool, input.alumni_id)
            .await?
            .is_none()
        {
            return Err(MentorshipError::NotFound {
                entity: "Alumni",
                id: input.alumni_id,
            });
        }
        Ok(MentorRepo::create(&self.pool, input).await?)
    }

    pub async fn get_mentor(&self, mentor_id: DbId) -> Result<Mentor, MentorshipError> {
        MentorRepo::find_by_id(&self.pool, mentor_id)
            .await?
            .ok_or_else(|| MentorshipError::mentor_not_found(mentor_id))
    }

    pub async fn list_mentors(&self) -> Result<Vec<Mentor>, MentorshipError> {
        Ok(MentorRepo::list(&self.pool).await?)
    }

    pub async fn update_mentor(
        &self,
        mentor_id: DbId,
        updates: &UpdateMentor,
    ) -> Result<Mentor, MentorshipError> {
        MentorRepo::update(&self.pool, mentor_id, updates)
            .await?
            .ok_or_else(|| MentorshipError::mentor_not_found(mentor_id))
    }

    /// Delete a mentor, returning the removed row.
    pub async fn delete_mentor(&self, mentor_id: DbId) -> Result<Mentor, MentorshipError> {
        MentorRepo::delete(&self.pool, mentor_id)
            .await?
            .ok_or_else(|| MentorshipError::mentor_not_found(mentor_id))
    }

    // -- Assignments ---------------------------------------------------------

    /// Assign a student to a mentor.
    ///
    /// The mentor must exist; checked here before the insert. The check and
    /// the insert are not atomic against the store.
    pub async fn assign_student(
        &self,
        input: &CreateAssignment,
    ) -> Result<MentorshipAssignment, MentorshipError> {
        self.get_mentor(input.mentor_id).await?;
        Ok(MentorshipAssignmentRepo::create(&self.pool, input).await?)
    }

    pub async fn get_assignment(
        &self,
        assignment_id: DbId,
    ) -> Result<MentorshipAssignment, MentorshipError> {
        MentorshipAssignmentRepo::find_by_id(&self.pool, assignment_id)
            .await?
            .ok_or(MentorshipError::NotFound {
                entity: "Assignment",
                id: assignment_id,
            })
    }

    pub async fn list_assignments(&self) -> Result<Vec<MentorshipAssignment>, MentorshipError> {
        Ok(MentorshipAssignmentRepo::list(&self.pool).await?)
    }

    /// Assignments held by one mentor.
    pub async fn list_students_by_mentor(
        &self,
        mentor_id: DbId,
    ) -> Result<Vec<MentorshipAssignment>, MentorshipError> {
        Ok(MentorshipAssignmentRepo::list_by_mentor(&self.pool, mentor_id).await?)
    }

    /// Assignments belonging to one student.
    pub async fn list_mentors_by_student(
        &self,
        student_id: DbId,
    ) -> Result<Vec<MentorshipAssignment>, MentorshipError> {
        Ok(MentorshipAssignmentRepo::list_by_student(&self.pool, student_id).await?)
    }

    pub async fn update_assignment(
        &self,
        assignment_id: DbId,
        updates: &UpdateAssignment,
    ) -> Result<MentorshipAssignment, MentorshipError> {
        MentorshipAssignmentRepo::update(&self.pool, assignment_id, updates)
            .await?
            .ok_or(MentorshipError::NotFound {
                entity: "Assignment",
                id: assignment_id,
            })
    }

    /// Delete an assignment, returning the removed row.
    pub async fn delete_assignment(
        &self,
        assignment_id: DbId,
    ) -> Result<MentorshipAssignment, MentorshipError> {
        MentorshipAssignmentRepo::delete(&self.pool, assignment_id)
            .await?
            .ok_or(MentorshipError::NotFound {
                entity: "Assignment",
                id: assignment_id,
            })
    }
}
