//! Repository for the `mentorship_assignments` table.

use sqlx::PgPool;

use alumnet_core::types::DbId;

use crate::models::mentorship_assignment::{
    CreateAssignment, MentorshipAssignment, UpdateAssignment,
};

const COLUMNS: &str = "id, mentor_id, student_id, start_date, end_date, created_at, updated_at";

/// Provides CRUD operations for mentorship assignments.
pub struct MentorshipAssignmentRepo;

impl MentorshipAssignmentRepo {
    /// Insert a new assignment, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAssignment,
    ) -> Result<MentorshipAssignment, sqlx::Error> {
        let query = format!(
            "INSERT INTO mentorship_assignments (mentor_id, student_id, start_date, end_date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MentorshipAssignment>(&query)
            .bind(input.mentor_id)
            .bind(input.student_id)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_one(pool)
            .await
    }

    /// Find an assignment by internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MentorshipAssignment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mentorship_assignments WHERE id = $1");
        sqlx::query_as::<_, MentorshipAssignment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all assignments, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<MentorshipAssignment>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM mentorship_assignments ORDER BY created_at ASC");
        sqlx::query_as::<_, MentorshipAssignment>(&query)
            .fetch_all(pool)
            .await
    }

    /// List assignments held by one mentor.
    pub async fn list_by_mentor(
        pool: &PgPool,
        mentor_id: DbId,
    ) -> Result<Vec<MentorshipAssignment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM mentorship_assignments
             WHERE mentor_id = $1 ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, MentorshipAssignment>(&query)
            .bind(mentor_id)
            .fetch_all(pool)
            .await
    }

    /// List assignments belonging to one student.
    pub async fn list_by_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<MentorshipAssignment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM mentorship_assignments
             WHERE student_id = $1 ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, MentorshipAssignment>(&query)
            .bind(student_id)
            .fetch_all(pool)
            .await
    }

    /// Update an assignment's date bounds. Only non-`None` fields apply.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAssignment,
    ) -> Result<Option<MentorshipAssignment>, sqlx::Error> {
        let query = format!(
            "UPDATE mentorship_assignments SET
                start_date = COALESCE($2, start_date),
                end_date = COALESCE($3, end_date),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MentorshipAssignment>(&query)
            .bind(id)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete an assignment by ID, returning the removed row if it existed.
    pub async fn delete(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MentorshipAssignment>, sqlx::Error> {
        let query =
            format!("DELETE FROM mentorship_assignments WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, MentorshipAssignment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
