//! Repository for the `mentors` table.

use sqlx::PgPool;

use alumnet_core::types::DbId;

use crate::models::mentor::{CreateMentor, Mentor, UpdateMentor};

const COLUMNS: &str = "id, alumni_id, skills, created_at, updated_at";

/// Provides CRUD operations for mentors.
pub struct MentorRepo;

impl MentorRepo {
    /// Insert a new mentor, returning the created row.
    ///
    /// The referenced alumni must exist; the service layer checks this
    /// before calling, and the foreign key backs it up.
    pub async fn create(pool: &PgPool, input: &CreateMentor) -> Result<Mentor, sqlx::Error> {
        let query = format!(
            "INSERT INTO mentors (alumni_id, skills)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mentor>(&query)
            .bind(input.alumni_id)
            .bind(&input.skills)
            .fetch_one(pool)
            .await
    }

    /// Find a mentor by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Mentor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mentors WHERE id = $1");
        sqlx::query_as::<_, Mentor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all mentors ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Mentor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mentors ORDER BY id ASC");
        sqlx::query_as::<_, Mentor>(&query).fetch_all(pool).await
    }

    /// Update a mentor. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMentor,
    ) -> Result<Option<Mentor>, sqlx::Error> {
        let query = format!(
            "UPDATE mentors SET
                skills = COALESCE($2, skills),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mentor>(&query)
            .bind(id)
            .bind(&input.skills)
            .fetch_optional(pool)
            .await
    }

    /// Delete a mentor by ID, returning the removed row if it existed.
    ///
    /// Assignments held by the mentor are removed by the cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Mentor>, sqlx::Error> {
        let query = format!("DELETE FROM mentors WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Mentor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
