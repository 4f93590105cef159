//! Repository for the `alumni` table.

use sqlx::PgPool;

use alumnet_core::types::DbId;

use crate::models::alumni::{Alumni, AlumniField, CreateAlumni, UpdateAlumni};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, email, industry, graduation_year, location, created_at, updated_at";

/// Provides CRUD operations for alumni.
pub struct AlumniRepo;

impl AlumniRepo {
    /// Insert a new alumni record, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAlumni) -> Result<Alumni, sqlx::Error> {
        let query = format!(
            "INSERT INTO alumni (name, email, industry, graduation_year, location)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Alumni>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.industry)
            .bind(input.graduation_year)
            .bind(&input.location)
            .fetch_one(pool)
            .await
    }

    /// Find an alumni record by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Alumni>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM alumni WHERE id = $1");
        sqlx::query_as::<_, Alumni>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an alumni record by email. Used for the uniqueness check.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Alumni>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM alumni WHERE email = $1");
        sqlx::query_as::<_, Alumni>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List all alumni ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Alumni>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM alumni ORDER BY id ASC");
        sqlx::query_as::<_, Alumni>(&query).fetch_all(pool).await
    }

    /// Exact-match search on a single whitelisted column.
    ///
    /// Non-text columns are compared through a text cast so one code path
    /// serves every field.
    pub async fn search(
        pool: &PgPool,
        field: AlumniField,
        value: &str,
    ) -> Result<Vec<Alumni>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM alumni WHERE {col}::TEXT = $1 ORDER BY id ASC",
            col = field.as_column()
        );
        sqlx::query_as::<_, Alumni>(&query)
            .bind(value)
            .fetch_all(pool)
            .await
    }

    /// Update an alumni record. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAlumni,
    ) -> Result<Option<Alumni>, sqlx::Error> {
        let query = format!(
            "UPDATE alumni SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                industry = COALESCE($4, industry),
                graduation_year = COALESCE($5, graduation_year),
                location = COALESCE($6, location),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Alumni>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.industry)
            .bind(input.graduation_year)
            .bind(&input.location)
            .fetch_optional(pool)
            .await
    }

    /// Delete an alumni record by ID, returning the removed row if it existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Alumni>, sqlx::Error> {
        let query = format!("DELETE FROM alumni WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Alumni>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
