//! Mentor entity model and DTOs.
//!
//! A mentor is an alumni record augmented with a skills description.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use alumnet_core::types::{DbId, Timestamp};

/// A mentor row from the `mentors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Mentor {
    pub id: DbId,
    pub alumni_id: DbId,
    pub skills: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a mentor.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMentor {
    pub alumni_id: DbId,
    pub skills: Option<String>,
}

/// DTO for updating a mentor. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMentor {
    pub skills: Option<String>,
}
