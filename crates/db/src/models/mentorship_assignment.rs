//! Mentorship assignment model and DTOs.
//!
//! A time-bounded pairing of one mentor to one student.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use alumnet_core::types::{DbId, Timestamp};

/// A row from the `mentorship_assignments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MentorshipAssignment {
    pub id: DbId,
    pub mentor_id: DbId,
    pub student_id: DbId,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a mentorship assignment.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAssignment {
    pub mentor_id: DbId,
    pub student_id: DbId,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// DTO for updating an assignment. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAssignment {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
