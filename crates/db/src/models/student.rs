//! Student entity model and DTOs.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use alumnet_core::types::{DbId, Timestamp};

/// A student row from the `students` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub course: Option<String>,
    pub year: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Student {
    /// Stringified value of a filterable field, `None` for unknown names.
    ///
    /// Unset optional fields yield `None`, so a filter on them never matches.
    pub fn field_text(&self, field: &str) -> Option<String> {
        match field {
            "id" => Some(self.id.to_string()),
            "name" => Some(self.name.clone()),
            "email" => Some(self.email.clone()),
            "course" => self.course.clone(),
            "year" => self.year.map(|y| y.to_string()),
            _ => None,
        }
    }

    /// Filter keys accepted by [`Student::field_text`].
    pub const FILTERABLE_FIELDS: &'static [&'static str] =
        &["id", "name", "email", "course", "year"];
}

/// DTO for creating a new student record.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudent {
    pub name: String,
    pub email: String,
    pub course: Option<String>,
    pub year: Option<i32>,
}

/// DTO for updating an existing student record. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStudent {
    pub name: Option<String>,
    pub email: Option<String>,
    pub course: Option<String>,
    pub year: Option<i32>,
}

/// Columns a student search may match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentField {
    Name,
    Email,
    Course,
    Year,
}

impl StudentField {
    pub fn as_column(&self) -> &'static str {
        match self {
            StudentField::Name => "name",
            StudentField::Email => "email",
            StudentField::Course => "course",
            StudentField::Year => "year",
        }
    }
}

impl FromStr for StudentField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(StudentField::Name),
            "email" => Ok(StudentField::Email),
            "course" => Ok(StudentField::Course),
            "year" => Ok(StudentField::Year),
            other => Err(format!("unknown student field: {other}")),
        }
    }
}
