//! Alumni entity model and DTOs.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use alumnet_core::types::{DbId, Timestamp};

/// An alumni row from the `alumni` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Alumni {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub industry: String,
    pub graduation_year: i32,
    pub location: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new alumni record.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAlumni {
    pub name: String,
    pub email: String,
    pub industry: String,
    pub graduation_year: i32,
    pub location: String,
}

/// DTO for updating an existing alumni record. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAlumni {
    pub name: Option<String>,
    pub email: Option<String>,
    pub industry: Option<String>,
    pub graduation_year: Option<i32>,
    pub location: Option<String>,
}

impl Alumni {
    /// Stringified value of a filterable field, `None` for unknown names.
    ///
    /// Used by the in-process listing filter.
    pub fn field_text(&self, field: &str) -> Option<String> {
        match field {
            "id" => Some(self.id.to_string()),
            "name" => Some(self.name.clone()),
            "email" => Some(self.email.clone()),
            "industry" => Some(self.industry.clone()),
            "graduation_year" => Some(self.graduation_year.to_string()),
            "location" => Some(self.location.clone()),
            _ => None,
        }
    }

    /// Filter keys accepted by [`Alumni::field_text`].
    pub const FILTERABLE_FIELDS: &'static [&'static str] =
        &["id", "name", "email", "industry", "graduation_year", "location"];
}

/// Columns an alumni search may match against.
///
/// Keeps the single-field search from accepting arbitrary column names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlumniField {
    Name,
    Email,
    Industry,
    GraduationYear,
    Location,
}

impl AlumniField {
    pub fn as_column(&self) -> &'static str {
        match self {
            AlumniField::Name => "name",
            AlumniField::Email => "email",
            AlumniField::Industry => "industry",
            AlumniField::GraduationYear => "graduation_year",
            AlumniField::Location => "location",
        }
    }
}

impl FromStr for AlumniField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(AlumniField::Name),
            "email" => Ok(AlumniField::Email),
            "industry" => Ok(AlumniField::Industry),
            "graduation_year" => Ok(AlumniField::GraduationYear),
            "location" => Ok(AlumniField::Location),
            other => Err(format!("unknown alumni field: {other}")),
        }
    }
}
