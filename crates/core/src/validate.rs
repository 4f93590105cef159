//! Field-level validation helpers used by the service layer.
//!
//! Required fields must be non-empty after trimming. Year ranges match the
//! bounds the registration forms enforce.

use crate::error::CoreError;

/// Graduation years accepted for alumni.
pub const GRADUATION_YEAR_RANGE: std::ops::RangeInclusive<i32> = 1900..=2100;

/// Study years accepted for students.
pub const STUDY_YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=5;

/// Require a non-empty (after trim) text field.
pub fn require(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::MissingField(field));
    }
    Ok(())
}

/// Validate an alumni graduation year.
pub fn validate_graduation_year(year: i32) -> Result<(), CoreError> {
    if !GRADUATION_YEAR_RANGE.contains(&year) {
        return Err(CoreError::Validation(format!(
            "graduation_year must be between {} and {}, got {year}",
            GRADUATION_YEAR_RANGE.start(),
            GRADUATION_YEAR_RANGE.end()
        )));
    }
    Ok(())
}

/// Validate a student's year of study, when provided.
pub fn validate_study_year(year: i32) -> Result<(), CoreError> {
    if !STUDY_YEAR_RANGE.contains(&year) {
        return Err(CoreError::Validation(format!(
            "year must be between {} and {}, got {year}",
            STUDY_YEAR_RANGE.start(),
            STUDY_YEAR_RANGE.end()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- require ---------------------------------------------------------

    #[test]
    fn require_accepts_non_empty() {
        assert!(require("name", "Ada Lovelace").is_ok());
    }

    #[test]
    fn require_rejects_empty_and_whitespace() {
        assert!(require("name", "").is_err());
        assert!(require("name", "   ").is_err());
    }

    #[test]
    fn require_names_the_field() {
        let err = require("email", "").unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: email");
    }

    // -- graduation year ---------------------------------------------------

    #[test]
    fn graduation_year_in_range() {
        assert!(validate_graduation_year(2020).is_ok());
        assert!(validate_graduation_year(1900).is_ok());
        assert!(validate_graduation_year(2100).is_ok());
    }

    #[test]
    fn graduation_year_out_of_range() {
        assert!(validate_graduation_year(1899).is_err());
        assert!(validate_graduation_year(2101).is_err());
    }

    // -- study year ----------------------------------------------------------

    #[test]
    fn study_year_bounds() {
        assert!(validate_study_year(1).is_ok());
        assert!(validate_study_year(5).is_ok());
        assert!(validate_study_year(0).is_err());
        assert!(validate_study_year(6).is_err());
    }
}
