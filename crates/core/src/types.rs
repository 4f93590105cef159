use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// The kind of user an event registration belongs to.
///
/// Stored in the `event_registrations.user_type` column as lowercase text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Alumni,
    Student,
}

impl UserType {
    /// The column value stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Alumni => "alumni",
            UserType::Student => "student",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alumni" => Ok(UserType::Alumni),
            "student" => Ok(UserType::Student),
            other => Err(format!("unknown user type: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_type_round_trips_through_str() {
        assert_eq!("alumni".parse::<UserType>().unwrap(), UserType::Alumni);
        assert_eq!("student".parse::<UserType>().unwrap(), UserType::Student);
        assert_eq!(UserType::Alumni.as_str(), "alumni");
    }

    #[test]
    fn user_type_rejects_unknown() {
        assert!("admin".parse::<UserType>().is_err());
    }
}
