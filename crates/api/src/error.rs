use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use alumnet_services::{AlumniError, ErrorKind, EventError, MentorshipError, StudentError};

/// Application-level error type for HTTP handlers.
///
/// Wraps each service's error for domain failures and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce consistent JSON error
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Alumni(#[from] AlumniError),

    #[error(transparent)]
    Student(#[from] StudentError),

    #[error(transparent)]
    Event(#[from] EventError),

    #[error(transparent)]
    Mentorship(#[from] MentorshipError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    fn kind(&self) -> Option<ErrorKind> {
        match self {
            AppError::Alumni(e) => Some(e.kind()),
            AppError::Student(e) => Some(e.kind()),
            AppError::Event(e) => Some(e.kind()),
            AppError::Mentorship(e) => Some(e.kind()),
            AppError::BadRequest(_) => None,
        }
    }

    /// The underlying sqlx error, when this wraps one, including errors
    /// reached through a dependency-wrapping variant.
    fn database_error(&self) -> Option<&sqlx::Error> {
        match self {
            AppError::Alumni(e) => e.as_database(),
            AppError::Student(e) => e.as_database(),
            AppError::Event(e) => e.as_database(),
            AppError::Mentorship(e) => e.as_database(),
            AppError::BadRequest(_) => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self.kind() {
            Some(ErrorKind::Validation) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", self.to_string())
            }
            Some(ErrorKind::NotFound) => (StatusCode::NOT_FOUND, "NOT_FOUND", self.to_string()),
            Some(ErrorKind::Conflict) => (StatusCode::CONFLICT, "CONFLICT", self.to_string()),
            Some(ErrorKind::Database) => match self.database_error() {
                Some(err) => classify_sqlx_error(err),
                None => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                ),
            },
            None => (StatusCode::BAD_REQUEST, "BAD_REQUEST", self.to_string()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map
///   to 409; reachable when a check-then-insert sequence races.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn status_and_body(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn direct_database_error_is_sanitized_500() {
        let err = AppError::Event(EventError::Database(sqlx::Error::PoolTimedOut));
        let (status, body) = status_and_body(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "INTERNAL_ERROR");
        assert_eq!(body["error"], "An internal error occurred");
    }

    #[tokio::test]
    async fn wrapped_database_error_is_sanitized_500() {
        // A store failure underneath a delegated lookup arrives wrapped in
        // the outer service's dependency variant.
        let err = AppError::Alumni(AlumniError::Event(EventError::Database(
            sqlx::Error::PoolTimedOut,
        )));
        let (status, body) = status_and_body(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "INTERNAL_ERROR");
        assert_eq!(body["error"], "An internal error occurred");

        let err = AppError::Student(StudentError::Mentorship(MentorshipError::Database(
            sqlx::Error::PoolTimedOut,
        )));
        let (status, body) = status_and_body(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "INTERNAL_ERROR");
    }

    #[tokio::test]
    async fn wrapped_row_not_found_maps_to_404() {
        let err = AppError::Student(StudentError::Event(EventError::Database(
            sqlx::Error::RowNotFound,
        )));
        let (status, body) = status_and_body(err).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn wrapped_not_found_keeps_its_kind() {
        let err = AppError::Alumni(AlumniError::Event(EventError::NotFound(42)));
        let (status, body) = status_and_body(err).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("42"));
    }
}
