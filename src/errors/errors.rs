//! Application-wide error system
//!
//! Unified error handling for the portal backend, built on `thiserror`
//! and `actix_web::ResponseError` so that every failure converts into a
//! consistent HTTP response.
//!
//! The taxonomy is deliberately small:
//!
//! - `AuthenticationError` → 401 (missing, malformed or expired token)
//! - `AuthorizationError` → 403 (admin guard rejection, self-check
//!   mismatch, protected super-admin deletion)
//! - `DatabaseError` / `InternalError` → 500, surfaced to the client with
//!   a generic body; the underlying cause only goes to the log
//!
//! There is intentionally **no** `NotFound` variant: a lookup for a
//! missing id answers with a `null` payload and success status. There is
//! also no validation variant; malformed bodies flow through to the store
//! and any resulting failure surfaces as a 500.

use thiserror::Error;

/// Application-wide error type
///
/// Covers every failure the request path can produce. Automatically
/// converted into an HTTP response by the `ResponseError` impl below.
#[derive(Error, Debug)]
pub enum AppError {
    /// Store-level failure (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Authentication failure (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// Authorization failure (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// Unexpected internal failure (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Builds the HTTP error response.
    ///
    /// 4xx responses carry the error text; 5xx responses carry a generic
    /// message only, the detailed cause is logged server-side.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("{}", self);
            return actix_web::HttpResponse::build(status).json(serde_json::json!({
                "error": "internal server error"
            }));
        }

        actix_web::HttpResponse::build(status).json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}

/// Convenience alias used throughout the crate
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("unauthorized access".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_authorization_error_response() {
        let error = AppError::AuthorizationError("forbidden access".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_database_error_response() {
        let error = AppError::DatabaseError("connection reset".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
