//! Type-safe error codes for API responses.
//!
//! Single source of truth for error codes used across the service. Each
//! error code carries:
//! - a string representation for client consumption (e.g., "NOT_FOUND")
//! - an integer code for logging and monitoring (e.g., 1004)
//! - a default human-readable message

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request could not be interpreted
    BadRequest,

    /// Invalid UUID format in path or query parameter
    InvalidUuid,

    /// Requested resource was not found
    NotFound,

    // Server errors (1500s)
    /// An unexpected internal server error occurred
    InternalError,

    /// Service is temporarily unavailable
    ServiceUnavailable,

    // Database errors (2000-2999)
    /// Database connection or query error
    DatabaseError,

    /// Database I/O error
    DatabaseIo,
}

impl ErrorCode {
    /// String identifier sent to clients in the `error` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::InvalidUuid => "INVALID_UUID",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::DatabaseIo => "DATABASE_IO",
        }
    }

    /// Integer code for logs and monitoring dashboards.
    pub fn code(&self) -> i32 {
        match self {
            ErrorCode::BadRequest => 1000,
            ErrorCode::InvalidUuid => 1002,
            ErrorCode::NotFound => 1004,
            ErrorCode::InternalError => 1500,
            ErrorCode::ServiceUnavailable => 1503,
            ErrorCode::DatabaseError => 2000,
            ErrorCode::DatabaseIo => 2001,
        }
    }

    /// Default message when the caller does not supply one.
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "Request could not be interpreted",
            ErrorCode::InvalidUuid => "Invalid UUID format",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InternalError => "An internal server error occurred",
            ErrorCode::ServiceUnavailable => "Service is temporarily unavailable",
            ErrorCode::DatabaseError => "Database operation failed",
            ErrorCode::DatabaseIo => "Database I/O error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_round_trip() {
        assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
        assert_eq!(ErrorCode::NotFound.code(), 1004);
        assert_eq!(ErrorCode::NotFound.default_message(), "Resource not found");
    }

    #[test]
    fn test_error_code_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&ErrorCode::DatabaseError).unwrap();
        assert_eq!(json, "\"DATABASE_ERROR\"");
    }
}
