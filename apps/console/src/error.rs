//! # API Error Type
//!
//! Unified error type for screen commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Shoplist                               │
//! │                                                                         │
//! │  Input line ──► parse_line ──► Unknown command? ── INVALID_COMMAND ──┐  │
//! │                     │                                                │  │
//! │                     ▼                                                │  │
//! │               Command function                                       │  │
//! │                     │                                                │  │
//! │                     ├── Item lookup failed ─────── NOT_FOUND ────────┤  │
//! │                     │                                                │  │
//! │                     └── List action ── never fails (coerced) ──►     │  │
//! │                                                                      ▼  │
//! │                                                   screen prints "! msg" │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! List actions themselves never produce an `ApiError`; bad names and
//! quantities are absorbed by the store.

use serde::Serialize;
use shoplist_core::{CoreError, ValidationError};
use thiserror::Error;

/// Error returned from screen commands.
///
/// ## Serialization
/// In JSON output mode this is what gets printed:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Item not found: 4"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Item not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Input line is not a known command
    InvalidCommand,

    /// Internal error (serialization, I/O)
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn invalid_command(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidCommand, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ItemNotFound(id) => ApiError::not_found("Item", &id.to_string()),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::from(CoreError::from(err))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON serialization failed: {}", err);
        ApiError::internal("Could not serialize response")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoplist_core::ItemId;

    #[test]
    fn test_not_found_from_core() {
        let err: ApiError = CoreError::ItemNotFound(ItemId::new(4)).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Item not found: 4");
    }

    #[test]
    fn test_validation_from_core() {
        let err: ApiError = ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "name is required");
    }

    #[test]
    fn test_serializes_code_in_screaming_snake_case() {
        let err = ApiError::invalid_command("Unknown command: fly");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "INVALID_COMMAND");
        assert_eq!(json["message"], "Unknown command: fly");
    }

    #[test]
    fn test_display() {
        let err = ApiError::not_found("Item", "2");
        assert_eq!(err.to_string(), "[NotFound] Item not found: 2");
    }
}
