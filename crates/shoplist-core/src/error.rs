//! # Error Types
//!
//! Domain-specific error types for shoplist-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shoplist-core errors (this file)                                      │
//! │  ├── CoreError        - Lookups that have no silent fallback           │
//! │  └── ValidationError  - Input rule failures                            │
//! │                                                                         │
//! │  console app errors (apps/console)                                     │
//! │  └── ApiError         - What the screen shows (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Screen                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The list operations themselves never return these: the store absorbs a
//! `ValidationError` into an [`Outcome`](crate::Outcome) and carries on.

use thiserror::Error;

use crate::types::ItemId;

// =============================================================================
// Core Error
// =============================================================================

/// Core list errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No item with this id is in the list.
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g. quantity text that is not an integer).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ItemNotFound(ItemId::new(7));
        assert_eq!(err.to_string(), "Item not found: 7");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: "not an integer".to_string(),
        };
        assert_eq!(err.to_string(), "quantity has invalid format: not an integer");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
