//! # Validation Module
//!
//! Name rules and quantity parsing for list input.
//!
//! ## Where Validation Sits
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Input Handling                                     │
//! │                                                                         │
//! │  Screen text fields ("Item Name", "Quantity")                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  THIS MODULE: validate_item_name / parse_quantity                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  ListStore: absorbs the error                                           │
//! │  ├── blank name (strict policy) → add is a no-op                       │
//! │  └── bad quantity              → fallback quantity                     │
//! │                                                                         │
//! │  Nothing here reaches the user as an error message.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shoplist_core::validation::{coerce_quantity, validate_item_name};
//!
//! assert!(validate_item_name("Apples").is_ok());
//! assert_eq!(coerce_quantity("lots", 1), (1, true));
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates an item name for the strict name policy.
///
/// ## Rules
/// - Must not be empty or whitespace only
///
/// ## Example
/// ```rust
/// use shoplist_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Bread").is_ok());
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

/// Parses quantity text as a 32-bit integer.
///
/// Surrounding whitespace is ignored. Zero and negative values parse fine;
/// text that is not an integer, or is out of `i32` range, is an error.
pub fn parse_quantity(text: &str) -> ValidationResult<i32> {
    let text = text.trim();

    text.parse::<i32>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: format!("'{}' is not a whole number", text),
        })
}

/// Parses quantity text, substituting `fallback` when it is not an integer.
///
/// The flag is set when the fallback was used.
pub fn coerce_quantity(text: &str, fallback: i32) -> (i32, bool) {
    match parse_quantity(text) {
        Ok(quantity) => (quantity, false),
        Err(_) => (fallback, true),
    }
}
