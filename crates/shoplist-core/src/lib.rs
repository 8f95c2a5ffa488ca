//! # shoplist-core: Pure Shopping List Logic
//!
//! This crate holds the one reusable piece of the shopping list screen: the
//! list state machine. It has zero I/O dependencies; a screen (console,
//! web view, mobile) renders a [`ListStore`] and feeds user events back in
//! as [`Action`]s.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shoplist Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Screen (apps/console)                        │   │
//! │  │    Entry form ──► List rows ──► Edit row ──► Delete             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Action                                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shoplist-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   store   │  │  policy   │  │ validation│  │   │
//! │  │   │   Item    │  │ ListStore │  │ NamePolicy│  │  coercion │  │   │
//! │  │   │  ItemView │  │  reduce   │  │ IdStrategy│  │   rules   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING SINKS • PURE STATE TRANSITIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Item types (ShoppingItem, ItemId, ItemView)
//! - [`store`] - The list reducer (ListStore, Action, Outcome)
//! - [`policy`] - Variant knobs (name policy, fallback quantity, id strategy)
//! - [`validation`] - Name rules and quantity parsing
//! - [`error`] - Domain error types
//!
//! ## Failure Policy
//!
//! Nothing in the store raises. Blank names, unparsable quantities and
//! unknown ids are coerced to a default or ignored, and the returned
//! [`Outcome`] says which happened.
//!
//! ## Example Usage
//!
//! ```rust
//! use shoplist_core::{Action, ListStore};
//!
//! let mut list = ListStore::default();
//! list.apply(Action::add("Milk", "abc"));
//!
//! // Unparsable quantity falls back to 1
//! assert_eq!(list.items()[0].quantity, 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod policy;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use policy::{IdStrategy, ListPolicy, NamePolicy};
pub use store::{reduce, Action, AddDraft, EditSession, ListStore, Outcome};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Quantity used when quantity text cannot be parsed as an integer.
///
/// Both entry points of the original screen (add and update) fall back to 1.
pub const DEFAULT_FALLBACK_QUANTITY: i32 = 1;

/// Quantity text pre-filled in a fresh add form.
pub const DEFAULT_DRAFT_QUANTITY: &str = "1";
