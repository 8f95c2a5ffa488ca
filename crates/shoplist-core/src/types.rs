//! # Item Types
//!
//! The data a shopping list is made of.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Item Types                                      │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     ItemId      │   │  ShoppingItem   │   │    ItemView     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  u32            │   │  id             │   │  id, name       │       │
//! │  │  assigned on    │   │  name           │   │  quantity       │       │
//! │  │  add            │   │  quantity       │   │  is_editing     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                          stored              derived for rendering      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `ShoppingItem` carries no editing flag. Which item is being edited is
//! store state ([`EditSession`](crate::EditSession)); the flag only shows up
//! on the rendered [`ItemView`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Item Id
// =============================================================================

/// Identifier of an item within one list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemId(u32);

impl ItemId {
    #[inline]
    pub const fn new(value: u32) -> Self {
        ItemId(value)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ItemId {
    type Err = ValidationError;

    /// Parses an id typed by the user, e.g. `"3"` or `"#3"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s.strip_prefix('#').unwrap_or(s);
        digits
            .parse::<u32>()
            .map(ItemId)
            .map_err(|_| ValidationError::InvalidFormat {
                field: "id".to_string(),
                reason: format!("'{}' is not an item number", s),
            })
    }
}

// =============================================================================
// Shopping Item
// =============================================================================

/// One line of the shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShoppingItem {
    /// Assigned when the item is added (see [`IdStrategy`](crate::IdStrategy)).
    pub id: ItemId,

    /// Free-text label. May be empty under the loose name policy.
    pub name: String,

    /// Count to buy. Stored as parsed, so zero and negatives are possible.
    pub quantity: i32,
}

impl ShoppingItem {
    pub fn new(id: ItemId, name: impl Into<String>, quantity: i32) -> Self {
        ShoppingItem {
            id,
            name: name.into(),
            quantity,
        }
    }
}

// =============================================================================
// Item View
// =============================================================================

/// An item as a screen renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ItemView {
    pub id: ItemId,
    pub name: String,
    pub quantity: i32,
    /// True for the single item whose edit row is open.
    pub is_editing: bool,
}

impl ItemView {
    pub fn from_item(item: &ShoppingItem, is_editing: bool) -> Self {
        ItemView {
            id: item.id,
            name: item.name.clone(),
            quantity: item.quantity,
            is_editing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_from_str() {
        assert_eq!("3".parse::<ItemId>().unwrap(), ItemId::new(3));
        assert_eq!(" #12 ".parse::<ItemId>().unwrap(), ItemId::new(12));
        assert!("abc".parse::<ItemId>().is_err());
        assert!("-1".parse::<ItemId>().is_err());
        assert!("".parse::<ItemId>().is_err());
    }

    #[test]
    fn test_item_id_serializes_as_number() {
        let json = serde_json::to_string(&ItemId::new(4)).unwrap();
        assert_eq!(json, "4");
    }

    #[test]
    fn test_item_view_uses_camel_case() {
        let item = ShoppingItem::new(ItemId::new(1), "Milk", 2);
        let view = ItemView::from_item(&item, true);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["isEditing"], true);
        assert_eq!(json["name"], "Milk");
    }
}
