//! # List Store
//!
//! The shopping list state machine. Every user event on the screen is an
//! [`Action`]; [`ListStore::apply`] runs it in place and [`reduce`] is the
//! same transition as a pure `(state, action) -> state` function.
//!
//! ## State Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         ListStore                                       │
//! │                                                                         │
//! │  items:   [ {1 Apples 2}, {2 Bread 1}, ... ]     ordered, add appends   │
//! │  editing: Option<EditSession>                    at most one row        │
//! │  draft:   AddDraft { open, name, quantity }      the add form           │
//! │  policy:  ListPolicy                             variant knobs          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Per-Item State Machine
//! ```text
//!              BeginEdit(id)
//!   ┌─────────┐ ──────────────► ┌─────────┐
//!   │ Viewing │                 │ Editing │
//!   └─────────┘ ◄────────────── └─────────┘
//!        │      CommitEdit(id)       │
//!        │      BeginEdit(other)     │  (staged text discarded)
//!        │      Delete(id)           │
//!        ▼                           ▼
//!     Delete(id) ──────────────► removed
//! ```
//!
//! ## Failure Policy
//! No operation fails. Each returns an [`Outcome`] that records whether the
//! input was coerced, rejected or pointed at a missing id.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::policy::{IdStrategy, ListPolicy};
use crate::types::{ItemId, ItemView, ShoppingItem};
use crate::validation::coerce_quantity;
use crate::DEFAULT_DRAFT_QUANTITY;

// =============================================================================
// Add Draft
// =============================================================================

/// Text typed into the add form but not yet confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AddDraft {
    /// Whether the add form (dialog) is showing.
    pub open: bool,
    pub name: String,
    pub quantity: String,
}

impl Default for AddDraft {
    fn default() -> Self {
        AddDraft {
            open: false,
            name: String::new(),
            quantity: DEFAULT_DRAFT_QUANTITY.to_string(),
        }
    }
}

// =============================================================================
// Edit Session
// =============================================================================

/// The one item being edited, with the text staged in its edit row.
///
/// Staged values are written to the item only on commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EditSession {
    pub id: ItemId,
    pub name: String,
    pub quantity: String,
}

impl EditSession {
    fn for_item(item: &ShoppingItem) -> Self {
        EditSession {
            id: item.id,
            name: item.name.clone(),
            quantity: item.quantity.to_string(),
        }
    }
}

// =============================================================================
// Action
// =============================================================================

/// A user event on the list screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "camelCase")]
#[ts(export)]
pub enum Action {
    /// Append an item. `quantity` is raw text.
    Add { name: String, quantity: String },
    /// Open the edit row of `id`, closing any other.
    BeginEdit { id: ItemId },
    /// Write `name` and `quantity` to `id` and close the edit row.
    CommitEdit {
        id: ItemId,
        name: String,
        quantity: String,
    },
    /// Remove `id`.
    Delete { id: ItemId },

    OpenAddForm,
    DismissAddForm,
    SetDraftName { text: String },
    SetDraftQuantity { text: String },
    /// Add the draft, then reset and close the form.
    ConfirmAdd,

    SetEditName { text: String },
    SetEditQuantity { text: String },
    /// Commit the staged text of the open edit row.
    CommitEditSession,
}

impl Action {
    pub fn add(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Action::Add {
            name: name.into(),
            quantity: quantity.into(),
        }
    }

    pub fn commit_edit(id: ItemId, name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Action::CommitEdit {
            id,
            name: name.into(),
            quantity: quantity.into(),
        }
    }
}

// =============================================================================
// Outcome
// =============================================================================

/// What an applied action actually did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A new item was appended.
    Added { id: ItemId, quantity_coerced: bool },
    /// The name failed the name policy; the list is unchanged.
    AddRejected(ValidationError),
    /// An edit row opened. `discarded` is the row that was open before, if any.
    EditStarted {
        id: ItemId,
        discarded: Option<ItemId>,
    },
    /// An item was rewritten. `name_kept` is set when the new name failed the
    /// name policy and the old one stayed.
    Updated {
        id: ItemId,
        quantity_coerced: bool,
        name_kept: bool,
    },
    Deleted(ItemId),
    /// The action named an id that is not in the list.
    NotFound(ItemId),
    /// The add form opened, closed or its text changed.
    FormChanged,
    /// The staged text of the open edit row changed.
    Staged,
    /// Nothing to act on (e.g. staging text with no edit row open).
    Ignored,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Added {
                id,
                quantity_coerced,
            } => {
                write!(f, "added item {}", id)?;
                if *quantity_coerced {
                    write!(f, " (fallback quantity)")?;
                }
                Ok(())
            }
            Outcome::AddRejected(err) => write!(f, "add rejected: {}", err),
            Outcome::EditStarted {
                id,
                discarded: Some(prev),
            } => write!(f, "editing item {} (discarded edit of {})", id, prev),
            Outcome::EditStarted { id, discarded: None } => write!(f, "editing item {}", id),
            Outcome::Updated {
                id,
                quantity_coerced,
                name_kept,
            } => {
                write!(f, "updated item {}", id)?;
                if *quantity_coerced {
                    write!(f, " (fallback quantity)")?;
                }
                if *name_kept {
                    write!(f, " (name kept)")?;
                }
                Ok(())
            }
            Outcome::Deleted(id) => write!(f, "deleted item {}", id),
            Outcome::NotFound(id) => write!(f, "no item {}", id),
            Outcome::FormChanged => write!(f, "add form changed"),
            Outcome::Staged => write!(f, "edit staged"),
            Outcome::Ignored => write!(f, "ignored"),
        }
    }
}

// =============================================================================
// List Store
// =============================================================================

/// Ordered shopping items plus the screen's transient form state.
///
/// ## Invariants
/// - At most one item is being edited (`editing` is a single `Option`)
/// - Items keep insertion order; delete preserves the order of the rest
/// - With [`IdStrategy::Monotonic`] no id is handed out twice
///
/// Operations that take an id act on the first item carrying it. Ids only
/// repeat under [`IdStrategy::LengthPlusOne`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListStore {
    items: Vec<ShoppingItem>,
    editing: Option<EditSession>,
    draft: AddDraft,
    policy: ListPolicy,
    last_id: u32,
}

impl ListStore {
    /// Creates an empty list with the given policy.
    pub fn new(policy: ListPolicy) -> Self {
        ListStore {
            policy,
            ..ListStore::default()
        }
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    pub fn draft(&self) -> &AddDraft {
        &self.draft
    }

    pub fn policy(&self) -> &ListPolicy {
        &self.policy
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total quantity across all items, widened so it cannot overflow.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i64::from(i.quantity)).sum()
    }

    pub fn get(&self, id: ItemId) -> Option<&ShoppingItem> {
        self.items.iter().find(|i| i.id == id)
    }

    fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|i| i.id == id)
    }

    /// Items as rendered, with `is_editing` derived from the edit session.
    pub fn view(&self) -> Vec<ItemView> {
        let editing_index = self.editing.as_ref().and_then(|s| self.position(s.id));

        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| ItemView::from_item(item, Some(index) == editing_index))
            .collect()
    }

    /// Rendered form of a single item.
    pub fn view_item(&self, id: ItemId) -> CoreResult<ItemView> {
        let index = self.position(id).ok_or(CoreError::ItemNotFound(id))?;
        let is_editing = self
            .editing
            .as_ref()
            .is_some_and(|s| self.position(s.id) == Some(index));
        Ok(ItemView::from_item(&self.items[index], is_editing))
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Runs one action against the list.
    pub fn apply(&mut self, action: Action) -> Outcome {
        match action {
            Action::Add { name, quantity } => self.add(name, &quantity),
            Action::BeginEdit { id } => self.begin_edit(id),
            Action::CommitEdit { id, name, quantity } => self.commit_edit(id, name, &quantity),
            Action::Delete { id } => self.delete(id),

            Action::OpenAddForm => {
                self.draft.open = true;
                Outcome::FormChanged
            }
            Action::DismissAddForm => {
                self.draft.open = false;
                Outcome::FormChanged
            }
            Action::SetDraftName { text } => {
                self.draft.name = text;
                Outcome::FormChanged
            }
            Action::SetDraftQuantity { text } => {
                self.draft.quantity = text;
                Outcome::FormChanged
            }
            Action::ConfirmAdd => {
                // The form closes and resets even when the name is refused.
                let draft = std::mem::take(&mut self.draft);
                self.add(draft.name, &draft.quantity)
            }

            Action::SetEditName { text } => match self.editing.as_mut() {
                Some(session) => {
                    session.name = text;
                    Outcome::Staged
                }
                None => Outcome::Ignored,
            },
            Action::SetEditQuantity { text } => match self.editing.as_mut() {
                Some(session) => {
                    session.quantity = text;
                    Outcome::Staged
                }
                None => Outcome::Ignored,
            },
            Action::CommitEditSession => match self.editing.take() {
                Some(session) => self.commit_edit(session.id, session.name, &session.quantity),
                None => Outcome::Ignored,
            },
        }
    }

    /// Appends a new item.
    ///
    /// ## Behavior
    /// - Name refused by the name policy: list unchanged
    /// - Quantity text not an integer: the policy's fallback quantity
    /// - Id from the policy's [`IdStrategy`]
    pub fn add(&mut self, name: impl Into<String>, quantity_text: &str) -> Outcome {
        let name = name.into();
        if let Err(err) = self.policy.name_policy.check(&name) {
            return Outcome::AddRejected(err);
        }

        let (quantity, quantity_coerced) =
            coerce_quantity(quantity_text, self.policy.fallback_quantity);
        let id = self.allocate_id();
        self.items.push(ShoppingItem::new(id, name, quantity));

        Outcome::Added {
            id,
            quantity_coerced,
        }
    }

    /// Opens the edit row of `id`.
    ///
    /// Any other open row closes and its staged text is dropped. When `id`
    /// is missing the open row still closes. Beginning an edit on the row
    /// that is already open keeps its staged text.
    pub fn begin_edit(&mut self, id: ItemId) -> Outcome {
        if self.editing.as_ref().is_some_and(|s| s.id == id) && self.get(id).is_some() {
            return Outcome::EditStarted {
                id,
                discarded: None,
            };
        }

        let discarded = self.editing.take().map(|s| s.id);
        match self.get(id).map(EditSession::for_item) {
            Some(session) => {
                self.editing = Some(session);
                Outcome::EditStarted { id, discarded }
            }
            None => Outcome::NotFound(id),
        }
    }

    /// Writes a new name and quantity to `id` and closes the edit row.
    ///
    /// ## Behavior
    /// - The edit row closes whether or not `id` exists
    /// - Name refused by the name policy: the old name stays
    /// - Quantity text not an integer: the policy's fallback quantity
    pub fn commit_edit(
        &mut self,
        id: ItemId,
        name: impl Into<String>,
        quantity_text: &str,
    ) -> Outcome {
        self.editing = None;

        let name = name.into();
        let name_ok = self.policy.name_policy.check(&name).is_ok();
        let (quantity, quantity_coerced) =
            coerce_quantity(quantity_text, self.policy.fallback_quantity);

        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                if name_ok {
                    item.name = name;
                }
                item.quantity = quantity;
                Outcome::Updated {
                    id,
                    quantity_coerced,
                    name_kept: !name_ok,
                }
            }
            None => Outcome::NotFound(id),
        }
    }

    /// Removes `id`, keeping the order of the remaining items.
    pub fn delete(&mut self, id: ItemId) -> Outcome {
        let Some(index) = self.position(id) else {
            return Outcome::NotFound(id);
        };

        self.items.remove(index);
        if self.editing.as_ref().is_some_and(|s| s.id == id) {
            self.editing = None;
        }
        Outcome::Deleted(id)
    }

    fn allocate_id(&mut self) -> ItemId {
        match self.policy.id_strategy {
            IdStrategy::LengthPlusOne => {
                let len = u32::try_from(self.items.len()).unwrap_or(u32::MAX);
                ItemId::new(len.saturating_add(1))
            }
            IdStrategy::Monotonic => {
                self.last_id = self.last_id.saturating_add(1);
                ItemId::new(self.last_id)
            }
        }
    }
}

/// Pure form of [`ListStore::apply`]: consumes a state, returns the next one.
///
/// ```rust
/// use shoplist_core::{reduce, Action, ListStore};
///
/// let list = reduce(ListStore::default(), Action::add("Eggs", "12"));
/// assert_eq!(list.len(), 1);
/// ```
pub fn reduce(mut state: ListStore, action: Action) -> ListStore {
    state.apply(action);
    state
}

// =============================================================================
// Unit Tests
// =============================================================================
