//! # List Commands
//!
//! Commands for list manipulation.
//!
//! ## Screen Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────┐  open_add_form  ┌──────────┐  confirm_add  ┌──────────┐   │
//! │  │  List    │────────────────►│ Add form │──────────────►│  List    │   │
//! │  │          │◄────────────────│          │               │ (+1 row) │   │
//! │  └──────────┘ dismiss_add_form└──────────┘               └──────────┘   │
//! │       │                                                       │         │
//! │   begin_edit                                             delete_item    │
//! │       ▼                                                                 │
//! │  ┌──────────┐  set_edit_name / set_edit_quantity                        │
//! │  │ Edit row │──────────────────────────────► commit_edit_session        │
//! │  └──────────┘                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! List commands cannot fail: the store coerces or ignores bad input and
//! the outcome is only logged.

use serde::{Deserialize, Serialize};
use shoplist_core::{Action, AddDraft, EditSession, ItemId, ItemView, ListStore};
use tracing::debug;

use crate::error::ApiError;
use crate::state::ListState;

/// List response including items and form state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub items: Vec<ItemView>,
    pub draft: AddDraft,
    pub editing: Option<EditSession>,
    pub total_quantity: i64,
}

impl From<&ListStore> for ListResponse {
    fn from(list: &ListStore) -> Self {
        ListResponse {
            items: list.view(),
            draft: list.draft().clone(),
            editing: list.editing().cloned(),
            total_quantity: list.total_quantity(),
        }
    }
}

fn dispatch(list: &ListState, action: Action) -> ListResponse {
    list.with_list_mut(|l| {
        let outcome = l.apply(action);
        debug!(%outcome, items = l.len(), "Action applied");
        ListResponse::from(&*l)
    })
}

/// Gets the current list.
pub fn get_list(list: &ListState) -> ListResponse {
    debug!("get_list command");
    list.with_list(|l| ListResponse::from(l))
}

/// Gets a single item.
///
/// ## Errors
/// `NOT_FOUND` when no item has this id.
pub fn get_item(list: &ListState, id: ItemId) -> Result<ItemView, ApiError> {
    debug!(%id, "get_item command");
    list.with_list(|l| l.view_item(id)).map_err(ApiError::from)
}

/// Adds an item directly, bypassing the add form.
///
/// ## Behavior
/// - Blank name under the strict policy: list unchanged
/// - Quantity text not an integer: fallback quantity
pub fn add_item(list: &ListState, name: String, quantity: String) -> ListResponse {
    debug!(name = %name, quantity = %quantity, "add_item command");
    dispatch(list, Action::Add { name, quantity })
}

/// Opens the edit row of an item, closing any other edit row unsaved.
pub fn begin_edit(list: &ListState, id: ItemId) -> ListResponse {
    debug!(%id, "begin_edit command");
    dispatch(list, Action::BeginEdit { id })
}

/// Writes a name and quantity to an item and closes the edit row.
pub fn commit_edit(list: &ListState, id: ItemId, name: String, quantity: String) -> ListResponse {
    debug!(%id, name = %name, quantity = %quantity, "commit_edit command");
    dispatch(list, Action::CommitEdit { id, name, quantity })
}

/// Commits whatever is staged in the open edit row.
pub fn commit_edit_session(list: &ListState) -> ListResponse {
    debug!("commit_edit_session command");
    dispatch(list, Action::CommitEditSession)
}

pub fn set_edit_name(list: &ListState, text: String) -> ListResponse {
    debug!(text = %text, "set_edit_name command");
    dispatch(list, Action::SetEditName { text })
}

pub fn set_edit_quantity(list: &ListState, text: String) -> ListResponse {
    debug!(text = %text, "set_edit_quantity command");
    dispatch(list, Action::SetEditQuantity { text })
}

/// Removes an item.
pub fn delete_item(list: &ListState, id: ItemId) -> ListResponse {
    debug!(%id, "delete_item command");
    dispatch(list, Action::Delete { id })
}

pub fn open_add_form(list: &ListState) -> ListResponse {
    debug!("open_add_form command");
    dispatch(list, Action::OpenAddForm)
}

/// Closes the add form. Typed text is kept for the next time it opens.
pub fn dismiss_add_form(list: &ListState) -> ListResponse {
    debug!("dismiss_add_form command");
    dispatch(list, Action::DismissAddForm)
}

pub fn set_draft_name(list: &ListState, text: String) -> ListResponse {
    debug!(text = %text, "set_draft_name command");
    dispatch(list, Action::SetDraftName { text })
}

pub fn set_draft_quantity(list: &ListState, text: String) -> ListResponse {
    debug!(text = %text, "set_draft_quantity command");
    dispatch(list, Action::SetDraftQuantity { text })
}

/// Adds the add form's text as an item, then resets and closes the form.
pub fn confirm_add(list: &ListState) -> ListResponse {
    debug!("confirm_add command");
    dispatch(list, Action::ConfirmAdd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn id(n: u32) -> ItemId {
        ItemId::new(n)
    }

    #[test]
    fn test_add_and_get_list() {
        let list = ListState::default();

        add_item(&list, "Apples".to_string(), "2".to_string());
        let response = add_item(&list, "Bread".to_string(), "x".to_string());

        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[1].quantity, 1);
        assert_eq!(response.total_quantity, 3);
        assert_eq!(get_list(&list), response);
    }

    #[test]
    fn test_edit_through_staged_row() {
        let list = ListState::default();
        add_item(&list, "Apples".to_string(), "2".to_string());

        let response = begin_edit(&list, id(1));
        assert!(response.items[0].is_editing);
        assert_eq!(response.editing.as_ref().unwrap().name, "Apples");

        set_edit_name(&list, "Pears".to_string());
        set_edit_quantity(&list, "5".to_string());
        let response = commit_edit_session(&list);

        assert_eq!(response.items[0].name, "Pears");
        assert_eq!(response.items[0].quantity, 5);
        assert!(!response.items[0].is_editing);
        assert!(response.editing.is_none());
    }

    #[test]
    fn test_commit_edit_direct() {
        let list = ListState::default();
        add_item(&list, "Apples".to_string(), "2".to_string());

        let response = commit_edit(&list, id(1), "Bagels".to_string(), "4".to_string());

        assert_eq!(response.items[0].name, "Bagels");
        assert_eq!(response.items[0].quantity, 4);
    }

    #[test]
    fn test_add_form_flow() {
        let list = ListState::default();

        assert!(open_add_form(&list).draft.open);
        set_draft_name(&list, "Milk".to_string());
        set_draft_quantity(&list, "3".to_string());
        let response = confirm_add(&list);

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].name, "Milk");
        assert!(!response.draft.open);
        assert_eq!(response.draft.quantity, "1");
    }

    #[test]
    fn test_dismiss_add_form() {
        let list = ListState::default();
        open_add_form(&list);
        set_draft_name(&list, "Milk".to_string());

        let response = dismiss_add_form(&list);

        assert!(!response.draft.open);
        assert!(response.items.is_empty());
        assert_eq!(response.draft.name, "Milk");
    }

    #[test]
    fn test_delete_item() {
        let list = ListState::default();
        add_item(&list, "Apples".to_string(), "2".to_string());
        add_item(&list, "Bread".to_string(), "1".to_string());

        let response = delete_item(&list, id(1));

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].name, "Bread");
    }

    #[test]
    fn test_get_item() {
        let list = ListState::default();
        add_item(&list, "Apples".to_string(), "2".to_string());

        assert_eq!(get_item(&list, id(1)).unwrap().name, "Apples");

        let err = get_item(&list, id(7)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_response_json_shape() {
        let list = ListState::default();
        add_item(&list, "Apples".to_string(), "2".to_string());
        let response = begin_edit(&list, id(1));

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["items"][0]["isEditing"], true);
        assert_eq!(json["editing"]["id"], 1);
        assert_eq!(json["draft"]["quantity"], "1");
        assert_eq!(json["totalQuantity"], 2);
    }
}
