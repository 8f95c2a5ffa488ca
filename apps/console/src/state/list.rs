//! # List State
//!
//! Shares the screen's [`ListStore`] between command functions.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User Action            Command                 Store Change            │
//! │  ───────────            ───────                 ────────────            │
//! │  add 2 Apples ────────► add_item() ───────────► items.push(item)        │
//! │  edit 2 ──────────────► begin_edit() ─────────► editing = Some(2)       │
//! │  update ──────────────► commit_edit_session() ► items[i] = staged       │
//! │  del 1 ───────────────► delete_item() ────────► items.remove(i)         │
//! │  list ────────────────► get_list() ───────────► (read only)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use shoplist_core::{ListPolicy, ListStore};

/// Managed list state.
///
/// A panic inside a closure leaves at most one action half-applied, so a
/// poisoned lock is recovered rather than propagated.
#[derive(Debug, Clone)]
pub struct ListState {
    list: Arc<Mutex<ListStore>>,
}

impl ListState {
    /// Creates an empty list under `policy`.
    pub fn new(policy: ListPolicy) -> Self {
        ListState {
            list: Arc::new(Mutex::new(ListStore::new(policy))),
        }
    }

    /// Executes a function with read access to the list.
    pub fn with_list<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ListStore) -> R,
    {
        let list = self.list.lock().unwrap_or_else(PoisonError::into_inner);
        f(&list)
    }

    /// Executes a function with write access to the list.
    pub fn with_list_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ListStore) -> R,
    {
        let mut list = self.list.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut list)
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new(ListPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_are_visible_to_reads() {
        let state = ListState::default();

        state.with_list_mut(|l| l.add("Milk", "2"));

        assert_eq!(state.with_list(|l| l.len()), 1);
    }

    #[test]
    fn test_clones_share_the_same_list() {
        let state = ListState::default();
        let other = state.clone();

        other.with_list_mut(|l| l.add("Milk", "2"));

        assert_eq!(state.with_list(|l| l.items()[0].name.clone()), "Milk");
    }

    #[test]
    fn test_policy_is_applied() {
        let state = ListState::new(ListPolicy::faithful());

        state.with_list_mut(|l| l.add("", "1"));

        assert_eq!(state.with_list(|l| l.len()), 1);
    }
}
