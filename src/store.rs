//! View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The authoritative
//! state lives in `todo_sync::TodoStore`; this store mirrors its snapshots so
//! components only re-render for the fields that changed.

use std::collections::BTreeSet;

use leptos::prelude::*;
use reactive_stores::Store;
use todo_sync::{Notice, Snapshot, Todo, TodoId};

/// View state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Persisted todos in list order
    pub todos: Vec<Todo>,
    /// Optimistic item while a create is pending
    pub placeholder: Option<Todo>,
    /// Ids showing the loader (batch-busy or single request pending)
    pub loading: BTreeSet<TodoId>,
    pub notice: Option<Notice>,
    /// New-todo input disabled while creating or deleting
    pub input_locked: bool,
    /// Incremented whenever the new-todo input should regain focus
    pub focus_requests: u64,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Copy a core snapshot into the store, touching only changed fields
pub fn store_sync(store: &AppStore, snapshot: Snapshot) {
    let loading = loading_ids(&snapshot);
    let input_locked = snapshot.input_locked();

    if store.todos().with_untracked(|todos| *todos != snapshot.todos) {
        store.todos().set(snapshot.todos);
    }
    if store.placeholder().with_untracked(|p| *p != snapshot.placeholder) {
        store.placeholder().set(snapshot.placeholder);
    }
    if store.loading().with_untracked(|ids| *ids != loading) {
        store.loading().set(loading);
    }
    if store.notice().with_untracked(|n| *n != snapshot.notice) {
        store.notice().set(snapshot.notice);
    }
    if store.input_locked().get_untracked() != input_locked {
        store.input_locked().set(input_locked);
    }
    if store.focus_requests().get_untracked() != snapshot.focus_requests {
        store.focus_requests().set(snapshot.focus_requests);
    }
}

/// Whether the row for `id` shows its loader
pub fn store_is_loading(store: &AppStore, id: TodoId) -> bool {
    store.loading().with(|ids| ids.contains(&id))
}

fn loading_ids(snapshot: &Snapshot) -> BTreeSet<TodoId> {
    snapshot.busy.union(&snapshot.pending).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_ids_merge_busy_and_pending() {
        let snapshot = Snapshot {
            busy: [1, 2].into_iter().collect(),
            pending: [2, 5].into_iter().collect(),
            ..Default::default()
        };
        assert_eq!(loading_ids(&snapshot).into_iter().collect::<Vec<_>>(), vec![1, 2, 5]);
    }
}
