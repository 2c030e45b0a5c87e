//! List Store
//!
//! Authoritative in-memory todo list plus the transient view status that
//! goes with it (placeholder, busy markers, notice, focus requests).
//!
//! The store is a cheap `Rc` handle: clone it into every collaborator that
//! needs it. Every mutation swaps in a freshly built value and then notifies
//! subscribers, with no borrow held, so a listener may read the store.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::model::{Todo, TodoId};

pub type ListenerId = usize;

type Listener = Rc<dyn Fn()>;

/// Global, dismissible error message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Increments per notice, so a delayed dismissal can't clear a newer one
    pub id: u64,
    pub message: String,
}

/// Owned copy of the store contents, handed to the view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub todos: Vec<Todo>,
    /// Optimistic item shown while a create is pending
    pub placeholder: Option<Todo>,
    /// Ids with an update or delete of a bulk operation in flight
    pub busy: BTreeSet<TodoId>,
    /// Ids with at least one single-item request in flight
    pub pending: BTreeSet<TodoId>,
    pub notice: Option<Notice>,
    pub creating: bool,
    pub deleting: bool,
    /// Bumped every time the new-todo input should regain focus
    pub focus_requests: u64,
}

impl Snapshot {
    pub fn is_loading(&self, id: TodoId) -> bool {
        self.pending.contains(&id) || self.busy.contains(&id)
    }

    /// The new-todo input is disabled while creating or deleting
    pub fn input_locked(&self) -> bool {
        self.creating || self.deleting
    }
}

#[derive(Default)]
struct State {
    todos: Vec<Todo>,
    placeholder: Option<Todo>,
    busy: BTreeMap<TodoId, usize>,
    pending: BTreeMap<TodoId, usize>,
    notice: Option<Notice>,
    next_notice_id: u64,
    creating: bool,
    deleting: usize,
    focus_requests: u64,
}

#[derive(Default)]
struct Listeners {
    next_id: ListenerId,
    entries: Vec<(ListenerId, Listener)>,
}

/// Shared handle to the todo list and its view status
#[derive(Clone, Default)]
pub struct TodoStore {
    state: Rc<RefCell<State>>,
    listeners: Rc<RefCell<Listeners>>,
}

impl fmt::Debug for TodoStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TodoStore")
            .field("snapshot", &self.snapshot())
            .finish()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let store = Self::new();
        store.state.borrow_mut().todos = todos;
        store
    }

    // ========================
    // Subscriptions
    // ========================

    /// Register a callback invoked after every mutation
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> ListenerId {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: ListenerId) {
        self.listeners.borrow_mut().entries.retain(|(lid, _)| *lid != id);
    }

    fn notify(&self) {
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .entries
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in listeners {
            listener();
        }
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut State) -> R) -> R {
        let result = f(&mut self.state.borrow_mut());
        self.notify();
        result
    }

    // ========================
    // List
    // ========================

    pub fn get(&self) -> Vec<Todo> {
        self.state.borrow().todos.clone()
    }

    pub fn find(&self, id: TodoId) -> Option<Todo> {
        self.state.borrow().todos.iter().find(|t| t.id == id).cloned()
    }

    /// Append a persisted todo. An id already present is replaced in place.
    pub fn add(&self, todo: Todo) {
        if self.find(todo.id).is_some() {
            debug!(id = todo.id, "add of a known id, replacing");
            let id = todo.id;
            self.replace(id, todo);
            return;
        }
        self.mutate(|s| {
            s.todos = s.todos.iter().cloned().chain(std::iter::once(todo)).collect();
        });
    }

    /// Swap the todo with `id` for `todo`. Returns false if `id` is gone.
    pub fn replace(&self, id: TodoId, todo: Todo) -> bool {
        if self.find(id).is_none() {
            debug!(id, "replace of an unknown id ignored");
            return false;
        }
        self.mutate(|s| {
            s.todos = s
                .todos
                .iter()
                .map(|t| if t.id == id { todo.clone() } else { t.clone() })
                .collect();
        });
        true
    }

    pub fn remove(&self, id: TodoId) -> bool {
        if self.find(id).is_none() {
            return false;
        }
        self.mutate(|s| {
            s.todos = s.todos.iter().filter(|t| t.id != id).cloned().collect();
        });
        true
    }

    pub fn set_all(&self, todos: Vec<Todo>) {
        self.mutate(|s| s.todos = todos);
    }

    // ========================
    // View status
    // ========================

    pub fn set_placeholder(&self, placeholder: Option<Todo>) {
        self.mutate(|s| s.placeholder = placeholder);
    }

    /// Counted per id, so overlapping batches keep an id busy until the
    /// last of them clears it
    pub fn mark_busy(&self, ids: &[TodoId]) {
        self.mutate(|s| {
            for &id in ids {
                *s.busy.entry(id).or_insert(0) += 1;
            }
        });
    }

    pub fn clear_busy(&self, ids: &[TodoId]) {
        self.mutate(|s| {
            for id in ids {
                if let Some(count) = s.busy.get_mut(id) {
                    *count -= 1;
                    if *count == 0 {
                        s.busy.remove(id);
                    }
                }
            }
        });
    }

    pub fn begin_pending(&self, id: TodoId) {
        self.mutate(|s| *s.pending.entry(id).or_insert(0) += 1);
    }

    pub fn end_pending(&self, id: TodoId) {
        self.mutate(|s| {
            if let Some(count) = s.pending.get_mut(&id) {
                *count -= 1;
                if *count == 0 {
                    s.pending.remove(&id);
                }
            }
        });
    }

    pub fn set_creating(&self, creating: bool) {
        self.mutate(|s| s.creating = creating);
    }

    pub fn begin_deleting(&self) {
        self.mutate(|s| s.deleting += 1);
    }

    pub fn end_deleting(&self) {
        self.mutate(|s| s.deleting = s.deleting.saturating_sub(1));
    }

    /// Show `message` in place of any current notice, returning its id
    pub fn show_error(&self, message: impl Into<String>) -> u64 {
        let message = message.into();
        self.mutate(|s| {
            s.next_notice_id += 1;
            let id = s.next_notice_id;
            s.notice = Some(Notice { id, message });
            id
        })
    }

    /// Hide the notice. With `Some(id)` only that notice is hidden.
    pub fn dismiss_error(&self, id: Option<u64>) {
        let current = self.state.borrow().notice.as_ref().map(|n| n.id);
        match (current, id) {
            (None, _) => {}
            (Some(shown), Some(id)) if shown != id => {}
            _ => self.mutate(|s| s.notice = None),
        }
    }

    pub fn request_focus(&self) {
        self.mutate(|s| s.focus_requests += 1);
    }

    // ========================
    // Queries
    // ========================

    pub fn is_creating(&self) -> bool {
        self.state.borrow().creating
    }

    pub fn is_loading(&self, id: TodoId) -> bool {
        let s = self.state.borrow();
        s.pending.contains_key(&id) || s.busy.contains_key(&id)
    }

    /// A bulk operation is still in flight
    pub fn is_busy(&self) -> bool {
        !self.state.borrow().busy.is_empty()
    }

    pub fn snapshot(&self) -> Snapshot {
        let s = self.state.borrow();
        Snapshot {
            todos: s.todos.clone(),
            placeholder: s.placeholder.clone(),
            busy: s.busy.keys().copied().collect(),
            pending: s.pending.keys().copied().collect(),
            notice: s.notice.clone(),
            creating: s.creating,
            deleting: s.deleting > 0,
            focus_requests: s.focus_requests,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn todo(id: TodoId, title: &str) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            completed: false,
            owner_id: 1,
        }
    }

    #[test]
    fn test_list_mutations() {
        let store = TodoStore::new();
        store.add(todo(1, "a"));
        store.add(todo(2, "b"));
        assert!(store.replace(1, todo(1, "a2")));
        assert!(!store.replace(9, todo(9, "x")));
        assert!(store.remove(2));
        assert!(!store.remove(2));

        assert_eq!(store.get(), vec![todo(1, "a2")]);
    }

    #[test]
    fn test_add_known_id_keeps_ids_unique() {
        let store = TodoStore::with_todos(vec![todo(1, "a"), todo(2, "b")]);
        store.add(todo(1, "again"));

        let titles: Vec<_> = store.get().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["again", "b"]);
    }

    #[test]
    fn test_listeners_can_read_store() {
        let store = TodoStore::new();
        let seen = Rc::new(Cell::new(0usize));
        let id = {
            let store2 = store.clone();
            let seen = Rc::clone(&seen);
            store.subscribe(move || seen.set(store2.get().len()))
        };

        store.add(todo(1, "a"));
        store.add(todo(2, "b"));
        assert_eq!(seen.get(), 2);

        store.unsubscribe(id);
        store.remove(1);
        assert_eq!(seen.get(), 2);
    }

    #[test]
    fn test_pending_is_counted() {
        let store = TodoStore::with_todos(vec![todo(1, "a")]);
        store.begin_pending(1);
        store.begin_pending(1);
        store.end_pending(1);
        assert!(store.is_loading(1));
        store.end_pending(1);
        assert!(!store.is_loading(1));

        store.mark_busy(&[1]);
        assert!(store.snapshot().is_loading(1));
        store.clear_busy(&[1]);
        assert!(!store.snapshot().is_loading(1));
    }

    #[test]
    fn test_busy_is_counted_across_batches() {
        let store = TodoStore::with_todos(vec![todo(1, "a"), todo(2, "b")]);
        store.mark_busy(&[1, 2]);
        store.mark_busy(&[1]);

        store.clear_busy(&[1, 2]);
        assert!(store.is_busy());
        assert!(store.is_loading(1));
        assert!(!store.is_loading(2));
        assert_eq!(store.snapshot().busy.into_iter().collect::<Vec<_>>(), vec![1]);

        store.clear_busy(&[1]);
        assert!(!store.is_busy());
        assert!(store.snapshot().busy.is_empty());
    }

    #[test]
    fn test_stale_dismissal_keeps_newer_notice() {
        let store = TodoStore::new();
        let first = store.show_error("Unable to add a todo");
        let second = store.show_error("Unable to delete a todo");

        store.dismiss_error(Some(first));
        assert_eq!(
            store.snapshot().notice.map(|n| n.message),
            Some("Unable to delete a todo".to_string())
        );

        store.dismiss_error(Some(second));
        assert!(store.snapshot().notice.is_none());
    }

    #[test]
    fn test_input_locked_while_deleting() {
        let store = TodoStore::new();
        store.begin_deleting();
        store.begin_deleting();
        store.end_deleting();
        assert!(store.snapshot().input_locked());
        store.end_deleting();
        assert!(!store.snapshot().input_locked());
    }
}
