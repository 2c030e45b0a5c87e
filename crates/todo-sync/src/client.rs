//! Todo Client
//!
//! Coordinates remote operations with the [`TodoStore`]. Single-item flows
//! (add, toggle, rename, delete) and the bulk flows (toggle-all,
//! clear-completed) all follow the same policy: apply each server response to
//! the store as soon as it arrives, and on failure log, show the notice and
//! return the error.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::api::TodoApi;
use crate::batch::{settle_all, BatchReport};
use crate::error::{ApiError, Operation, TodoError, TodoResult};
use crate::fence::RequestFence;
use crate::model::{all_completed, NewTodo, Todo, TodoId, TodoPatch};
use crate::store::TodoStore;

/// Result of submitting an edited title
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// Trimmed title equals the current one; nothing was sent
    Unchanged,
    Renamed(Todo),
    /// Title was emptied and the todo was deleted
    Deleted,
}

/// Entry point for every todo operation.
///
/// Cheap to clone; clones share the api, the store and the request fence.
pub struct TodoClient<A> {
    api: Rc<A>,
    store: TodoStore,
    owner_id: u32,
    fence: Rc<RefCell<RequestFence>>,
}

impl<A> Clone for TodoClient<A> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            store: self.store.clone(),
            owner_id: self.owner_id,
            fence: Rc::clone(&self.fence),
        }
    }
}

impl<A: TodoApi> TodoClient<A> {
    pub fn new(api: A, store: TodoStore, owner_id: u32) -> Self {
        Self {
            api: Rc::new(api),
            store,
            owner_id,
            fence: Rc::new(RefCell::new(RequestFence::new())),
        }
    }

    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    pub fn owner_id(&self) -> u32 {
        self.owner_id
    }

    #[cfg(test)]
    pub(crate) fn fenced_todos(&self) -> usize {
        self.fence.borrow().len()
    }

    /// Log the failure and surface it as the global notice
    fn report(&self, err: TodoError) -> TodoError {
        match &err {
            TodoError::Remote { operation, source } => {
                warn!(?operation, error = %source, "remote operation failed");
            }
            other => warn!(error = %other, "operation rejected"),
        }
        self.store.show_error(err.to_string());
        err
    }

    fn lookup(&self, id: TodoId) -> TodoResult<Todo> {
        self.store.find(id).ok_or(TodoError::UnknownTodo(id))
    }

    /// Send an update and apply the response unless a newer one already landed
    async fn send_update(&self, id: TodoId, patch: TodoPatch) -> Result<Todo, ApiError> {
        let seq = self.fence.borrow_mut().issue();
        let todo = self.api.update_todo(id, &patch).await?;
        if self.store.find(id).is_none() {
            // Deleted while the update was in flight
            debug!(id, seq, "dropping update response for a removed todo");
            return Ok(todo);
        }
        let fresh = self.fence.borrow_mut().accept(id, seq);
        if fresh {
            self.store.replace(id, todo.clone());
        } else {
            debug!(id, seq, "dropping stale update response");
        }
        Ok(todo)
    }

    async fn send_delete(&self, id: TodoId) -> Result<(), ApiError> {
        self.api.delete_todo(id).await?;
        self.store.remove(id);
        self.fence.borrow_mut().forget(id);
        Ok(())
    }

    // ========================
    // Single-item flows
    // ========================

    /// Replace the list with the owner's todos
    pub async fn load(&self) -> TodoResult<usize> {
        match self.api.list_todos().await {
            Ok(todos) => {
                let count = todos.len();
                info!(count, owner = self.owner_id, "loaded todos");
                self.store.set_all(todos);
                Ok(count)
            }
            Err(e) => Err(self.report(TodoError::remote(Operation::Load, e))),
        }
    }

    /// Create a todo, showing a placeholder until the server answers
    pub async fn add(&self, title: &str) -> TodoResult<Todo> {
        let title = title.trim();
        if title.is_empty() {
            return Err(self.report(TodoError::EmptyTitle));
        }
        if self.store.is_creating() {
            debug!("add ignored, a create is already pending");
            return Err(TodoError::CreationPending);
        }

        self.store.dismiss_error(None);
        self.store.set_creating(true);
        self.store.set_placeholder(Some(Todo::placeholder(title, self.owner_id)));

        let request = NewTodo {
            title: title.to_string(),
            completed: false,
            owner_id: self.owner_id,
        };
        let response = self.api.create_todo(&request).await;

        self.store.set_placeholder(None);
        let result = match response {
            Ok(todo) => {
                debug!(id = todo.id, "created todo");
                self.store.add(todo.clone());
                Ok(todo)
            }
            Err(e) => Err(self.report(TodoError::remote(Operation::Add, e))),
        };
        self.store.set_creating(false);
        self.store.request_focus();
        result
    }

    /// Flip the completed flag of one todo
    pub async fn toggle(&self, id: TodoId) -> TodoResult<Todo> {
        let current = self.lookup(id)?;
        self.store.begin_pending(id);
        let result = self.send_update(id, TodoPatch::completed(!current.completed)).await;
        self.store.end_pending(id);
        result.map_err(|e| self.report(TodoError::remote(Operation::Update, e)))
    }

    /// Submit an edited title. An empty title deletes the todo.
    pub async fn rename(&self, id: TodoId, draft: &str) -> TodoResult<RenameOutcome> {
        let current = self.lookup(id)?;
        let title = draft.trim();
        if title == current.title.trim() {
            return Ok(RenameOutcome::Unchanged);
        }

        if title.is_empty() {
            self.delete_tracked(id).await?;
            self.store.request_focus();
            return Ok(RenameOutcome::Deleted);
        }

        self.store.begin_pending(id);
        let result = self.send_update(id, TodoPatch::title(title)).await;
        self.store.end_pending(id);
        result
            .map(RenameOutcome::Renamed)
            .map_err(|e| self.report(TodoError::remote(Operation::Update, e)))
    }

    /// Delete one todo (the row's delete button). The new-todo input gets
    /// focus back whatever the outcome.
    pub async fn delete(&self, id: TodoId) -> TodoResult<()> {
        self.lookup(id)?;
        let result = self.delete_tracked(id).await;
        self.store.request_focus();
        result
    }

    async fn delete_tracked(&self, id: TodoId) -> TodoResult<()> {
        self.store.begin_pending(id);
        self.store.begin_deleting();
        let result = self.send_delete(id).await;
        self.store.end_pending(id);
        self.store.end_deleting();
        result.map_err(|e| self.report(TodoError::remote(Operation::Delete, e)))
    }

    // ========================
    // Bulk flows
    // ========================

    /// Mark every todo completed, or every todo active when all are completed.
    ///
    /// Todos already in the target state are skipped. The affected ids stay in
    /// the busy set until the whole batch has settled.
    pub async fn toggle_all(&self) -> BatchReport {
        let todos = self.store.get();
        let completed = !all_completed(&todos);
        let ids: Vec<TodoId> = todos
            .iter()
            .filter(|t| t.completed != completed)
            .map(|t| t.id)
            .collect();
        let skipped = todos.len() - ids.len();
        if ids.is_empty() {
            return BatchReport { skipped, ..Default::default() };
        }

        self.store.mark_busy(&ids);
        let outcomes = settle_all(ids.iter().map(|&id| async move {
            let outcome = self
                .send_update(id, TodoPatch::completed(completed))
                .await
                .map(|_| ());
            if let Err(e) = &outcome {
                self.report(TodoError::remote(Operation::Update, e.clone()));
            }
            (id, outcome)
        }))
        .await;
        self.store.clear_busy(&ids);

        let report = BatchReport::from_outcomes(outcomes, skipped);
        info!(
            completed,
            succeeded = report.succeeded.len(),
            failed = report.failed.len(),
            skipped,
            "toggle-all settled"
        );
        report
    }

    /// Delete every completed todo. Each success is removed right away; a
    /// failure leaves its todo in place.
    pub async fn clear_completed(&self) -> BatchReport {
        let ids: Vec<TodoId> = self
            .store
            .get()
            .iter()
            .filter(|t| t.completed)
            .map(|t| t.id)
            .collect();
        if ids.is_empty() {
            return BatchReport::default();
        }

        self.store.mark_busy(&ids);
        self.store.begin_deleting();
        let outcomes = settle_all(ids.iter().map(|&id| async move {
            let outcome = self.send_delete(id).await;
            if let Err(e) = &outcome {
                self.report(TodoError::remote(Operation::Delete, e.clone()));
            }
            (id, outcome)
        }))
        .await;
        self.store.clear_busy(&ids);
        self.store.end_deleting();
        self.store.request_focus();

        let report = BatchReport::from_outcomes(outcomes, 0);
        info!(
            succeeded = report.succeeded.len(),
            failed = report.failed.len(),
            "clear-completed settled"
        );
        report
    }
}
