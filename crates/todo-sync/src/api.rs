//! Remote Client Interface
//!
//! Abstract access to the remote todo resource. The browser build talks HTTP
//! through `fetch`; tests use an in-memory implementation.

use std::rc::Rc;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::model::{NewTodo, Todo, TodoId, TodoPatch};

pub type ApiResult<T> = Result<T, ApiError>;

/// CRUD operations against the owner-scoped todo collection.
///
/// Each call is one request/response round trip. Implementations never retry.
/// Futures are not `Send`: the client runs on a single-threaded event loop.
#[async_trait(?Send)]
pub trait TodoApi {
    /// List every todo of the configured owner
    async fn list_todos(&self) -> ApiResult<Vec<Todo>>;

    /// Create a todo, returning the server representation with its real id
    async fn create_todo(&self, todo: &NewTodo) -> ApiResult<Todo>;

    /// Apply a partial update
    async fn update_todo(&self, id: TodoId, patch: &TodoPatch) -> ApiResult<Todo>;

    async fn delete_todo(&self, id: TodoId) -> ApiResult<()>;
}

#[async_trait(?Send)]
impl<T: TodoApi + ?Sized> TodoApi for Rc<T> {
    async fn list_todos(&self) -> ApiResult<Vec<Todo>> {
        (**self).list_todos().await
    }

    async fn create_todo(&self, todo: &NewTodo) -> ApiResult<Todo> {
        (**self).create_todo(todo).await
    }

    async fn update_todo(&self, id: TodoId, patch: &TodoPatch) -> ApiResult<Todo> {
        (**self).update_todo(id, patch).await
    }

    async fn delete_todo(&self, id: TodoId) -> ApiResult<()> {
        (**self).delete_todo(id).await
    }
}
