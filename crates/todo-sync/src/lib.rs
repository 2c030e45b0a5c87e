//! Todo Sync
//!
//! Client-side state synchronisation for a remote todo list:
//! - model: todos, patches and the status filter
//! - api: the remote client trait
//! - store: in-memory list and view status
//! - client: single-item and bulk operations
//! - edit: inline title editor state machine

mod api;
mod batch;
mod client;
mod edit;
mod error;
mod fence;
mod model;
mod store;


pub use api::{ApiResult, TodoApi};
pub use batch::{settle_all, BatchReport};
pub use client::{RenameOutcome, TodoClient};
pub use edit::{EditState, TodoEditor};
pub use error::{ApiError, Operation, TodoError, TodoResult};
pub use fence::RequestFence;
pub use model::{
    active_count, all_completed, has_completed, Filter, NewTodo, Todo, TodoId, TodoPatch,
    PLACEHOLDER_ID,
};
pub use store::{ListenerId, Notice, Snapshot, TodoStore};
