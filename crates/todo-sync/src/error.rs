//! Error Types
//!
//! Failures surfaced by the remote client and by the todo operations.

use thiserror::Error;

use crate::model::TodoId;

/// A failed round trip with the remote resource
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {status}")]
    Status { status: u16 },
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Remote operation kinds, used to pick the user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Add,
    Update,
    Delete,
}

impl Operation {
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::Load => "Unable to load todos",
            Operation::Add => "Unable to add a todo",
            Operation::Update => "Unable to update a todo",
            Operation::Delete => "Unable to delete a todo",
        }
    }
}

/// Errors returned by `TodoClient` operations.
///
/// `Display` is the human-readable text shown in the notice banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("Title should not be empty")]
    EmptyTitle,
    #[error("A todo is already being added")]
    CreationPending,
    #[error("Todo {0} is not in the list")]
    UnknownTodo(TodoId),
    #[error("{}", .operation.failure_message())]
    Remote {
        operation: Operation,
        #[source]
        source: ApiError,
    },
}

impl TodoError {
    pub fn remote(operation: Operation, source: ApiError) -> Self {
        TodoError::Remote { operation, source }
    }

    /// True for failures that never reached the network
    pub fn is_validation(&self) -> bool {
        !matches!(self, TodoError::Remote { .. })
    }
}

pub type TodoResult<T> = Result<T, TodoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_displays_user_message() {
        let err = TodoError::remote(Operation::Delete, ApiError::Status { status: 500 });
        assert_eq!(err.to_string(), "Unable to delete a todo");
        assert!(!err.is_validation());

        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("server responded with status 500"));
    }

    #[test]
    fn test_validation_message() {
        assert_eq!(TodoError::EmptyTitle.to_string(), "Title should not be empty");
        assert!(TodoError::EmptyTitle.is_validation());
    }
}
