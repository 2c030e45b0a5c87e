//! Todo Models
//!
//! Data structures exchanged with the remote todo resource.

use serde::{Deserialize, Serialize};

/// Server-assigned todo identifier
pub type TodoId = u32;

/// Id carried by the optimistic item shown while a create is in flight
pub const PLACEHOLDER_ID: TodoId = 0;

/// Todo data structure (matches the remote resource)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    #[serde(alias = "userId")]
    pub owner_id: u32,
}

impl Todo {
    /// Unsaved item rendered while its create request is pending
    pub fn placeholder(title: impl Into<String>, owner_id: u32) -> Self {
        Self {
            id: PLACEHOLDER_ID,
            title: title.into(),
            completed: false,
            owner_id,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.id == PLACEHOLDER_ID
    }
}

/// Body of a create request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub title: String,
    pub completed: bool,
    pub owner_id: u32,
}

/// Partial update; only the fields that change are sent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self { title: Some(title.into()), ..Default::default() }
    }

    pub fn completed(completed: bool) -> Self {
        Self { completed: Some(completed), ..Default::default() }
    }
}

/// Status filter held by the view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// All filters in footer order
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }

    /// Project a list through this filter, keeping order
    pub fn apply(&self, todos: &[Todo]) -> Vec<Todo> {
        todos.iter().filter(|t| self.matches(t)).cloned().collect()
    }
}

/// Number of incomplete todos ("N items left")
pub fn active_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|t| !t.completed).count()
}

/// True for a non-empty list where every todo is completed
pub fn all_completed(todos: &[Todo]) -> bool {
    !todos.is_empty() && todos.iter().all(|t| t.completed)
}

pub fn has_completed(todos: &[Todo]) -> bool {
    todos.iter().any(|t| t.completed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: TodoId, completed: bool) -> Todo {
        Todo {
            id,
            title: format!("Todo {}", id),
            completed,
            owner_id: 7,
        }
    }

    #[test]
    fn test_filter_projection_keeps_order() {
        let todos = vec![todo(1, false), todo(2, true), todo(3, false)];

        let active: Vec<_> = Filter::Active.apply(&todos).iter().map(|t| t.id).collect();
        let completed: Vec<_> = Filter::Completed.apply(&todos).iter().map(|t| t.id).collect();

        assert_eq!(active, vec![1, 3]);
        assert_eq!(completed, vec![2]);
        assert_eq!(Filter::All.apply(&todos), todos);
    }

    #[test]
    fn test_derived_counts() {
        assert!(!all_completed(&[]));
        assert!(all_completed(&[todo(1, true), todo(2, true)]));
        assert!(!all_completed(&[todo(1, true), todo(2, false)]));
        assert_eq!(active_count(&[todo(1, true), todo(2, false), todo(3, false)]), 2);
        assert!(!has_completed(&[todo(1, false)]));
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_value(todo(4, true)).unwrap();
        assert_eq!(json["ownerId"], 7);
        assert_eq!(json["completed"], true);

        // Older deployments name the owner field userId
        let decoded: Todo =
            serde_json::from_str(r#"{"id":9,"title":"x","completed":false,"userId":3}"#).unwrap();
        assert_eq!(decoded.owner_id, 3);

        let patch = serde_json::to_string(&TodoPatch::completed(true)).unwrap();
        assert_eq!(patch, r#"{"completed":true}"#);
    }

    #[test]
    fn test_placeholder() {
        let p = Todo::placeholder("Buy milk", 5);
        assert!(p.is_placeholder());
        assert!(!p.completed);
        assert_eq!(p.owner_id, 5);
    }
}
