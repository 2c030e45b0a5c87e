//! Todo Commands
//!
//! `TodoApi` over HTTP, scoped to the configured owner.

use async_trait::async_trait;
use serde::Serialize;
use todo_sync::{ApiError, ApiResult, NewTodo, Todo, TodoApi, TodoId, TodoPatch};

use super::{fetch_json, send};
use crate::config::ApiConfig;

// ========================
// URLs
// ========================

fn todos_url(config: &ApiConfig) -> String {
    format!("{}/todos?ownerId={}", config.base_url, config.owner_id)
}

fn todo_url(config: &ApiConfig, id: TodoId) -> String {
    format!("{}/todos/{}", config.base_url, id)
}

fn encode<T: Serialize>(body: &T) -> ApiResult<String> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(format!("encode: {}", e)))
}

// ========================
// Commands
// ========================

pub struct FetchTodoApi {
    config: ApiConfig,
}

impl FetchTodoApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl TodoApi for FetchTodoApi {
    async fn list_todos(&self) -> ApiResult<Vec<Todo>> {
        fetch_json("GET", &todos_url(&self.config), None).await
    }

    async fn create_todo(&self, todo: &NewTodo) -> ApiResult<Todo> {
        let url = format!("{}/todos", self.config.base_url);
        fetch_json("POST", &url, Some(encode(todo)?)).await
    }

    async fn update_todo(&self, id: TodoId, patch: &TodoPatch) -> ApiResult<Todo> {
        fetch_json("PATCH", &todo_url(&self.config, id), Some(encode(patch)?)).await
    }

    async fn delete_todo(&self, id: TodoId) -> ApiResult<()> {
        send("DELETE", &todo_url(&self.config, id), None).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ApiConfig {
        ApiConfig::new(Some("http://localhost:3000/"), Some("7"))
    }

    #[test]
    fn test_urls() {
        assert_eq!(todos_url(&config()), "http://localhost:3000/todos?ownerId=7");
        assert_eq!(todo_url(&config(), 12), "http://localhost:3000/todos/12");
    }

    #[test]
    fn test_create_body() {
        let body = encode(&NewTodo {
            title: "Buy milk".into(),
            completed: false,
            owner_id: 7,
        })
        .unwrap();
        assert_eq!(body, r#"{"title":"Buy milk","completed":false,"ownerId":7}"#);
    }
}
