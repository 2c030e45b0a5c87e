//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::html;
use leptos::prelude::*;
use todo_sync::TodoClient;

use crate::commands::FetchTodoApi;

pub type Client = TodoClient<FetchTodoApi>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The client is `Rc`-based, so it lives in local arena storage
    client: StoredValue<Client, LocalStorage>,
    /// The new-todo input, refocused after most operations
    pub new_todo_input: NodeRef<html::Input>,
}

impl AppContext {
    pub fn new(client: Client) -> Self {
        Self {
            client: StoredValue::new_local(client),
            new_todo_input: NodeRef::new(),
        }
    }

    /// A handle to the client, to move into a spawned task
    pub fn client(&self) -> Client {
        self.client.get_value()
    }

    pub fn focus_input(&self) {
        if let Some(input) = self.new_todo_input.get_untracked() {
            let _ = input.focus();
        }
    }

    /// Hide the notice; with `Some(id)` only if it is still the one shown
    pub fn dismiss_error(&self, id: Option<u64>) {
        self.client.with_value(|client| client.store().dismiss_error(id));
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
