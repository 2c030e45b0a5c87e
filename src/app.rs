//! Todos Frontend App
//!
//! Wires the sync core to the view: the core's store is mirrored into the
//! reactive store, todos are loaded on mount, notices auto-dismiss and the
//! new-todo input is refocused on request.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use todo_sync::{Filter, TodoClient, TodoStore};

use crate::commands::FetchTodoApi;
use crate::components::{ErrorNotification, Footer, Header, TodoList, UserWarning};
use crate::config::{ApiConfig, NOTICE_TIMEOUT_MS};
use crate::context::AppContext;
use crate::store::{store_sync, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_build_env();
    if !config.is_configured() {
        tracing::warn!("TODOS_OWNER_ID not set, nothing to show");
        return view! { <UserWarning /> }.into_any();
    }
    tracing::info!(api = %config.base_url, owner = config.owner_id, "starting");

    let core = TodoStore::new();
    let owner_id = config.owner_id;
    let client = TodoClient::new(FetchTodoApi::new(config), core.clone(), owner_id);

    let store = Store::new(AppState::default());
    provide_context(store);
    let ctx = AppContext::new(client);
    provide_context(ctx);

    // Mirror every core mutation into the view store
    core.subscribe({
        let core = core.clone();
        move || store_sync(&store, core.snapshot())
    });

    let (filter, set_filter) = signal(Filter::All);

    // Load todos on mount
    Effect::new(move |_| {
        let client = ctx.client();
        spawn_local(async move {
            let _ = client.load().await;
        });
    });

    // Auto-dismiss each notice; a newer notice restarts the clock
    Effect::new(move |_| {
        if let Some(notice) = store.notice().get() {
            spawn_local(async move {
                TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
                ctx.dismiss_error(Some(notice.id));
            });
        }
    });

    // Refocus the new-todo input on the next tick, once it is enabled again
    Effect::new(move |_| {
        store.focus_requests().track();
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            ctx.focus_input();
        });
    });

    let has_todos = move || store.todos().with(|todos| !todos.is_empty());

    view! {
        <div class="todoapp">
            <h1 class="todoapp__title">"todos"</h1>

            <div class="todoapp__content">
                <Header />
                <TodoList filter=filter />
                <Show when=has_todos>
                    <Footer filter=filter set_filter=set_filter />
                </Show>
            </div>

            <ErrorNotification />
        </div>
    }
    .into_any()
}
