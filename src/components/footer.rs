//! Footer Component
//!
//! Remaining count, filter links and "Clear completed".

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_sync::{active_count, has_completed, Filter};

use crate::components::classes::{filter_href, filter_link_class, items_left_label};
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Footer(filter: ReadSignal<Filter>, set_filter: WriteSignal<Filter>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let items_left = move || store.todos().with(|todos| items_left_label(active_count(todos)));
    let nothing_completed = move || store.todos().with(|todos| !has_completed(todos));

    let clear_completed = move |_| {
        let client = ctx.client();
        spawn_local(async move {
            client.clear_completed().await;
        });
    };

    view! {
        <footer class="todoapp__footer">
            <span class="todo-count">{items_left}</span>

            <nav class="filter">
                {Filter::ALL
                    .into_iter()
                    .map(|option| view! {
                        <a
                            href=filter_href(option)
                            class=move || filter_link_class(filter.get() == option)
                            on:click=move |_| set_filter.set(option)
                        >
                            {option.label()}
                        </a>
                    })
                    .collect_view()}
            </nav>

            <button
                type="button"
                class="todoapp__clear-completed"
                disabled=nothing_completed
                on:click=clear_completed
            >
                "Clear completed"
            </button>
        </footer>
    }
}
