//! Todo List Component
//!
//! Filtered rows followed by the optimistic placeholder, if any.

use leptos::prelude::*;
use todo_sync::Filter;

use crate::components::todo_item::{PlaceholderItem, TodoItem};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoList(filter: ReadSignal<Filter>) -> impl IntoView {
    let store = use_app_store();

    let visible = move || store.todos().with(|todos| filter.get().apply(todos));

    view! {
        <section class="todoapp__main">
            <For
                each=visible
                // Re-render a row when its title or status changes
                key=|todo| (todo.id, todo.title.clone(), todo.completed)
                children=move |todo| view! { <TodoItem todo=todo /> }
            />
            {move || store.placeholder().get().map(|todo| view! { <PlaceholderItem todo=todo /> })}
        </section>
    }
}
