//! Header Component
//!
//! Toggle-all button and the new-todo form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_sync::all_completed;

use crate::components::classes::toggle_all_class;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (title, set_title) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = title.get_untracked();
        let client = ctx.client();
        spawn_local(async move {
            // On failure the typed title stays for another try
            if client.add(&text).await.is_ok() {
                set_title.set(String::new());
            }
        });
    };

    let toggle_all = move |_| {
        let client = ctx.client();
        // A repeated click while the batch runs would only resend it
        if client.store().is_busy() {
            return;
        }
        spawn_local(async move {
            client.toggle_all().await;
        });
    };

    let has_todos = move || store.todos().with(|todos| !todos.is_empty());
    let all_done = move || store.todos().with(|todos| all_completed(todos));

    view! {
        <header class="todoapp__header">
            <Show when=has_todos>
                <button
                    type="button"
                    class=move || toggle_all_class(all_done())
                    on:click=toggle_all
                />
            </Show>

            <form on:submit=create_todo>
                <input
                    node_ref=ctx.new_todo_input
                    type="text"
                    class="todoapp__new-todo"
                    placeholder="What needs to be done?"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                    disabled=move || store.input_locked().get()
                />
            </form>
        </header>
    }
}
