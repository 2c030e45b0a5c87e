//! Todo Item Component
//!
//! A single row: status checkbox, title with double-click editing, delete
//! button and the loader overlay.

use gloo_timers::future::TimeoutFuture;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_sync::{Todo, TodoEditor};

use crate::components::classes::{loader_class, todo_class};
use crate::context::use_app_context;
use crate::store::{store_is_loading, use_app_store};

#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = todo.id;
    let completed = todo.completed;
    let title = StoredValue::new(todo.title);

    let editor = RwSignal::new(TodoEditor::new());
    // Only flips on enter/leave, not on every keystroke
    let editing = Memo::new(move |_| editor.with(|e| e.is_editing()));

    let checkbox: NodeRef<html::Input> = NodeRef::new();
    let title_field: NodeRef<html::Input> = NodeRef::new();

    // Focus the edit field once it has been rendered
    let focus_title_field = move || {
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            if let Some(input) = title_field.get_untracked() {
                let _ = input.focus();
            }
        });
    };

    let toggle = move |_| {
        let client = ctx.client();
        spawn_local(async move {
            if client.toggle(id).await.is_err() {
                // Undo the browser's own flip
                if let Some(input) = checkbox.get_untracked() {
                    input.set_checked(completed);
                }
            }
        });
    };

    let delete = move |_| {
        let client = ctx.client();
        spawn_local(async move {
            let _ = client.delete(id).await;
        });
    };

    let start_editing = move |_| {
        editor.update(|e| e.begin(&title.get_value()));
        focus_title_field();
    };

    let save = move || {
        let mut draft = None;
        editor.update(|e| draft = e.submit());
        let Some(draft) = draft else { return };

        let client = ctx.client();
        spawn_local(async move {
            let result = client.rename(id, &draft).await;
            // A successful rename re-keys the row, disposing this editor
            editor.try_update(|e| e.finish(&result));
            if result.is_err() {
                focus_title_field();
            }
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        save();
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            editor.update(|e| e.cancel());
        }
    };

    view! {
        <div class=todo_class(completed)>
            <label class="todo__status-label">
                <input
                    node_ref=checkbox
                    type="checkbox"
                    class="todo__status"
                    checked=completed
                    on:change=toggle
                />
            </label>

            {move || if editing.get() {
                view! {
                    <form on:submit=on_submit>
                        <input
                            node_ref=title_field
                            type="text"
                            class="todo__title-field"
                            placeholder="Empty todo will be deleted"
                            prop:value=move || editor.with(|e| e.draft().to_string())
                            readonly=move || editor.with(|e| e.is_saving())
                            on:input=move |ev| editor.update(|e| e.set_draft(event_target_value(&ev)))
                            on:blur=move |_| save()
                            on:keydown=on_keydown
                        />
                    </form>
                }.into_any()
            } else {
                view! {
                    <span class="todo__title" on:dblclick=start_editing>
                        {title.get_value()}
                    </span>
                    <button type="button" class="todo__remove" on:click=delete>
                        "×"
                    </button>
                }.into_any()
            }}

            <div class=move || loader_class(store_is_loading(&store, id))>
                <div class="modal-background has-background-white-ter" />
                <div class="loader" />
            </div>
        </div>
    }
}

/// The optimistic row shown while a create request is in flight
#[component]
pub fn PlaceholderItem(todo: Todo) -> impl IntoView {
    view! {
        <div class=todo_class(todo.completed)>
            <label class="todo__status-label">
                <input type="checkbox" class="todo__status" checked=todo.completed disabled=true />
            </label>
            <span class="todo__title">{todo.title}</span>
            <button type="button" class="todo__remove" disabled=true>
                "×"
            </button>
            <div class=loader_class(true)>
                <div class="modal-background has-background-white-ter" />
                <div class="loader" />
            </div>
        </div>
    }
}
