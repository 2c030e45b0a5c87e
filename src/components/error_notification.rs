//! Error Notification Component

use leptos::prelude::*;

use crate::components::classes::notification_class;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

/// Banner for the current notice; hidden (not removed) when there is none
#[component]
pub fn ErrorNotification() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let hidden = move || store.notice().with(|notice| notice.is_none());
    let message = move || {
        store
            .notice()
            .with(|notice| notice.as_ref().map(|n| n.message.clone()).unwrap_or_default())
    };

    view! {
        <div class=move || notification_class(hidden())>
            <button type="button" class="delete" on:click=move |_| ctx.dismiss_error(None) />
            {message}
        </div>
    }
}
