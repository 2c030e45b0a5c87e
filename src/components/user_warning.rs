//! User Warning Component

use leptos::prelude::*;

/// Shown instead of the app when no owner id was configured at build time
#[component]
pub fn UserWarning() -> impl IntoView {
    view! {
        <section class="section">
            <p class="box is-size-3">
                "Please build with "
                <code>"TODOS_OWNER_ID"</code>
                " set to the user whose todos should be shown."
            </p>
        </section>
    }
}
