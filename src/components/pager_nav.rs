//! Pager Navigation Component
//!
//! Previous/next buttons plus the current-page display.

use leptos::prelude::*;

use crate::state::{PagerStateStoreFields, PagerStore};

/// Navigation controls. Each button is disabled at its pagination
/// boundary, so the callbacks can only fire for a valid target page.
#[component]
pub fn PagerNav(
    store: PagerStore,
    on_previous: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    let prev_disabled = move || !store.read().has_previous();
    let next_disabled = move || !store.read().has_next();

    view! {
        <nav class="pager-nav">
            <button
                id="btn-prev"
                prop:disabled=prev_disabled
                on:click=move |_| on_previous.run(())
            >
                "Previous"
            </button>
            <span id="current-page">{move || store.current_page().get()}</span>
            <button
                id="btn-next"
                prop:disabled=next_disabled
                on:click=move |_| on_next.run(())
            >
                "Next"
            </button>
        </nav>
    }
}
