//! Todo Pager App
//!
//! Root component: owns the pager state and drives fetches through the
//! transport adapter.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{PagerNav, TodoList};
use crate::http::HttpClient;
use crate::models::TodoPage;
use crate::state::PagerState;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(PagerState::default());

    // Each load bumps this sequence number; a response may only land
    // while its number is still the newest one issued. Overlapping
    // requests are allowed, stale responses are dropped.
    let load_seq = StoredValue::new(0u64);

    let load = move |page: Option<u32>| {
        load_seq.update_value(|seq| *seq += 1);
        let seq = load_seq.get_value();
        spawn_local(async move {
            let client = HttpClient::default();
            // With no page given the parameter is omitted entirely and
            // the server picks its default page.
            let queries: Vec<(&str, String)> = match page {
                Some(p) => vec![("page", p.to_string())],
                None => Vec::new(),
            };
            match client.get_json::<TodoPage>("/todos", &queries).await {
                Ok(result) => {
                    if load_seq.get_value() != seq {
                        web_sys::console::log_1(
                            &format!("[PAGER] Dropping stale response for page {:?}", page).into(),
                        );
                        return;
                    }
                    web_sys::console::log_1(
                        &format!(
                            "[PAGER] Loaded page {}/{} ({} todos)",
                            result.current_page,
                            result.total_pages,
                            result.todos.len()
                        )
                        .into(),
                    );
                    store.write().apply(result);
                }
                Err(err) => {
                    // The failed transition does not complete: state and
                    // DOM stay on the last good page.
                    web_sys::console::error_1(&format!("[PAGER] Fetch failed: {}", err).into());
                }
            }
        });
    };

    // Initial load on mount
    Effect::new(move |_| {
        load(None);
    });

    let on_previous = Callback::new(move |_: ()| {
        let state = store.read_untracked();
        if state.has_previous() {
            load(Some(state.current_page - 1));
        }
    });

    let on_next = Callback::new(move |_: ()| {
        let state = store.read_untracked();
        if state.has_next() {
            load(Some(state.current_page + 1));
        }
    });

    view! {
        <main class="todo-pager">
            <h1>"To-Do List"</h1>
            <PagerNav store=store on_previous=on_previous on_next=on_next />
            <TodoList store=store />
        </main>
    }
}
