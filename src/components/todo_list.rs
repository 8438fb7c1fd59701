//! Todo List Component
//!
//! Projects the current item set into cards.

use leptos::prelude::*;

use crate::components::TodoCard;
use crate::state::{PagerStateStoreFields, PagerStore};

/// List container for the current page's cards.
///
/// Deliberately not keyed: every replacement of the item set tears down
/// all cards and rebuilds them in sequence order, which also resets any
/// local checkbox toggles from the previous page.
#[component]
pub fn TodoList(store: PagerStore) -> impl IntoView {
    view! {
        <ul id="list-todo" class="todo-list">
            {move || {
                store
                    .todos()
                    .get()
                    .into_iter()
                    .map(|todo| view! { <TodoCard todo=todo /> })
                    .collect_view()
            }}
        </ul>
    }
}
