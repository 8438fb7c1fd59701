//! Todo Card Component
//!
//! One card per to-do item: name, description, status label and a
//! done-checkbox.

use leptos::prelude::*;

use crate::models::{status_label, Todo};

/// Card for a single to-do item.
///
/// The checkbox flips a signal local to this card. It is never written
/// back to the server and is dropped when the list rebuilds on the next
/// page load - that is the documented behavior, not an oversight.
#[component]
pub fn TodoCard(todo: Todo) -> impl IntoView {
    let (done, set_done) = signal(todo.done);

    view! {
        <li class="card" class:done=move || done.get()>
            <h3>{todo.name}</h3>
            <p>{todo.description}</p>
            <div class="card-checkbox">
                <span class="card-status">{move || status_label(done.get())}</span>
                <input
                    type="checkbox"
                    class="checkbox"
                    prop:checked=move || done.get()
                    on:change=move |ev| set_done.set(event_target_checked(&ev))
                />
            </div>
        </li>
    }
}
