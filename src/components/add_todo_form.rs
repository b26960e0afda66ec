//! Add Todo Form Component
//!
//! Single-line form creating a todo for the logged-in user.

use leptos::prelude::*;
use todo_catalog_core::todo::TodoAction;

use crate::context::use_todo_context;

#[component]
pub fn AddTodoForm() -> impl IntoView {
    let ctx = use_todo_context();

    let new_title = Memo::new(move |_| ctx.state.with(|s| s.new_title.clone()));
    let busy = Memo::new(move |_| ctx.state.with(|s| s.is_busy()));
    let can_add = Memo::new(move |_| ctx.state.with(|s| s.can_add()));

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if can_add.get_untracked() {
            ctx.spawn(|c| async move { c.create_current().await });
        }
    };

    view! {
        <form class="add-todo-container" on:submit=create_todo>
            <input
                type="text"
                class="add-todo-input"
                placeholder="What needs to be done?"
                prop:value=move || new_title.get()
                on:input=move |ev| ctx.dispatch(TodoAction::SetNewTitle(event_target_value(&ev)))
                disabled=move || busy.get()
            />
            <button type="submit" class="add-btn" disabled=move || !can_add.get()>
                "Add Todo"
            </button>
        </form>
    }
}
