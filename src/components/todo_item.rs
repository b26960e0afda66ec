//! Todo Item Component
//!
//! One row of the list: completion checkbox, inline title editor and
//! delete button.

use leptos::prelude::*;
use todo_catalog_core::domain::Todo;
use todo_catalog_core::todo::TodoAction;

use crate::context::use_todo_context;

#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let ctx = use_todo_context();
    let id = todo.id;
    let completed = todo.completed;
    let title = StoredValue::new(todo.title.clone());

    let editing = Memo::new(move |_| ctx.state.with(|s| s.editing_id() == Some(id)));
    let edit_text = Memo::new(move |_| {
        ctx.state
            .with(|s| s.edit.as_ref().map(|e| e.text.clone()).unwrap_or_default())
    });
    let loading = Memo::new(move |_| ctx.state.with(|s| s.is_loading()));
    let can_save = Memo::new(move |_| ctx.state.with(|s| s.can_save_edit()));

    let save = move || {
        if can_save.get_untracked() {
            ctx.spawn(|c| async move { c.save_edit().await });
        }
    };

    view! {
        <li class="todo-item" class:completed=move || completed>
            <input
                type="checkbox"
                class="todo-checkbox"
                prop:checked=completed
                on:change=move |_| ctx.spawn(move |c| async move { c.toggle_complete(id, completed).await })
                disabled=move || loading.get()
            />

            {move || if editing.get() {
                view! {
                    <div class="edit-container">
                        <input
                            type="text"
                            class="edit-input"
                            prop:value=move || edit_text.get()
                            on:input=move |ev| ctx.dispatch(TodoAction::SetEditText(event_target_value(&ev)))
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                match ev.key().as_str() {
                                    "Enter" => save(),
                                    "Escape" => ctx.dispatch(TodoAction::CancelEdit),
                                    _ => {}
                                }
                            }
                            disabled=move || loading.get()
                        />
                        <button class="save-btn" on:click=move |_| save() disabled=move || !can_save.get()>
                            "Save"
                        </button>
                        <button
                            class="cancel-btn"
                            on:click=move |_| ctx.dispatch(TodoAction::CancelEdit)
                            disabled=move || loading.get()
                        >
                            "Cancel"
                        </button>
                    </div>
                }.into_any()
            } else {
                view! {
                    <div class="todo-content">
                        <span class="todo-text">{title.get_value()}</span>
                        <div class="todo-actions">
                            <button
                                class="edit-btn"
                                on:click=move |_| ctx.dispatch(TodoAction::StartEdit {
                                    id,
                                    title: title.get_value(),
                                })
                                disabled=move || loading.get()
                            >
                                "Edit"
                            </button>
                            <button
                                class="delete-btn"
                                on:click=move |_| ctx.spawn(move |c| async move { c.delete(id).await })
                                disabled=move || loading.get()
                            >
                                "Delete"
                            </button>
                        </div>
                    </div>
                }.into_any()
            }}
        </li>
    }
}
