//! Todo List Component

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::context::use_todo_context;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_todo_context();
    let todos = Memo::new(move |_| ctx.state.with(|s| s.todos.clone()));

    view! {
        <ul class="todo-list">
            <For
                each=move || todos.get()
                key=|todo| (todo.id, todo.title.clone(), todo.completed)
                children=move |todo| view! { <TodoItem todo=todo /> }
            />
        </ul>
    }
}
