//! Todo Page Component
//!
//! Login/signup while logged out, the todo board once a session exists.

use leptos::prelude::*;

use crate::components::{AddTodoForm, LoginForm, SearchBar, SignupForm, TodoHeader, TodoList};
use crate::context::use_todo_context;

#[component]
pub fn TodoPage() -> impl IntoView {
    let ctx = use_todo_context();
    let (show_signup, set_show_signup) = signal(false);

    // Only flips on login/logout, so forms keep their input while LoggingIn
    let logged_in = Memo::new(move |_| ctx.auth.with(|auth| auth.user().is_some()));

    view! {
        <div class="todo-app container">
            <TodoHeader />

            {move || {
                if logged_in.get() {
                    view! { <TodoBoard /> }.into_any()
                } else if show_signup.get() {
                    view! { <SignupForm on_switch=move |_| set_show_signup.set(false) /> }.into_any()
                } else {
                    view! { <LoginForm on_switch=move |_| set_show_signup.set(true) /> }.into_any()
                }
            }}
        </div>
    }
}

/// Error slot, inputs, list and empty state
#[component]
fn TodoBoard() -> impl IntoView {
    let ctx = use_todo_context();

    let error = Memo::new(move |_| ctx.state.with(|s| s.error.clone()));
    let busy = Memo::new(move |_| ctx.state.with(|s| s.is_busy()));
    let empty = Memo::new(move |_| ctx.state.with(|s| s.shows_empty_state()));

    view! {
        {move || error.get().map(|message| view! { <div class="error">{message}</div> })}

        <SearchBar />
        <AddTodoForm />

        <Show when=move || busy.get()>
            <div class="loading">"Loading..."</div>
        </Show>

        <TodoList />

        <Show when=move || empty.get()>
            <div class="empty-state">"No todos yet. Add one above!"</div>
        </Show>
    }
}
