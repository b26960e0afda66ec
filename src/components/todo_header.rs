//! Todo Header Component
//!
//! Title plus greeting and logout for the current user.

use leptos::prelude::*;

use crate::context::use_todo_context;

#[component]
pub fn TodoHeader() -> impl IntoView {
    let ctx = use_todo_context();
    let user_name = Memo::new(move |_| ctx.auth.with(|auth| auth.user().map(|u| u.name.clone())));

    view! {
        <div class="header">
            <h1>"Todo App"</h1>
            {move || user_name.get().map(|name| view! {
                <div class="user-info">
                    <span class="welcome-text">{format!("Welcome, {}!", name)}</span>
                    <button class="logout-btn" on:click=move |_| ctx.logout()>"Logout"</button>
                </div>
            })}
        </div>
    }
}
