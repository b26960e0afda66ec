//! Search Bar Component
//!
//! Text search over todos; Reset reloads the owner's list.

use leptos::prelude::*;
use todo_catalog_core::todo::TodoAction;

use crate::context::use_todo_context;

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_todo_context();

    let search_text = Memo::new(move |_| ctx.state.with(|s| s.search_text.clone()));
    let busy = Memo::new(move |_| ctx.state.with(|s| s.is_busy()));
    let can_search = Memo::new(move |_| ctx.state.with(|s| s.can_search()));
    let searching = Memo::new(move |_| ctx.state.with(|s| s.is_searching()));

    let run_search = move || {
        if can_search.get_untracked() {
            ctx.spawn(|c| async move { c.search_current().await });
        }
    };

    view! {
        <div class="search-container">
            <input
                type="text"
                class="search-input"
                placeholder="Search todos..."
                prop:value=move || search_text.get()
                on:input=move |ev| ctx.dispatch(TodoAction::SetSearchText(event_target_value(&ev)))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        run_search();
                    }
                }
                disabled=move || busy.get()
            />
            <button
                class="search-btn"
                on:click=move |_| run_search()
                disabled=move || !can_search.get()
            >
                {move || if searching.get() { "Searching..." } else { "Search" }}
            </button>
            <button
                class="reset-btn"
                on:click=move |_| ctx.spawn(|c| async move { c.list().await })
                disabled=move || busy.get()
            >
                "Reset"
            </button>
        </div>
    }
}
