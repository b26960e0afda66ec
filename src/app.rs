//! Todo & Catalog Frontend App
//!
//! Shell with a tab bar switching between the two applications.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_catalog_core::ClientConfig;

use crate::components::{AppTab, AppTabBar, CatalogPage, TodoPage};
use crate::context::TodoContext;
use crate::store::CatalogState;

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_build_env();
    log::info!("todo api at {}, catalog api at {}", config.todo_base_url, config.catalog_base_url);

    // Provide state to all children; it outlives tab switches
    let todo_ctx = TodoContext::new(&config);
    provide_context(config);
    provide_context(Store::new(CatalogState::default()));
    provide_context(todo_ctx);

    // A session from an earlier visit skips the login form
    todo_ctx.restore();

    let (current_tab, set_current_tab) = signal(AppTab::Todos);

    view! {
        <div class="app-layout">
            <AppTabBar current_tab=current_tab set_current_tab=set_current_tab />

            <main class="main-content">
                {move || match current_tab.get() {
                    AppTab::Catalog => view! { <CatalogPage /> }.into_any(),
                    AppTab::Todos => view! { <TodoPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
