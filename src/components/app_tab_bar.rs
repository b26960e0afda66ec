//! App Tab Bar Component
//!
//! Tab bar for switching between the catalog and the todo list.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppTab {
    Catalog,
    Todos,
}

impl AppTab {
    pub const ALL: [AppTab; 2] = [AppTab::Catalog, AppTab::Todos];

    pub fn label(&self) -> &'static str {
        match self {
            AppTab::Catalog => "Product Catalog",
            AppTab::Todos => "Todo App",
        }
    }
}

/// App Tab Bar component
#[component]
pub fn AppTabBar(
    current_tab: ReadSignal<AppTab>,
    set_current_tab: WriteSignal<AppTab>,
) -> impl IntoView {
    view! {
        <nav class="app-tab-bar">
            {AppTab::ALL.iter().map(|tab| {
                let tab = *tab;
                let tab_class = move || {
                    if current_tab.get() == tab { "app-tab active" } else { "app-tab" }
                };
                view! {
                    <button class=tab_class on:click=move |_| set_current_tab.set(tab)>
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
