//! Catalog Toolbar Component
//!
//! Category selector, search input and price sort selector.

use leptos::prelude::*;
use todo_catalog_core::catalog::{parse_category, SortOrder};

use crate::store::{use_catalog_store, CatalogStateStoreFields};

#[component]
pub fn CatalogToolbar() -> impl IntoView {
    let store = use_catalog_store();

    view! {
        <div class="catalog-toolbar">
            <select
                class="category-filter"
                on:change=move |ev| store.selected_category().set(parse_category(&event_target_value(&ev)))
            >
                <option value="">"All Categories"</option>
                <For
                    each=move || store.categories().get()
                    key=|category| category.id
                    children=move |category| view! {
                        <option value={category.id.to_string()}>{category.name}</option>
                    }
                />
            </select>

            <input
                type="text"
                class="search-input"
                placeholder="Search for products"
                prop:value=move || store.search_term().get()
                on:input=move |ev| store.search_term().set(event_target_value(&ev))
            />

            <select
                class="sort-select"
                on:change=move |ev| store.sort_order().set(SortOrder::parse(&event_target_value(&ev)))
            >
                <option value={SortOrder::Ascending.as_str()}>"Sort By Price: Low to High"</option>
                <option value={SortOrder::Descending.as_str()}>"Sort By Price: High to Low"</option>
            </select>
        </div>
    }
}
