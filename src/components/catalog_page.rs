//! Catalog Page Component
//!
//! Loads products and categories, then renders the derived view.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_catalog_core::api::HttpCatalogApi;
use todo_catalog_core::catalog::{derive_view, load_catalog, LOAD_FAILED};
use todo_catalog_core::ClientConfig;

use crate::components::{CatalogToolbar, ProductList};
use crate::store::{store_query, store_set_catalog, use_catalog_store, CatalogStateStoreFields};

#[component]
pub fn CatalogPage() -> impl IntoView {
    let store = use_catalog_store();
    let config = expect_context::<ClientConfig>();

    // Load on mount
    Effect::new(move |_| {
        let api = HttpCatalogApi::new(&config);
        store.loading().set(true);
        spawn_local(async move {
            match load_catalog(&api).await {
                Ok(catalog) => store_set_catalog(&store, catalog),
                Err(e) => {
                    log::error!("{}: {}", LOAD_FAILED, e);
                    store.error().set(Some(LOAD_FAILED.to_string()));
                }
            }
            store.loading().set(false);
        });
    });

    // Recomputed whenever products or any filter input changes
    let visible = Memo::new(move |_| {
        let query = store_query(&store);
        derive_view(&store.products().read(), &query)
    });

    view! {
        <div class="catalog container">
            <h1>"Product Catalog"</h1>

            {move || store.error().get().map(|message| view! {
                <div class="error">{message}</div>
            })}

            <CatalogToolbar />

            <Show when=move || store.loading().get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <Show
                when=move || visible.with(|products| !products.is_empty())
                fallback=|| view! { <p class="empty-state">"No Products found"</p> }
            >
                <ProductList products=visible />
            </Show>
        </div>
    }
}
