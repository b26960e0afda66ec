//! Catalog State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_catalog_core::catalog::{Catalog, CatalogQuery, SortOrder};
use todo_catalog_core::domain::{Category, CategoryId, Product};

/// Catalog page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct CatalogState {
    /// Everything the product API returned
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    /// None = all categories
    pub selected_category: Option<CategoryId>,
    pub search_term: String,
    pub sort_order: SortOrder,
    pub loading: bool,
    pub error: Option<String>,
}

/// Type alias for the store
pub type CatalogStore = Store<CatalogState>;

/// Get the catalog store from context
pub fn use_catalog_store() -> CatalogStore {
    expect_context::<CatalogStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Current filter inputs, tracked
pub fn store_query(store: &CatalogStore) -> CatalogQuery {
    CatalogQuery {
        selected_category: store.selected_category().get(),
        search_term: store.search_term().get(),
        sort_order: store.sort_order().get(),
    }
}

/// Replace products and categories after a successful load
pub fn store_set_catalog(store: &CatalogStore, catalog: Catalog) {
    store.products().set(catalog.products);
    store.categories().set(catalog.categories);
    store.error().set(None);
}
