//! Product List Component
//!
//! Card grid for the visible products.

use leptos::prelude::*;
use todo_catalog_core::domain::Product;

#[component]
pub fn ProductList(products: Memo<Vec<Product>>) -> impl IntoView {
    view! {
        <div class="product-grid">
            <For
                each=move || products.get()
                key=|product| product.id
                children=move |product| {
                    let image = product.image_url.clone().unwrap_or_default();
                    view! {
                        <div class="card">
                            <img src=image class="card-img-top" alt=product.name.clone() />
                            <div class="card-body">
                                <h5 class="card-title">{product.name.clone()}</h5>
                                <p class="card-text">{product.description.clone()}</p>
                                <p class="card-text">{format!("${}", product.price)}</p>
                                <p class="card-category">{product.category.name.clone()}</p>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
