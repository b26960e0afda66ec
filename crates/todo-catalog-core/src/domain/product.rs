//! Product and Category Entities
//!
//! Catalog records served by the product API.

use serde::{Deserialize, Serialize};

pub type ProductId = i64;
pub type CategoryId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: Category,
    #[serde(default, rename = "imageURL")]
    pub image_url: Option<String>,
}
