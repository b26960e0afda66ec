//! Catalog Derived View
//!
//! Computes the visible product list from the loaded products and the
//! current filter inputs. Pure: the input slice is never touched.

use serde::{Deserialize, Serialize};

use crate::api::CatalogApi;
use crate::domain::{Category, CategoryId, Product};
use crate::error::ApiError;

pub const LOAD_FAILED: &str = "Failed to load catalog";

/// Price ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "dsc")]
    Descending,
}

impl SortOrder {
    /// `"asc"` is ascending; every other value sorts descending
    pub fn parse(value: &str) -> Self {
        if value == "asc" {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "dsc",
        }
    }
}

/// The inputs of the derived view besides the products themselves
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub selected_category: Option<CategoryId>,
    pub search_term: String,
    pub sort_order: SortOrder,
}

impl CatalogQuery {
    pub fn matches(&self, product: &Product) -> bool {
        let in_category = self
            .selected_category
            .map_or(true, |id| product.category.id == id);
        in_category
            && product
                .name
                .to_lowercase()
                .contains(&self.search_term.to_lowercase())
    }
}

/// Filter by category and name, then stable-sort by price
pub fn derive_view(products: &[Product], query: &CatalogQuery) -> Vec<Product> {
    let mut visible: Vec<Product> = products
        .iter()
        .filter(|p| query.matches(p))
        .cloned()
        .collect();
    sort_by_price(&mut visible, query.sort_order);
    visible
}

pub fn sort_by_price(products: &mut [Product], order: SortOrder) {
    match order {
        SortOrder::Ascending => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOrder::Descending => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }
}

/// Category selector value: empty means "all"
pub fn parse_category(value: &str) -> Option<CategoryId> {
    value.trim().parse().ok()
}

/// Products and categories fetched together
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
}

pub async fn load_catalog<A: CatalogApi + ?Sized>(api: &A) -> Result<Catalog, ApiError> {
    let (products, categories) =
        futures::future::try_join(api.list_products(), api.list_categories()).await?;
    log::info!(
        "loaded {} products in {} categories",
        products.len(),
        categories.len()
    );
    Ok(Catalog {
        products,
        categories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    fn product(id: i64, name: &str, price: f64, category: i64) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: String::new(),
            price,
            category: Category {
                id: category,
                name: format!("Category {}", category),
            },
            image_url: None,
        }
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_search_is_case_insensitive_and_sorts_ascending() {
        let products = vec![product(1, "Apple", 3.0, 1), product(2, "Banana", 1.0, 1)];
        let query = CatalogQuery {
            search_term: "a".into(),
            ..Default::default()
        };

        let view = derive_view(&products, &query);
        assert_eq!(names(&view), vec!["Banana", "Apple"]);
        // input untouched
        assert_eq!(names(&products), vec!["Apple", "Banana"]);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let products = vec![product(1, "Apple", 3.0, 1)];
        let query = CatalogQuery {
            search_term: "xyz".into(),
            ..Default::default()
        };
        assert!(derive_view(&products, &query).is_empty());
    }

    #[test]
    fn test_category_filter_and_descending() {
        let products = vec![
            product(1, "Lamp", 20.0, 1),
            product(2, "Desk", 150.0, 2),
            product(3, "Chair", 80.0, 2),
        ];
        let query = CatalogQuery {
            selected_category: Some(2),
            sort_order: SortOrder::Descending,
            ..Default::default()
        };
        assert_eq!(names(&derive_view(&products, &query)), vec!["Desk", "Chair"]);
    }

    #[test]
    fn test_equal_prices_keep_filter_order() {
        let products = vec![
            product(1, "B", 5.0, 1),
            product(2, "A", 5.0, 1),
            product(3, "C", 1.0, 1),
        ];
        let mut query = CatalogQuery::default();
        assert_eq!(names(&derive_view(&products, &query)), vec!["C", "B", "A"]);
        query.sort_order = SortOrder::Descending;
        assert_eq!(names(&derive_view(&products, &query)), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_view_properties() {
        let products: Vec<Product> = (0..40)
            .map(|i| {
                let name = if i % 3 == 0 { format!("Red {}", i) } else { format!("Blue {}", i) };
                product(i, &name, ((i * 7) % 11) as f64, i % 4)
            })
            .collect();

        for category in [None, Some(0), Some(3)] {
            for term in ["", "red", "BLUE 1", "zzz"] {
                for order in [SortOrder::Ascending, SortOrder::Descending] {
                    let query = CatalogQuery {
                        selected_category: category,
                        search_term: term.into(),
                        sort_order: order,
                    };
                    let view = derive_view(&products, &query);
                    assert!(view.len() <= products.len());

                    // sorting again changes nothing
                    let mut resorted = view.clone();
                    sort_by_price(&mut resorted, order);
                    assert_eq!(resorted, view);

                    // same as sorting an independently filtered set
                    let mut expected: Vec<Product> =
                        products.iter().filter(|p| query.matches(p)).cloned().collect();
                    sort_by_price(&mut expected, order);
                    assert_eq!(expected, view);
                }
            }
        }
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!(SortOrder::parse("asc"), SortOrder::Ascending);
        assert_eq!(SortOrder::parse("dsc"), SortOrder::Descending);
        assert_eq!(SortOrder::parse("anything"), SortOrder::Descending);
        assert_eq!(parse_category(""), None);
        assert_eq!(parse_category("4"), Some(4));
    }

    struct FixedCatalog {
        fail_categories: bool,
    }

    #[async_trait(?Send)]
    impl CatalogApi for FixedCatalog {
        async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
            Ok(vec![product(1, "Lamp", 20.0, 1)])
        }

        async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
            if self.fail_categories {
                Err(ApiError::Status(503))
            } else {
                Ok(vec![Category { id: 1, name: "Home".into() }])
            }
        }
    }

    #[tokio::test]
    async fn test_load_catalog() {
        let catalog = load_catalog(&FixedCatalog { fail_categories: false }).await.unwrap();
        assert_eq!(catalog.products.len(), 1);
        assert_eq!(catalog.categories[0].name, "Home");

        let err = load_catalog(&FixedCatalog { fail_categories: true }).await.unwrap_err();
        assert_eq!(err, ApiError::Status(503));
    }
}
