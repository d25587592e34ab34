//! Product catalog
//!
//! The catalog is a fixed, process-wide list of products. It is read
//! through an async accessor so a real data source can replace it
//! without touching callers; the in-memory catalog always resolves
//! immediately.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A product offered on the home page and through the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Stable unique identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Price in cents
    pub price: i64,
}

impl Product {
    fn new(id: &str, name: &str, price: i64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
        }
    }
}

/// Errors a catalog backend can report
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The backing store could not be reached. Callers get no partial list.
    #[error("product catalog unavailable: {0}")]
    Unavailable(String),
}

lazy_static! {
    static ref PRODUCTS: Vec<Product> = vec![
        Product::new("p1", "Starter Wallet", 4900),
        Product::new("p2", "Minimal Belt", 3900),
        Product::new("p3", "Classic Backpack", 8900),
    ];
}

/// Read access to the product catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl Catalog {
    pub fn new() -> Self {
        Self
    }

    /// List every product in catalog order
    pub async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(PRODUCTS.clone())
    }

    /// Look up a single product by id
    pub async fn find_product(&self, id: &str) -> Result<Option<Product>, CatalogError> {
        Ok(PRODUCTS.iter().find(|p| p.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_products_in_order() {
        let products = Catalog::new().list_products().await.unwrap();
        let summary: Vec<_> = products
            .iter()
            .map(|p| (p.id.as_str(), p.name.as_str(), p.price))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("p1", "Starter Wallet", 4900),
                ("p2", "Minimal Belt", 3900),
                ("p3", "Classic Backpack", 8900),
            ]
        );
    }

    #[tokio::test]
    async fn test_list_products_is_stable() {
        let catalog = Catalog::new();
        let first = catalog.list_products().await.unwrap();
        let second = catalog.list_products().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_find_product() {
        let catalog = Catalog::new();
        let belt = catalog.find_product("p2").await.unwrap().unwrap();
        assert_eq!(belt.name, "Minimal Belt");
        assert!(catalog.find_product("p9").await.unwrap().is_none());
    }

    #[test]
    fn test_product_json_shape() {
        let json = serde_json::to_string(&PRODUCTS[0]).unwrap();
        assert_eq!(json, r#"{"id":"p1","name":"Starter Wallet","price":4900}"#);
    }
}
