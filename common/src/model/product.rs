use serde::{Deserialize, Serialize};

/// A product sold through the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Price before discount. `None` when the product is not discounted.
    pub original_price: Option<f64>,
    pub rating: f64,
    pub reviews: u32,
    pub image: String,
    pub category: String,
    pub in_stock: bool,
}

/// Number of products observed for one distinct category value.
///
/// Derived on every request from the `products` table; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCategory {
    pub name: String,
    pub count: u32,
}
