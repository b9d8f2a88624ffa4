use serde::{Deserialize, Serialize};

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Display price, e.g. `$45.00`
    pub price: String,
    pub category: String,
    /// Absolute image URL or the placeholder path
    pub image: String,
}
