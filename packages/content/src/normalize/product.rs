use drupal_client::Resource;
use serde_json::Value;

use super::{related_file_url, related_name, text};
use crate::origin::ContentOrigin;
use crate::resolver::Included;
use crate::types::Product;

pub const DEFAULT_CATEGORY: &str = "Uncategorized";
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";
pub const DEFAULT_PRICE: &str = "$0.00";

pub fn normalize_product(resource: &Resource, included: &Included<'_>, origin: &ContentOrigin) -> Product {
    Product {
        id: resource.id.clone(),
        title: text(resource, "title"),
        description: resource
            .formatted_text("field_description")
            .or_else(|| resource.formatted_text("body"))
            .unwrap_or_default()
            .to_string(),
        price: format_price(resource.attr("field_price")),
        category: related_name(resource, "field_category", included)
            .unwrap_or(DEFAULT_CATEGORY)
            .to_string(),
        image: related_file_url(resource, "field_product_image", included, origin)
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
    }
}

/// Numbers become `$N.NN`; strings are already display prices and pass through.
pub fn format_price(price: Option<&Value>) -> String {
    match price {
        Some(Value::Number(n)) => n
            .as_f64()
            .map(|amount| format!("${:.2}", amount))
            .unwrap_or_else(|| DEFAULT_PRICE.to_string()),
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => DEFAULT_PRICE.to_string(),
    }
}
