//! Fixture builders for tests of code that consumes normalized content.
//!
//! Each helper returns a [`Resource`] shaped like what Drupal's JSON:API
//! module emits for that entity type.

use drupal_client::{Resource, ResourceIdentifier};
use serde_json::json;

/// A `file--file` resource whose `uri.url` is `url`.
pub fn file(id: &str, url: &str) -> Resource {
    Resource::new("file--file", id).with_attribute("uri", json!({ "url": url }))
}

/// A taxonomy term of bundle type `kind` named `name`.
pub fn term(kind: &str, id: &str, name: &str) -> Resource {
    Resource::new(kind, id).with_attribute("name", name)
}

/// A `user--user` resource.
pub fn user(id: &str, display_name: Option<&str>, name: Option<&str>) -> Resource {
    let mut user = Resource::new("user--user", id);
    if let Some(display_name) = display_name {
        user = user.with_attribute("display_name", display_name);
    }
    if let Some(name) = name {
        user = user.with_attribute("name", name);
    }
    user
}

/// Reference to `file--file` `id`.
pub fn file_ref(id: &str) -> ResourceIdentifier {
    ResourceIdentifier::new("file--file", id)
}

/// A `node--clothing_trade_data` resource with every figure set from strings.
pub fn trade_record(id: &str, country: &str, role: &str, figures: [&str; 5]) -> Resource {
    let [metric_tons, population, gdp, items, gdp_per_item] = figures;
    Resource::new("node--clothing_trade_data", id)
        .with_attribute("title", country)
        .with_attribute("field_country_type", role)
        .with_attribute("field_metric_tons_of_clothing", metric_tons)
        .with_attribute("field_population", population)
        .with_attribute("field_gdp_per_capita", gdp)
        .with_attribute("field_items_per_capita", items)
        .with_attribute("field_gdp_per_capita_per_item", gdp_per_item)
}
