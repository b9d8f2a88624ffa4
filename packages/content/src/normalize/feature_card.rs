use drupal_client::Resource;
use serde_json::Value;

use super::{related_file_url, related_names, text};
use crate::html::strip_tags;
use crate::origin::ContentOrigin;
use crate::resolver::Included;
use crate::types::FeatureCard;

pub const DEFAULT_BUTTON_TEXT: &str = "Learn More";
pub const DEFAULT_HREF: &str = "/";

pub fn normalize_feature_card(
    resource: &Resource,
    included: &Included<'_>,
    origin: &ContentOrigin,
) -> FeatureCard {
    let description = resource
        .formatted_text("field_description")
        .or_else(|| resource.formatted_text("body"))
        .map(strip_tags)
        .unwrap_or_default();

    FeatureCard {
        id: resource.id.clone(),
        title: text(resource, "title"),
        description,
        button_text: resource
            .attr_str("field_button_text")
            .unwrap_or(DEFAULT_BUTTON_TEXT)
            .to_string(),
        href: link_href(resource.attr("field_link")).unwrap_or_else(|| DEFAULT_HREF.to_string()),
        image: related_file_url(resource, "field_image", included, origin),
        tags: related_names(resource, "field_tags", included),
    }
}

/// Site-relative or absolute target of a Drupal link field.
///
/// Link fields are `{ uri, title, options }` objects; `internal:/path`
/// URIs point inside the site.
fn link_href(link: Option<&Value>) -> Option<String> {
    let uri = match link? {
        Value::String(uri) => uri.as_str(),
        Value::Object(field) => field.get("uri").and_then(Value::as_str)?,
        _ => return None,
    };
    let href = uri.strip_prefix("internal:").unwrap_or(uri);
    (!href.is_empty()).then(|| href.to_string())
}
