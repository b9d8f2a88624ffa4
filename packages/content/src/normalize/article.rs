use drupal_client::Resource;

use super::{related_file_url, related_names, text};
use crate::html::strip_tags;
use crate::origin::ContentOrigin;
use crate::resolver::{resolve, Included};
use crate::types::Article;

pub const DEFAULT_AUTHOR: &str = "Unknown Author";
pub const DEFAULT_CATEGORY: &str = "General";

pub fn normalize_article(resource: &Resource, included: &Included<'_>, origin: &ContentOrigin) -> Article {
    let content = resource.formatted_text("body").unwrap_or_default();
    let tags = related_names(resource, "field_tags", included);
    let category = tags
        .first()
        .cloned()
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

    Article {
        id: resource.id.clone(),
        title: text(resource, "title"),
        description: strip_tags(content),
        content: content.to_string(),
        date: text(resource, "created"),
        author: author_name(resource, included)
            .unwrap_or(DEFAULT_AUTHOR)
            .to_string(),
        category,
        image: related_file_url(resource, "field_image", included, origin),
        tags,
    }
}

/// Display name of the `uid` user, falling back to the account name.
fn author_name<'a>(resource: &Resource, included: &Included<'a>) -> Option<&'a str> {
    let user = resolve(resource, "uid", included)?;
    user.attr_str("display_name").or_else(|| user.attr_str("name"))
}
