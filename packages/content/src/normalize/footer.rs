use drupal_client::Resource;

use super::related_file_url;
use crate::html::strip_tags;
use crate::origin::ContentOrigin;
use crate::resolver::Included;
use crate::types::FooterBlock;

pub fn normalize_footer(resource: &Resource, included: &Included<'_>, origin: &ContentOrigin) -> FooterBlock {
    let defaults = FooterBlock::default();
    let field = |name: &str, default: String| {
        resource
            .attr_str(name)
            .map(str::to_string)
            .unwrap_or(default)
    };

    FooterBlock {
        site_title: field("field_site_title", defaults.site_title),
        description: resource
            .formatted_text("field_description")
            .map(strip_tags)
            .unwrap_or(defaults.description),
        credits_note: field("field_credits_note", defaults.credits_note),
        year_notice: field("field_year_notice", defaults.year_notice),
        attribution: field("field_attribution", defaults.attribution),
        logo_image_url: related_file_url(resource, "field_logo_image", included, origin),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{file, file_ref};
    use serde_json::json;

    fn origin() -> ContentOrigin {
        ContentOrigin::new("http://localhost:8000")
    }

    #[test]
    fn test_full_footer() {
        let included = vec![file("logo", "/sites/default/files/rethread.jpg")];
        let block = Resource::new("block_content--footer", "b1")
            .with_attribute("field_site_title", "Rethread")
            .with_attribute("field_description", json!({ "value": "<p>Tracking the trade.</p>" }))
            .with_attribute("field_credits_note", "Made with care")
            .with_attribute("field_year_notice", "© 2025 Rethread")
            .with_attribute("field_attribution", "A project for The Or Foundation")
            .with_relationship("field_logo_image", file_ref("logo"));

        let footer = normalize_footer(&block, &Included::new(&included), &origin());
        assert_eq!(footer.description, "Tracking the trade.");
        assert_eq!(footer.credits_note, "Made with care");
        assert_eq!(footer.year_notice, "© 2025 Rethread");
        assert_eq!(
            footer.logo_image_url.as_deref(),
            Some("http://localhost:8000/sites/default/files/rethread.jpg")
        );
    }

    #[test]
    fn test_absolute_logo_url_kept() {
        let included = vec![file("logo", "https://cdn.example.org/logo.png")];
        let block = Resource::new("block_content--footer", "b2")
            .with_relationship("field_logo_image", file_ref("logo"));

        let footer = normalize_footer(&block, &Included::new(&included), &origin());
        assert_eq!(footer.logo_image_url.as_deref(), Some("https://cdn.example.org/logo.png"));
    }

    #[test]
    fn test_empty_block_uses_defaults() {
        let block = Resource::new("block_content--footer", "b3");
        let footer = normalize_footer(&block, &Included::empty(), &origin());
        assert_eq!(footer, FooterBlock::default());
    }
}
