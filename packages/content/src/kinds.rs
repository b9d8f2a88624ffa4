//! The content kinds the site requests from the CMS.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownContentKind;

/// One kind of content, selected by the `type` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    FeatureCards,
    Products,
    Articles,
    ClothingTrade,
    Footer,
}

impl ContentKind {
    pub const ALL: [ContentKind; 5] = [
        ContentKind::FeatureCards,
        ContentKind::Products,
        ContentKind::Articles,
        ContentKind::ClothingTrade,
        ContentKind::Footer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::FeatureCards => "feature_cards",
            ContentKind::Products => "products",
            ContentKind::Articles => "articles",
            ContentKind::ClothingTrade => "clothing_trade",
            ContentKind::Footer => "footer",
        }
    }

    /// JSON:API path below `/jsonapi/`.
    pub fn upstream_path(&self) -> &'static str {
        match self {
            ContentKind::FeatureCards => "node/feature_card",
            ContentKind::Products => "node/product",
            ContentKind::Articles => "node/article",
            ContentKind::ClothingTrade => "node/clothing_trade_data",
            ContentKind::Footer => "block_content/footer",
        }
    }

    /// Relationships to request in the `include` parameter.
    pub fn includes(&self) -> &'static [&'static str] {
        match self {
            ContentKind::FeatureCards => &["field_image", "field_tags"],
            ContentKind::Products => &["field_category", "field_product_image"],
            ContentKind::Articles => &["field_image", "field_tags", "uid"],
            ContentKind::ClothingTrade => &[],
            ContentKind::Footer => &["field_logo_image"],
        }
    }

    /// Whether individual items of this kind can be fetched by id.
    pub fn supports_item_lookup(&self) -> bool {
        matches!(
            self,
            ContentKind::FeatureCards | ContentKind::Products | ContentKind::Articles
        )
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = UnknownContentKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownContentKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_kind() {
        for kind in ContentKind::ALL {
            assert_eq!(kind.as_str().parse::<ContentKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_kind() {
        assert_eq!(
            "recipes".parse::<ContentKind>(),
            Err(UnknownContentKind("recipes".to_string()))
        );
        assert!("Products".parse::<ContentKind>().is_err());
    }

    #[test]
    fn test_product_route() {
        assert_eq!(ContentKind::Products.upstream_path(), "node/product");
        assert_eq!(
            ContentKind::Products.includes(),
            &["field_category", "field_product_image"]
        );
        assert!(ContentKind::ClothingTrade.includes().is_empty());
    }

    #[test]
    fn test_serde_names_match_query_values() {
        assert_eq!(
            serde_json::to_value(ContentKind::ClothingTrade).unwrap(),
            serde_json::json!("clothing_trade")
        );
    }
}
