use serde::{Deserialize, Serialize};

/// A call-to-action card on the home page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub button_text: String,
    pub href: String,
    pub image: Option<String>,
    pub tags: Vec<String>,
}
