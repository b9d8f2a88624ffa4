use serde::{Deserialize, Serialize};

/// A blog/news article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    /// Plain-text excerpt of the body
    pub description: String,
    /// Rendered body HTML
    pub content: String,
    pub date: String,
    pub author: String,
    pub category: String,
    pub image: Option<String>,
    pub tags: Vec<String>,
}
