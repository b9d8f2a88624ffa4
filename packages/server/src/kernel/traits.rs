// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no normalization logic.
// Normalization lives in the `content` crate and runs on whatever these return.
//
// Naming convention: Base* for trait names (e.g., BaseContentSource)

use async_trait::async_trait;
use content::ContentKind;
use drupal_client::{Document, DrupalError};
use std::sync::Arc;
use thiserror::Error;

// =============================================================================
// Content Source Trait (Infrastructure - raw JSON:API documents)
// =============================================================================

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("content API request failed: {0}")]
    Upstream(#[from] DrupalError),

    #[error("content source unavailable: {0}")]
    Unavailable(String),

    #[error("malformed {0} document: data is not a collection")]
    MalformedDocument(ContentKind),
}

impl FetchError {
    /// Whether the upstream answered 404 for the requested resource.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::Upstream(DrupalError::Api { status: 404, .. }))
    }
}

#[async_trait]
pub trait BaseContentSource: Send + Sync {
    /// Fetch the collection document for a content kind
    async fn fetch(&self, kind: ContentKind) -> Result<Arc<Document>, FetchError>;

    /// Fetch a single-resource document by id
    async fn fetch_item(&self, kind: ContentKind, id: &str) -> Result<Arc<Document>, FetchError>;
}
