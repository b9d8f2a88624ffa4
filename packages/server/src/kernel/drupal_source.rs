//! Drupal-backed content source.

use async_trait::async_trait;
use content::ContentKind;
use drupal_client::{Document, DrupalClient};
use std::sync::Arc;

use super::{BaseContentSource, FetchError};

/// Wrapper around DrupalClient that implements BaseContentSource
pub struct DrupalContentSource(pub Arc<DrupalClient>);

impl DrupalContentSource {
    pub fn new(client: Arc<DrupalClient>) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseContentSource for DrupalContentSource {
    async fn fetch(&self, kind: ContentKind) -> Result<Arc<Document>, FetchError> {
        let doc = self
            .0
            .get_collection(kind.upstream_path(), kind.includes())
            .await?;
        Ok(Arc::new(doc))
    }

    async fn fetch_item(&self, kind: ContentKind, id: &str) -> Result<Arc<Document>, FetchError> {
        let doc = self
            .0
            .get_resource(kind.upstream_path(), id, kind.includes())
            .await?;
        Ok(Arc::new(doc))
    }
}
