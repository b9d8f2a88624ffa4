// TestDependencies - mock implementations for testing
//
// Provides a scripted content source that can be injected into the app for tests.

use async_trait::async_trait;
use content::ContentKind;
use drupal_client::{Document, DrupalError};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use super::{BaseContentSource, FetchError};

// =============================================================================
// Mock Content Source
// =============================================================================

/// A call made to the mock source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentCall {
    Collection(ContentKind),
    Item(ContentKind, String),
}

#[derive(Default)]
pub struct MockContentSource {
    collections: HashMap<ContentKind, Arc<Document>>,
    items: HashMap<(ContentKind, String), Arc<Document>>,
    failing: HashSet<ContentKind>,
    calls: Arc<Mutex<Vec<ContentCall>>>,
}

impl MockContentSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `document` for collection fetches of `kind`
    pub fn with_document(mut self, kind: ContentKind, document: Document) -> Self {
        self.collections.insert(kind, Arc::new(document));
        self
    }

    /// Serve `document` for item fetches of `kind`/`id`
    pub fn with_item(mut self, kind: ContentKind, id: &str, document: Document) -> Self {
        self.items.insert((kind, id.to_string()), Arc::new(document));
        self
    }

    /// Make every fetch of `kind` fail as if the CMS were down
    pub fn failing(mut self, kind: ContentKind) -> Self {
        self.failing.insert(kind);
        self
    }

    /// Shared handle to the recorded calls
    pub fn calls(&self) -> Arc<Mutex<Vec<ContentCall>>> {
        self.calls.clone()
    }

    fn record(&self, call: ContentCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl BaseContentSource for MockContentSource {
    async fn fetch(&self, kind: ContentKind) -> Result<Arc<Document>, FetchError> {
        self.record(ContentCall::Collection(kind));
        if self.failing.contains(&kind) {
            return Err(FetchError::Unavailable(format!("{} is scripted to fail", kind)));
        }
        Ok(self
            .collections
            .get(&kind)
            .cloned()
            .unwrap_or_else(|| Arc::new(Document::collection(vec![], vec![]))))
    }

    async fn fetch_item(&self, kind: ContentKind, id: &str) -> Result<Arc<Document>, FetchError> {
        self.record(ContentCall::Item(kind, id.to_string()));
        if self.failing.contains(&kind) {
            return Err(FetchError::Unavailable(format!("{} is scripted to fail", kind)));
        }
        self.items
            .get(&(kind, id.to_string()))
            .cloned()
            .ok_or_else(|| {
                FetchError::Upstream(DrupalError::Api {
                    status: 404,
                    message: format!("{} {} not found", kind, id),
                })
            })
    }
}
