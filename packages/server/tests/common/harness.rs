use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use content::ContentOrigin;
use serde_json::Value;
use server_core::kernel::{BaseContentSource, CachedContentSource, ContentCall, MockContentSource};
use server_core::server::{build_app, AppState};
use tower::ServiceExt;

pub const TEST_ORIGIN: &str = "http://cms.test";

/// The full router wired to a scripted content source
pub struct TestHarness {
    pub app: Router,
    pub calls: Arc<Mutex<Vec<ContentCall>>>,
}

impl TestHarness {
    pub fn new(source: MockContentSource) -> Self {
        let calls = source.calls();
        Self::with_source(Arc::new(source), calls)
    }

    /// Same as [`TestHarness::new`] with the revalidating cache in front
    pub fn cached(source: MockContentSource, ttl: Duration) -> Self {
        let calls = source.calls();
        Self::with_source(Arc::new(CachedContentSource::new(source, ttl)), calls)
    }

    fn with_source(source: Arc<dyn BaseContentSource>, calls: Arc<Mutex<Vec<ContentCall>>>) -> Self {
        let state = AppState::new(source, ContentOrigin::new(TEST_ORIGIN));
        Self {
            app: build_app(state, &[]),
            calls,
        }
    }

    /// GET `uri` and decode the JSON body
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("valid request");
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        let body = serde_json::from_slice(&bytes).expect("JSON body");
        (status, body)
    }

    pub fn recorded_calls(&self) -> Vec<ContentCall> {
        self.calls.lock().unwrap().clone()
    }
}
