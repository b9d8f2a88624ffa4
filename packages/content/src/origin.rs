//! Turning Drupal file references into absolute URLs.

use drupal_client::Resource;
use serde_json::Value;

/// Public files directory Drupal serves `public://` URIs from.
const PUBLIC_FILES_PATH: &str = "/sites/default/files/";

/// Origin of the content API, e.g. `http://localhost:8000`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentOrigin(String);

impl ContentOrigin {
    pub fn new(origin: impl Into<String>) -> Self {
        let origin = origin.into();
        Self(origin.trim_end_matches('/').to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Prefix a relative URI with the origin. Absolute URLs pass through;
    /// protocol-relative ones (`//host/path`) take the origin's scheme.
    pub fn absolutize(&self, uri: &str) -> String {
        if uri.starts_with("http://") || uri.starts_with("https://") {
            return uri.to_string();
        }
        if uri.starts_with("//") {
            return format!("{}:{}", self.scheme(), uri);
        }
        if let Some(path) = uri.strip_prefix("public://") {
            return format!("{}{}{}", self.0, PUBLIC_FILES_PATH, path);
        }
        format!("{}/{}", self.0, uri.trim_start_matches('/'))
    }

    fn scheme(&self) -> &str {
        self.0
            .split_once("://")
            .map(|(scheme, _)| scheme)
            .unwrap_or("https")
    }

    /// Absolute URL of a `file--file` resource.
    ///
    /// Reads `uri.url`, then `uri.value`, then a plain string `uri`, then a
    /// top-level `url` attribute.
    pub fn file_url(&self, file: &Resource) -> Option<String> {
        let raw = match file.attr("uri") {
            Some(Value::Object(uri)) => ["url", "value"]
                .iter()
                .filter_map(|key| uri.get(*key).and_then(Value::as_str))
                .find(|s| !s.is_empty()),
            Some(Value::String(uri)) if !uri.is_empty() => Some(uri.as_str()),
            _ => None,
        }
        .or_else(|| file.attr_str("url"))?;

        Some(self.absolutize(raw))
    }
}

impl std::fmt::Display for ContentOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
