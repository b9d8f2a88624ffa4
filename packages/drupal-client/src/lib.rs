//! Pure Drupal JSON:API REST client.
//!
//! A minimal client for a Drupal site exposing the core JSON:API module.
//! Supports optional cookie-less login (CSRF token), collection fetches with
//! relationship includes, and single-resource fetches.
//!
//! # Example
//!
//! ```rust,ignore
//! use drupal_client::DrupalClient;
//!
//! let client = DrupalClient::new("http://localhost:8000")?;
//!
//! let doc = client
//!     .get_collection("node/product", &["field_category", "field_product_image"])
//!     .await?;
//! println!("{} products", doc.len());
//! ```

pub mod error;
pub mod types;

pub use error::{DrupalError, Result};
pub use types::{Document, PrimaryData, Relationship, RelationshipData, Resource, ResourceIdentifier};

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tokio::sync::RwLock;
use types::{LoginRequest, LoginResponse};
use url::Url;

/// Media type of every JSON:API request and response.
pub const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";

const CSRF_HEADER: &str = "X-CSRF-Token";

pub struct DrupalClient {
    client: reqwest::Client,
    origin: String,
    csrf_token: RwLock<Option<String>>,
}

impl DrupalClient {
    /// Create a client for the Drupal site at `base_url` (scheme + host + optional port).
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Self::with_client(base_url, client)
    }

    /// Create a client with a custom HTTP client.
    pub fn with_client(base_url: &str, client: reqwest::Client) -> Result<Self> {
        Ok(Self {
            client,
            origin: normalize_origin(base_url)?,
            csrf_token: RwLock::new(None),
        })
    }

    /// The site origin without a trailing slash, e.g. `http://localhost:8000`.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Whether a CSRF token from a successful login is held.
    pub async fn is_authenticated(&self) -> bool {
        self.csrf_token.read().await.is_some()
    }

    /// Log in with a Drupal user account.
    ///
    /// Returns `Ok(false)` when Drupal rejects the credentials; transport
    /// failures are errors.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<bool> {
        tracing::info!(username, "Authenticating with Drupal");

        let url = format!("{}/user/login?_format=json", self.origin);
        let resp = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(&LoginRequest {
                name: username,
                pass: password,
            })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Drupal authentication failed");
            return Ok(false);
        }

        let login: LoginResponse = resp.json().await?;
        *self.csrf_token.write().await = login.csrf_token;
        tracing::info!("Drupal authentication successful");
        Ok(true)
    }

    /// Fetch a resource collection, e.g. `node/product`, with the given relationship includes.
    pub async fn get_collection(&self, path: &str, includes: &[&str]) -> Result<Document> {
        let url = collection_url(&self.origin, path, includes)?;
        let doc = self.get_document(url).await?;
        tracing::debug!(path, count = doc.len(), included = doc.included.len(), "Fetched collection");
        Ok(doc)
    }

    /// Fetch a single resource by id.
    pub async fn get_resource(&self, path: &str, id: &str, includes: &[&str]) -> Result<Document> {
        let url = resource_url(&self.origin, path, id, includes)?;
        let doc = self.get_document(url).await?;
        tracing::debug!(path, id, "Fetched resource");
        Ok(doc)
    }

    async fn get_document(&self, url: Url) -> Result<Document> {
        let mut req = self.client.get(url).header(ACCEPT, JSON_API_MEDIA_TYPE);
        if let Some(token) = self.csrf_token.read().await.as_deref() {
            req = req.header(CSRF_HEADER, token);
        }

        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(DrupalError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

fn normalize_origin(base_url: &str) -> Result<String> {
    let parsed = Url::parse(base_url)?;
    if parsed.cannot_be_a_base() {
        return Err(DrupalError::InvalidBaseUrl(
            url::ParseError::RelativeUrlWithCannotBeABaseBase,
        ));
    }
    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

fn collection_url(origin: &str, path: &str, includes: &[&str]) -> Result<Url> {
    document_url(origin, path, None, includes)
}

fn resource_url(origin: &str, path: &str, id: &str, includes: &[&str]) -> Result<Url> {
    document_url(origin, path, Some(id), includes)
}

/// `{origin}/jsonapi/{path}[/{id}]?include=...`
///
/// The id is pushed as a single encoded path segment, so `/`, `?` and dot
/// segments in it can never change the route.
fn document_url(origin: &str, path: &str, id: Option<&str>, includes: &[&str]) -> Result<Url> {
    let mut url = Url::parse(origin)?;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| DrupalError::InvalidBaseUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?;
        segments
            .pop_if_empty()
            .push("jsonapi")
            .extend(path.split('/').filter(|segment| !segment.is_empty()));
        if let Some(id) = id {
            if id.is_empty() || id == "." || id == ".." {
                return Err(DrupalError::InvalidResourceId(id.to_string()));
            }
            segments.push(id);
        }
    }

    if !includes.is_empty() {
        url.set_query(Some(&format!("include={}", includes.join(","))));
    }
    Ok(url)
}
