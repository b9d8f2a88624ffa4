use thiserror::Error;

/// Errors returned by the Drupal JSON:API client.
#[derive(Debug, Error)]
pub enum DrupalError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Drupal API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("invalid resource id: {0:?}")]
    InvalidResourceId(String),
}

pub type Result<T> = std::result::Result<T, DrupalError>;
