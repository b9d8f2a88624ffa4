use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub drupal_url: String,
    pub drupal_username: Option<String>,
    pub drupal_password: Option<String>,
    pub content_cache_ttl: Duration,
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            drupal_url: env::var("DRUPAL_URL")
                .or_else(|_| env::var("NEXT_PUBLIC_DRUPAL_URL"))
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            drupal_username: non_empty("DRUPAL_USERNAME"),
            drupal_password: non_empty("DRUPAL_PASSWORD"),
            content_cache_ttl: Duration::from_secs(
                env::var("CONTENT_CACHE_TTL_SECS")
                    .unwrap_or_else(|_| "300".to_string())
                    .parse()
                    .context("CONTENT_CACHE_TTL_SECS must be a whole number of seconds")?,
            ),
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|value| split_list(&value))
                .unwrap_or_default(),
        })
    }

    /// CMS credentials, when both are configured
    pub fn drupal_credentials(&self) -> Option<(&str, &str)> {
        match (&self.drupal_username, &self.drupal_password) {
            (Some(username), Some(password)) => Some((username, password)),
            _ => None,
        }
    }
}

fn non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Comma-separated list, blanks dropped
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
