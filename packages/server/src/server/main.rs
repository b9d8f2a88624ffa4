// Main entry point for the content server

use std::sync::Arc;

use anyhow::{Context, Result};
use content::ContentOrigin;
use drupal_client::DrupalClient;
use server_core::kernel::{CachedContentSource, DrupalContentSource};
use server_core::server::{build_app, AppState};
use server_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,content=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Rethread content server");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(drupal_url = %config.drupal_url, "Configuration loaded");

    let client = DrupalClient::new(&config.drupal_url).context("Invalid DRUPAL_URL")?;

    // Authenticated access is optional; anonymous reads still work
    if let Some((username, password)) = config.drupal_credentials() {
        match client.authenticate(username, password).await {
            Ok(true) => tracing::info!("Authenticated with Drupal"),
            Ok(false) => tracing::warn!("Drupal rejected the credentials, continuing anonymously"),
            Err(e) => tracing::warn!(error = %e, "Drupal authentication failed, continuing anonymously"),
        }
    }

    let origin = ContentOrigin::new(client.origin());
    let source = CachedContentSource::new(
        DrupalContentSource::new(Arc::new(client)),
        config.content_cache_ttl,
    );
    let app = build_app(AppState::new(Arc::new(source), origin), &config.allowed_origins);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
