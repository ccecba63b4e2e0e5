//! # idxgw-api -- Binary Entry Point
//!
//! Starts the Axum HTTP server for the index gateway.
//! Binds to configurable port (default 8080).

use idxgw_api::state::{AppConfig, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Build configuration from environment.
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let config = AppConfig { port };

    // Attempt to create the Splunk client from environment.
    let splunk = match idxgw_splunk_client::SplunkConfig::from_env() {
        Ok(splunk_config) => {
            tracing::info!("Splunk client configured");
            match idxgw_splunk_client::SplunkClient::new(splunk_config) {
                Ok(client) => Some(client),
                Err(e) => {
                    tracing::error!("Failed to create Splunk client: {e}");
                    return Err(e.into());
                }
            }
        }
        Err(e) => {
            tracing::warn!("Splunk client not configured: {e}. POST /index will return 503.");
            None
        }
    };

    let state = AppState::with_config(config, splunk);
    let app = idxgw_api::app(state)?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("index gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
