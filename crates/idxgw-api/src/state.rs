//! # Application State
//!
//! Shared state for the Axum application, passed to route handlers via the
//! `State` extractor. The gateway is stateless per request; the only shared
//! objects are the configuration and the optional Splunk client.

use idxgw_splunk_client::SplunkClient;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

/// Shared application state.
///
/// `splunk` is `None` when the downstream credentials were absent at
/// startup; routes that need it answer 503 until it is configured.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: AppConfig,
    /// Typed client for the downstream Splunk management API.
    pub splunk: Option<SplunkClient>,
}

impl AppState {
    /// State with default configuration and no Splunk client.
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            splunk: None,
        }
    }

    /// State with explicit configuration and an optional Splunk client.
    pub fn with_config(config: AppConfig, splunk: Option<SplunkClient>) -> Self {
        Self { config, splunk }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_has_no_splunk_client() {
        let state = AppState::new();
        assert!(state.splunk.is_none());
        assert_eq!(state.config.port, 8080);
    }

    #[test]
    fn with_config_carries_port() {
        let state = AppState::with_config(AppConfig { port: 9999 }, None);
        assert_eq!(state.config.port, 9999);
    }

    #[test]
    fn default_matches_new() {
        assert_eq!(AppState::default().config.port, AppState::new().config.port);
    }
}
