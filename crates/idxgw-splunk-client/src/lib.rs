//! # idxgw-splunk-client -- Typed Rust client for the Splunk REST API
//!
//! Provides typed access to the Splunk management interface, scoped to what
//! the index gateway needs: creating indexes.
//!
//! ## Architecture
//!
//! This crate is the only path by which the gateway talks to Splunk. Route
//! handlers never build HTTP requests themselves; they call a typed method
//! and receive a typed result or a [`SplunkApiError`].
//!
//! ## API Path Convention
//!
//! Splunk's management API lives on the management port (8089 by default)
//! and namespaces collection endpoints by owner and app:
//! `{base_url}/servicesNS/{owner}/{app}/data/indexes`. All calls request
//! `output_mode=json`.

pub mod config;
pub mod error;
pub mod indexes;

pub use config::{ConfigError, SplunkConfig};
pub use error::SplunkApiError;
pub use indexes::{CreateIndexRequest, IndexEntry};

use std::time::Duration;

/// Top-level Splunk client. Holds sub-clients per collection.
#[derive(Debug, Clone)]
pub struct SplunkClient {
    indexes: indexes::IndexClient,
}

impl SplunkClient {
    /// Create a new Splunk client from configuration.
    ///
    /// Builds the underlying HTTP client with the configured timeout.
    /// When `verify_tls` is off (Splunk ships a self-signed certificate on
    /// the management port), certificate validation is disabled.
    pub fn new(config: SplunkConfig) -> Result<Self, SplunkApiError> {
        let mut builder =
            reqwest::Client::builder().timeout(Duration::from_secs(config.timeout_secs));

        if !config.verify_tls {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let http = builder.build().map_err(|e| SplunkApiError::Http {
            endpoint: "client_init".into(),
            source: e,
        })?;

        Ok(Self {
            indexes: indexes::IndexClient::new(http, config),
        })
    }

    /// Access the indexes (data/indexes) client.
    pub fn indexes(&self) -> &indexes::IndexClient {
        &self.indexes
    }
}
