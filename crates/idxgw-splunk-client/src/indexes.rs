//! Typed client for the Splunk indexes collection.
//!
//! Base URL: the Splunk management port (default `https://localhost:8089`).
//! Collection endpoints are namespaced by owner and app.
//!
//! ## REST Paths
//!
//! | Method | Path (relative to base)                  | Operation    |
//! |--------|------------------------------------------|--------------|
//! | POST   | `servicesNS/{owner}/{app}/data/indexes`  | Create index |

use serde::{Deserialize, Serialize};

use crate::config::SplunkConfig;
use crate::error::SplunkApiError;

// -- Request/Response types matching the Splunk REST schema --------------------

/// Request to create an index.
///
/// Serialized as form parameters; field names match the Splunk REST API.
/// Unset storage paths are omitted so Splunk applies its own defaults.
#[derive(Debug, Clone, Serialize)]
pub struct CreateIndexRequest {
    /// Name of the index to create. The only required parameter.
    pub name: String,
    #[serde(rename = "homePath", skip_serializing_if = "Option::is_none")]
    pub home_path: Option<String>,
    #[serde(rename = "coldPath", skip_serializing_if = "Option::is_none")]
    pub cold_path: Option<String>,
    #[serde(rename = "thawedPath", skip_serializing_if = "Option::is_none")]
    pub thawed_path: Option<String>,
}

impl CreateIndexRequest {
    /// Request carrying only the index name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            home_path: None,
            cold_path: None,
            thawed_path: None,
        }
    }
}

/// One entry of a Splunk collection response.
///
/// Splunk returns far more per entry (acl, links, author, full index
/// configuration under `content`) than the gateway consumes; everything
/// beyond the name is kept as raw JSON. `serde(deny_unknown_fields)` is
/// intentionally NOT used.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexEntry {
    /// Index name as confirmed by Splunk.
    pub name: String,
    /// Index configuration as returned by Splunk.
    #[serde(default)]
    pub content: serde_json::Value,
}

/// Splunk Atom-style collection envelope (`output_mode=json`).
#[derive(Debug, Deserialize)]
struct CollectionResponse {
    #[serde(default)]
    entry: Vec<IndexEntry>,
}

// -- Client ---------------------------------------------------------------------

/// Client for the Splunk `data/indexes` collection.
#[derive(Debug, Clone)]
pub struct IndexClient {
    http: reqwest::Client,
    config: SplunkConfig,
}

impl IndexClient {
    pub(crate) fn new(http: reqwest::Client, config: SplunkConfig) -> Self {
        Self { http, config }
    }

    /// Create a new index.
    ///
    /// Calls `POST {base_url}servicesNS/{owner}/{app}/data/indexes` with the
    /// request serialized as form parameters and `output_mode=json`.
    pub async fn create(&self, req: &CreateIndexRequest) -> Result<IndexEntry, SplunkApiError> {
        let endpoint = "POST /data/indexes";
        let url = format!(
            "{}servicesNS/{}/{}/data/indexes",
            self.config.base_url, self.config.owner, self.config.app
        );

        tracing::debug!(index = %req.name, "creating Splunk index");

        let resp = self
            .http
            .post(&url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .query(&[("output_mode", "json")])
            .form(req)
            .send()
            .await
            .map_err(|e| SplunkApiError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(SplunkApiError::ApiError {
                endpoint: endpoint.into(),
                status,
                body,
            });
        }

        let collection: CollectionResponse =
            resp.json().await.map_err(|e| SplunkApiError::Deserialization {
                endpoint: endpoint.into(),
                source: e,
            })?;

        collection
            .entry
            .into_iter()
            .next()
            .ok_or_else(|| SplunkApiError::MalformedResponse {
                endpoint: endpoint.into(),
                reason: "created-index response contained no entry".into(),
            })
    }
}
