//! Splunk client configuration.
//!
//! Points the client at a Splunk management endpoint. Defaults assume a
//! local Splunk instance on the standard management port. Override via
//! environment variables or explicit construction for staging/testing.

use url::Url;

/// Configuration for connecting to a Splunk management endpoint.
///
/// Custom `Debug` implementation redacts the `password` field to prevent
/// credential leakage in log output.
#[derive(Clone)]
pub struct SplunkConfig {
    /// Base URL of the Splunk management port.
    /// Default: <https://localhost:8089>
    pub base_url: Url,
    /// Username for HTTP basic authentication.
    pub username: String,
    /// Password for HTTP basic authentication.
    pub password: String,
    /// Namespace owner for collection endpoints.
    pub owner: String,
    /// Namespace app for collection endpoints.
    pub app: String,
    /// Whether to verify the server TLS certificate. Splunk ships a
    /// self-signed certificate on the management port, so deployments
    /// often need this off outside production.
    pub verify_tls: bool,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl std::fmt::Debug for SplunkConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SplunkConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("owner", &self.owner)
            .field("app", &self.app)
            .field("verify_tls", &self.verify_tls)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl SplunkConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `SPLUNK_URL` (default: `https://localhost:8089`)
    /// - `SPLUNK_USERNAME` (required)
    /// - `SPLUNK_PASSWORD` (required)
    /// - `SPLUNK_OWNER` (default: `admin`)
    /// - `SPLUNK_APP` (default: `search`)
    /// - `SPLUNK_VERIFY_TLS` (default: true; `false`/`0`/`no` disable)
    /// - `SPLUNK_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        let username = std::env::var("SPLUNK_USERNAME")
            .map_err(|_| ConfigError::MissingVar("SPLUNK_USERNAME"))?;
        let password = std::env::var("SPLUNK_PASSWORD")
            .map_err(|_| ConfigError::MissingVar("SPLUNK_PASSWORD"))?;

        Ok(Self {
            base_url: env_url("SPLUNK_URL", "https://localhost:8089")?,
            username,
            password,
            owner: std::env::var("SPLUNK_OWNER").unwrap_or_else(|_| "admin".to_string()),
            app: std::env::var("SPLUNK_APP").unwrap_or_else(|_| "search".to_string()),
            verify_tls: env_flag("SPLUNK_VERIFY_TLS", true),
            timeout_secs: std::env::var("SPLUNK_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        })
    }

    /// Create a configuration pointing at a local mock server (for testing).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if `base_url` cannot be parsed.
    pub fn local_mock(base_url: &str, username: &str, password: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: Url::parse(base_url)
                .map_err(|e| ConfigError::InvalidUrl("base_url".to_string(), e.to_string()))?,
            username: username.to_string(),
            password: password.to_string(),
            owner: "admin".to_string(),
            app: "search".to_string(),
            verify_tls: true,
            timeout_secs: 5,
        })
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

fn env_flag(var: &str, default: bool) -> bool {
    match std::env::var(var) {
        Ok(raw) => !matches!(raw.trim().to_ascii_lowercase().as_str(), "false" | "0" | "no"),
        Err(_) => default,
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    MissingVar(&'static str),
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_mock_builds_valid_config() {
        let cfg = SplunkConfig::local_mock("http://127.0.0.1:9000", "admin", "changeme").unwrap();
        assert_eq!(cfg.base_url.as_str(), "http://127.0.0.1:9000/");
        assert_eq!(cfg.username, "admin");
        assert_eq!(cfg.owner, "admin");
        assert_eq!(cfg.app, "search");
        assert_eq!(cfg.timeout_secs, 5);
        assert!(cfg.verify_tls);
    }

    #[test]
    fn debug_output_redacts_password() {
        let cfg = SplunkConfig::local_mock("http://127.0.0.1:9000", "admin", "hunter2").unwrap();
        let rendered = format!("{cfg:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn env_url_uses_default_when_var_absent() {
        let url = env_url("NONEXISTENT_VAR_IDXGW", "https://localhost:8089").unwrap();
        assert_eq!(url.as_str(), "https://localhost:8089/");
    }

    #[test]
    fn env_url_rejects_invalid_url() {
        // Temporarily set an invalid URL.
        std::env::set_var("TEST_BAD_URL_SC", "not a url");
        let result = env_url("TEST_BAD_URL_SC", "https://localhost:8089");
        std::env::remove_var("TEST_BAD_URL_SC");
        assert!(result.is_err());
    }

    #[test]
    fn env_flag_parses_negations() {
        std::env::set_var("TEST_FLAG_SC_OFF", "false");
        assert!(!env_flag("TEST_FLAG_SC_OFF", true));
        std::env::remove_var("TEST_FLAG_SC_OFF");

        std::env::set_var("TEST_FLAG_SC_ON", "true");
        assert!(env_flag("TEST_FLAG_SC_ON", false));
        std::env::remove_var("TEST_FLAG_SC_ON");

        assert!(env_flag("TEST_FLAG_SC_ABSENT", true));
        assert!(!env_flag("TEST_FLAG_SC_ABSENT", false));
    }
}
