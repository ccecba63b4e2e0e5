//! # API Error Types
//!
//! The application error type and the outermost response-mapping boundary.
//! Any fault a handler surfaces that the validation middleware does not
//! recognize is converted here into the generic fault envelope:
//!
//! ```json
//! {"status":"err","error":"<description>","msg":"We're sorry, but there was an issue completing your request :("}
//! ```
//!
//! The HTTP status comes from the fault itself where one is attached
//! (upstream failures map to 502, a missing dependency to 503); anything
//! else is 500. This boundary is configuration, not business logic: route
//! handlers return `Result<_, AppError>` and never build fault responses
//! by hand.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use idxgw_splunk_client::SplunkApiError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Apology line carried by every generic fault envelope.
pub const FAULT_MSG: &str = "We're sorry, but there was an issue completing your request :(";

/// Generic fault envelope returned by the outermost error boundary.
#[derive(Debug, Serialize, Deserialize)]
pub struct FaultBody {
    /// Always `"err"`.
    pub status: String,
    /// Description of the underlying fault.
    pub error: String,
    /// Human-facing apology.
    pub msg: String,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// The Splunk call failed or Splunk is unreachable (502).
    #[error("upstream Splunk error: {0}")]
    Upstream(#[from] SplunkApiError),

    /// A service dependency is not configured (503).
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    /// An internal invariant was broken (500).
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code attached to this fault.
    fn status(&self) -> StatusCode {
        match self {
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Construct a service unavailable error (503).
    pub fn service_unavailable(msg: &str) -> Self {
        Self::ServiceUnavailable(msg.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Log server-side faults for operator visibility.
        match &self {
            Self::Upstream(_) => tracing::error!(error = %self, "upstream Splunk error"),
            Self::ServiceUnavailable(_) => tracing::warn!(error = %self, "service unavailable"),
            Self::Internal(_) => tracing::error!(error = %self, "internal server error"),
        }

        let body = FaultBody {
            status: "err".to_string(),
            error: self.to_string(),
            msg: FAULT_MSG.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_status_code() {
        let err = AppError::Upstream(SplunkApiError::ApiError {
            endpoint: "POST /data/indexes".into(),
            status: 409,
            body: "Index name=sales already exists".into(),
        });
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn service_unavailable_status_code() {
        let err = AppError::service_unavailable("Splunk client not configured");
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn internal_status_code() {
        let err = AppError::Internal("validated body missing index_name".into());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn fault_body_serializes() {
        let body = FaultBody {
            status: "err".to_string(),
            error: "upstream Splunk error: boom".to_string(),
            msg: FAULT_MSG.to_string(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains(r#""status":"err""#));
        assert!(json.contains("boom"));
        assert!(json.contains("We're sorry"));
    }

    // ── into_response tests ──────────────────────────────────────

    use http_body_util::BodyExt;

    /// Helper to extract status and body from a Response.
    async fn response_parts(err: AppError) -> (StatusCode, FaultBody) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: FaultBody = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn into_response_upstream_carries_fault_description() {
        let err = AppError::Upstream(SplunkApiError::ApiError {
            endpoint: "POST /data/indexes".into(),
            status: 500,
            body: "splunkd fell over".into(),
        });
        let (status, body) = response_parts(err).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body.status, "err");
        assert!(body.error.contains("splunkd fell over"));
        assert_eq!(body.msg, FAULT_MSG);
    }

    #[tokio::test]
    async fn into_response_service_unavailable() {
        let err = AppError::service_unavailable("Splunk client not configured");
        let (status, body) = response_parts(err).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body.error.contains("not configured"));
        assert_eq!(body.msg, FAULT_MSG);
    }

    #[tokio::test]
    async fn into_response_internal() {
        let err = AppError::Internal("unreachable state".into());
        let (status, body) = response_parts(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.status, "err");
        assert!(body.error.contains("unreachable state"));
    }
}
