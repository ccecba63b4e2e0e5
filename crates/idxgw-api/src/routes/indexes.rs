//! # Index Provisioning Routes
//!
//! The gateway's write surface. A submission that clears the validation
//! gate is forwarded to Splunk as an index-creation call; the caller gets
//! a fixed acknowledgement rather than the raw Splunk entry.
//!
//! | Route    | Method | Body contract    | Downstream                     |
//! |----------|--------|------------------|--------------------------------|
//! | `/index` | POST   | [`index_schema`] | `POST .../data/indexes` Splunk |

use axum::extract::State;
use axum::middleware::from_fn;
use axum::routing::post;
use axum::{Extension, Json, Router};
use idxgw_schema::SchemaError;
use idxgw_splunk_client::indexes::CreateIndexRequest;
use idxgw_splunk_client::SplunkClient;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::AppError;
use crate::middleware::validate::{validate_json_body, SchemaGate, ValidatedBody};
use crate::state::AppState;

/// Body contract for `POST /index`: an object with a mandatory string
/// `index_name`.
pub fn index_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "index_name": { "type": "string" }
        },
        "required": ["index_name"]
    })
}

/// Build the index provisioning router.
///
/// Compiles the body schema up front; a malformed schema document aborts
/// router construction rather than surfacing per request.
pub fn router() -> Result<Router<AppState>, SchemaError> {
    let gate = SchemaGate::new(index_schema())?;
    Ok(Router::new()
        .route("/index", post(create_index))
        .route_layer(from_fn(validate_json_body))
        .route_layer(Extension(gate)))
}

/// Helper: extract the Splunk client from AppState or return 503.
fn require_splunk_client(state: &AppState) -> Result<&SplunkClient, AppError> {
    state.splunk.as_ref().ok_or_else(|| {
        AppError::service_unavailable(
            "Splunk client not configured. Set SPLUNK_USERNAME and SPLUNK_PASSWORD \
             environment variables.",
        )
    })
}

// -- Response DTOs -------------------------------------------------------------

/// Acknowledgement returned for an accepted submission.
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmissionAccepted {
    pub status: String,
    pub msg: String,
}

// ── INDEX HANDLERS ──────────────────────────────────────────────────

/// POST /index: create a Splunk index named by the validated body.
async fn create_index(
    State(state): State<AppState>,
    Extension(ValidatedBody(body)): Extension<ValidatedBody>,
) -> Result<Json<SubmissionAccepted>, AppError> {
    let client = require_splunk_client(&state)?;

    // The gate guarantees a string `index_name`; losing it here means the
    // route was wired without its schema.
    let index_name = body
        .get("index_name")
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::Internal("validated body lost its index_name".into()))?;

    let entry = client
        .indexes()
        .create(&CreateIndexRequest::named(index_name))
        .await?;

    tracing::info!(index = %entry.name, "created Splunk index");

    Ok(Json(SubmissionAccepted {
        status: "success".to_string(),
        msg: "Thank you for your submission to create an index.".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use idxgw_schema::SchemaValidator;

    #[test]
    fn index_schema_compiles() {
        assert!(SchemaValidator::new(index_schema()).is_ok());
    }

    #[test]
    fn index_schema_requires_string_name() {
        let validator = SchemaValidator::new(index_schema()).unwrap();
        assert!(validator.is_valid(&json!({ "index_name": "sales" })));
        assert!(!validator.is_valid(&json!({})));
        assert!(!validator.is_valid(&json!({ "index_name": 42 })));
    }

    #[test]
    fn router_builds() {
        assert!(router().is_ok());
    }

    #[test]
    fn missing_client_yields_service_unavailable() {
        let state = AppState::new();
        let err = require_splunk_client(&state).unwrap_err();
        assert!(matches!(err, AppError::ServiceUnavailable(_)));
    }
}
