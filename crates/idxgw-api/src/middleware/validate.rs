//! # JSON Schema Request Validation
//!
//! The validation gate in front of a route handler. A route opts in by
//! installing a [`SchemaGate`] extension and this middleware; the handler
//! behind it only ever runs with a body that parsed as JSON and satisfied
//! the route's schema.
//!
//! ## Pipeline
//!
//! ```text
//! request
//!   → content-type check    not exactly `application/json` → 400 plain string
//!   → JSON parse            failure → 400 error envelope
//!   → schema validation     violations → 400 error envelope
//!   → handler               runs with ValidatedBody in request extensions
//!   → MissingAlternative?   handler signal → 400 error envelope
//! ```
//!
//! ## Envelope
//!
//! Every validation failure shares one response shape:
//!
//! ```json
//! {
//!   "status": "err",
//!   "msg": "Invalid request body",
//!   "errors": ["\"index_name\" is a required property"],
//!   "expected": { "input": { "...schema..." : "" }, "format": "Defined by JSON Schema 7 | ..." }
//! }
//! ```
//!
//! The `expected` field echoes the schema the route registered so callers
//! can see the contract they missed.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::Request;
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use idxgw_schema::{SchemaError, SchemaValidator};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

/// The only media type the gate accepts. Compared for exact equality, so
/// parameterized values such as `application/json; charset=utf-8` are
/// rejected.
const JSON_MEDIA_TYPE: &str = "application/json";

/// Plain-string body returned on a content-type mismatch.
const CONTENT_TYPE_MSG: &str = "This endpoint only accepts 'application/json' bodies";

/// Summary line carried by every validation error envelope.
const INVALID_BODY_MSG: &str = "Invalid request body";

/// Label describing the schema language in the `expected.format` field.
const SCHEMA_FORMAT: &str =
    "Defined by JSON Schema 7 | https://json-schema.org/understanding-json-schema/index.html";

/// Largest request body the gate will buffer.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

// ── Envelope ─────────────────────────────────────────────────────────────────

/// Echo of the contract a failing request was expected to meet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpectedSchema {
    /// The schema the route registered.
    pub input: Value,
    /// Schema language label.
    pub format: String,
}

/// Uniform envelope for every validation failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Always `"err"`.
    pub status: String,
    /// Human summary.
    pub msg: String,
    /// One message per violation, in validator order.
    pub errors: Vec<String>,
    /// Expected contract. Absent only when the failure is produced outside
    /// a schema gate (the gate fills it in on the way out).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<ExpectedSchema>,
}

// ── SchemaGate ───────────────────────────────────────────────────────────────

/// A compiled schema attached to a route.
///
/// Installed as a request extension next to [`validate_json_body`]; clones
/// share one compiled validator.
#[derive(Debug, Clone)]
pub struct SchemaGate {
    validator: Arc<SchemaValidator>,
}

impl SchemaGate {
    /// Compile `schema` for the route. A malformed schema document fails
    /// here, at router construction, never per request.
    pub fn new(schema: Value) -> Result<Self, SchemaError> {
        Ok(Self {
            validator: Arc::new(SchemaValidator::new(schema)?),
        })
    }

    /// 400 response carrying `errors` and the schema echo.
    fn reject(&self, errors: Vec<String>) -> Response {
        let body = ErrorEnvelope {
            status: "err".to_string(),
            msg: INVALID_BODY_MSG.to_string(),
            errors,
            expected: Some(ExpectedSchema {
                input: self.validator.schema().clone(),
                format: SCHEMA_FORMAT.to_string(),
            }),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

// ── Handler contract ─────────────────────────────────────────────────────────

/// The parsed, schema-valid request body, injected into request extensions
/// for the handler behind the gate.
#[derive(Debug, Clone)]
pub struct ValidatedBody(pub Arc<Value>);

/// Handler signal: the body was schema-valid but none of a set of
/// alternative fields was supplied.
///
/// Handlers return this as their error; the gate recognizes it on the
/// response path and rewrites it into the full envelope with the schema
/// echo the handler cannot know. This is a typed contract between handler
/// and middleware, not a generic fault.
#[derive(Debug, Clone)]
pub struct MissingAlternative {
    /// Names of the fields, any one of which would have sufficed.
    pub fields: Vec<String>,
}

impl MissingAlternative {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// The synthesized error line, e.g. ``One of `a` or `b` is required``.
    pub fn message(&self) -> String {
        let quoted: Vec<String> = self.fields.iter().map(|f| format!("`{f}`")).collect();
        format!("One of {} is required", quoted.join(" or "))
    }
}

impl IntoResponse for MissingAlternative {
    fn into_response(self) -> Response {
        let body = ErrorEnvelope {
            status: "err".to_string(),
            msg: INVALID_BODY_MSG.to_string(),
            errors: vec![self.message()],
            expected: None,
        };
        let mut response = (StatusCode::BAD_REQUEST, Json(body)).into_response();
        // Marker for the gate, which replaces this response with one
        // carrying the schema echo.
        response.extensions_mut().insert(self);
        response
    }
}

// ── Middleware ───────────────────────────────────────────────────────────────

/// Middleware enforcing a route's JSON Schema contract on the request body.
///
/// Expects a [`SchemaGate`] in the request extensions, installed by the
/// route's `Extension` layer. The content-type check runs before the body
/// is touched: a request with the wrong media type is rejected without any
/// attempt to interpret its payload.
pub async fn validate_json_body(request: Request, next: Next) -> Response {
    let Some(gate) = request.extensions().get::<SchemaGate>().cloned() else {
        // A route wired through this middleware without a gate cannot
        // enforce its contract; fail closed.
        return AppError::Internal("no SchemaGate installed for this route".into())
            .into_response();
    };

    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());
    if content_type != Some(JSON_MEDIA_TYPE) {
        return (StatusCode::BAD_REQUEST, Json(CONTENT_TYPE_MSG)).into_response();
    }

    let (parts, body) = request.into_parts();
    let bytes = match axum::body::to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => return gate.reject(vec![format!("unable to read request body: {e}")]),
    };

    let parsed: Value = match serde_json::from_slice(&bytes) {
        Ok(value) => value,
        Err(e) => return gate.reject(vec![format!("request body is not valid JSON: {e}")]),
    };

    let violations = gate.validator.error_messages(&parsed);
    if !violations.is_empty() {
        return gate.reject(violations);
    }

    // The body is restored so handlers remain free to consume it directly.
    let mut request = Request::from_parts(parts, Body::from(bytes));
    request
        .extensions_mut()
        .insert(ValidatedBody(Arc::new(parsed)));

    let mut response = next.run(request).await;

    if let Some(missing) = response.extensions_mut().remove::<MissingAlternative>() {
        return gate.reject(vec![missing.message()]);
    }

    response
}
