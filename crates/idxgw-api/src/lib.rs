//! # idxgw-api -- HTTP Gateway for Splunk Index Provisioning
//!
//! A thin validating front-end over the Splunk REST API. Requests to the
//! write surface are checked against a declared JSON Schema before any
//! handler logic runs; only schema-valid submissions reach Splunk.
//!
//! ## API Surface
//!
//! | Route               | Method | Module              | Behavior                       |
//! |---------------------|--------|---------------------|--------------------------------|
//! | `/`                 | GET    | [`app`]             | Greeting                       |
//! | `/index`            | POST   | [`routes::indexes`] | Validated index creation       |
//! | `/health/liveness`  | GET    | [`app`]             | Process liveness               |
//! | `/health/readiness` | GET    | [`app`]             | Readiness to serve             |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! CorsLayer → TraceLayer → validate_json_body → Handler
//! ```
//!
//! The validation gate is per-route; `/`, `/health/*` sit outside it.

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use idxgw_schema::SchemaError;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
///
/// Fails only when a route's schema document does not compile, which is a
/// programming error surfaced at startup rather than per request.
pub fn app(state: AppState) -> Result<Router, SchemaError> {
    let cors = CorsLayer::permissive();

    // Schema-gated API routes.
    let api = Router::new()
        .merge(routes::indexes::router()?)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Ungated probes and greeting.
    let public = Router::new()
        .route("/", axum::routing::get(hello))
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Ok(Router::new().merge(public).merge(api).layer(cors))
}

/// GET / greeting, handy as a smoke check that the server is up.
async fn hello() -> &'static str {
    "Hello, World! You've successfully called the index gateway."
}

/// Liveness probe, returns 200 whenever the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe, returns 200 when the application is ready to serve.
async fn readiness() -> &'static str {
    "ready"
}
