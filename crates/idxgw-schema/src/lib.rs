//! # idxgw-schema
//!
//! JSON Schema Draft 7 validation for the index gateway.
//!
//! A [`SchemaValidator`] is constructed once per route from the schema that
//! route declares, and reused for every request. Construction compiles the
//! schema and rejects documents that are not themselves well-formed Draft 7
//! schemas, so a broken schema is a startup failure rather than a request-time
//! surprise.
//!
//! ```
//! use idxgw_schema::SchemaValidator;
//! use serde_json::json;
//!
//! let validator = SchemaValidator::new(json!({
//!     "type": "object",
//!     "properties": { "index_name": { "type": "string" } },
//!     "required": ["index_name"],
//! }))
//! .expect("well-formed schema");
//!
//! assert!(validator.is_valid(&json!({ "index_name": "sales" })));
//! assert!(!validator.is_valid(&json!({})));
//! ```

pub mod error;
pub mod validator;

pub use error::SchemaError;
pub use validator::{SchemaValidator, Violation};
