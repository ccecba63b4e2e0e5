//! Error types for schema compilation.

use thiserror::Error;

/// Error constructing a [`crate::SchemaValidator`].
///
/// Raised only at construction time. A schema that compiles never produces
/// this error again; per-request validation failures are reported as
/// [`crate::Violation`]s, not errors.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The schema document is not itself a well-formed Draft 7 schema.
    #[error("schema is not a valid JSON Schema Draft 7 document: {reason}")]
    InvalidSchema {
        /// Compiler diagnostic describing what is wrong with the schema.
        reason: String,
    },
}
