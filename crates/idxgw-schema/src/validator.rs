//! # Schema Validation
//!
//! Runtime validation of JSON request bodies against a JSON Schema
//! (Draft 7) document.
//!
//! ## Trust Boundary
//!
//! Validation is the gate between raw client input and handler code. A
//! handler behind a compiled schema only ever sees values that satisfied
//! every constraint of that schema. Candidates that fail are rejected with
//! structured violation information including the instance path, the schema
//! path, and a human-readable message.
//!
//! ## Lifecycle
//!
//! The schema is compiled once, at route registration. A malformed schema
//! document is a programmer error and fails construction immediately; it is
//! never reported as a per-request condition.

use std::fmt;

use jsonschema::Validator;
use serde_json::Value;

use crate::error::SchemaError;

/// A single validation violation with structured context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer path to the violating field in the candidate.
    pub instance_path: String,
    /// JSON Pointer path within the schema that triggered the error.
    pub schema_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.instance_path, self.message)
        }
    }
}

/// A compiled JSON Schema Draft 7 document.
///
/// Answers two questions about candidate JSON values: "is this valid?"
/// ([`is_valid`](Self::is_valid)) and "what, precisely, is wrong?"
/// ([`violations`](Self::violations)). The original schema document is
/// retained verbatim so callers can echo it back in error responses.
///
/// ## Thread Safety
///
/// `SchemaValidator` is `Send + Sync` and holds no mutable state after
/// construction. One instance is safely shared across concurrent requests.
pub struct SchemaValidator {
    /// The schema document exactly as supplied.
    schema: Value,
    /// Compiled form used for all checks.
    compiled: Validator,
}

impl fmt::Debug for SchemaValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaValidator")
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

impl SchemaValidator {
    /// Compile `schema` as a JSON Schema Draft 7 document.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidSchema`] if `schema` is not itself a
    /// well-formed Draft 7 schema (for example `"type": 12`, or `"required"`
    /// holding anything but an array of strings). This is checked here,
    /// eagerly, so misconfigured routes fail at startup.
    pub fn new(schema: Value) -> Result<Self, SchemaError> {
        let mut options = jsonschema::options();
        options.with_draft(jsonschema::Draft::Draft7);

        let compiled = options
            .build(&schema)
            .map_err(|e| SchemaError::InvalidSchema {
                reason: e.to_string(),
            })?;

        Ok(Self { schema, compiled })
    }

    /// The schema document exactly as supplied to [`new`](Self::new).
    pub fn schema(&self) -> &Value {
        &self.schema
    }

    /// Whether `candidate` satisfies the schema. Pure predicate.
    pub fn is_valid(&self, candidate: &Value) -> bool {
        self.compiled.is_valid(candidate)
    }

    /// Every violation found in `candidate`, one entry per independent
    /// violation. Does not stop at the first.
    ///
    /// Ordering follows the compiled schema's traversal order, which is
    /// deterministic: the same schema and candidate always produce the same
    /// sequence.
    pub fn violations(&self, candidate: &Value) -> Vec<Violation> {
        self.compiled
            .iter_errors(candidate)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            })
            .collect()
    }

    /// The violation messages alone, in [`violations`](Self::violations)
    /// order. This is the shape error envelopes carry.
    pub fn error_messages(&self, candidate: &Value) -> Vec<String> {
        self.violations(candidate)
            .into_iter()
            .map(|v| v.message)
            .collect()
    }
}
