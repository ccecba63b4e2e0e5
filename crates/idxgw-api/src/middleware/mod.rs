//! # Middleware Stack
//!
//! Tower middleware for the API layer:
//! - [`validate`]: JSON Schema request-body validation in front of a handler.

pub mod validate;
