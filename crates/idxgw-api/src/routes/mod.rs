//! # API Route Modules
//!
//! Route modules for the index gateway API surface:
//!
//! - `indexes`: index provisioning. `POST /index` sits behind the JSON
//!   Schema validation gate and forwards accepted submissions to Splunk
//!   via `idxgw-splunk-client`.

pub mod indexes;
