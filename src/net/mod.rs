//! Networking for the capabilities REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds endpoints and performs the HTTP calls, `types` defines the
//! wire schema.

pub mod api;
pub mod types;
