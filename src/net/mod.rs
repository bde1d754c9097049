//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns transport (credentials, timeouts, status mapping), `auth` is the
//! session store's seam, `api` covers content endpoints, and `types` defines
//! the wire schema.

pub mod api;
pub mod auth;
pub mod error;
pub mod http;
pub mod types;
