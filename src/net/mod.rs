//! Networking modules for the auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the transport seam and the browser implementation, and
//! `types` defines the JSON wire schema shared with the `cli` package.

pub mod api;
pub mod types;
