//! Networking modules for the blog REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `context` carries the shared bearer credential
//! applied to outgoing requests, and `types` defines the wire schema.

pub mod api;
pub mod context;
pub mod types;
