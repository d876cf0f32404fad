//! Networking modules for the PyTool REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` covers auth and the single-action tools, `crud` the dashboard
//! collections, `error` the shared failure type, and `types` the wire schema.

pub mod api;
pub mod crud;
pub mod error;
pub mod types;
