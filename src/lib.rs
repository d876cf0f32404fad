//! # pytool
//!
//! Leptos + WASM frontend for the PyTool developer workspace: a Python code
//! runner, an HTTP request relay, a multi-provider AI chat, and a personal
//! dashboard of websites, servers, tasks and notes.
//!
//! All persistence and execution happen behind the PyTool REST backend; this
//! crate owns session handling, form state, client-side filtering and
//! rendering. Browser glue is compiled only with the `csr` feature so the
//! state and request-building logic builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
