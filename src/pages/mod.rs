//! Route-level page modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `login` is the unauthenticated route; `workspace` is the authenticated
//! shell that switches between the tool sections.

pub mod ai_chat;
pub mod api_caller;
pub mod code_runner;
pub mod dashboard;
pub mod login;
pub mod settings;
pub mod workspace;
