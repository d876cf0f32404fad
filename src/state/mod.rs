//! Client state modules shared through Leptos context.
//!
//! ARCHITECTURE
//! ============
//! State structs are plain data with pure transition methods; pages wrap them
//! in `RwSignal`s and drive the network side effects.

pub mod auth;
pub mod chat;
pub mod collection;
pub mod entities;
pub mod ui;
