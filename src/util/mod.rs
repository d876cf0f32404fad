//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, clipboard, timers)
//! from page and component logic to improve reuse and testability.

pub mod auth;
pub mod clipboard;
pub mod images;
pub mod markdown;
pub mod storage;
