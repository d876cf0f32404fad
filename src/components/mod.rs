//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Generic dashboard building blocks (`entity_panel`, `entity_modal`,
//! `filter_bar`, `draft_input`) are instantiated once per entity kind; the
//! per-kind modules only supply card and form markup.

pub mod copy_button;
pub mod draft_input;
pub mod entity_modal;
pub mod entity_panel;
pub mod filter_bar;
pub mod notes;
pub mod servers;
pub mod sidebar;
pub mod tasks;
pub mod websites;
