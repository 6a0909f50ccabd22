//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome and list items while reading/writing
//! shared state from Leptos context providers.

pub mod blog_card;
pub mod navbar;
pub mod toast_host;
