//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `blogs`, `chat`, `toast`) so
//! individual pages and components can depend on small focused models.
//! Each is provided as an `RwSignal` through Leptos context.

pub mod blogs;
pub mod chat;
pub mod session;
pub mod toast;
