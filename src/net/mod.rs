//! Networking modules for the blog API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the request executor, `types` defines the shared wire schema.
//! All traffic flows through the `{success, message, data}` envelope.

pub mod api;
pub mod types;
