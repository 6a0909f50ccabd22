//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, guards, form
//! validation) and delegates shared rendering to `components`.

pub mod blog_create;
pub mod blog_edit;
pub mod blog_view;
pub mod home;
pub mod login;
pub mod signup;
pub mod support;
