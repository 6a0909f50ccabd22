//! # miniblog-client
//!
//! Leptos + WASM frontend for the MiniBlog platform: signup/login, a public
//! blog feed, author-only create/edit/delete, Markdown-rendered blog pages,
//! and an AI support chat.
//!
//! This crate contains pages, components, application state, and the
//! request executor for the blog API. A host server mounts `app::shell`
//! for SSR; the browser entry point is [`hydrate`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs the panic hook, wires console logging,
/// and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
