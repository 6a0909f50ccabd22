//! Top navigation bar with auth-dependent links.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar is the one piece of chrome rendered on every route; it reads
//! the session for identity display and owns the logout action.

use leptos::prelude::*;

use crate::state::session::{self, SessionState};

/// Fixed top navigation: brand, route links, and identity/logout controls.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let greeting = move || {
        session
            .get()
            .user
            .map(|user| user.display_name().to_owned())
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        session::clear(session);
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        }
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">
                "MiniBlog"
            </a>
            <div class="navbar__links">
                <a class="navbar__link" href="/">
                    "Home"
                </a>
                <a class="navbar__link" href="/support">
                    "AI Support"
                </a>
                <Show
                    when=move || session.get().authenticated
                    fallback=move || {
                        view! {
                            <a class="navbar__link" href="/auth/login">
                                "Login"
                            </a>
                            <a class="navbar__link navbar__link--cta" href="/auth/signup">
                                "Sign Up"
                            </a>
                        }
                    }
                >
                    <a class="navbar__link" href="/blogs/create">
                        "Create Blog"
                    </a>
                    <span class="navbar__user">{greeting}</span>
                    <button class="btn navbar__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
