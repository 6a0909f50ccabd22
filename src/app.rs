//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::toast_host::ToastHost;
use crate::pages::{
    blog_create::BlogCreatePage, blog_edit::BlogEditPage, blog_view::BlogViewPage, home::HomePage,
    login::LoginPage, signup::SignupPage, support::SupportPage,
};
use crate::state::blogs::BlogsState;
use crate::state::session::{self, SessionState};
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts, rehydrates the persisted session
/// once on the client, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let blogs = RwSignal::new(BlogsState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(session);
    provide_context(blogs);
    provide_context(toasts);

    // Load-at-start half of the session persistence pair; `set_auth` and
    // `clear` handle save-on-change.
    Effect::new(move || session::restore(session));

    view! {
        <Stylesheet id="leptos" href="/pkg/miniblog-client.css"/>
        <Title text="MiniBlog"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route
                        path=(StaticSegment("auth"), StaticSegment("login"))
                        view=LoginPage
                    />
                    <Route
                        path=(StaticSegment("auth"), StaticSegment("signup"))
                        view=SignupPage
                    />
                    <Route
                        path=(StaticSegment("blogs"), StaticSegment("create"))
                        view=BlogCreatePage
                    />
                    <Route
                        path=(StaticSegment("blogs"), ParamSegment("id"))
                        view=BlogViewPage
                    />
                    <Route
                        path=(StaticSegment("blogs"), ParamSegment("id"), StaticSegment("edit"))
                        view=BlogEditPage
                    />
                    <Route path=StaticSegment("support") view=SupportPage/>
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}
