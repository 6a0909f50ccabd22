//! Home page: hero banner plus the latest-blogs feed.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the public landing route. It fetches the blog list once on
//! mount into the shared list store and re-fetches after card-level
//! mutations (delete) so the feed tracks the server.

use leptos::prelude::*;

use crate::components::blog_card::BlogCard;
use crate::net::api::ApiHandle;
use crate::state::blogs::BlogsState;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;

/// Home page — hero section and the blog grid.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let blogs = expect_context::<RwSignal<BlogsState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let api = ApiHandle::new(session, toasts);

    let fetched = RwSignal::new(false);
    Effect::new(move || {
        if fetched.get() {
            return;
        }
        fetched.set(true);
        fetch_blogs(api, blogs);
    });

    let on_card_update = Callback::new(move |()| fetch_blogs(api, blogs));
    let authenticated = move || session.get().authenticated;

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Welcome to MiniBlog"</h1>
                <p class="home-page__tagline">
                    "Share your thoughts, read amazing stories, and connect with writers around the world"
                </p>
                <Show
                    when=authenticated
                    fallback=|| {
                        view! {
                            <div class="home-page__cta">
                                <a class="btn btn--primary" href="/auth/signup">
                                    "Get Started"
                                </a>
                                <a class="btn" href="/auth/login">
                                    "Sign In"
                                </a>
                            </div>
                        }
                    }
                >
                    <a class="btn btn--primary" href="/blogs/create">
                        "Create Your First Blog"
                    </a>
                </Show>
            </section>

            <section class="home-page__feed">
                <h2>"Latest Blogs"</h2>

                <Show when=move || blogs.get().error.is_some()>
                    <p class="home-page__error">{move || blogs.get().error.unwrap_or_default()}</p>
                </Show>

                <Show
                    when=move || !blogs.get().loading
                    fallback=|| view! { <p class="home-page__loading">"Loading blogs..."</p> }
                >
                    <Show
                        when=move || !blogs.get().blogs.is_empty() || blogs.get().error.is_some()
                        fallback=|| {
                            view! {
                                <p class="home-page__empty">
                                    "No blogs yet. Be the first to create one!"
                                </p>
                            }
                        }
                    >
                        <div class="home-page__grid">
                            {move || {
                                blogs
                                    .get()
                                    .blogs
                                    .into_iter()
                                    .map(|blog| {
                                        view! { <BlogCard blog=blog on_update=on_card_update/> }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </Show>
            </section>
        </div>
    }
}

/// Fetch `GET /blogs` into the list store.
fn fetch_blogs(api: ApiHandle, blogs: RwSignal<BlogsState>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            blogs.update(|state| state.set_loading(true));
            let response = api
                .execute::<Vec<crate::net::types::Blog>>(crate::net::api::Method::Get, "/blogs", None)
                .await;
            match response {
                Some(envelope) => blogs.update(|state| state.set_blogs(envelope.data)),
                None => blogs.update(|state| state.set_error(api.error.get_untracked())),
            }
            blogs.update(|state| state.set_loading(false));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, blogs);
    }
}
