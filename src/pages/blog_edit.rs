//! Blog edit page (guarded route, author-only).
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches the blog by route id, verifies ownership before showing the
//! form, and replaces the list-store entry in place after a successful
//! `PUT /blogs/{id}`.

#[cfg(test)]
#[path = "blog_edit_test.rs"]
mod blog_edit_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::api::{ApiHandle, blog_endpoint};
use crate::net::types::{Blog, UpdateBlogRequest};
use crate::state::blogs::BlogsState;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::util::auth::install_unauth_redirect;

use super::blog_create::{BlogFieldErrors, validate_blog_input};

/// Validate the edit form and build the update payload.
fn build_update_request(title: &str, content: &str) -> Result<UpdateBlogRequest, BlogFieldErrors> {
    validate_blog_input(title, content).map(|request| UpdateBlogRequest {
        title: request.title,
        content: request.content,
    })
}

/// Edit-blog form, reachable only by the blog's author.
#[component]
pub fn BlogEditPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let blogs = expect_context::<RwSignal<BlogsState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let fetch_api = ApiHandle::new(session, toasts);
    let update_api = ApiHandle::new(session, toasts).with_success_toast();
    let navigate = use_navigate();
    let params = use_params_map();

    install_unauth_redirect(session, navigate.clone());

    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let field_errors = RwSignal::new(BlogFieldErrors::default());
    let loaded = RwSignal::new(None::<Blog>);
    let reject_home = RwSignal::new(false);
    let saved_id = RwSignal::new(None::<i64>);
    let fetched_id = RwSignal::new(None::<i64>);

    let navigate_home = navigate.clone();
    Effect::new(move || {
        if reject_home.get() {
            navigate_home("/", NavigateOptions::default());
        }
    });

    let navigate_saved = navigate.clone();
    Effect::new(move || {
        if let Some(id) = saved_id.get() {
            navigate_saved(&blog_endpoint(id), NavigateOptions::default());
        }
    });

    Effect::new(move || {
        // The unauth guard handles logged-out visitors; don't fetch for them.
        let state = session.get();
        if state.loading || !state.authenticated {
            return;
        }
        let Some(id) = params.read().get("id").and_then(|raw| raw.parse::<i64>().ok()) else {
            return;
        };
        if fetched_id.get() == Some(id) {
            return;
        }
        fetched_id.set(Some(id));
        fetch_for_edit(fetch_api, session, toasts, id, loaded, title, content, reject_home);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if update_api.loading.get() {
            return;
        }
        let Some(blog) = loaded.get_untracked() else {
            return;
        };
        let request = match build_update_request(&title.get(), &content.get()) {
            Ok(request) => {
                field_errors.set(BlogFieldErrors::default());
                request
            }
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let response = update_api
                .execute::<Blog>(
                    crate::net::api::Method::Put,
                    &blog_endpoint(blog.id),
                    crate::net::api::to_payload(&request),
                )
                .await;
            if let Some(envelope) = response {
                let updated = envelope.data;
                blogs.update(|state| state.update_blog(updated.id, updated.clone()));
                saved_id.set(Some(updated.id));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (blog, request, blogs);
        }
    };

    view! {
        <Show when=move || session.get().authenticated>
            <div class="blog-form-page">
                <Show
                    when=move || loaded.get().is_some()
                    fallback=|| view! { <p class="blog-form-page__loading">"Loading blog..."</p> }
                >
                    <h1>"Edit Blog"</h1>
                    <form class="blog-form" on:submit=on_submit>
                        <label class="blog-form__label">
                            "Blog Title *"
                            <input
                                class="blog-form__input"
                                type="text"
                                prop:value=move || title.get()
                                on:input=move |ev| title.set(event_target_value(&ev))
                            />
                        </label>
                        <Show when=move || field_errors.get().title.is_some()>
                            <p class="blog-form__error">
                                {move || field_errors.get().title.unwrap_or_default()}
                            </p>
                        </Show>
                        <label class="blog-form__label">
                            "Blog Content *"
                            <textarea
                                class="blog-form__textarea"
                                rows=12
                                prop:value=move || content.get()
                                on:input=move |ev| content.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <Show when=move || field_errors.get().content.is_some()>
                            <p class="blog-form__error">
                                {move || field_errors.get().content.unwrap_or_default()}
                            </p>
                        </Show>
                        <div class="blog-form__actions">
                            <button
                                class="btn btn--primary"
                                type="submit"
                                disabled=move || update_api.loading.get()
                            >
                                {move || {
                                    if update_api.loading.get() { "Saving..." } else { "Save Changes" }
                                }}
                            </button>
                            <a class="btn" href="/">
                                "Cancel"
                            </a>
                        </div>
                    </form>
                </Show>
            </div>
        </Show>
    }
}

/// Fetch the blog to edit, enforcing that only its author may proceed.
#[allow(clippy::too_many_arguments)]
fn fetch_for_edit(
    api: ApiHandle,
    session: RwSignal<SessionState>,
    toasts: RwSignal<ToastState>,
    id: i64,
    loaded: RwSignal<Option<Blog>>,
    title: RwSignal<String>,
    content: RwSignal<String>,
    reject_home: RwSignal<bool>,
) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let response = api
                .execute::<Blog>(crate::net::api::Method::Get, &blog_endpoint(id), None)
                .await;
            match response {
                Some(envelope) => {
                    let blog = envelope.data;
                    if !session.get_untracked().is_current_user(blog.author.id) {
                        crate::util::notify::push_error(toasts, "You can only edit your own blogs");
                        reject_home.set(true);
                        return;
                    }
                    title.set(blog.title.clone());
                    content.set(blog.content.clone());
                    loaded.set(Some(blog));
                }
                None => {
                    crate::util::notify::push_error(toasts, "Blog not found");
                    reject_home.set(true);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, session, toasts, id, loaded, title, content, reject_home);
    }
}
