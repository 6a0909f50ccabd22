//! Blog creation page (guarded route).

#[cfg(test)]
#[path = "blog_create_test.rs"]
mod blog_create_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiHandle;
use crate::net::types::CreateBlogRequest;
use crate::state::blogs::BlogsState;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::util::auth::install_unauth_redirect;
use crate::util::validate;

/// Per-field validation outcome for the blog form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(super) struct BlogFieldErrors {
    pub(super) title: Option<&'static str>,
    pub(super) content: Option<&'static str>,
}

/// Validate the blog form; shared with the edit page, which has the same
/// fields and rules.
pub(super) fn validate_blog_input(
    title: &str,
    content: &str,
) -> Result<CreateBlogRequest, BlogFieldErrors> {
    let title = validate::validate_title(title);
    let content = validate::validate_content(content);
    match (title, content) {
        (Ok(title), Ok(content)) => Ok(CreateBlogRequest { title, content }),
        (title, content) => Err(BlogFieldErrors {
            title: title.err(),
            content: content.err(),
        }),
    }
}

/// Create-blog form. On success the new blog is prepended to the list store
/// and the user lands back on the feed.
#[component]
pub fn BlogCreatePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let blogs = expect_context::<RwSignal<BlogsState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let api = ApiHandle::new(session, toasts).with_success_toast();
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate.clone());

    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let field_errors = RwSignal::new(BlogFieldErrors::default());
    let created = RwSignal::new(false);

    let navigate_home = navigate.clone();
    Effect::new(move || {
        if created.get() {
            navigate_home("/", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if api.loading.get() {
            return;
        }
        let request = match validate_blog_input(&title.get(), &content.get()) {
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
            let response = api
                .execute::<crate::net::types::Blog>(
                    crate::net::api::Method::Post,
                    "/blogs",
                    crate::net::api::to_payload(&request),
                )
                .await;
            if let Some(envelope) = response {
                blogs.update(|state| state.add_blog(envelope.data));
                created.set(true);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, blogs);
        }
    };

    view! {
        <Show when=move || session.get().authenticated>
            <div class="blog-form-page">
                <h1>"Create Blog"</h1>
                <form class="blog-form" on:submit=on_submit>
                    <label class="blog-form__label">
                        "Blog Title *"
                        <input
                            class="blog-form__input"
                            type="text"
                            placeholder="Enter your blog title"
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
                            placeholder="Write your blog content here... (Markdown supported)"
                            prop:value=move || content.get()
                            on:input=move |ev| content.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <Show when=move || field_errors.get().content.is_some()>
                        <p class="blog-form__error">
                            {move || field_errors.get().content.unwrap_or_default()}
                        </p>
                    </Show>
                    <p class="blog-form__hint">"You can use Markdown formatting in your content"</p>
                    <div class="blog-form__actions">
                        <button
                            class="btn btn--primary"
                            type="submit"
                            disabled=move || api.loading.get()
                        >
                            {move || if api.loading.get() { "Publishing..." } else { "Publish" }}
                        </button>
                        <a class="btn" href="/">
                            "Cancel"
                        </a>
                    </div>
                </form>
            </div>
        </Show>
    }
}
