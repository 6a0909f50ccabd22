//! Blog detail page with rendered Markdown content.

#[cfg(test)]
#[path = "blog_view_test.rs"]
mod blog_view_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::api::{ApiHandle, blog_endpoint};
use crate::net::types::Blog;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::util::{date, markdown};

/// Parse the `:id` route segment into a blog id.
fn parse_blog_id(raw: Option<String>) -> Option<i64> {
    raw?.parse().ok()
}

/// Blog detail page — fetches by route id and renders the Markdown body.
#[component]
pub fn BlogViewPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let api = ApiHandle::new(session, toasts);
    let params = use_params_map();

    let blog = RwSignal::new(None::<Blog>);
    let fetched_id = RwSignal::new(None::<i64>);

    Effect::new(move || {
        let Some(id) = parse_blog_id(params.read().get("id")) else {
            return;
        };
        if fetched_id.get() == Some(id) {
            return;
        }
        fetched_id.set(Some(id));
        fetch_blog(api, id, blog);
    });

    view! {
        <div class="blog-view-page">
            <Show
                when=move || !api.loading.get()
                fallback=|| view! { <p class="blog-view-page__loading">"Loading blog..."</p> }
            >
                <Show
                    when=move || blog.get().is_some()
                    fallback=|| {
                        view! {
                            <div class="blog-view-page__missing">
                                <p>"Blog not found"</p>
                                <a class="btn btn--primary" href="/">
                                    "Go back to home"
                                </a>
                            </div>
                        }
                    }
                >
                    {move || blog.get().map(|blog| view! { <BlogArticle blog=blog/> })}
                </Show>
            </Show>
        </div>
    }
}

/// The fetched article: header, metadata, body, and author-only edit link.
#[component]
fn BlogArticle(blog: Blog) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let author_id = blog.author.id;
    let author_name = blog.author.display_name().to_owned();
    let created_label = date::format_long(&blog.created_at);
    let updated_label =
        (blog.updated_at != blog.created_at).then(|| date::format_long(&blog.updated_at));
    let rendered = markdown::render_markdown_html(&blog.content);
    let edit_href = format!("{}/edit", blog_endpoint(blog.id));

    let is_author = move || session.get().is_current_user(author_id);

    view! {
        <article class="blog-article">
            <header class="blog-article__header">
                <h1>{blog.title}</h1>
                <div class="blog-article__meta">
                    <p class="blog-article__author">"By " {author_name}</p>
                    <p class="blog-article__date">{created_label}</p>
                    {updated_label
                        .map(|label| {
                            view! { <p class="blog-article__updated">"Updated: " {label}</p> }
                        })}
                    <Show when=is_author>
                        <a class="btn blog-article__edit" href=edit_href.clone()>
                            "Edit Blog"
                        </a>
                    </Show>
                </div>
            </header>
            <div class="blog-article__content markdown-content" inner_html=rendered></div>
            <footer class="blog-article__footer">
                <a class="btn" href="/">
                    "Back to all blogs"
                </a>
            </footer>
        </article>
    }
}

/// Fetch `GET /blogs/{id}` into the page-local signal.
fn fetch_blog(api: ApiHandle, id: i64, blog: RwSignal<Option<Blog>>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let response = api
                .execute::<Blog>(crate::net::api::Method::Get, &blog_endpoint(id), None)
                .await;
            blog.set(response.map(|envelope| envelope.data));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, id, blog);
    }
}
