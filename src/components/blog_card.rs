//! Reusable card component for blog list entries.
//!
//! DESIGN
//! ======
//! Keeps list presentation consistent on the home feed while centralizing
//! the author-only delete flow: confirm dialog, `DELETE /blogs/{id}`, then
//! store removal and a caller-driven refetch.

use leptos::prelude::*;

use crate::net::api::{ApiHandle, blog_endpoint};
use crate::net::types::Blog;
use crate::state::blogs::BlogsState;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::util::{date, text};

/// A card for one blog: preview, author/date line, and author-only actions.
#[component]
pub fn BlogCard(blog: Blog, on_update: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let blogs = expect_context::<RwSignal<BlogsState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let api = ApiHandle::new(session, toasts);

    let id = blog.id;
    let author_id = blog.author.id;
    let title = blog.title.clone();
    let preview_text = text::preview(&blog.content);
    let author_name = blog.author.display_name().to_owned();
    let created_label = date::format_short(&blog.created_at);
    let href = blog_endpoint(id);
    let edit_href = format!("{href}/edit");

    let show_confirm = RwSignal::new(false);
    let is_author = move || session.get().is_current_user(author_id);

    let on_confirm_delete = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let response = api
                    .execute::<serde_json::Value>(
                        crate::net::api::Method::Delete,
                        &blog_endpoint(id),
                        None,
                    )
                    .await;
                if response.is_some() {
                    blogs.update(|state| state.remove_blog(id));
                    show_confirm.set(false);
                    on_update.run(());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (blogs, on_update);
        }
    });

    view! {
        <div class="blog-card">
            <a class="blog-card__title" href=href.clone()>
                {title}
            </a>
            <p class="blog-card__preview">{preview_text}</p>
            <div class="blog-card__meta">
                <span class="blog-card__author">{author_name}</span>
                <span class="blog-card__date">{created_label}</span>
            </div>
            <div class="blog-card__actions">
                <a class="btn btn--primary blog-card__read" href=href>
                    "Read More"
                </a>
                <Show when=is_author>
                    <a class="btn blog-card__edit" href=edit_href.clone()>
                        "Edit"
                    </a>
                    <button
                        class="btn btn--danger blog-card__delete"
                        disabled=move || api.loading.get()
                        on:click=move |_| show_confirm.set(true)
                    >
                        "Delete"
                    </button>
                </Show>
            </div>
            <Show when=move || show_confirm.get()>
                <DeleteBlogDialog
                    deleting=api.loading
                    on_confirm=on_confirm_delete
                    on_cancel=Callback::new(move |()| show_confirm.set(false))
                />
            </Show>
        </div>
    }
}

/// Modal confirm dialog for deleting a blog.
#[component]
fn DeleteBlogDialog(
    deleting: RwSignal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h3>"Delete Blog"</h3>
                <p class="dialog__danger">
                    "Are you sure you want to delete this blog? This action cannot be undone."
                </p>
                <div class="dialog__actions">
                    <button
                        class="btn btn--danger"
                        disabled=move || deleting.get()
                        on:click=move |_| on_confirm.run(())
                    >
                        {move || if deleting.get() { "Deleting..." } else { "Delete" }}
                    </button>
                    <button
                        class="btn"
                        disabled=move || deleting.get()
                        on:click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </button>
                </div>
            </div>
        </div>
    }
}
