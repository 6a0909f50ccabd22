//! AI support page: canned-answer chat plus an FAQ block.
//!
//! SYSTEM CONTEXT
//! ==============
//! Questions go to `POST /ai/query`; answers come back with the
//! knowledge-base source they were drawn from. The transcript is
//! page-local and vanishes on navigation.

use leptos::prelude::*;

use crate::net::api::ApiHandle;
use crate::state::chat::{ChatRole, ChatState};
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::util::markdown;
use crate::util::validate;

/// Support chat page.
#[component]
pub fn SupportPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let api = ApiHandle::new(session, toasts);

    let chat = RwSignal::new(ChatState::default());
    let question = RwSignal::new(String::new());
    let question_error = RwSignal::new(None::<&'static str>);
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the transcript scrolled to the newest message.
    Effect::new(move || {
        let state = chat.get();
        let _ = state.messages.len();
        let _ = state.loading;

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if chat.get().loading {
            return;
        }
        let asked = match validate::validate_question(&question.get()) {
            Ok(asked) => {
                question_error.set(None);
                asked
            }
            Err(message) => {
                question_error.set(Some(message));
                return;
            }
        };

        chat.update(|state| {
            state.push_user(asked.clone());
            state.loading = true;
        });
        question.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let response = api
                .execute::<crate::net::types::AiQueryResponse>(
                    crate::net::api::Method::Post,
                    "/ai/query",
                    crate::net::api::to_payload(&crate::net::types::AiQueryRequest {
                        question: asked,
                    }),
                )
                .await;
            chat.update(|state| {
                if let Some(envelope) = response {
                    state.push_assistant(envelope.data.answer, envelope.data.source);
                }
                state.loading = false;
            });
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (api, asked);
            chat.update(|state| state.loading = false);
        }
    };

    view! {
        <div class="support-page">
            <div class="support-chat">
                <header class="support-chat__header">
                    <h1>"AI Support Assistant"</h1>
                    <p>"Ask me anything about the Mini Blog Platform!"</p>
                </header>

                <div class="support-chat__messages" node_ref=messages_ref>
                    <Show when=move || chat.get().messages.is_empty()>
                        <div class="support-chat__empty">
                            <p>"Hello! How can I help you today?"</p>
                            <p class="support-chat__empty-hint">"Try asking:"</p>
                            <ul>
                                <li>"How do I sign up?"</li>
                                <li>"How to create a blog?"</li>
                                <li>"Who can see my blogs?"</li>
                                <li>"How to edit or delete a blog?"</li>
                                <li>"What features are available?"</li>
                            </ul>
                        </div>
                    </Show>

                    {move || {
                        chat.get()
                            .messages
                            .into_iter()
                            .map(|message| {
                                let is_assistant = message.role == ChatRole::Assistant;
                                let is_user = !is_assistant;
                                let content = message.content;
                                let source = message.source;
                                let body = if is_assistant {
                                    let rendered = markdown::render_markdown_html(&content);
                                    view! {
                                        <div
                                            class="support-chat__markdown"
                                            inner_html=rendered
                                        ></div>
                                    }
                                        .into_any()
                                } else {
                                    view! { <span>{content}</span> }.into_any()
                                };
                                view! {
                                    <div
                                        class="support-chat__message"
                                        class:support-chat__message--assistant=is_assistant
                                        class:support-chat__message--user=is_user
                                    >
                                        {body}
                                        {source
                                            .map(|source| {
                                                view! {
                                                    <p class="support-chat__source">"Source: " {source}</p>
                                                }
                                            })}
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}

                    {move || {
                        chat.get()
                            .loading
                            .then(|| view! { <div class="support-chat__loading">"Thinking..."</div> })
                    }}
                </div>

                <form class="support-chat__input-row" on:submit=on_submit>
                    <input
                        class="support-chat__input"
                        type="text"
                        placeholder="Type your question here..."
                        disabled=move || chat.get().loading
                        prop:value=move || question.get()
                        on:input=move |ev| question.set(event_target_value(&ev))
                    />
                    <button
                        class="btn btn--primary support-chat__send"
                        type="submit"
                        disabled=move || chat.get().loading
                    >
                        {move || if chat.get().loading { "Sending..." } else { "Send" }}
                    </button>
                </form>
                <Show when=move || question_error.get().is_some()>
                    <p class="support-chat__error">
                        {move || question_error.get().unwrap_or_default()}
                    </p>
                </Show>
            </div>

            <section class="support-faq">
                <h2>"Frequently Asked Questions"</h2>
                <details>
                    <summary>"How do I sign up?"</summary>
                    <p>
                        "Click the \"Sign Up\" button and provide your email and password. You can also add your name optionally."
                    </p>
                </details>
                <details>
                    <summary>"How do I create a blog?"</summary>
                    <p>"After logging in, click \"Create Blog\", enter your title and content, then publish!"</p>
                </details>
                <details>
                    <summary>"Can I edit my blogs?"</summary>
                    <p>
                        "Yes! Only you can edit or delete your own blogs. Look for the Edit and Delete buttons on your blog posts."
                    </p>
                </details>
                <details>
                    <summary>"Who can see my blogs?"</summary>
                    <p>"All published blogs are visible to everyone, including visitors who are not logged in."</p>
                </details>
            </section>
        </div>
    }
}
