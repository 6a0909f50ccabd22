//! Overlay rendering the toast queue.
//!
//! DESIGN
//! ======
//! Reads `ToastState` from context; toasts dismiss themselves after the
//! `util::notify` timer fires, or immediately on click.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Fixed overlay showing active toasts, oldest on top.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let is_error = toast.kind == ToastKind::Error;
                        let is_success = !is_error;
                        let id = toast.id;
                        let message = toast.message;
                        view! {
                            <div
                                class="toast"
                                class:toast--error=is_error
                                class:toast--success=is_success
                                on:click=move |_| toasts.update(|state| state.dismiss(&id))
                            >
                                <span class="toast__message">{message}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
