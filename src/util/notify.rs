//! Toast raising helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and the request executor raise toasts through these functions so
//! the auto-dismiss timer is applied uniformly. Queue state itself lives in
//! `state::toast`; the timer is hydrate-only.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// How long a toast stays visible before dismissing itself.
#[cfg(feature = "hydrate")]
const AUTO_DISMISS: std::time::Duration = std::time::Duration::from_secs(4);

/// Raise a success toast.
pub fn push_success(toasts: RwSignal<ToastState>, message: &str) {
    push(toasts, ToastKind::Success, message);
}

/// Raise an error toast.
pub fn push_error(toasts: RwSignal<ToastState>, message: &str) {
    push(toasts, ToastKind::Error, message);
}

fn push(toasts: RwSignal<ToastState>, kind: ToastKind, message: &str) {
    let mut id = String::new();
    toasts.update(|state| id = state.push(kind, message.to_owned()));
    schedule_dismiss(toasts, id);
}

fn schedule_dismiss(toasts: RwSignal<ToastState>, id: String) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(AUTO_DISMISS).await;
            toasts.update(|state| state.dismiss(&id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (toasts, id);
    }
}
