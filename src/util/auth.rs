//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded routes should apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Whether a guarded route should bounce to the login page: the session has
/// finished rehydrating and nobody is logged in.
pub(crate) fn should_redirect(state: &SessionState) -> bool {
    !state.loading && !state.authenticated
}

/// Redirect to `/auth/login` whenever the session has loaded and no user is
/// present.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        if should_redirect(&session.get()) {
            navigate("/auth/login", NavigateOptions::default());
        }
    });
}

/// Redirect home whenever the session becomes authenticated. Login and
/// signup pages install this so a successful `set_auth` navigates without
/// the submit handler touching the router.
pub fn install_authed_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        if session.get().authenticated {
            navigate("/", NavigateOptions::default());
        }
    });
}
