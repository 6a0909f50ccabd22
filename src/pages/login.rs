//! Login page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiHandle;
use crate::net::types::LoginRequest;
use crate::state::session::{self, SessionState};
use crate::state::toast::ToastState;
use crate::util::auth::install_authed_redirect;
use crate::util::validate;

/// Per-field validation outcome for the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct LoginFieldErrors {
    email: Option<&'static str>,
    password: Option<&'static str>,
}

/// Validate the form inputs; errors are surfaced inline, never sent.
fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, LoginFieldErrors> {
    let email = validate::validate_email(email);
    let password = validate::validate_password(password);
    match (email, password) {
        (Ok(email), Ok(password)) => Ok(LoginRequest { email, password }),
        (email, password) => Err(LoginFieldErrors {
            email: email.err(),
            password: password.err(),
        }),
    }
}

/// Login form; a successful call overwrites the session and redirects home.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let api = ApiHandle::new(session, toasts).with_success_toast();

    install_authed_redirect(session, use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(LoginFieldErrors::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if api.loading.get() {
            return;
        }
        let request = match validate_login_input(&email.get(), &password.get()) {
            Ok(request) => {
                field_errors.set(LoginFieldErrors::default());
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
                .execute::<crate::net::types::AuthResponse>(
                    crate::net::api::Method::Post,
                    "/auth/login",
                    crate::net::api::to_payload(&request),
                )
                .await;
            if let Some(envelope) = response {
                session::set_auth(session, envelope.data.user, envelope.data.token);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Welcome Back"</h2>
                <p class="auth-card__subtitle">
                    "Don't have an account? " <a href="/auth/signup">"Sign up"</a>
                </p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email address"
                        <input
                            class="auth-form__input"
                            type="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || field_errors.get().email.is_some()>
                        <p class="auth-form__error">
                            {move || field_errors.get().email.unwrap_or_default()}
                        </p>
                    </Show>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || field_errors.get().password.is_some()>
                        <p class="auth-form__error">
                            {move || field_errors.get().password.unwrap_or_default()}
                        </p>
                    </Show>
                    <button
                        class="btn btn--primary auth-form__submit"
                        type="submit"
                        disabled=move || api.loading.get()
                    >
                        {move || if api.loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
