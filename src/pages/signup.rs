//! Signup page.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiHandle;
use crate::net::types::SignupRequest;
use crate::state::session::{self, SessionState};
use crate::state::toast::ToastState;
use crate::util::auth::install_authed_redirect;
use crate::util::validate;

/// Per-field validation outcome for the signup form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct SignupFieldErrors {
    email: Option<&'static str>,
    password: Option<&'static str>,
}

/// Validate the form inputs. The display name is optional; a blank entry is
/// simply omitted from the request.
fn validate_signup_input(
    email: &str,
    name: &str,
    password: &str,
) -> Result<SignupRequest, SignupFieldErrors> {
    let email = validate::validate_email(email);
    let password = validate::validate_password(password);
    match (email, password) {
        (Ok(email), Ok(password)) => {
            let name = name.trim();
            Ok(SignupRequest {
                email,
                password,
                name: (!name.is_empty()).then(|| name.to_owned()),
            })
        }
        (email, password) => Err(SignupFieldErrors {
            email: email.err(),
            password: password.err(),
        }),
    }
}

/// Signup form; a successful call overwrites the session and redirects home.
#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let api = ApiHandle::new(session, toasts).with_success_toast();

    install_authed_redirect(session, use_navigate());

    let email = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(SignupFieldErrors::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if api.loading.get() {
            return;
        }
        let request = match validate_signup_input(&email.get(), &name.get(), &password.get()) {
            Ok(request) => {
                field_errors.set(SignupFieldErrors::default());
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
                    "/auth/signup",
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
                <h2>"Join MiniBlog!"</h2>
                <p class="auth-card__subtitle">
                    "Already have an account? " <a href="/auth/login">"Sign in"</a>
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
                        "Name (Optional)"
                        <input
                            class="auth-form__input"
                            type="text"
                            placeholder="Enter your name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
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
                        {move || if api.loading.get() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
