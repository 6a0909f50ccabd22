//! Request executor for the blog API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the
//! configured base address. Server-side (SSR): stubs, since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is absorbed here and converted to `None` plus a stored
//! error message, so callers never deal with transport details. The message
//! priority is: server-supplied `message` field, then a transport-level
//! description, then a generic fallback. An HTTP 401 from any call clears
//! the session wholesale and raises a session-expired toast.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::ApiResponse;
use crate::state::session::{self, SessionState};
use crate::state::toast::ToastState;
use crate::util::notify;

/// Fallback base address for local development.
const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Shown when a call fails without any server or transport detail.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Shown alongside the forced logout on an authorization failure.
pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please login again.";

const UNAUTHORIZED: u16 = 401;

/// Origin/prefix for all API calls. Overridable at compile time with
/// `MINIBLOG_API_URL`.
pub fn api_base_url() -> &'static str {
    option_env!("MINIBLOG_API_URL").unwrap_or(DEFAULT_API_BASE_URL)
}

/// HTTP verbs the API uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// One failed call: a human-readable message plus the HTTP status when a
/// response was received at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
    pub message: String,
    pub status: Option<u16>,
}

impl ApiError {
    /// A failure with no HTTP response (network down, serialization).
    fn transport(message: String) -> Self {
        let message = if message.is_empty() {
            GENERIC_ERROR_MESSAGE.to_owned()
        } else {
            message
        };
        Self { message, status: None }
    }

    /// A non-2xx response; the message comes from the body when present.
    #[cfg(any(test, feature = "hydrate"))]
    fn from_status(status: u16, body: &str) -> Self {
        Self {
            message: status_error_message(status, body),
            status: Some(status),
        }
    }

    /// Whether this failure must force a logout.
    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(UNAUTHORIZED)
    }
}

/// Serialize a request DTO into the JSON payload `execute` expects.
pub fn to_payload(body: &impl Serialize) -> Option<serde_json::Value> {
    serde_json::to_value(body).ok()
}

/// Endpoint path for a single blog.
pub fn blog_endpoint(id: i64) -> String {
    format!("/blogs/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_url(endpoint: &str) -> String {
    format!("{}{endpoint}", api_base_url())
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Parse a response body as the normalized envelope.
#[cfg(any(test, feature = "hydrate"))]
fn parse_envelope<T: DeserializeOwned>(body: &str) -> Result<ApiResponse<T>, String> {
    serde_json::from_str(body).map_err(|_| GENERIC_ERROR_MESSAGE.to_owned())
}

/// Pull the server's `message` out of an error body, if it sent one.
#[cfg(any(test, feature = "hydrate"))]
fn extract_server_message(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed.message.filter(|message| !message.is_empty())
}

#[cfg(any(test, feature = "hydrate"))]
fn status_error_message(status: u16, body: &str) -> String {
    extract_server_message(body).unwrap_or_else(|| format!("Request failed with status {status}"))
}

/// Assemble the outgoing header set: the JSON content-type default, the
/// bearer credential when a token is present, then caller-supplied extras.
/// Extras replace a same-named default only when explicitly provided.
#[cfg(any(test, feature = "hydrate"))]
fn merged_headers(token: Option<&str>, extra: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut headers = vec![("Content-Type".to_owned(), "application/json".to_owned())];
    if let Some(token) = token {
        headers.push(("Authorization".to_owned(), bearer_header_value(token)));
    }
    for (name, value) in extra {
        if let Some(slot) = headers.iter_mut().find(|(n, _)| n.eq_ignore_ascii_case(name)) {
            slot.1 = (*value).to_owned();
        } else {
            headers.push(((*name).to_owned(), (*value).to_owned()));
        }
    }
    headers
}

/// Per-call-site executor handle.
///
/// Each page or component that issues calls creates its own handle, giving
/// it private `loading`/`error` signals; concurrent calls from different
/// call sites never share flags. The session and toast signals are passed
/// in explicitly rather than read from a global inside the executor.
#[derive(Clone, Copy)]
pub struct ApiHandle {
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    session: RwSignal<SessionState>,
    toasts: RwSignal<ToastState>,
    success_toast: bool,
    error_toast: bool,
}

impl ApiHandle {
    /// A handle with the default toast policy: errors toast, successes
    /// stay quiet.
    pub fn new(session: RwSignal<SessionState>, toasts: RwSignal<ToastState>) -> Self {
        Self {
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            session,
            toasts,
            success_toast: false,
            error_toast: true,
        }
    }

    /// Also toast the envelope's message on success.
    pub fn with_success_toast(mut self) -> Self {
        self.success_toast = true;
        self
    }

    /// Suppress the error toast; the caller renders the stored error itself.
    pub fn without_error_toast(mut self) -> Self {
        self.error_toast = false;
        self
    }

    /// Perform exactly one network call and unpack the response envelope.
    ///
    /// Toggles `loading` for the call's duration. On success, optionally
    /// toasts the envelope message and returns the envelope. On failure,
    /// stores the derived message in `error`, optionally toasts it, clears
    /// the session on 401, and returns `None`. Fire-once: no retries, no
    /// timeout, no backoff.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<serde_json::Value>,
    ) -> Option<ApiResponse<T>> {
        self.execute_with_headers(method, endpoint, body, &[]).await
    }

    /// `execute` with extra per-call headers merged over the defaults.
    pub async fn execute_with_headers<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<serde_json::Value>,
        headers: &[(&str, &str)],
    ) -> Option<ApiResponse<T>> {
        self.loading.set(true);
        self.error.set(None);

        let token = self.session.get_untracked().token;
        let result = send::<T>(method, endpoint, body, token.as_deref(), headers).await;

        let outcome = match result {
            Ok(envelope) => {
                if self.success_toast && !envelope.message.is_empty() {
                    notify::push_success(self.toasts, &envelope.message);
                }
                Some(envelope)
            }
            Err(err) => {
                #[cfg(feature = "hydrate")]
                log::warn!("{} {endpoint} failed: {}", method.as_str(), err.message);
                self.error.set(Some(err.message.clone()));
                if self.error_toast {
                    notify::push_error(self.toasts, &err.message);
                }
                if err.is_unauthorized() {
                    session::clear(self.session);
                    notify::push_error(self.toasts, SESSION_EXPIRED_MESSAGE);
                }
                None
            }
        };

        self.loading.set(false);
        outcome
    }
}

async fn send<T: DeserializeOwned>(
    method: Method,
    endpoint: &str,
    body: Option<serde_json::Value>,
    token: Option<&str>,
    headers: &[(&str, &str)],
) -> Result<ApiResponse<T>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let url = request_url(endpoint);
        let mut builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        for (name, value) in merged_headers(token, headers) {
            builder = builder.header(&name, &value);
        }

        let request = match body {
            Some(payload) => {
                let raw = serde_json::to_string(&payload)
                    .map_err(|e| ApiError::transport(e.to_string()))?;
                builder
                    .body(raw)
                    .map_err(|e| ApiError::transport(e.to_string()))?
            }
            None => builder
                .build()
                .map_err(|e| ApiError::transport(e.to_string()))?,
        };

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;
        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if !response.ok() {
            return Err(ApiError::from_status(status, &text));
        }
        parse_envelope::<T>(&text).map_err(ApiError::transport)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, endpoint, body, token, headers);
        Err(ApiError::transport("not available on server".to_owned()))
    }
}
