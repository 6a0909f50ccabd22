//! Wire DTOs for the blog API.
//!
//! DESIGN
//! ======
//! Field names follow the server's camelCase JSON via serde renames so the
//! envelope round-trips losslessly and store code can stay schema-driven.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The `{success, message, data}` wrapper every API response follows.
///
/// `data` varies by endpoint: auth payloads, a blog, a blog list, or the
/// support answer. Delete responses carry a null `data`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Server-side success flag; a 2xx status is the operative signal.
    pub success: bool,
    /// Human-readable outcome message, surfaced in toasts.
    pub message: String,
    /// Endpoint-specific payload.
    pub data: T,
}

/// A registered user as returned by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Login email, unique per account.
    pub email: String,
    /// Optional display name chosen at signup.
    pub name: Option<String>,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
}

impl User {
    /// Name to show in UI chrome; falls back to the email when no display
    /// name was provided.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.email)
    }
}

/// A published blog post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    /// Unique blog identifier; list identity key.
    pub id: i64,
    pub title: String,
    /// Markdown body.
    pub content: String,
    /// Author snapshot as of the response; not locally mutated.
    pub author: User,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// ISO 8601 last-edit timestamp; equals `created_at` until edited.
    pub updated_at: String,
}

/// Payload of `POST /auth/signup` and `POST /auth/login` responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Bearer token for subsequent calls.
    pub token: String,
    /// Token scheme reported by the server (`"Bearer"`).
    #[serde(rename = "type")]
    pub token_type: String,
    pub user: User,
}

/// Request body for `POST /auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Request body for `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /blogs`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBlogRequest {
    pub title: String,
    pub content: String,
}

/// Request body for `PUT /blogs/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBlogRequest {
    pub title: String,
    pub content: String,
}

/// Request body for `POST /ai/query`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiQueryRequest {
    pub question: String,
}

/// Payload of `POST /ai/query` responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiQueryResponse {
    /// Canned answer text (Markdown).
    pub answer: String,
    /// Knowledge-base entry the answer came from.
    pub source: String,
}
