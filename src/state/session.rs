//! Persisted auth-session state for the current browser user.
//!
//! DESIGN
//! ======
//! The session is only ever replaced wholesale: `set_auth` and `clear` are
//! the sole mutation entry points, and both persist immediately. `restore`
//! is the matching load-at-start half of the pair, run once when the app
//! mounts. There is no partial update path.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::net::types::User;
use crate::util::storage;

/// localStorage key the session JSON is kept under.
pub const STORAGE_KEY: &str = "auth-storage";

/// Authentication state: current user identity plus bearer token.
///
/// Invariant: `authenticated` is true iff both `user` and `token` are
/// present. `loading` is true until `restore` has run, so route guards can
/// tell "not logged in" apart from "not yet rehydrated".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub authenticated: bool,
    #[serde(skip)]
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            authenticated: false,
            loading: true,
        }
    }
}

impl SessionState {
    /// A fully authenticated session for `user`/`token`.
    pub fn with_auth(user: User, token: String) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
            authenticated: true,
            loading: false,
        }
    }

    /// The logged-out session.
    pub fn cleared() -> Self {
        Self {
            user: None,
            token: None,
            authenticated: false,
            loading: false,
        }
    }

    /// Whether the logged-in user is the one with `user_id`. Gates edit and
    /// delete affordances to the blog's author.
    pub fn is_current_user(&self, user_id: i64) -> bool {
        self.authenticated && self.user.as_ref().is_some_and(|user| user.id == user_id)
    }

    /// Re-derive `authenticated` from the presence of `user` and `token`.
    ///
    /// Persisted JSON is untrusted after manual edits or partial writes;
    /// restoring through this keeps the invariant intact.
    pub fn normalized(mut self) -> Self {
        self.authenticated = self.user.is_some() && self.token.is_some();
        if !self.authenticated {
            self.user = None;
            self.token = None;
        }
        self.loading = false;
        self
    }
}

/// Load the persisted session, if any, into `session`. Call once at mount.
pub fn restore(session: RwSignal<SessionState>) {
    let state = storage::load_json::<SessionState>(STORAGE_KEY)
        .map_or_else(SessionState::cleared, SessionState::normalized);
    session.set(state);
}

/// Overwrite the session wholesale with an authenticated identity and
/// persist it.
pub fn set_auth(session: RwSignal<SessionState>, user: User, token: String) {
    let state = SessionState::with_auth(user, token);
    storage::save_json(STORAGE_KEY, &state);
    session.set(state);
}

/// Reset the session wholesale to logged-out and persist the cleared state.
pub fn clear(session: RwSignal<SessionState>) {
    let state = SessionState::cleared();
    storage::save_json(STORAGE_KEY, &state);
    session.set(state);
}
