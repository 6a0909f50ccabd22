use super::*;
use crate::net::types::User;

fn user() -> User {
    User {
        id: 1,
        email: "ada@example.com".to_owned(),
        name: None,
        created_at: "2024-01-01T00:00:00".to_owned(),
    }
}

#[test]
fn no_redirect_while_session_is_rehydrating() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(!should_redirect(&state));
}

#[test]
fn redirect_once_loaded_and_unauthenticated() {
    let state = SessionState::cleared();
    assert!(should_redirect(&state));
}

#[test]
fn no_redirect_for_authenticated_session() {
    let state = SessionState::with_auth(user(), "abc".to_owned());
    assert!(!should_redirect(&state));
}
