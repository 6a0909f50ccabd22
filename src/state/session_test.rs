use super::*;

fn sample_user() -> User {
    User {
        id: 1,
        email: "ada@example.com".to_owned(),
        name: Some("Ada".to_owned()),
        created_at: "2024-03-05T10:15:30".to_owned(),
    }
}

#[test]
fn default_session_is_unauthenticated_and_loading() {
    let state = SessionState::default();
    assert!(state.user.is_none());
    assert!(state.token.is_none());
    assert!(!state.authenticated);
    assert!(state.loading);
}

#[test]
fn with_auth_sets_all_fields() {
    let state = SessionState::with_auth(sample_user(), "abc".to_owned());
    assert_eq!(state.user.as_ref().map(|u| u.id), Some(1));
    assert_eq!(state.token.as_deref(), Some("abc"));
    assert!(state.authenticated);
    assert!(!state.loading);
}

#[test]
fn cleared_resets_regardless_of_prior_state() {
    let state = SessionState::with_auth(sample_user(), "abc".to_owned());
    let _ = state;
    let cleared = SessionState::cleared();
    assert!(cleared.user.is_none());
    assert!(cleared.token.is_none());
    assert!(!cleared.authenticated);
}

#[test]
fn normalized_derives_authenticated_from_presence() {
    let state = SessionState {
        user: Some(sample_user()),
        token: Some("abc".to_owned()),
        authenticated: false,
        loading: true,
    };
    let normalized = state.normalized();
    assert!(normalized.authenticated);
    assert!(!normalized.loading);
}

#[test]
fn normalized_drops_half_present_session() {
    // A token without a user (or vice versa) must not count as logged in.
    let state = SessionState {
        user: None,
        token: Some("abc".to_owned()),
        authenticated: true,
        loading: false,
    };
    let normalized = state.normalized();
    assert!(!normalized.authenticated);
    assert!(normalized.token.is_none());

    let state = SessionState {
        user: Some(sample_user()),
        token: None,
        authenticated: true,
        loading: false,
    };
    let normalized = state.normalized();
    assert!(!normalized.authenticated);
    assert!(normalized.user.is_none());
}

#[test]
fn is_current_user_requires_matching_authenticated_identity() {
    let state = SessionState::with_auth(sample_user(), "abc".to_owned());
    assert!(state.is_current_user(1));
    assert!(!state.is_current_user(2));
    assert!(!SessionState::cleared().is_current_user(1));
}

#[test]
fn loading_flag_is_not_persisted() {
    let state = SessionState::with_auth(sample_user(), "abc".to_owned());
    let encoded = serde_json::to_string(&state).unwrap();
    assert!(!encoded.contains("loading"));

    // Deserialized sessions come back via `normalized`, which clears it.
    let decoded: SessionState = serde_json::from_str(&encoded).unwrap();
    assert!(!decoded.normalized().loading);
}
