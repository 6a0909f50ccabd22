use super::*;

#[test]
fn chat_state_defaults_empty() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
    assert!(!state.loading);
}

#[test]
fn push_user_appends_in_order() {
    let mut state = ChatState::default();
    state.push_user("How do I sign up?".to_owned());
    state.push_user("How to create a blog?".to_owned());
    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[0].content, "How do I sign up?");
    assert_eq!(state.messages[1].content, "How to create a blog?");
    assert!(state.messages.iter().all(|m| m.role == ChatRole::User));
    assert!(state.messages.iter().all(|m| m.source.is_none()));
}

#[test]
fn push_assistant_carries_source() {
    let mut state = ChatState::default();
    state.push_user("Who can see my blogs?".to_owned());
    state.push_assistant("All published blogs are public.".to_owned(), "faq".to_owned());
    let answer = &state.messages[1];
    assert_eq!(answer.role, ChatRole::Assistant);
    assert_eq!(answer.source.as_deref(), Some("faq"));
}

#[test]
fn messages_get_distinct_ids() {
    let mut state = ChatState::default();
    state.push_user("a".to_owned());
    state.push_user("b".to_owned());
    assert_ne!(state.messages[0].id, state.messages[1].id);
}
