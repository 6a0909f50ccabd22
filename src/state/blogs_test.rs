use super::*;
use crate::net::types::User;

fn author() -> User {
    User {
        id: 1,
        email: "ada@example.com".to_owned(),
        name: Some("Ada".to_owned()),
        created_at: "2024-01-01T00:00:00".to_owned(),
    }
}

fn blog(id: i64, title: &str) -> Blog {
    Blog {
        id,
        title: title.to_owned(),
        content: format!("content of {title}"),
        author: author(),
        created_at: "2024-01-02T00:00:00".to_owned(),
        updated_at: "2024-01-02T00:00:00".to_owned(),
    }
}

fn ids(state: &BlogsState) -> Vec<i64> {
    state.blogs.iter().map(|b| b.id).collect()
}

#[test]
fn defaults_are_empty_and_idle() {
    let state = BlogsState::default();
    assert!(state.blogs.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn set_blogs_replaces_list_and_clears_error() {
    let mut state = BlogsState::default();
    state.set_error(Some("previous failure".to_owned()));
    state.set_blogs(vec![blog(1, "first"), blog(2, "second")]);
    assert_eq!(ids(&state), vec![1, 2]);
    assert!(state.error.is_none());
}

#[test]
fn add_blog_prepends_and_clears_error() {
    let mut state = BlogsState::default();
    state.set_blogs(vec![blog(1, "first"), blog(2, "second")]);
    state.set_error(Some("stale".to_owned()));
    state.add_blog(blog(3, "third"));
    assert_eq!(ids(&state), vec![3, 1, 2]);
    assert!(state.error.is_none());
}

#[test]
fn update_blog_replaces_in_place_by_id() {
    let mut state = BlogsState::default();
    state.set_blogs(vec![blog(1, "first"), blog(2, "second"), blog(3, "third")]);
    state.update_blog(2, blog(2, "second, edited"));
    assert_eq!(ids(&state), vec![1, 2, 3]);
    assert_eq!(state.blogs[1].title, "second, edited");
    assert_eq!(state.blogs[0].title, "first");
    assert_eq!(state.blogs[2].title, "third");
}

#[test]
fn update_blog_with_unknown_id_is_a_no_op() {
    let mut state = BlogsState::default();
    state.set_blogs(vec![blog(1, "first"), blog(2, "second")]);
    let before = state.blogs.clone();
    state.update_blog(999, blog(999, "ghost"));
    assert_eq!(state.blogs, before);
}

#[test]
fn remove_blog_drops_matching_entry_only() {
    let mut state = BlogsState::default();
    state.set_blogs(vec![blog(1, "first"), blog(2, "second")]);
    state.add_blog(blog(3, "third"));
    assert_eq!(ids(&state), vec![3, 1, 2]);
    state.remove_blog(1);
    assert_eq!(ids(&state), vec![3, 2]);
    state.remove_blog(42);
    assert_eq!(ids(&state), vec![3, 2]);
}

#[test]
fn op_sequences_keep_at_most_one_entry_per_id() {
    let mut state = BlogsState::default();
    state.set_blogs(vec![blog(1, "a"), blog(2, "b")]);
    state.add_blog(blog(3, "c"));
    state.update_blog(1, blog(1, "a2"));
    state.remove_blog(2);
    state.add_blog(blog(4, "d"));
    let mut seen = ids(&state);
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), state.blogs.len());
}

#[test]
fn flag_setters_leave_list_contents_alone() {
    let mut state = BlogsState::default();
    state.set_blogs(vec![blog(1, "first")]);
    state.set_loading(true);
    state.set_error(Some("network down".to_owned()));
    assert_eq!(ids(&state), vec![1]);
    assert!(state.loading);
    assert_eq!(state.error.as_deref(), Some("network down"));
    state.set_loading(false);
    assert!(!state.loading);
}
