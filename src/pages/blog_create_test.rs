use super::*;

#[test]
fn valid_input_builds_trimmed_request() {
    let request = validate_blog_input("  My Title  ", "Some content").unwrap();
    assert_eq!(request.title, "My Title");
    assert_eq!(request.content, "Some content");
}

#[test]
fn empty_fields_report_per_field_errors() {
    let errors = validate_blog_input("", "  ").unwrap_err();
    assert_eq!(errors.title, Some("Title is required"));
    assert_eq!(errors.content, Some("Content is required"));
}

#[test]
fn overlong_title_is_rejected() {
    let long_title = "t".repeat(201);
    let errors = validate_blog_input(&long_title, "body").unwrap_err();
    assert_eq!(errors.title, Some("Title must not exceed 200 characters"));
    assert_eq!(errors.content, None);
}

#[test]
fn content_keeps_internal_whitespace() {
    let request = validate_blog_input("T", "line one\n\nline two  ").unwrap();
    assert_eq!(request.content, "line one\n\nline two  ");
}
