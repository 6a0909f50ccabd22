use super::*;

#[test]
fn valid_input_builds_request_with_name() {
    let request = validate_signup_input("ada@example.com", " Ada ", "secret1").unwrap();
    assert_eq!(request.email, "ada@example.com");
    assert_eq!(request.name.as_deref(), Some("Ada"));
    assert_eq!(request.password, "secret1");
}

#[test]
fn blank_name_is_omitted() {
    let request = validate_signup_input("ada@example.com", "   ", "secret1").unwrap();
    assert!(request.name.is_none());
}

#[test]
fn invalid_fields_report_inline_errors() {
    let errors = validate_signup_input("nope", "Ada", "short").unwrap_err();
    assert_eq!(errors.email, Some("Invalid email address"));
    assert_eq!(errors.password, Some("Password must be at least 6 characters"));
}

#[test]
fn name_is_never_a_validation_failure() {
    let errors = validate_signup_input("", "", "").unwrap_err();
    assert_eq!(errors.email, Some("Email is required"));
    assert_eq!(errors.password, Some("Password is required"));
}
