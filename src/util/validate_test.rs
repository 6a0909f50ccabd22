use super::*;

#[test]
fn email_is_trimmed_and_accepted() {
    assert_eq!(
        validate_email("  ada@example.com  "),
        Ok("ada@example.com".to_owned())
    );
}

#[test]
fn empty_email_is_required() {
    assert_eq!(validate_email("   "), Err("Email is required"));
}

#[test]
fn malformed_emails_are_rejected() {
    for bad in ["plain", "no-at.example.com", "@example.com", "a@b", "a@b.", "a@.com", "a@b.c"] {
        assert_eq!(validate_email(bad), Err("Invalid email address"), "{bad}");
    }
}

#[test]
fn password_length_is_enforced() {
    assert_eq!(validate_password(""), Err("Password is required"));
    assert_eq!(
        validate_password("five5"),
        Err("Password must be at least 6 characters")
    );
    assert_eq!(validate_password("secret1"), Ok("secret1".to_owned()));
}

#[test]
fn title_is_required_and_bounded() {
    assert_eq!(validate_title("  "), Err("Title is required"));
    assert_eq!(validate_title(" Hello "), Ok("Hello".to_owned()));
    let long = "t".repeat(TITLE_MAX_LENGTH + 1);
    assert_eq!(
        validate_title(&long),
        Err("Title must not exceed 200 characters")
    );
    let exact = "t".repeat(TITLE_MAX_LENGTH);
    assert_eq!(validate_title(&exact), Ok(exact.clone()));
}

#[test]
fn content_is_required() {
    assert_eq!(validate_content("\n  \n"), Err("Content is required"));
    assert_eq!(validate_content("body"), Ok("body".to_owned()));
}

#[test]
fn question_is_trimmed_and_required() {
    assert_eq!(validate_question("  "), Err("Please enter a question"));
    assert_eq!(
        validate_question(" How do I sign up? "),
        Ok("How do I sign up?".to_owned())
    );
}
