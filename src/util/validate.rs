//! Pure form validation, run before any network call.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validation failures surface inline next to the offending input and never
//! reach the server. Messages match what the API itself would say so the
//! two paths read identically to the user.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Longest accepted blog title.
pub const TITLE_MAX_LENGTH: usize = 200;

/// Minimum accepted password length.
pub const PASSWORD_MIN_LENGTH: usize = 6;

/// Structural email check: `local@domain.tld` with a 2+ letter tld.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Validate and trim a signup/login email.
pub fn validate_email(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required");
    }
    if !is_valid_email(email) {
        return Err("Invalid email address");
    }
    Ok(email.to_owned())
}

/// Validate a signup/login password.
pub fn validate_password(password: &str) -> Result<String, &'static str> {
    if password.is_empty() {
        return Err("Password is required");
    }
    if password.chars().count() < PASSWORD_MIN_LENGTH {
        return Err("Password must be at least 6 characters");
    }
    Ok(password.to_owned())
}

/// Validate and trim a blog title.
pub fn validate_title(title: &str) -> Result<String, &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Title is required");
    }
    if title.chars().count() > TITLE_MAX_LENGTH {
        return Err("Title must not exceed 200 characters");
    }
    Ok(title.to_owned())
}

/// Validate blog content.
pub fn validate_content(content: &str) -> Result<String, &'static str> {
    if content.trim().is_empty() {
        return Err("Content is required");
    }
    Ok(content.to_owned())
}

/// Validate and trim a support question.
pub fn validate_question(question: &str) -> Result<String, &'static str> {
    let question = question.trim();
    if question.is_empty() {
        return Err("Please enter a question");
    }
    Ok(question.to_owned())
}
