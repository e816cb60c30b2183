//! Signup input validation.
//!
//! Validation accumulates every failure message instead of stopping at the
//! first, so a bad email and a bad password are reported together.

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 5;

const EMAIL_INVALID_MSG: &str = "The email is invalid";
const PASSWORD_INVALID_MSG: &str = "The password is invalid";

/// Validates signup input, returning all failure messages at once.
///
/// An empty vector means the input is acceptable.
pub fn validate_signup(email: &str, password: &str) -> Vec<String> {
    let mut messages = Vec::new();

    if !is_valid_email(email) {
        messages.push(EMAIL_INVALID_MSG.to_string());
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        messages.push(PASSWORD_INVALID_MSG.to_string());
    }

    messages
}

/// Syntactic email check: one `@` separating a non-empty local part from a
/// dotted domain of non-empty labels, no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > 64 || local.contains('@') {
        return false;
    }

    if !domain.contains('.') {
        return false;
    }

    domain.split('.').all(|label| {
        !label.is_empty()
            && label
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
            && !label.starts_with('-')
            && !label.ends_with('-')
    })
}
