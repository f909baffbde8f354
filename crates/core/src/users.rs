//! Account field validation.

/// Maximum length of a username in characters.
pub const MAX_USERNAME_LENGTH: usize = 150;

/// Validate a username: non-empty, within the length limit, and made of
/// letters, digits, and `@ . + - _` only.
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.is_empty() {
        return Err("Username cannot be empty".to_string());
    }
    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(format!(
            "Username exceeds maximum length of {MAX_USERNAME_LENGTH} characters"
        ));
    }
    if let Some(bad) = username
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && !matches!(c, '@' | '.' | '+' | '-' | '_'))
    {
        return Err(format!(
            "Username contains invalid character '{bad}'. Letters, digits and @ . + - _ only"
        ));
    }
    Ok(())
}

/// Validate an email address. A minimal shape check only; deliverability
/// is the mail system's problem.
pub fn validate_email(email: &str) -> Result<(), String> {
    if !email.contains('@') {
        return Err("Email must contain '@'".to_string());
    }
    Ok(())
}
