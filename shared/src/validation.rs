use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::constants::{INVALID_EMAIL_ERROR, MESSAGE_REQUIRED_ERROR, NAME_REQUIRED_ERROR};

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() || !EMAIL_PATTERN.is_match(email.trim()) {
        return Err(error("invalid_email_format", INVALID_EMAIL_ERROR));
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(error("name_required", NAME_REQUIRED_ERROR));
    }
    Ok(())
}

pub fn validate_message(message: &str) -> Result<(), ValidationError> {
    if message.trim().is_empty() {
        return Err(error("message_required", MESSAGE_REQUIRED_ERROR));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_format() {
        assert!(validate_email("client@example.com").is_ok());
        assert!(validate_email(" client@example.com ").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("client@").is_err());
        assert!(validate_email("client example@mail.com").is_err());
    }

    #[test]
    fn test_blank_text_is_rejected_with_message() {
        let err = validate_name("   ").unwrap_err();
        assert_eq!(err.code, "name_required");
        assert_eq!(err.message.as_deref(), Some(NAME_REQUIRED_ERROR));
        assert!(validate_message("Need a storefront").is_ok());
    }
}
