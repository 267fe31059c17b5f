//! Shared DTO field validators

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating email addresses
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid regex");
}

/// Validates an email address format
pub(crate) fn validate_email_format(email: &str) -> Result<(), validator::ValidationError> {
    if EMAIL_REGEX.is_match(email) {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("email");
        error.message = Some("Invalid email format".into());
        Err(error)
    }
}

/// Validates that a text field holds something other than whitespace
pub(crate) fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        let mut error = validator::ValidationError::new("not_blank");
        error.message = Some("must not be blank".into());
        Err(error)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email_format_valid() {
        assert!(validate_email_format("juan@test.com").is_ok());
        assert!(validate_email_format("first.last+tag@sub.example.co").is_ok());
    }

    #[test]
    fn test_validate_email_format_invalid() {
        assert!(validate_email_format("").is_err());
        assert!(validate_email_format("juan").is_err());
        assert!(validate_email_format("juan@test").is_err());
        assert!(validate_email_format("juan @test.com").is_err());
    }

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Juan").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("  \t").is_err());
    }
}
