use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    static ref NUMERIC_ONLY: Regex = Regex::new(r"^\d+$").unwrap();
    static ref SLUG_FORMAT: Regex = Regex::new(r"^[a-z2-7]{8,32}$").unwrap();
}

pub fn validate_email_verification_code_length(code: &str) -> Result<(), ValidationError> {
    if code.len() != 6 {
        let mut error = ValidationError::new("invalid_length");
        error.message = Some(Cow::from("The code must be exactly 6 digits long"));
        return Err(error);
    }

    Ok(())
}

pub fn validate_email_verification_code_format(code: &str) -> Result<(), ValidationError> {
    if !NUMERIC_ONLY.is_match(code) {
        let mut error = ValidationError::new("invalid_format");
        error.message = Some(Cow::from("The code must contain only numbers"));
        return Err(error);
    }

    Ok(())
}

// Slugs are lowercase base32, see utils::crypto::generate_slug.
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_FORMAT.is_match(slug)
}

pub fn validate_extension_days(days: i64) -> Result<(), ValidationError> {
    if !(1..=365).contains(&days) {
        let mut error = ValidationError::new("invalid_extension");
        error.message = Some(Cow::from("Extension must be between 1 and 365 days"));
        return Err(error);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verification_code_must_be_six_digits() {
        assert!(validate_email_verification_code_length("123456").is_ok());
        assert!(validate_email_verification_code_length("12345").is_err());
        assert!(validate_email_verification_code_format("123456").is_ok());
        assert!(validate_email_verification_code_format("12a456").is_err());
    }

    #[test]
    fn slug_format_rejects_uppercase_and_short_input() {
        assert!(is_valid_slug("abcd2345"));
        assert!(!is_valid_slug("ABCD2345"));
        assert!(!is_valid_slug("ab"));
        assert!(!is_valid_slug("abcd-2345"));
    }

    #[test]
    fn extension_days_are_bounded() {
        assert!(validate_extension_days(1).is_ok());
        assert!(validate_extension_days(365).is_ok());
        assert!(validate_extension_days(0).is_err());
        assert!(validate_extension_days(366).is_err());
    }
}
