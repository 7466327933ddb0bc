use std::sync::LazyLock;

use regex::Regex;

use super::ValidationError;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{9,15}$").expect("phone pattern is valid"));

pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    email.len() <= 254 && EMAIL_RE.is_match(email)
}

/// Spaces, dots, dashes and parentheses are accepted as separators.
pub fn is_valid_phone(phone: &str) -> bool {
    let digits: String = phone
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '.' | '-' | '(' | ')'))
        .collect();
    PHONE_RE.is_match(&digits)
}

pub fn require_text(field: &'static str, value: &str, message: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, message));
    }
    Ok(())
}

pub fn require_email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    require_text(field, value, "Vui lòng nhập email!")?;
    if !is_valid_email(value) {
        return Err(ValidationError::new(field, "Email không hợp lệ!"));
    }
    Ok(())
}

/// Empty is allowed; a non-empty value must look like a phone number.
pub fn optional_phone(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if !value.trim().is_empty() && !is_valid_phone(value) {
        return Err(ValidationError::new(field, "Số điện thoại không hợp lệ!"));
    }
    Ok(())
}
