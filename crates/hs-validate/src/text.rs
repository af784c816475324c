//! Text field validators: email, password, required text.

use std::sync::LazyLock;

use regex::Regex;

use crate::Violation;

/// Minimum password length, in UTF-16 code units.
pub const MIN_PASSWORD_LEN: usize = 6;

// Unanchored on purpose: any `x@y.z` run inside the value is enough.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// Validate an email address.
///
/// # Errors
///
/// [`Violation::Required`] when empty, [`Violation::InvalidFormat`] when the value
/// has no `local@domain.tld` shape.
pub fn validate_email(email: &str) -> Result<(), Violation> {
    if email.is_empty() {
        return Err(Violation::Required);
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(Violation::InvalidFormat);
    }
    Ok(())
}

/// Validate a password.
///
/// # Errors
///
/// [`Violation::Required`] when empty, [`Violation::TooShort`] when it has fewer
/// than [`MIN_PASSWORD_LEN`] UTF-16 code units, the unit browsers count
/// for `input.value.length`.
pub fn validate_password(password: &str) -> Result<(), Violation> {
    if password.is_empty() {
        return Err(Violation::Required);
    }
    if password.encode_utf16().count() < MIN_PASSWORD_LEN {
        return Err(Violation::TooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}

/// Validate that a free-text value is present once surrounding whitespace is
/// ignored.
///
/// # Errors
///
/// [`Violation::Required`] when the trimmed value is empty.
pub fn validate_required(value: &str) -> Result<(), Violation> {
    if value.trim().is_empty() {
        return Err(Violation::Required);
    }
    Ok(())
}
