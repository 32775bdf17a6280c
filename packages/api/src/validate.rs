//! Input checks for the two forms.
//!
//! Registration checks run in a fixed order and stop at the first failure, so
//! the user only ever sees one error at a time.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::AuthError;

/// Values read from the registration form. `name` and `email` arrive trimmed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// `local@domain.tld` with no whitespace or extra `@` in any part.
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let pattern =
        EMAIL_REGEX.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
    pattern.is_match(email)
}

/// Login only requires both fields to be present.
pub fn validate_login(email: &str, password: &str) -> Result<(), AuthError> {
    if email.is_empty() || password.is_empty() {
        return Err(AuthError::MissingFields);
    }
    Ok(())
}

/// Field-level registration checks. Email uniqueness needs the directory and
/// is checked by the caller afterwards.
pub fn validate_registration(form: &Registration, min_password_len: usize) -> Result<(), AuthError> {
    if form.name.is_empty()
        || form.email.is_empty()
        || form.password.is_empty()
        || form.confirm_password.is_empty()
    {
        return Err(AuthError::MissingFields);
    }
    if form.password != form.confirm_password {
        return Err(AuthError::PasswordMismatch);
    }
    if form.password.chars().count() < min_password_len {
        return Err(AuthError::WeakPassword {
            min: min_password_len,
        });
    }
    if !is_valid_email(&form.email) {
        return Err(AuthError::InvalidEmail);
    }
    Ok(())
}
