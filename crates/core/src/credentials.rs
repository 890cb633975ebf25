//! Signup credential rules.

use crate::error::CoreError;

/// Minimum accepted password length, in bytes.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validate a signup password against its confirmation.
///
/// Enforces the minimum length first, then the confirmation match, so the
/// caller always sees the length complaint for a short mismatched pair.
pub fn validate_signup_password(password: &str, confirmation: &str) -> Result<(), CoreError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }
    if password != confirmation {
        return Err(CoreError::Validation(
            "Password and confirm password do not match".into(),
        ));
    }
    Ok(())
}
