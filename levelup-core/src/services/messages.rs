//! User-facing failure text
//!
//! Front ends show these strings instead of raw error output.

use crate::domain::result::Error;
use crate::domain::AuthError;

pub const EMPTY_CREDENTIALS: &str = "Username and password cannot be empty";
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";
pub const NETWORK_ERROR: &str = "Network error. Please try again.";
pub const SERVER_ERROR: &str = "Server error. Please try again later.";
pub const UNKNOWN_ERROR: &str = "An unknown error occurred";

/// Message for a failed login or registration
pub fn failure_message(error: &Error) -> &'static str {
    match error.as_auth() {
        Some(AuthError::InvalidCredentials) => INVALID_CREDENTIALS,
        Some(AuthError::NetworkError) => NETWORK_ERROR,
        Some(AuthError::ServerError) => SERVER_ERROR,
        None => UNKNOWN_ERROR,
    }
}

/// Reject blank credentials before any request is made
pub fn check_credentials(username: &str, password: &str) -> Result<(), &'static str> {
    if username.is_empty() || password.is_empty() {
        Err(EMPTY_CREDENTIALS)
    } else {
        Ok(())
    }
}
