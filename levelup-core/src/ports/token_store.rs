//! Token store port - the single session token slot

use crate::domain::result::Result;

/// Holds at most one opaque session token
///
/// Shared between the auth service (writer) and the HTTP client (reader).
/// Setting overwrites; clearing an empty slot is not an error.
pub trait TokenStore: Send + Sync {
    /// Current token, if any
    fn token(&self) -> Result<Option<String>>;

    /// Store a token, replacing any previous one
    fn set_token(&self, token: &str) -> Result<()>;

    /// Remove the token
    fn clear(&self) -> Result<()>;
}
