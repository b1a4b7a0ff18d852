//! Authentication payloads

use serde::{Deserialize, Serialize};

use super::user::User;

/// Body of a successful login or registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}
