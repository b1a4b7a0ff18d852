//! Auth service - credential exchange and session token lifecycle
//!
//! Token states: absent -> present on a successful login or registration,
//! present -> absent on logout. A later success overwrites the token.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::result::{Error, Result};
use crate::domain::{AuthError, AuthResponse, Endpoint, NetworkError, RegistrationData, User};
use crate::ports::{NetworkService, TokenStore};

/// Authentication session on top of a [`NetworkService`]
pub struct AuthService<N> {
    network: N,
    tokens: Arc<dyn TokenStore>,
}

impl<N: NetworkService> AuthService<N> {
    pub fn new(network: N, tokens: Arc<dyn TokenStore>) -> Self {
        Self { network, tokens }
    }

    pub fn network(&self) -> &N {
        &self.network
    }

    /// Whether a session token is currently held
    pub fn is_authenticated(&self) -> bool {
        match self.tokens.token() {
            Ok(token) => token.is_some(),
            Err(e) => {
                warn!(error = %e, "Session token unreadable; treating as signed out");
                false
            }
        }
    }

    /// Current session token
    pub fn token(&self) -> Result<Option<String>> {
        self.tokens.token()
    }

    /// Exchange credentials for a session
    ///
    /// A 401 from the API is reported as [`AuthError::InvalidCredentials`];
    /// every other failure is returned unchanged.
    pub async fn login(&self, username: &str, password: &str) -> Result<User> {
        let endpoint = Endpoint::login(username, password);
        let result: Result<AuthResponse> = self.network.request(&endpoint).await;
        match result {
            Ok(response) => self.start_session(response),
            Err(Error::Network(NetworkError::Unauthorized)) => {
                info!("Login rejected");
                Err(AuthError::InvalidCredentials.into())
            }
            Err(e) => Err(e),
        }
    }

    /// Create an account and start a session for it
    pub async fn register(&self, data: RegistrationData) -> Result<User> {
        let endpoint = Endpoint::register(data);
        let response: AuthResponse = self.network.request(&endpoint).await?;
        self.start_session(response)
    }

    /// Drop the session token; a no-op when already logged out
    pub fn logout(&self) -> Result<()> {
        self.tokens.clear()?;
        debug!("Session token cleared");
        Ok(())
    }

    fn start_session(&self, response: AuthResponse) -> Result<User> {
        self.tokens.set_token(&response.token)?;
        debug!(user_id = %response.user.id, "Session token stored");
        Ok(response.user)
    }
}
