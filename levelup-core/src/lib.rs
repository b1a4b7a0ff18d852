//! LevelUp Core - API client and authentication session
//!
//! This crate follows hexagonal architecture:
//!
//! - **domain**: Endpoints, API payloads and error types
//! - **ports**: Trait definitions for external dependencies (Transport, TokenStore, NetworkService)
//! - **services**: The HTTP client and the auth session built on it
//! - **adapters**: Concrete implementations (reqwest, in-memory and file token storage)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use adapters::{FileTokenStore, ReqwestTransport};
use config::Config;
use ports::TokenStore;
use services::{AuthService, HttpClient};

// Re-export commonly used types at crate root
pub use domain::result::{Error, OperationResult};
pub use domain::{AuthError, AuthResponse, Endpoint, NetworkError, RegistrationData, User};

/// Main context for LevelUp operations
///
/// Built once per process; owns the configuration and the auth service,
/// which shares the persisted token slot with its HTTP client.
pub struct LevelUpContext {
    pub config: Config,
    pub session_path: PathBuf,
    pub auth_service: AuthService<HttpClient>,
}

impl LevelUpContext {
    /// Create a context rooted at a LevelUp directory
    pub fn new(levelup_dir: &Path) -> Result<Self> {
        let config = Config::load(levelup_dir)?;

        let token_store = FileTokenStore::in_dir(levelup_dir);
        let session_path = token_store.path().to_path_buf();
        let tokens: Arc<dyn TokenStore> = Arc::new(token_store);

        let transport = ReqwestTransport::new().context("Failed to initialize HTTP transport")?;
        let http_client = HttpClient::new(
            config.base_url.clone(),
            Arc::new(transport),
            Arc::clone(&tokens),
        );
        let auth_service = AuthService::new(http_client, tokens);

        Ok(Self {
            config,
            session_path,
            auth_service,
        })
    }

    /// The HTTP client behind the auth service
    pub fn http_client(&self) -> &HttpClient {
        self.auth_service.network()
    }
}
