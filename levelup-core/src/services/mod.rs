//! Service layer - request execution and session orchestration
//!
//! Services coordinate domain logic and port interactions.

pub mod auth;
pub mod messages;
pub mod network;

pub use auth::AuthService;
pub use network::HttpClient;
