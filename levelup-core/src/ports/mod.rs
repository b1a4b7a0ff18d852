//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. Services depend
//! only on these traits, not on concrete implementations.

mod network;
mod token_store;
mod transport;

pub use network::NetworkService;
pub use token_store::TokenStore;
pub use transport::{HttpRequest, Transport, TransportResponse};
