//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - reqwest for the Transport port
//! - In-memory and JSON-file storage for the TokenStore port

pub mod http;
pub mod token_store;

pub use http::ReqwestTransport;
pub use token_store::{FileTokenStore, MemoryTokenStore};
