//! Core domain entities
//!
//! Request descriptors, API payloads and error taxonomies. These are pure
//! data structures - no I/O.

mod auth;
mod endpoint;
pub mod result;
mod user;

pub use auth::AuthResponse;
pub use endpoint::{Endpoint, HttpMethod, ParamValue, Parameters};
pub use result::{AuthError, NetworkError, TransportError};
pub use user::{RegistrationData, User};
