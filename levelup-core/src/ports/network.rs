//! Network service port - the HTTP client contract

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::domain::result::Result;
use crate::domain::Endpoint;

/// Typed request execution against the API
///
/// The auth service depends on this trait rather than on the concrete
/// HTTP client, so it can be exercised without a transport.
#[async_trait]
pub trait NetworkService: Send + Sync {
    /// Execute `endpoint` and decode the JSON response body into `T`
    async fn request<T>(&self, endpoint: &Endpoint) -> Result<T>
    where
        T: DeserializeOwned + Send + 'static;

    /// Upload `data` as a multipart `file` part to `endpoint`
    async fn upload(&self, data: Vec<u8>, endpoint: &Endpoint) -> Result<()>;
}
