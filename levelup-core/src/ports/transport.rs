//! Transport port - sends one HTTP request

use async_trait::async_trait;
use url::Url;

use crate::domain::{HttpMethod, TransportError};

/// A fully built HTTP request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: Url) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.push((name.into(), value.into()));
    }

    /// Look up a header value (case-insensitive name)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// What came back from the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportResponse {
    /// An HTTP response; `body` is `None` when the server sent no bytes
    Http { status: u16, body: Option<Vec<u8>> },
    /// Something that is not an HTTP response
    NonHttp,
}

/// Transport trait
///
/// Implementations deliver exactly one outcome per request: a response of
/// any status, or a [`TransportError`] when nothing came back at all.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<TransportResponse, TransportError>;
}
