//! reqwest transport
//!
//! Sends [`HttpRequest`]s with an async `reqwest::Client`. No timeout is
//! configured beyond reqwest's defaults and nothing is retried.

use async_trait::async_trait;
use reqwest::{Client, Method};

use crate::domain::result::{Error, Result};
use crate::domain::{HttpMethod, TransportError};
use crate::ports::{HttpRequest, Transport, TransportResponse};

/// HTTP transport backed by reqwest
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("levelup/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::config(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> std::result::Result<TransportResponse, TransportError> {
        let mut builder = self.client.request(to_method(request.method), request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(map_request_error)?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(map_request_error)?;

        Ok(TransportResponse::Http {
            status,
            body: if bytes.is_empty() { None } else { Some(bytes.to_vec()) },
        })
    }
}

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// Map request errors to transport failures
fn map_request_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout(error.to_string())
    } else if error.is_connect() {
        TransportError::Connect(error.to_string())
    } else {
        TransportError::Request(error.to_string())
    }
}
