//! HTTP client - request building and response classification
//!
//! Turns an [`Endpoint`] into an [`HttpRequest`], attaches the bearer token
//! from the shared [`TokenStore`], sends it over a [`Transport`] and maps the
//! response onto a typed result or a [`NetworkError`].

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;

use crate::domain::result::{Error, Result};
use crate::domain::{Endpoint, HttpMethod, NetworkError, Parameters};
use crate::ports::{HttpRequest, NetworkService, TokenStore, Transport, TransportResponse};

/// Multipart field and file metadata for uploads
const UPLOAD_FIELD: &str = "file";
const UPLOAD_FILENAME: &str = "upload.jpg";
const UPLOAD_CONTENT_TYPE: &str = "image/jpeg";

/// API client for a fixed base URL
pub struct HttpClient {
    base_url: String,
    transport: Arc<dyn Transport>,
    tokens: Arc<dyn TokenStore>,
}

impl HttpClient {
    pub fn new(
        base_url: impl Into<String>,
        transport: Arc<dyn Transport>,
        tokens: Arc<dyn TokenStore>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
            tokens,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the request URL for an endpoint
    ///
    /// GET parameters become the query string, in mapping order.
    pub fn build_url(&self, endpoint: &Endpoint) -> std::result::Result<Url, NetworkError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, endpoint.path()))
            .map_err(|_| NetworkError::InvalidUrl)?;

        if endpoint.method() == HttpMethod::Get {
            if let Some(params) = endpoint.parameters() {
                url.set_query(Some(&encode_query(&params)));
            }
        }

        Ok(url)
    }

    /// Build the complete request for a JSON call
    pub fn build_request(&self, endpoint: &Endpoint) -> Result<HttpRequest> {
        let url = self.build_url(endpoint)?;
        let mut request = HttpRequest::new(endpoint.method(), url);
        self.authorize(&mut request);

        if endpoint.method() != HttpMethod::Get {
            if let Some(params) = endpoint.parameters() {
                let body = serde_json::to_vec(&params).map_err(|_| NetworkError::InvalidParameters)?;
                request.add_header("Content-Type", "application/json");
                request.body = Some(body);
            }
        }

        Ok(request)
    }

    /// Build the complete multipart request for an upload
    pub fn build_upload_request(&self, data: &[u8], endpoint: &Endpoint) -> Result<HttpRequest> {
        let url = self.build_url(endpoint)?;
        let mut request = HttpRequest::new(endpoint.method(), url);

        let boundary = format!("Boundary-{}", Uuid::new_v4());
        request.add_header(
            "Content-Type",
            format!("multipart/form-data; boundary={}", boundary),
        );
        self.authorize(&mut request);
        request.body = Some(multipart_body(&boundary, data));

        Ok(request)
    }

    /// Attach the bearer token; an unreadable slot is treated as no session
    fn authorize(&self, request: &mut HttpRequest) {
        match self.tokens.token() {
            Ok(Some(token)) => {
                request.add_header("Authorization", format!("Bearer {}", token));
            }
            Ok(None) => {}
            Err(e) => warn!(error = %e, "Ignoring unreadable session token"),
        }
    }

    async fn execute(&self, request: HttpRequest) -> Result<TransportResponse> {
        debug!(method = %request.method, path = request.url.path(), "Sending request");
        let response = self.transport.send(request).await.map_err(|e| {
            warn!(error = %e, "Transport failure");
            e
        })?;
        Ok(response)
    }
}

#[async_trait]
impl NetworkService for HttpClient {
    async fn request<T>(&self, endpoint: &Endpoint) -> Result<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let request = self.build_request(endpoint)?;
        let response = self.execute(request).await?;

        let body = success_body(response, endpoint)?;
        let bytes = body.ok_or(NetworkError::NoData)?;
        serde_json::from_slice(&bytes).map_err(|e| {
            warn!(path = endpoint.path(), error = %e, "Response body did not decode");
            Error::Network(NetworkError::DecodingFailed)
        })
    }

    async fn upload(&self, data: Vec<u8>, endpoint: &Endpoint) -> Result<()> {
        let request = self.build_upload_request(&data, endpoint)?;
        let response = self.execute(request).await?;

        success_body(response, endpoint)?;
        Ok(())
    }
}

/// Check the status and hand back the body of a 2xx response
fn success_body(response: TransportResponse, endpoint: &Endpoint) -> Result<Option<Vec<u8>>> {
    match response {
        TransportResponse::Http { status, body } if (200..300).contains(&status) => {
            debug!(path = endpoint.path(), status, "Request succeeded");
            Ok(body)
        }
        TransportResponse::Http { status, .. } => {
            warn!(path = endpoint.path(), status, "Request failed");
            Err(NetworkError::from_status(status).into())
        }
        TransportResponse::NonHttp => Err(NetworkError::InvalidResponse.into()),
    }
}

/// Percent-encode parameters as a query string
///
/// Only RFC 3986 unreserved characters are left as-is, so a space becomes
/// `%20` rather than `+`.
fn encode_query(params: &Parameters) -> String {
    params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(&value.to_string())
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn multipart_body(boundary: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::with_capacity(data.len() + 256);
    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            UPLOAD_FIELD, UPLOAD_FILENAME
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", UPLOAD_CONTENT_TYPE).as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());
    body
}
