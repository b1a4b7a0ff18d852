//! HTTP client tests against a local mock API
//!
//! Requests go through the real reqwest transport; the server side is
//! a wiremock instance.
//!
//! Run with: cargo test --test http_client_test -- --nocapture

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use levelup_core::adapters::{MemoryTokenStore, ReqwestTransport};
use levelup_core::ports::NetworkService;
use levelup_core::services::HttpClient;
use levelup_core::{AuthResponse, Endpoint, Error, NetworkError, RegistrationData, User};

// ============================================================================
// Test Helpers
// ============================================================================

fn create_client(server: &MockServer, tokens: Arc<MemoryTokenStore>) -> HttpClient {
    HttpClient::new(
        format!("{}/v1", server.uri()),
        Arc::new(ReqwestTransport::new().unwrap()),
        tokens,
    )
}

fn sample_response() -> AuthResponse {
    AuthResponse {
        token: "test-token".to_string(),
        user: User::new("123", "testuser", "test@example.com"),
    }
}

async fn request_auth(client: &HttpClient, endpoint: &Endpoint) -> Result<AuthResponse, Error> {
    client.request(endpoint).await
}

// ============================================================================
// Response classification
// ============================================================================

#[tokio::test]
async fn test_request_success_decodes_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_response()))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, Arc::new(MemoryTokenStore::new()));
    let response = request_auth(&client, &Endpoint::login("testuser", "password123"))
        .await
        .unwrap();

    assert_eq!(response, sample_response());
}

#[tokio::test]
async fn test_request_status_codes() {
    let cases = [
        (401, NetworkError::Unauthorized),
        (403, NetworkError::Forbidden),
        (404, NetworkError::NotFound),
        (500, NetworkError::ServerError(500)),
        (503, NetworkError::ServerError(503)),
    ];

    for (status, expected) in cases {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/auth/login"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let client = create_client(&server, Arc::new(MemoryTokenStore::new()));
        let err = request_auth(&client, &Endpoint::login("testuser", "password123"))
            .await
            .unwrap_err();

        assert_eq!(err.as_network(), Some(expected), "status {}", status);
    }
}

#[tokio::test]
async fn test_request_invalid_json_is_decoding_failed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string("invalid json"))
        .mount(&server)
        .await;

    let client = create_client(&server, Arc::new(MemoryTokenStore::new()));
    let err = request_auth(&client, &Endpoint::login("testuser", "password123"))
        .await
        .unwrap_err();

    assert_eq!(err.as_network(), Some(NetworkError::DecodingFailed));
}

#[tokio::test]
async fn test_request_empty_body_is_no_data() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/auth/login"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = create_client(&server, Arc::new(MemoryTokenStore::new()));
    let err = request_auth(&client, &Endpoint::login("testuser", "password123"))
        .await
        .unwrap_err();

    assert_eq!(err.as_network(), Some(NetworkError::NoData));
}

#[tokio::test]
async fn test_request_connection_failure_is_transport_error() {
    // Nothing listens on the discard port; dropped mock servers stay pooled
    let client = HttpClient::new(
        "http://127.0.0.1:9/v1",
        Arc::new(ReqwestTransport::new().unwrap()),
        Arc::new(MemoryTokenStore::new()),
    );
    let err = request_auth(&client, &Endpoint::login("testuser", "password123"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Transport(_)), "got {:?}", err);
}

// ============================================================================
// Request construction
// ============================================================================

#[tokio::test]
async fn test_login_posts_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/auth/login"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"username": "testuser", "password": "password123"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_response()))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, Arc::new(MemoryTokenStore::new()));
    request_auth(&client, &Endpoint::login("testuser", "password123"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_register_sends_percent_encoded_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/auth/register"))
        .and(query_param("username", "newuser"))
        .and(query_param("email", "new@example.com"))
        .and(query_param("fullName", "New User"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_response()))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, Arc::new(MemoryTokenStore::new()));
    let data = RegistrationData::new("newuser", "new@example.com", "pass123")
        .with_full_name("New User");
    request_auth(&client, &Endpoint::register(data)).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let url = requests[0].url.as_str().to_string();
    assert!(url.contains("username=newuser"), "url: {}", url);
    assert!(url.contains("email=new%40example.com"), "url: {}", url);
    assert!(url.contains("password=pass123"), "url: {}", url);
    assert!(url.contains("fullName=New%20User"), "url: {}", url);
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_bearer_token_is_attached() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/auth/login"))
        .and(header("authorization", "Bearer stored-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_response()))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, Arc::new(MemoryTokenStore::with_token("stored-token")));
    request_auth(&client, &Endpoint::login("testuser", "password123"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_no_authorization_header_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_response()))
        .mount(&server)
        .await;

    let client = create_client(&server, Arc::new(MemoryTokenStore::new()));
    request_auth(&client, &Endpoint::login("testuser", "password123"))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

// ============================================================================
// Upload
// ============================================================================

#[tokio::test]
async fn test_upload_sends_multipart_file() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/auth/login"))
        .and(header("authorization", "Bearer stored-token"))
        .respond_with(ResponseTemplate::new(201))
        .expect(2)
        .mount(&server)
        .await;

    let client = create_client(&server, Arc::new(MemoryTokenStore::with_token("stored-token")));
    let endpoint = Endpoint::login("testuser", "password123");
    let image = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];

    client.upload(image.clone(), &endpoint).await.unwrap();
    client.upload(image.clone(), &endpoint).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let mut boundaries = Vec::new();
    for request in &requests {
        let content_type = request
            .headers
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        let boundary = content_type
            .strip_prefix("multipart/form-data; boundary=")
            .unwrap()
            .to_string();
        assert!(boundary.starts_with("Boundary-"));

        let body = &request.body;
        let head = format!(
            "--{}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"upload.jpg\"\r\nContent-Type: image/jpeg\r\n\r\n",
            boundary
        );
        assert!(body.starts_with(head.as_bytes()));
        assert!(body.ends_with(format!("\r\n--{}--\r\n", boundary).as_bytes()));
        assert!(body.windows(image.len()).any(|w| w == image.as_slice()));

        boundaries.push(boundary);
    }
    assert_ne!(boundaries[0], boundaries[1]);
}

#[tokio::test]
async fn test_upload_failure_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/auth/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = create_client(&server, Arc::new(MemoryTokenStore::new()));
    let err = client
        .upload(vec![1, 2, 3], &Endpoint::login("testuser", "password123"))
        .await
        .unwrap_err();

    assert_eq!(err.as_network(), Some(NetworkError::Unauthorized));
}
