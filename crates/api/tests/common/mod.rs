//! Shared harness for HTTP-level integration tests.
//!
//! Builds the production router and middleware stack over a test pool and an
//! in-memory object storage fake, and provides request/response helpers for
//! `tower::ServiceExt::oneshot`-style tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use deckway_api::config::ServerConfig;
use deckway_api::router::build_app_router;
use deckway_api::state::AppState;
use deckway_storage::{ObjectStorage, PresignedUpload, StorageError, UploadedObject};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        upload_presign_expiry_secs: 3600,
    }
}

/// In-memory stand-in for the media bucket.
///
/// Records uploads and deletions so tests can assert on gateway traffic
/// without a real S3 endpoint.
pub struct MemoryStorage {
    base: String,
    pub objects: Mutex<HashMap<String, Vec<u8>>>,
    pub deleted: Mutex<Vec<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            base: "http://media.test/presentations".to_string(),
            objects: Mutex::new(HashMap::new()),
            deleted: Mutex::new(Vec::new()),
        }
    }

    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    pub fn deleted_keys(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ObjectStorage for MemoryStorage {
    async fn upload_buffer(
        &self,
        key: &str,
        bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<UploadedObject, StorageError> {
        self.objects.lock().unwrap().insert(key.to_string(), bytes);
        Ok(UploadedObject {
            key: key.to_string(),
            url: self.object_url(key),
        })
    }

    async fn presign_put(
        &self,
        key: &str,
        _content_type: &str,
        expires_in: Duration,
    ) -> Result<PresignedUpload, StorageError> {
        Ok(PresignedUpload {
            upload_url: format!(
                "{}/{}?X-Amz-Expires={}",
                self.base,
                key,
                expires_in.as_secs()
            ),
            public_url: self.object_url(key),
        })
    }

    async fn delete(&self, key_or_url: &str) -> Result<(), StorageError> {
        let key = self.object_key(key_or_url).to_string();
        self.objects.lock().unwrap().remove(&key);
        self.deleted.lock().unwrap().push(key);
        Ok(())
    }

    fn object_url(&self, key: &str) -> String {
        format!("{}/{}", self.base, key)
    }

    fn object_key<'a>(&self, key_or_url: &'a str) -> &'a str {
        key_or_url
            .strip_prefix("http://media.test/presentations/")
            .unwrap_or(key_or_url)
    }
}

/// Build the full application router over the given pool and a fresh
/// in-memory storage fake.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_storage(pool, Arc::new(MemoryStorage::new()))
}

/// Build the full application router with an externally owned storage fake,
/// for tests that assert on uploads and deletions.
pub fn build_test_app_with_storage(pool: PgPool, storage: Arc<MemoryStorage>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        storage,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, "POST", uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, "PUT", uri, body).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, "PATCH", uri, body).await
}

async fn send_json(app: Router, method: &str, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Multipart helpers
// ---------------------------------------------------------------------------

const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

/// Encode text fields plus an optional `(field, filename, content_type,
/// bytes)` file as a multipart/form-data body.
pub fn multipart_body(
    fields: &[(&str, &str)],
    file: Option<(&str, &str, &str, &[u8])>,
) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }
    if let Some((name, filename, content_type, bytes)) = file {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn post_multipart(
    app: Router,
    uri: &str,
    fields: &[(&str, &str)],
    file: Option<(&str, &str, &str, &[u8])>,
) -> Response {
    send_multipart(app, "POST", uri, fields, file).await
}

pub async fn patch_multipart(
    app: Router,
    uri: &str,
    fields: &[(&str, &str)],
    file: Option<(&str, &str, &str, &[u8])>,
) -> Response {
    send_multipart(app, "PATCH", uri, fields, file).await
}

async fn send_multipart(
    app: Router,
    method: &str,
    uri: &str,
    fields: &[(&str, &str)],
    file: Option<(&str, &str, &str, &[u8])>,
) -> Response {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(multipart_body(fields, file)))
            .unwrap(),
    )
    .await
    .unwrap()
}
