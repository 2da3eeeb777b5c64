//! Object storage gateway.
//!
//! Media bytes live in an S3-compatible bucket with a public-read policy;
//! the service stores only the derived public URLs. Uploads either pass
//! through the API (buffered) or go directly from the browser to the bucket
//! via a short-lived presigned PUT URL.

use std::time::Duration;

use async_trait::async_trait;

mod s3;

pub use s3::S3Storage;

/// Errors from the object storage gateway.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Object storage request failed: {0}")]
    Request(String),

    #[error("Presigning failed: {0}")]
    Presign(String),
}

/// A successfully stored object.
#[derive(Debug, Clone)]
pub struct UploadedObject {
    pub key: String,
    pub url: String,
}

/// A presigned direct-upload grant.
#[derive(Debug, Clone)]
pub struct PresignedUpload {
    /// Short-lived signed PUT URL the client uploads to.
    pub upload_url: String,
    /// Public URL the object will be readable at once uploaded.
    pub public_url: String,
}

/// Gateway to the media bucket.
///
/// Implemented by [`S3Storage`] in production and by an in-memory fake in
/// API tests.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store a buffer under `key` and return its public URL.
    async fn upload_buffer(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<UploadedObject, StorageError>;

    /// Issue a presigned PUT URL for a direct client upload.
    async fn presign_put(
        &self,
        key: &str,
        content_type: &str,
        expires_in: Duration,
    ) -> Result<PresignedUpload, StorageError>;

    /// Delete an object, addressed by key or by its public URL.
    async fn delete(&self, key_or_url: &str) -> Result<(), StorageError>;

    /// Public URL for an object key.
    fn object_url(&self, key: &str) -> String;

    /// Object key for a key-or-public-URL, the inverse of [`Self::object_url`].
    fn object_key<'a>(&self, key_or_url: &'a str) -> &'a str;
}

/// Connection settings for the media bucket, loaded from environment
/// variables.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// S3 endpoint the service talks to (e.g. `http://localhost:9000`).
    pub endpoint: String,
    /// Endpoint used when deriving public URLs, when it differs from
    /// `endpoint` (typical behind a reverse proxy). Falls back to `endpoint`.
    pub public_endpoint: Option<String>,
    pub region: String,
    pub bucket: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    /// Path-style addressing; required by MinIO.
    pub force_path_style: bool,
}

impl StorageConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                | Default       |
    /// |------------------------|---------------|
    /// | `S3_ENDPOINT`          | required      |
    /// | `S3_PUBLIC_URL`        | `S3_ENDPOINT` |
    /// | `S3_REGION`            | `us-east-1`   |
    /// | `S3_BUCKET`            | required      |
    /// | `S3_ACCESS_KEY_ID`     | required      |
    /// | `S3_SECRET_ACCESS_KEY` | required      |
    /// | `S3_FORCE_PATH_STYLE`  | `true`        |
    ///
    /// Panics on missing required variables; misconfiguration should fail at
    /// startup.
    pub fn from_env() -> Self {
        let endpoint = std::env::var("S3_ENDPOINT").expect("S3_ENDPOINT must be set");

        let public_endpoint = std::env::var("S3_PUBLIC_URL")
            .ok()
            .map(|s| s.trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty());

        let region = std::env::var("S3_REGION").unwrap_or_else(|_| "us-east-1".into());

        let bucket = std::env::var("S3_BUCKET").expect("S3_BUCKET must be set");

        let access_key_id = std::env::var("S3_ACCESS_KEY_ID").expect("S3_ACCESS_KEY_ID must be set");

        let secret_access_key =
            std::env::var("S3_SECRET_ACCESS_KEY").expect("S3_SECRET_ACCESS_KEY must be set");

        let force_path_style = std::env::var("S3_FORCE_PATH_STYLE")
            .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
            .unwrap_or(true);

        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            public_endpoint,
            region,
            bucket,
            access_key_id,
            secret_access_key,
            force_path_style,
        }
    }
}
