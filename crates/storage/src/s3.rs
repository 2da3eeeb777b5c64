//! S3 implementation of the object storage gateway.
//!
//! Works against AWS S3 or any S3-compatible store (MinIO in development);
//! path-style addressing is on by default for the latter.

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;

use crate::{ObjectStorage, PresignedUpload, StorageConfig, StorageError, UploadedObject};

/// Media bucket client over `aws-sdk-s3`.
pub struct S3Storage {
    client: aws_sdk_s3::Client,
    bucket: String,
    /// Base for derived public URLs, without trailing slash.
    public_base: String,
    /// Base as seen through the service endpoint; accepted when extracting
    /// keys from URLs stored before a public endpoint was configured.
    endpoint_base: String,
}

impl S3Storage {
    /// Build a client from configuration. Performs no IO; call
    /// [`Self::ensure_bucket`] at startup to provision the bucket.
    pub fn connect(config: &StorageConfig) -> Self {
        let credentials = Credentials::new(
            &config.access_key_id,
            &config.secret_access_key,
            None,
            None,
            "deckway",
        );

        let sdk_config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .endpoint_url(&config.endpoint)
            .credentials_provider(credentials)
            .force_path_style(config.force_path_style)
            .build();

        let public_base = format!(
            "{}/{}",
            config
                .public_endpoint
                .as_deref()
                .unwrap_or(&config.endpoint),
            config.bucket
        );
        let endpoint_base = format!("{}/{}", config.endpoint, config.bucket);

        Self {
            client: aws_sdk_s3::Client::from_conf(sdk_config),
            bucket: config.bucket.clone(),
            public_base,
            endpoint_base,
        }
    }

    /// Create the bucket if missing and apply the public-read policy so the
    /// browser can fetch media directly.
    pub async fn ensure_bucket(&self) -> Result<(), StorageError> {
        let exists = self
            .client
            .head_bucket()
            .bucket(&self.bucket)
            .send()
            .await
            .is_ok();

        if !exists {
            self.client
                .create_bucket()
                .bucket(&self.bucket)
                .send()
                .await
                .map_err(|e| StorageError::Request(e.to_string()))?;
            tracing::info!(bucket = %self.bucket, "Bucket created");
        }

        let policy = format!(
            r#"{{"Version":"2012-10-17","Statement":[{{"Effect":"Allow","Principal":{{"AWS":["*"]}},"Action":["s3:GetObject"],"Resource":["arn:aws:s3:::{}/*"]}}]}}"#,
            self.bucket
        );
        self.client
            .put_bucket_policy()
            .bucket(&self.bucket)
            .policy(policy)
            .send()
            .await
            .map_err(|e| StorageError::Request(e.to_string()))?;
        tracing::info!(bucket = %self.bucket, "Public read policy set");

        Ok(())
    }
}

#[async_trait]
impl ObjectStorage for S3Storage {
    async fn upload_buffer(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<UploadedObject, StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| StorageError::Request(e.to_string()))?;

        Ok(UploadedObject {
            key: key.to_string(),
            url: self.object_url(key),
        })
    }

    async fn presign_put(
        &self,
        key: &str,
        content_type: &str,
        expires_in: Duration,
    ) -> Result<PresignedUpload, StorageError> {
        let presigning = PresigningConfig::expires_in(expires_in)
            .map_err(|e| StorageError::Presign(e.to_string()))?;

        let request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .presigned(presigning)
            .await
            .map_err(|e| StorageError::Request(e.to_string()))?;

        Ok(PresignedUpload {
            upload_url: request.uri().to_string(),
            public_url: self.object_url(key),
        })
    }

    async fn delete(&self, key_or_url: &str) -> Result<(), StorageError> {
        let key = self.object_key(key_or_url);
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::Request(e.to_string()))?;
        Ok(())
    }

    fn object_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base, key.trim_start_matches('/'))
    }

    fn object_key<'a>(&self, key_or_url: &'a str) -> &'a str {
        let stripped = key_or_url
            .strip_prefix(&self.public_base)
            .or_else(|| key_or_url.strip_prefix(&self.endpoint_base))
            .unwrap_or(key_or_url);
        stripped.trim_start_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_storage() -> S3Storage {
        let config = StorageConfig {
            endpoint: "http://localhost:9000".into(),
            public_endpoint: Some("https://media.example.com".into()),
            region: "us-east-1".into(),
            bucket: "presentations".into(),
            access_key_id: "minioadmin".into(),
            secret_access_key: "minioadmin".into(),
            force_path_style: true,
        };
        S3Storage::connect(&config)
    }

    #[test]
    fn test_object_url_uses_public_endpoint() {
        let storage = test_storage();
        assert_eq!(
            storage.object_url("slides/media/abc.png"),
            "https://media.example.com/presentations/slides/media/abc.png"
        );
    }

    #[test]
    fn test_object_key_strips_public_url() {
        let storage = test_storage();
        assert_eq!(
            storage.object_key("https://media.example.com/presentations/slides/media/abc.png"),
            "slides/media/abc.png"
        );
    }

    #[test]
    fn test_object_key_strips_endpoint_url() {
        let storage = test_storage();
        assert_eq!(
            storage.object_key("http://localhost:9000/presentations/logos/x.svg"),
            "logos/x.svg"
        );
    }

    #[test]
    fn test_object_key_passes_bare_keys_through() {
        let storage = test_storage();
        assert_eq!(
            storage.object_key("slides/media/abc.png"),
            "slides/media/abc.png"
        );
    }
}
