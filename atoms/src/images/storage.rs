use async_trait::async_trait;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::Client as S3Client;
use std::time::Duration;

use crate::error::GalleryError;

/// Object store holding the image binaries, one object per `imageId`.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Public URL of the object stored under `key`. Pure, no network call.
    fn object_url(&self, key: &str) -> String;

    /// Time-limited URL allowing a single PUT of the object stored under `key`.
    async fn upload_url(&self, key: &str) -> Result<String, GalleryError>;
}

pub struct S3BlobStore {
    client: S3Client,
    bucket: String,
    expires_in: Duration,
}

impl S3BlobStore {
    pub fn new(client: S3Client, bucket: impl Into<String>, expires_in: Duration) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            expires_in,
        }
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    fn object_url(&self, key: &str) -> String {
        object_url(&self.bucket, key)
    }

    async fn upload_url(&self, key: &str) -> Result<String, GalleryError> {
        let presigning = PresigningConfig::expires_in(self.expires_in)
            .map_err(|e| GalleryError::blob_store(format!("Invalid presigning config: {}", e)))?;

        let presigned = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning)
            .await
            .map_err(|e| GalleryError::blob_store(format!("S3 presign put_object error: {}", e)))?;

        Ok(presigned.uri().to_string())
    }
}

/// Virtual-hosted-style S3 URL for `key` in `bucket`
pub fn object_url(bucket: &str, key: &str) -> String {
    format!("https://{}.s3.amazonaws.com/{}", bucket, key)
}
