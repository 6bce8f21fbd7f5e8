//! In-memory stand-ins for the DynamoDB and S3 implementations.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::model::Image;
use super::repository::ImageRepository;
use super::storage::{object_url, BlobStore};
use crate::error::GalleryError;

/// Keeps every put, so duplicate ids can be simulated.
pub struct FakeImageRepository {
    groups: HashSet<String>,
    images: Arc<Mutex<Vec<Image>>>,
    should_fail: bool,
}

impl FakeImageRepository {
    pub fn with_groups(groups: &[&str]) -> Self {
        Self {
            groups: groups.iter().map(|g| g.to_string()).collect(),
            images: Arc::new(Mutex::new(Vec::new())),
            should_fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::with_groups(&[])
        }
    }

    pub async fn images(&self) -> Vec<Image> {
        self.images.lock().await.clone()
    }
}

#[async_trait]
impl ImageRepository for FakeImageRepository {
    async fn group_exists(&self, group_id: &str) -> Result<bool, GalleryError> {
        if self.should_fail {
            return Err(GalleryError::metadata_store("Mock failure"));
        }
        Ok(self.groups.contains(group_id))
    }

    async fn put_image(&self, image: &Image) -> Result<(), GalleryError> {
        if self.should_fail {
            return Err(GalleryError::metadata_store("Mock failure"));
        }
        self.images.lock().await.push(image.clone());
        Ok(())
    }

    async fn find_images_by_id(&self, image_id: &str) -> Result<Vec<Image>, GalleryError> {
        if self.should_fail {
            return Err(GalleryError::metadata_store("Mock failure"));
        }
        Ok(self
            .images
            .lock()
            .await
            .iter()
            .filter(|image| image.image_id == image_id)
            .cloned()
            .collect())
    }
}

pub struct FakeBlobStore {
    bucket: String,
}

impl FakeBlobStore {
    pub fn new(bucket: &str) -> Self {
        Self {
            bucket: bucket.to_string(),
        }
    }
}

#[async_trait]
impl BlobStore for FakeBlobStore {
    fn object_url(&self, key: &str) -> String {
        object_url(&self.bucket, key)
    }

    async fn upload_url(&self, key: &str) -> Result<String, GalleryError> {
        Ok(format!("https://upload.test/{}/{}", self.bucket, key))
    }
}
