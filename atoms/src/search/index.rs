use async_trait::async_trait;

use super::model::ImageDocument;
use crate::error::GalleryError;

/// Search index holding one document per image, keyed by `imageId`.
///
/// Implementations must make `upsert_image` idempotent: writing the same
/// document twice leaves the index as if it had been written once.
#[async_trait]
pub trait SearchIndex: Send + Sync {
    async fn upsert_image(&self, document: &ImageDocument) -> Result<(), GalleryError>;
}
